//! Terminal rendering for the player.
//!
//! The track is drawn on a braille canvas standing in for a map: the full
//! polyline in blue, the sample under the cursor as a red marker. Below it
//! sit the metadata panel (the original's time/lat/lon/speed/alt readout),
//! a progress gauge playing the role of the slider, and a key help line.
//!
//! Layout math and field formatting are kept as pure helpers so they can
//! be unit tested without a terminal.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        canvas::{self, Canvas, Points},
        Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

use crate::player::controller::PlaybackController;
use crate::track::Sample;

/// Presentation settings the core data model stays agnostic of.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Shown as the map block title.
    pub file_name: String,
    /// Label appended to speed values, e.g. "km/h".
    pub speed_unit: String,
    /// Label appended to altitude values, e.g. "m".
    pub altitude_unit: String,
}

/// Fraction of the track's span added as padding on each side of the view.
const FIT_PADDING: f64 = 0.08;
/// Smallest span the view is allowed to collapse to, so a single-point
/// track still gets a usable viewport.
const MIN_SPAN: f64 = 0.0005;

/// Draw one frame of the player.
pub fn draw(frame: &mut Frame, controller: &PlaybackController, opts: &ViewOptions) {
    let [map_area, meta_area, progress_area, help_area] = Layout::vertical([
        Constraint::Min(8),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_map(frame, map_area, controller, opts);
    render_meta(frame, meta_area, controller.current_sample(), opts);
    render_progress(frame, progress_area, controller);
    render_help(frame, help_area, controller);
}

fn render_map(frame: &mut Frame, area: Rect, controller: &PlaybackController, opts: &ViewOptions) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", opts.file_name));

    let Some(track) = controller.track() else {
        frame.render_widget(block, area);
        return;
    };

    let (x_bounds, y_bounds) = fit_bounds(track.bounds());
    let samples = track.samples();
    let marker = controller.current_sample();

    let canvas = Canvas::default()
        .block(block)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for pair in samples.windows(2) {
                ctx.draw(&canvas::Line {
                    x1: pair[0].longitude,
                    y1: pair[0].latitude,
                    x2: pair[1].longitude,
                    y2: pair[1].latitude,
                    color: Color::Blue,
                });
            }
            if let Some(s) = marker {
                ctx.layer();
                ctx.draw(&Points {
                    coords: &[(s.longitude, s.latitude)],
                    color: Color::Red,
                });
            }
        });

    frame.render_widget(canvas, area);
}

fn render_meta(frame: &mut Frame, area: Rect, sample: Option<&Sample>, opts: &ViewOptions) {
    let line = match sample {
        Some(s) => Line::from(vec![
            Span::styled("Time ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(s.display_time.clone()),
            Span::styled("  Lat ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format_coord(s.latitude)),
            Span::styled("  Lon ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format_coord(s.longitude)),
            Span::styled("  Speed ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format_metric(s.speed, &opts.speed_unit)),
            Span::styled("  Alt ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format_metric(s.altitude, &opts.altitude_unit)),
        ]),
        None => Line::from("-"),
    };

    let panel = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" position "));
    frame.render_widget(panel, area);
}

fn render_progress(frame: &mut Frame, area: Rect, controller: &PlaybackController) {
    let (ratio, label) = match (controller.cursor(), controller.track()) {
        (Some(cursor), Some(track)) => (
            progress_ratio(cursor, track.len()),
            format!("{} / {}", cursor + 1, track.len()),
        ),
        _ => (0.0, "no track".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_help(frame: &mut Frame, area: Rect, controller: &PlaybackController) {
    let state = if controller.is_playing() {
        Span::styled("▶ playing", Style::default().fg(Color::Green))
    } else {
        Span::styled("⏸ paused", Style::default().fg(Color::Yellow))
    };
    let help = Line::from(vec![
        state,
        Span::raw("   space play/pause  ←/→ step  PgUp/PgDn ±10  Home/End jump  q quit").dim(),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}

/// Compute canvas bounds that fit the track's bounding box with a small
/// margin, equivalent to the original's fit-to-bounds map behavior.
/// Returns `(x_bounds, y_bounds)` in (longitude, latitude) space.
pub fn fit_bounds(bounds: (f64, f64, f64, f64)) -> ([f64; 2], [f64; 2]) {
    let (min_lat, min_lon, max_lat, max_lon) = bounds;

    let lat_center = (min_lat + max_lat) / 2.0;
    let lon_center = (min_lon + max_lon) / 2.0;
    let lat_half = ((max_lat - min_lat).max(MIN_SPAN) / 2.0) * (1.0 + FIT_PADDING * 2.0);
    let lon_half = ((max_lon - min_lon).max(MIN_SPAN) / 2.0) * (1.0 + FIT_PADDING * 2.0);

    (
        [lon_center - lon_half, lon_center + lon_half],
        [lat_center - lat_half, lat_center + lat_half],
    )
}

/// Coordinates render with six decimals, matching the original readout.
pub fn format_coord(value: f64) -> String {
    format!("{:.6}", value)
}

/// Optional metrics render as one decimal plus unit, or "-" when absent.
pub fn format_metric(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1} {}", v, unit),
        None => "-".to_string(),
    }
}

/// Gauge fill for a cursor position; a single-point track is always full.
pub fn progress_ratio(cursor: usize, len: usize) -> f64 {
    if len <= 1 {
        1.0
    } else {
        cursor as f64 / (len - 1) as f64
    }
}
