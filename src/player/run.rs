//! Interactive player loop.
//!
//! Single-threaded and event-driven: the loop blocks on terminal input
//! with the time remaining until the next autoplay tick as the timeout.
//! A poll timeout *is* the timer firing, so ticks and input are serialized
//! on one thread of control and a scrub can never race a tick.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::trace;

use crate::player::controller::{PlaybackController, DEFAULT_TICK_INTERVAL};
use crate::player::input::{handle_key_event, InputResult};
use crate::player::render::{draw, ViewOptions};
use crate::track::Track;

/// Settings for a player session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Autoplay advance period.
    pub tick_interval: Duration,
    pub view: ViewOptions,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            view: ViewOptions {
                file_name: String::new(),
                speed_unit: "km/h".to_string(),
                altitude_unit: "m".to_string(),
            },
        }
    }
}

/// Run the interactive player until the user quits.
///
/// # Errors
/// Fails only on terminal I/O problems; playback itself has no fatal
/// conditions.
pub fn run_player(track: Track, opts: PlayerOptions) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, track, &opts);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, track: Track, opts: &PlayerOptions) -> Result<()> {
    let mut controller = PlaybackController::new();

    // The render side subscribes to cursor changes; a set flag means the
    // marker moved and the frame is stale.
    let cursor_moved = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cursor_moved);
    controller.on_cursor_change(move |sample, index| {
        trace!(index, lat = sample.latitude, lon = sample.longitude, "cursor moved");
        flag.set(true);
    });

    controller.load(track);

    let mut needs_render = true;
    let mut next_tick = Instant::now() + opts.tick_interval;

    loop {
        if cursor_moved.replace(false) || needs_render {
            terminal.draw(|frame| draw(frame, &controller, &opts.view))?;
            needs_render = false;
        }

        // While paused there is no tick to meet, only input to wait for.
        let timeout = if controller.is_playing() {
            next_tick.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let was_playing = controller.is_playing();
                    match handle_key_event(key, &mut controller) {
                        InputResult::Quit => break,
                        InputResult::Continue => needs_render = true,
                    }
                    if !was_playing && controller.is_playing() {
                        next_tick = Instant::now() + opts.tick_interval;
                    }
                }
                Event::Resize(_, _) => needs_render = true,
                _ => {}
            }
        } else if controller.is_playing() {
            // Timer fired
            if tick_changed_state(&mut controller) {
                needs_render = true;
            }
            next_tick = Instant::now() + opts.tick_interval;
        }
    }

    Ok(())
}

/// Poll timeout while paused; nothing advances, so just stay responsive.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Advance one tick and report whether the play state flipped.
///
/// A mid-track tick moves the cursor, which the cursor-changed
/// subscription already turns into a redraw. The end-of-track tick
/// auto-pauses *without* a notification, so the status line would go
/// stale unless the caller redraws on the state change.
fn tick_changed_state(controller: &mut PlaybackController) -> bool {
    let was_playing = controller.is_playing();
    controller.tick();
    was_playing != controller.is_playing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::controller::PlayerState;

    fn two_point_track() -> Track {
        Track::parse("a,1.0,N,2.0,E\nb,3.0,N,4.0,E").unwrap()
    }

    #[test]
    fn end_of_track_tick_reports_state_change() {
        let mut controller = PlaybackController::new();
        controller.load(two_point_track());
        controller.seek(1);
        controller.play();

        assert!(tick_changed_state(&mut controller));
        assert_eq!(controller.state(), PlayerState::LoadedPaused);
        assert_eq!(controller.cursor(), Some(1));
    }

    #[test]
    fn mid_track_tick_is_not_a_state_change() {
        let mut controller = PlaybackController::new();
        controller.load(two_point_track());
        controller.play();

        assert!(!tick_changed_state(&mut controller));
        assert!(controller.is_playing());
        assert_eq!(controller.cursor(), Some(1));
    }

    #[test]
    fn stray_tick_while_paused_changes_nothing() {
        let mut controller = PlaybackController::new();
        controller.load(two_point_track());

        assert!(!tick_changed_state(&mut controller));
        assert_eq!(controller.state(), PlayerState::LoadedPaused);
        assert_eq!(controller.cursor(), Some(0));
    }
}
