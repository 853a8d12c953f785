//! dat GPS log parsing.
//!
//! A dat log is line-oriented, comma-delimited text:
//!
//! ```text
//! TIMESTAMP,LAT,LATDIR,LON,LONDIR[,SPEED[,ALT]]
//! ```
//!
//! Coordinates are unsigned magnitudes in the file; the sign comes from
//! the direction letter (`S` negates latitude, `W` negates longitude).
//! Blank lines and `#` comment lines are skipped, as is any line with
//! fewer than 5 fields or an unparsable coordinate. Parsing never fails
//! on a malformed record - it only filters. The one reportable failure
//! is an input that yields zero valid points.

pub mod timestamp;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors from constructing a [`Track`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input contained no parsable track points at all.
    #[error("no valid track points found")]
    NoValidPoints,
}

/// One decoded track point.
///
/// Immutable once constructed. `latitude`/`longitude` are always finite;
/// `speed`/`altitude` are either absent or finite, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Timestamp token exactly as read from the file.
    pub raw_timestamp: String,
    /// Human-readable time, or the raw token when decoding doesn't apply.
    pub display_time: String,
    /// Signed decimal degrees, south negative.
    pub latitude: f64,
    /// Signed decimal degrees, west negative.
    pub longitude: f64,
    /// Unit-agnostic; the presentation layer applies the unit label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

/// An ordered, non-empty sequence of samples from one successful parse.
///
/// Sample order is file order; the parser never re-sorts.
#[derive(Debug, Clone)]
pub struct Track {
    samples: Vec<Sample>,
}

impl Track {
    /// Parse a track from raw dat text.
    ///
    /// # Errors
    /// Returns [`ParseError::NoValidPoints`] when the input yields zero
    /// valid records (empty file, comments only, or all lines malformed).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let samples = parse_track(text);
        if samples.is_empty() {
            return Err(ParseError::NoValidPoints);
        }
        Ok(Self { samples })
    }

    /// All samples, in file order. Never empty.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Companion to `len`; a constructed track is never empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Bounding box as `(min_lat, min_lon, max_lat, max_lon)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_lat = f64::INFINITY;
        let mut min_lon = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        for s in &self.samples {
            min_lat = min_lat.min(s.latitude);
            min_lon = min_lon.min(s.longitude);
            max_lat = max_lat.max(s.latitude);
            max_lon = max_lon.max(s.longitude);
        }
        (min_lat, min_lon, max_lat, max_lon)
    }
}

/// Parse dat text into samples, dropping malformed lines.
///
/// Pure and infallible: malformed records are filtered, never raised.
/// May return an empty vector; [`Track::parse`] turns that into the
/// distinguished no-valid-points error.
pub fn parse_track(text: &str) -> Vec<Sample> {
    let mut samples = Vec::new();

    for (line_num, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Some(sample) => samples.push(sample),
            None => debug!(line = line_num + 1, "skipping malformed record"),
        }
    }

    samples
}

/// Parse a single record. Lines are independent; no cross-line state.
fn parse_line(line: &str) -> Option<Sample> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 5 {
        return None;
    }

    let raw_timestamp = fields[0];

    let lat_mag = parse_finite(fields[1])?;
    let lon_mag = parse_finite(fields[3])?;

    // Direction letters other than S/W are non-negating by design of the
    // format - no validation, matching the permissive source behavior.
    let latitude = apply_hemisphere(lat_mag, fields[2], 'S');
    let longitude = apply_hemisphere(lon_mag, fields[4], 'W');

    // Optional trailing fields: an unparsable value means absent, it
    // doesn't invalidate the record.
    let speed = fields.get(5).and_then(|f| parse_finite(f));
    let altitude = fields.get(6).and_then(|f| parse_finite(f));

    Some(Sample {
        raw_timestamp: raw_timestamp.to_string(),
        display_time: timestamp::decode(raw_timestamp),
        latitude,
        longitude,
        speed,
        altitude,
    })
}

/// Parse a float, rejecting NaN/infinity along with syntax errors.
fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Negate the magnitude when the direction letter matches (case-insensitive).
fn apply_hemisphere(magnitude: f64, dir: &str, negating: char) -> f64 {
    if dir.len() == 1 && dir.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&negating)) {
        -magnitude
    } else {
        magnitude
    }
}
