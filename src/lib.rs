//! trackplay - terminal GPS track replayer.
//!
//! Parses line-oriented "dat" GPS logs and replays the recorded
//! trajectory as a sequence of time-ordered positions:
//!
//! - [`track`]: the dat parser and data model ([`Sample`], [`Track`])
//! - [`player`]: the playback controller and the terminal player host
//! - [`config`]: user configuration
//!
//! The core never raises on malformed records: bad lines are filtered,
//! and the only reportable parse failure is an input with zero valid
//! points.

pub mod config;
pub mod player;
pub mod track;

pub use config::Config;
pub use player::{PlaybackController, PlayerState, DEFAULT_TICK_INTERVAL};
pub use track::{parse_track, ParseError, Sample, Track};
