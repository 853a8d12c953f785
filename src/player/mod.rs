//! Track playback: the cursor state machine plus the terminal host.
//!
//! - `controller`: load/seek/play/pause/tick state machine
//! - `input`: keyboard dispatch for the interactive player
//! - `render`: canvas/panel drawing and its pure layout helpers
//! - `run`: the single-threaded poll-or-tick event loop

pub mod controller;
pub mod input;
pub mod render;
pub mod run;

pub use controller::{PlaybackController, PlayerState, DEFAULT_TICK_INTERVAL};
pub use input::InputResult;
pub use render::ViewOptions;
pub use run::{run_player, PlayerOptions};
