//! Playback controller.
//!
//! Owns the current track and a cursor index, and exposes the
//! load/seek/play/pause surface a UI slider expects. The controller
//! holds no timer of its own: the host schedules a repeating tick (100ms
//! by default) and calls [`PlaybackController::tick`] on each firing.
//! Everything runs on one logical thread, so notifications are delivered
//! strictly in the order the state changes happened.

use std::time::Duration;

use tracing::debug;

use crate::track::{Sample, Track};

/// Default autoplay tick period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Controller state. `Idle` means no track is loaded and the cursor is
/// inactive; every command is a no-op there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    LoadedPaused,
    LoadedPlaying,
}

/// Subscription callback for cursor movement, called with the sample now
/// under the cursor and its index.
type CursorObserver = Box<dyn FnMut(&Sample, usize)>;

/// State machine advancing a cursor through a loaded [`Track`].
///
/// Invariants: the cursor satisfies `0 <= cursor < track.len()` whenever
/// a track is loaded; autoplay only ever advances by single steps;
/// `seek` is the only operation that can move the cursor arbitrarily.
pub struct PlaybackController {
    track: Option<Track>,
    cursor: usize,
    state: PlayerState,
    observer: Option<CursorObserver>,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            track: None,
            cursor: 0,
            state: PlayerState::Idle,
            observer: None,
        }
    }

    /// Subscribe to cursor-changed notifications. Replaces any previous
    /// subscriber; the controller is single-consumer by design.
    pub fn on_cursor_change(&mut self, observer: impl FnMut(&Sample, usize) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayerState::LoadedPlaying
    }

    /// Cursor index, or `None` when no track is loaded.
    pub fn cursor(&self) -> Option<usize> {
        self.track.as_ref().map(|_| self.cursor)
    }

    /// The sample currently under the cursor.
    pub fn current_sample(&self) -> Option<&Sample> {
        self.track.as_ref().and_then(|t| t.get(self.cursor))
    }

    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    /// Load a track, replacing any previous one. The old track and its
    /// playback state are discarded together; the new cursor starts at 0
    /// paused, and a cursor-changed notification fires for index 0.
    pub fn load(&mut self, track: Track) {
        debug!(points = track.len(), "track loaded");
        self.track = Some(track);
        self.cursor = 0;
        self.state = PlayerState::LoadedPaused;
        self.notify();
    }

    /// Move the cursor to `index`. Out-of-range requests are ignored
    /// outright: no state change, no notification. Seeking while playing
    /// pauses first - scrubbing always stops autoplay.
    pub fn seek(&mut self, index: usize) {
        let Some(track) = self.track.as_ref() else {
            return;
        };
        if index >= track.len() {
            return;
        }

        if self.state == PlayerState::LoadedPlaying {
            self.state = PlayerState::LoadedPaused;
        }
        self.cursor = index;
        self.notify();
    }

    /// Start autoplay. No-op when already playing or when idle.
    pub fn play(&mut self) {
        if self.state != PlayerState::LoadedPaused {
            return;
        }
        debug!(cursor = self.cursor, "autoplay started");
        self.state = PlayerState::LoadedPlaying;
    }

    /// Pause autoplay. Idempotent, and a no-op when idle.
    pub fn pause(&mut self) {
        if self.state == PlayerState::LoadedPlaying {
            debug!(cursor = self.cursor, "autoplay paused");
        }
        if self.state != PlayerState::Idle {
            self.state = PlayerState::LoadedPaused;
        }
    }

    /// Advance one step of autoplay. Called by the host timer; stray
    /// ticks while paused or idle are ignored. Reaching the last index
    /// auto-pauses without advancing further.
    pub fn tick(&mut self) {
        if self.state != PlayerState::LoadedPlaying {
            return;
        }
        let Some(track) = self.track.as_ref() else {
            return;
        };

        if self.cursor >= track.len() - 1 {
            debug!("end of track, auto-pausing");
            self.state = PlayerState::LoadedPaused;
            return;
        }

        self.cursor += 1;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            if let Some(sample) = self.track.as_ref().and_then(|t| t.get(self.cursor)) {
                observer(sample, self.cursor);
            }
        }
    }
}
