//! Keyboard input handling for the terminal player.
//!
//! Maps key events to playback commands. Stepping keys are scrubs: the
//! controller pauses autoplay before applying the new cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::controller::PlaybackController;

/// Result of processing an input event, signalling control flow to the
/// player loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Handle a keyboard event against the controller.
pub fn handle_key_event(key: KeyEvent, controller: &mut PlaybackController) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback ===
        KeyCode::Char(' ') => {
            if controller.is_playing() {
                controller.pause();
            } else {
                controller.play();
            }
            InputResult::Continue
        }

        // === Scrubbing ===
        KeyCode::Left => {
            seek_relative(controller, -1);
            InputResult::Continue
        }
        KeyCode::Right => {
            seek_relative(controller, 1);
            InputResult::Continue
        }
        KeyCode::PageUp => {
            seek_relative(controller, -10);
            InputResult::Continue
        }
        KeyCode::PageDown => {
            seek_relative(controller, 10);
            InputResult::Continue
        }
        KeyCode::Home => {
            controller.seek(0);
            InputResult::Continue
        }
        KeyCode::End => {
            if let Some(len) = controller.track().map(|t| t.len()) {
                controller.seek(len - 1);
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

/// Scrub by a signed step, clamped to the track range. A step that lands
/// on the current cursor still pauses autoplay, like dragging a slider
/// that is already at its limit.
fn seek_relative(controller: &mut PlaybackController, delta: isize) {
    let Some(cursor) = controller.cursor() else {
        return;
    };
    let Some(len) = controller.track().map(|t| t.len()) else {
        return;
    };

    let target = if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (cursor + delta.unsigned_abs()).min(len - 1)
    };

    if target == cursor {
        controller.pause();
    } else {
        controller.seek(target);
    }
}
