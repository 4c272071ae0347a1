//! Keyboard and pointer translation

use game_core::Key;
use web_sys::KeyboardEvent;

/// Extract the game key from a keyboard event
pub fn key_from_event(event: &KeyboardEvent) -> Option<Key> {
    Key::from_dom(&event.key())
}

/// Convert a viewport pointer y into playfield space
pub fn pointer_to_playfield(client_y: f32, canvas_top: f32) -> f32 {
    client_y - canvas_top
}
