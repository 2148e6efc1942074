//! Keyboard input handling

use game_core::Key;

/// Map a DOM `KeyboardEvent::key()` value to a logical key.
///
/// Anything unrecognised is ignored; the game only ever sees UP and DOWN.
pub fn key_from_event(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        _ => None,
    }
}
