/// Logical keys the game recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// Currently-held key state.
///
/// The host's press/release listeners write it, the player system reads it
/// once per tick. No debouncing, no repeat handling, no queue: only "held
/// right now" is observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    up: bool,
    down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}
