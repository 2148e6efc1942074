/// Game score tracking
///
/// Mutated only by the ball system, when the ball crosses a left/right edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: bool,
    pub player_scored: bool,
    pub computer_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
