use crate::{Arena, Config, Hitbox};
use glam::Vec2;

/// Ball component - the pong ball
///
/// `pos` is the centre. The hitbox is a `2r x 2r` square whose `x`/`y` is the
/// centre, not a corner; the overlap test depends on that.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            vel: Vec2::splat(config.ball_speed),
            radius: config.ball_radius,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.pos.x,
            y: self.pos.y,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }

    /// Put the ball back at the arena centre. Velocity is left alone: the
    /// serve continues with whatever direction and speed the ball had.
    pub fn recenter(&mut self, arena: &Arena) {
        self.pos = arena.center();
    }
}

/// Paddle component - a player- or computer-controlled obstacle
///
/// `pos` is the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.pos.x,
            y: self.pos.y,
            width: self.size.x,
            height: self.size.y,
        }
    }
}

/// Marker for the keyboard-driven paddle
#[derive(Debug, Clone, Copy)]
pub struct Human;

/// Marker for the ball-tracking paddle
#[derive(Debug, Clone, Copy)]
pub struct Cpu;
