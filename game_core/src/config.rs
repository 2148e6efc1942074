use crate::{Arena, Params};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub paddle_width: f32,
    pub player_paddle_height: f32,
    pub cpu_paddle_height: f32,
    pub paddle_speed: f32,
    pub player_x: f32,
    pub cpu_edge_margin: f32,
    pub paddle_spawn_offset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            paddle_width: Params::PADDLE_WIDTH,
            player_paddle_height: Params::PLAYER_PADDLE_HEIGHT,
            cpu_paddle_height: Params::CPU_PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            player_x: Params::PLAYER_X,
            cpu_edge_margin: Params::CPU_EDGE_MARGIN,
            paddle_spawn_offset: Params::PADDLE_SPAWN_OFFSET,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of the computer paddle, anchored to the right edge
    pub fn cpu_x(&self, arena: &Arena) -> f32 {
        arena.width - self.cpu_edge_margin
    }

    /// Spawn Y shared by both paddles
    pub fn paddle_spawn_y(&self, arena: &Arena) -> f32 {
        arena.height / 2.0 - self.paddle_spawn_offset
    }
}
