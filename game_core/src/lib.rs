pub mod arena;
pub mod components;
pub mod config;
pub mod input;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use input::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// System order is fixed: ball first (it bounces against the paddles'
/// previous-tick positions), then the player paddle, then the computer
/// paddle.
pub fn step(
    world: &mut World,
    arena: &Arena,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
) {
    events.clear();

    update_ball(world, arena, score, events);
    move_player(world, input, arena);
    move_computer(world);
}

/// Helper to create the ball entity at the arena centre
pub fn create_ball(world: &mut World, arena: &Arena, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(arena.center(), config),))
}

/// Helper to create the keyboard-controlled paddle on the left edge
pub fn create_player(world: &mut World, arena: &Arena, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        Vec2::new(config.player_x, config.paddle_spawn_y(arena)),
        Vec2::new(config.paddle_width, config.player_paddle_height),
        config.paddle_speed,
    );
    world.spawn((paddle, Human))
}

/// Helper to create the ball-tracking paddle on the right edge
pub fn create_computer(world: &mut World, arena: &Arena, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(
        Vec2::new(config.cpu_x(arena), config.paddle_spawn_y(arena)),
        Vec2::new(config.paddle_width, config.cpu_paddle_height),
        config.paddle_speed,
    );
    world.spawn((paddle, Cpu))
}
