//! Simulation wrapper owned by the render loop

use game_core::{
    create_ball, create_computer, create_player, step, Arena, Ball, Config, Cpu, Events, Human,
    InputState, Paddle, Score,
};
use hecs::World;

/// The whole game: one world with a ball and two paddles, plus the
/// surrounding resources. Entities are created once here and live for the
/// life of the page.
pub struct Game {
    world: World,
    arena: Arena,
    score: Score,
    events: Events,
}

impl Game {
    pub fn new(width: f32, height: f32) -> Self {
        let arena = Arena::new(width, height);
        let config = Config::new();
        let mut world = World::new();

        create_ball(&mut world, &arena, &config);
        create_player(&mut world, &arena, &config);
        create_computer(&mut world, &arena, &config);

        Self {
            world,
            arena,
            score: Score::new(),
            events: Events::new(),
        }
    }

    /// Advance one tick with a snapshot of the held keys.
    pub fn tick(&mut self, input: &InputState) {
        step(
            &mut self.world,
            &self.arena,
            input,
            &mut self.score,
            &mut self.events,
        );
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.score.player, self.score.computer)
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| *ball)
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        let mut query = self.world.query::<(&Paddle, &Human)>();
        query.iter().next().map(|(_e, (paddle, _))| *paddle)
    }

    pub fn computer_paddle(&self) -> Option<Paddle> {
        let mut query = self.world.query::<(&Paddle, &Cpu)>();
        query.iter().next().map(|(_e, (paddle, _))| *paddle)
    }
}
