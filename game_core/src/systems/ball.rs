use crate::{collides, Arena, Ball, Cpu, Events, Human, Paddle, Score};
use hecs::World;

/// Move the ball, bounce it off walls and paddles, and apply scoring.
///
/// Runs before the paddle systems, so the hitboxes snapshotted here are the
/// paddles' previous-tick positions. The order of checks inside the loop is
/// load-bearing: integrate, vertical bounce, horizontal bounce, paddle
/// bounce, then scoring. A ball that crosses the left or right edge first
/// has its `vel.x` flipped by the wall test and is then recentred by the
/// scoring test, keeping its speed.
pub fn update_ball(world: &mut World, arena: &Arena, score: &mut Score, events: &mut Events) {
    let player_box = {
        let mut query = world.query::<(&Paddle, &Human)>();
        query.iter().next().map(|(_e, (paddle, _))| paddle.hitbox())
    };
    let cpu_box = {
        let mut query = world.query::<(&Paddle, &Cpu)>();
        query.iter().next().map(|(_e, (paddle, _))| paddle.hitbox())
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;

        // Wall bounces invert one axis, with no position correction; an
        // overshooting ball self-corrects on the next tick.
        if ball.pos.y + ball.radius >= arena.height || ball.pos.y - ball.radius <= 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.x + ball.radius >= arena.width || ball.pos.x - ball.radius <= 0.0 {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }

        if let Some(paddle) = player_box {
            if collides(&ball.hitbox(), &paddle) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
        if let Some(paddle) = cpu_box {
            if collides(&ball.hitbox(), &paddle) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }

        if ball.pos.x + ball.radius >= arena.width {
            score.increment_player();
            events.player_scored = true;
            ball.recenter(arena);
        }
        if ball.pos.x - ball.radius <= 0.0 {
            score.increment_computer();
            events.computer_scored = true;
            ball.recenter(arena);
        }
    }
}
