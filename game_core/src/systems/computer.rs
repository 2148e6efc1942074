use crate::{Ball, Cpu, Paddle};
use hecs::World;

/// Drive the ball-tracking paddle.
///
/// Proportional tracking against the paddle's top edge with a dead zone one
/// speed-step wide: a ball below the top edge pulls the paddle down, a ball
/// more than `speed` above it pushes the paddle up, anything in between
/// leaves it still. The computer paddle is never clamped to the arena; that
/// asymmetry with the player paddle is intentional.
pub fn move_computer(world: &mut World) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let ball_y = match ball_y {
        Some(y) => y,
        None => return,
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &Cpu)>() {
        let delta = paddle.pos.y - ball_y;
        if delta < 0.0 {
            paddle.pos.y += paddle.speed;
        } else if delta > paddle.speed {
            paddle.pos.y -= paddle.speed;
        }
    }
}
