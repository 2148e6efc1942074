use crate::{Arena, Human, InputState, Key, Paddle};
use hecs::World;

/// Drive the keyboard-controlled paddle and clamp it to the arena.
///
/// UP wins when both keys are held. Clamping happens after the move, so the
/// paddle can never end a tick outside `[0, height - paddle_height]`.
pub fn move_player(world: &mut World, input: &InputState, arena: &Arena) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &Human)>() {
        if input.is_down(Key::Up) {
            paddle.pos.y -= paddle.speed;
        } else if input.is_down(Key::Down) {
            paddle.pos.y += paddle.speed;
        }

        if paddle.pos.y < 0.0 {
            paddle.pos.y = 0.0;
        } else if paddle.pos.y + paddle.size.y > arena.height {
            paddle.pos.y = arena.height - paddle.size.y;
        }
    }
}
