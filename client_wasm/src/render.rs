//! Canvas draw pass
//!
//! Pure output: reads a game snapshot and issues 2d-context calls. No
//! scheduling, no input, no simulation.

use crate::game::Game;
use game_core::{Ball, Paddle};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const SCORE_FONT: &str = "30px Arial";
const CENTER_LINE_INSET: f64 = 10.0;
const SCORE_OFFSET: f64 = 30.0;
const SCORE_BASELINE_RISE: f64 = 10.0;

/// Draw one frame: clear, entities, centre line, scores.
pub fn draw(ctx: &CanvasRenderingContext2d, game: &Game) -> Result<(), JsValue> {
    let arena = game.arena();
    let width = arena.width as f64;
    let height = arena.height as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    if let Some(ball) = game.ball() {
        draw_ball(ctx, &ball)?;
    }
    if let Some(paddle) = game.player_paddle() {
        draw_paddle(ctx, &paddle);
    }
    if let Some(paddle) = game.computer_paddle() {
        draw_paddle(ctx, &paddle);
    }

    // Centre line, inset from both edges
    ctx.begin_path();
    ctx.move_to(width / 2.0, CENTER_LINE_INSET);
    ctx.line_to(width / 2.0, height - CENTER_LINE_INSET);
    ctx.stroke();

    // Scores anchored either side of the centre line: player right-aligned
    // on the left, computer left-aligned on the right.
    let (player, computer) = game.scores();
    ctx.set_font(SCORE_FONT);
    ctx.set_text_align("right");
    ctx.stroke_text(
        &player.to_string(),
        width / 2.0 - SCORE_OFFSET,
        height - SCORE_BASELINE_RISE,
    )?;
    ctx.set_text_align("left");
    ctx.stroke_text(
        &computer.to_string(),
        width / 2.0 + SCORE_OFFSET,
        height - SCORE_BASELINE_RISE,
    )?;

    Ok(())
}

fn draw_ball(ctx: &CanvasRenderingContext2d, ball: &Ball) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(
        ball.pos.x as f64,
        ball.pos.y as f64,
        ball.radius as f64,
        0.0,
        std::f64::consts::TAU,
    )?;
    ctx.stroke();
    ctx.close_path();
    Ok(())
}

fn draw_paddle(ctx: &CanvasRenderingContext2d, paddle: &Paddle) {
    ctx.stroke_rect(
        paddle.pos.x as f64,
        paddle.pos.y as f64,
        paddle.size.x as f64,
        paddle.size.y as f64,
    );
}
