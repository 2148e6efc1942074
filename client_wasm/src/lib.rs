//! Browser client for Pong
//!
//! Attaches the simulation to a 2d canvas, wires keyboard events into the
//! input state, and drives one tick + one draw per animation frame.

#![cfg(target_arch = "wasm32")]

mod game;
mod input;
mod render;

use game::Game;
use game_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

/// Entry point: attach the game to the canvas with the given id and start
/// the frame loop. Fails fast when the canvas or its 2d context is missing;
/// the loop never starts in that case.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{canvas_id}'")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{canvas_id}' is not a canvas")))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let input = Rc::new(RefCell::new(InputState::new()));
    register_key_listeners(&window, &input)?;

    let mut game = Game::new(canvas.width() as f32, canvas.height() as f32);
    console::log_1(
        &format!(
            "pong: attached to '{}' ({}x{})",
            canvas_id,
            canvas.width(),
            canvas.height()
        )
        .into(),
    );

    // requestAnimationFrame loop; the closure re-registers itself every
    // frame, one tick and one draw pass per callback.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first_frame = frame.clone();
    let mut rally = 0u32;
    *first_frame.borrow_mut() = Some(Closure::new(move || {
        let held = *input.borrow();
        game.tick(&held);

        let events = *game.events();
        if events.ball_hit_wall {
            console::debug_1(&"pong: wall bounce".into());
        }
        if events.ball_hit_paddle {
            rally += 1;
            console::log_1(&format!("pong: rally {rally}").into());
        }
        if events.player_scored || events.computer_scored {
            rally = 0;
            let (player, computer) = game.scores();
            console::log_1(&format!("pong: score {player}-{computer}").into());
        }

        if let Err(e) = render::draw(&ctx, &game) {
            console::error_1(&e);
        }

        if let Err(e) = request_animation_frame(frame.borrow().as_ref().unwrap()) {
            console::error_1(&e);
        }
    }));
    request_animation_frame(first_frame.borrow().as_ref().unwrap())?;

    Ok(())
}

/// Subscribe press/release listeners for the life of the page. Only the
/// two recognised keys ever touch the shared state.
fn register_key_listeners(window: &Window, input: &Rc<RefCell<InputState>>) -> Result<(), JsValue> {
    let pressed = input.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(key) = input::key_from_event(&event.key()) {
            pressed.borrow_mut().set(key, true);
        }
    });
    window.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let released = input.clone();
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(key) = input::key_from_event(&event.key()) {
            released.borrow_mut().set(key, false);
        }
    });
    window.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    Ok(())
}

fn request_animation_frame(frame: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(frame.as_ref().unchecked_ref())
        .map(|_handle| ())
}
