use ::rand::Rng;
use macroquad::prelude::*;

use crate::application::{Camera, Session};
use crate::config::{GENERATIONS_RANGE, WIDTH_STEP, clamp_generations, clamp_width};
use crate::ui::{Button, canvas_area_width};

const SPEED_STEP: i64 = 5;
const GENERATIONS_STEP: usize = 10;

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    camera.drag(is_mouse_button_down(MouseButton::Middle), mouse_pos);
}

/// Pointer position over the canvas area, if it is there at all
pub fn canvas_pointer(mouse_pos: (f32, f32)) -> Option<(f32, f32)> {
    (mouse_pos.0 < canvas_area_width()).then_some(mouse_pos)
}

/// Process keyboard shortcuts
pub fn process_keyboard_input<R: Rng>(session: &mut Session<R>, camera: &mut Camera) {
    type KeyAction<R> = (KeyCode, fn(&mut Session<R>));

    let actions: [KeyAction<R>; 13] = [
        (KeyCode::Space, Session::toggle),
        (KeyCode::R, Session::regenerate),
        (KeyCode::Left, |s| s.set_rule(s.config().rule.offset(-1))),
        (KeyCode::Right, |s| s.set_rule(s.config().rule.offset(1))),
        (KeyCode::Up, |s| s.set_speed(s.speed().adjust(SPEED_STEP))),
        (KeyCode::Down, |s| s.set_speed(s.speed().adjust(-SPEED_STEP))),
        (KeyCode::W, |s| s.set_width(clamp_width(s.config().width + WIDTH_STEP))),
        (KeyCode::S, |s| {
            s.set_width(clamp_width(s.config().width.saturating_sub(WIDTH_STEP)))
        }),
        (KeyCode::G, |s| {
            s.set_generations(clamp_generations(s.config().generations + GENERATIONS_STEP))
        }),
        (KeyCode::B, |s| {
            let generations = s.config().generations.saturating_sub(GENERATIONS_STEP);
            s.set_generations(generations.max(*GENERATIONS_RANGE.start()))
        }),
        (KeyCode::I, |s| s.set_initial_state(s.config().initial_state.toggled())),
        (KeyCode::Equal, |s| s.set_cell_size(s.cell_size() + 1)),
        (KeyCode::Minus, |s| s.set_cell_size(s.cell_size().saturating_sub(1))),
    ];

    for (key, action) in actions.iter() {
        if is_key_pressed(*key) {
            action(session);
        }
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Process button clicks. Buttons come from [`crate::ui::create_buttons`].
pub fn process_button_clicks<R: Rng>(
    session: &mut Session<R>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let Some(idx) = buttons.iter().position(|btn| btn.is_clicked(mouse_pos)) else {
        return;
    };

    match idx {
        0 => session.toggle(),
        1 => session.regenerate(),
        _ => {}
    }
}
