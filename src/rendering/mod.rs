mod paint;
mod surface;

pub use paint::{render_rows, render_rule_table, rule_table_size};
pub use surface::{Surface, fits, surface_for};

use macroquad::prelude::*;

use crate::application::{AnimationState, Camera, Session};
use crate::domain::presets;
use crate::ui::{Button, Dropdown, PANEL_WIDTH, canvas_origin, panel_x};

/// Draw the automaton texture with camera support
pub fn draw_canvas(texture: &Texture2D, camera: &Camera) {
    let size = (texture.width() as usize, texture.height() as usize);
    let (x, y, w, h) = camera.surface_rect(canvas_origin(), size);

    // Frame so an all-dead grid is still distinguishable from the window
    draw_rectangle_lines(x - 2.0, y - 2.0, w + 4.0, h + 4.0, 2.0, Color::from_rgba(55, 65, 81, 255));
    draw_texture_ex(
        texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );
}

/// Draw the rule icon strip above the canvas
pub fn draw_rule_strip(texture: &Texture2D, rule_label: &str, x: f32, y: f32) {
    draw_text(rule_label, x, y + 14.0, 18.0, GRAY);
    draw_texture(texture, x + 80.0, y, WHITE);
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, dropdowns and session status
pub fn draw_controls<R: ::rand::Rng>(
    session: &Session<R>,
    hovered: Option<(usize, usize)>,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let config = session.config();

    let controls = [
        ("Keys:", 14.0, WHITE),
        ("Space: Play/Stop", 12.0, GRAY),
        ("R: Regenerate", 12.0, GRAY),
        ("Left/Right: Rule", 12.0, GRAY),
        ("Up/Down: Speed", 12.0, GRAY),
        ("W/S: Width  G/B: Gens", 12.0, GRAY),
        ("I: Initial  +/-: Cell", 12.0, GRAY),
        ("Wheel/Mid-drag: View", 12.0, GRAY),
    ];
    for (i, (text, size, color)) in controls.iter().enumerate() {
        draw_text(text, px, 300.0 + i as f32 * 14.0, *size, *color);
    }

    let preset = presets::find(config.rule)
        .map(|i| presets::PRESETS[i].name)
        .unwrap_or("-");
    let status = match session.state() {
        AnimationState::Idle => "Idle".to_string(),
        AnimationState::Animating { cursor } => format!("Animating {cursor}/{}", config.generations),
    };

    let labels = [
        (format!("Rule: {}", config.rule.number()), 20.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Preset: {preset}"), 14.0, GRAY),
        (format!("Width: {}", config.width), 14.0, GRAY),
        (format!("Gens: {}", config.generations), 14.0, GRAY),
        (format!("Speed: {}", session.speed().value()), 14.0, GRAY),
        (format!("Cell: {}px", session.cell_size()), 14.0, GRAY),
        (format!("Alive: {}", session.grid().count_alive()), 14.0, GRAY),
        (status, 16.0, if session.is_animating() { GREEN } else { ORANGE }),
    ];
    for (i, (text, size, color)) in labels.iter().enumerate() {
        draw_text(text, px, 440.0 + i as f32 * 20.0, *size, *color);
    }

    if let Some((col, generation)) = hovered {
        draw_text(
            &format!("Cell {col} @ gen {generation}"),
            px,
            610.0,
            12.0,
            Color::from_rgba(100, 200, 255, 255),
        );
    }

    // Open dropdown last so its menu sits on top
    dropdowns
        .iter()
        .filter(|d| !d.is_open())
        .chain(dropdowns.iter().filter(|d| d.is_open()))
        .for_each(|d| d.draw(mouse_pos));
}
