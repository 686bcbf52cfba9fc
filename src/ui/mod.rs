mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::{Dropdown, click_dropdowns};

use macroquad::prelude::{Color, screen_width};

use crate::application::Palette;
use crate::domain::InitialState;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const MARGIN: f32 = 20.0;

/// Pixel size of one cell in the rule icon strip
pub const RULE_ICON_CELL: usize = 12;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the canvas area
pub fn canvas_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Top-left corner of the automaton canvas before camera offset,
/// leaving room for the rule icon strip above it
pub fn canvas_origin() -> (f32, f32) {
    (MARGIN, MARGIN + 2.0 * RULE_ICON_CELL as f32 + MARGIN)
}

/// Named color pairs offered in place of free color pickers
pub fn palettes() -> Vec<(&'static str, Palette)> {
    let rgb = |r, g, b| Color::from_rgba(r, g, b, 255);
    vec![
        ("Mono", Palette::default()),
        ("Ink", Palette { alive: rgb(10, 10, 10), dead: rgb(245, 245, 240) }),
        ("Matrix", Palette { alive: rgb(0, 255, 150), dead: rgb(15, 15, 15) }),
        ("Ember", Palette { alive: rgb(255, 140, 0), dead: rgb(30, 10, 10) }),
        ("Ocean", Palette { alive: rgb(100, 200, 255), dead: rgb(10, 20, 45) }),
    ]
}

/// Create UI buttons; labels follow the session state
pub fn create_buttons(animating: bool, initial_state: InitialState) -> Vec<Button> {
    let px = panel_x();
    let play = if animating { "Stop" } else { "Animate" };
    let regenerate = match initial_state {
        InitialState::Random => "Randomize",
        InitialState::Single => "Regenerate",
    };

    vec![
        Button::new(px, 190.0, PANEL_WIDTH, BUTTON_HEIGHT, play).active(animating),
        Button::new(px, 240.0, PANEL_WIDTH, BUTTON_HEIGHT, regenerate),
    ]
}
