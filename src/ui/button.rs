use macroquad::prelude::*;

/// Button UI component with hover, click and "active" highlighting
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    color: Color,
    hover_color: Color,
    active_color: Color,
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(22, 163, 74, 255),
            hover_color: Color::from_rgba(21, 128, 61, 255),
            active_color: Color::from_rgba(220, 38, 38, 255),
            active: false,
        }
    }

    /// Highlight the button, e.g. a running animation's Stop button
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&mouse_pos.0)
            && (self.y..=self.y + self.height).contains(&mouse_pos.1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.active, self.is_hovered(mouse_pos)) {
            (true, _) => self.active_color,
            (false, true) => self.hover_color,
            (false, false) => self.color,
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
