use macroquad::prelude::*;

const ITEM_HEIGHT: f32 = 30.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component.
/// The selection may be empty, e.g. when the current rule is not a preset.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: Option<usize>,
    placeholder: String,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: Some(0),
            placeholder: "-".to_string(),
            is_open: false,
            label: label.into(),
        }
    }

    /// Text shown when nothing is selected
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Sync the shown selection with external state. Out-of-range indices clear it.
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(37, 99, 235, 255)
        };

        draw_rectangle(self.x, self.y, self.width, ITEM_HEIGHT, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, ITEM_HEIGHT, 2.0, WHITE);

        let current = self
            .selected
            .map(|i| self.items[i].as_str())
            .unwrap_or(self.placeholder.as_str());
        let shown = fit_text(current, self.width - 30.0);
        draw_text(&shown, self.x + 5.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * ITEM_HEIGHT;
        draw_rectangle(
            self.x,
            self.y + ITEM_HEIGHT,
            self.width,
            menu_height,
            Color::from_rgba(30, 30, 30, 255),
        );

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);

            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(100, 149, 237, 255)
            } else if self.selected == Some(i) {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };

            draw_rectangle(self.x, item_y, self.width, ITEM_HEIGHT, item_color);
            draw_rectangle_lines(
                self.x,
                item_y,
                self.width,
                ITEM_HEIGHT,
                1.0,
                Color::from_rgba(80, 80, 80, 255),
            );
            draw_text(&fit_text(item, self.width - 10.0), self.x + 5.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + ITEM_HEIGHT, self.width, menu_height, 2.0, WHITE);
    }

    /// Handle a left click at `mouse_pos`. Returns the item picked, if any.
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return None;
        }

        if !self.is_open {
            return None;
        }

        // any click outside the header closes the menu
        let picked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        self.is_open = false;
        let picked = picked?;
        self.selected = Some(picked);
        Some(picked)
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + ITEM_HEIGHT + index as f32 * ITEM_HEIGHT
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        in_rect(mouse_pos, self.x, self.y, self.width, ITEM_HEIGHT)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        self.is_open && in_rect(mouse_pos, self.x, self.item_y(index), self.width, ITEM_HEIGHT)
    }
}

/// Route one left click through a stack of dropdowns.
///
/// An open menu gets the click exclusively, so an item lying over the header
/// of the next dropdown never opens that one as well. Otherwise the dropdown
/// whose header was hit gets it. The others are closed. Returns
/// `(dropdown, item)` when an item was picked.
pub fn click_dropdowns(dropdowns: &mut [&mut Dropdown], mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let target = dropdowns
        .iter()
        .position(|d| d.is_open())
        .or_else(|| dropdowns.iter().position(|d| d.is_hovered_main(mouse_pos)))?;

    for (i, dropdown) in dropdowns.iter_mut().enumerate() {
        if i != target {
            dropdown.close();
        }
    }

    dropdowns[target].click(mouse_pos).map(|item| (target, item))
}

fn in_rect(pos: (f32, f32), x: f32, y: f32, w: f32, h: f32) -> bool {
    pos.0 >= x && pos.0 <= x + w && pos.1 >= y && pos.1 <= y + h
}

/// Truncate `text` with an ellipsis until it fits `max_width` pixels
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {i}")).collect()
    }

    /// Headers 30px tall at y 20 and 80, so the first menu (y 50..) covers
    /// the second header
    fn stacked() -> (Dropdown, Dropdown) {
        (
            Dropdown::new(0.0, 20.0, 100.0, "first", items(6)),
            Dropdown::new(0.0, 80.0, 100.0, "second", items(2)),
        )
    }

    #[test]
    fn test_header_click_toggles_menu() {
        let mut dropdown = Dropdown::new(0.0, 20.0, 100.0, "d", items(3));
        assert_eq!(dropdown.click((10.0, 30.0)), None);
        assert!(dropdown.is_open());
        assert_eq!(dropdown.click((10.0, 30.0)), None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_item_click_selects_and_closes() {
        let mut dropdown = Dropdown::new(0.0, 20.0, 100.0, "d", items(3));
        dropdown.set_selected(None);
        dropdown.click((10.0, 30.0));

        // second item spans y 80..110
        assert_eq!(dropdown.click((10.0, 95.0)), Some(1));
        assert_eq!(dropdown.selected(), Some(1));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_outside_click_closes_without_picking() {
        let mut dropdown = Dropdown::new(0.0, 20.0, 100.0, "d", items(3));
        dropdown.click((10.0, 30.0));
        assert_eq!(dropdown.click((500.0, 500.0)), None);
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected(), Some(0));
    }

    #[test]
    fn test_item_over_next_header_does_not_open_it() {
        let (mut first, mut second) = stacked();

        assert_eq!(click_dropdowns(&mut [&mut first, &mut second], (10.0, 30.0)), None);
        assert!(first.is_open());

        // item 1 of the first menu lies at y 80..110, right on the second header
        let picked = click_dropdowns(&mut [&mut first, &mut second], (10.0, 95.0));
        assert_eq!(picked, Some((0, 1)));
        assert!(!first.is_open());
        assert!(!second.is_open());
    }

    #[test]
    fn test_header_click_opens_only_that_dropdown() {
        let (mut first, mut second) = stacked();

        assert_eq!(click_dropdowns(&mut [&mut first, &mut second], (10.0, 95.0)), None);
        assert!(second.is_open());
        assert!(!first.is_open());

        let picked = click_dropdowns(&mut [&mut first, &mut second], (10.0, 125.0));
        assert_eq!(picked, Some((1, 0)));
    }

    #[test]
    fn test_click_on_nothing_is_ignored() {
        let (mut first, mut second) = stacked();
        assert_eq!(click_dropdowns(&mut [&mut first, &mut second], (500.0, 10.0)), None);
        assert!(!first.is_open() && !second.is_open());
    }
}
