//! Painting automaton rows and rule icons onto a [`Surface`].

use macroquad::color::Color;

use super::Surface;
use crate::domain::{Cell, Grid, PATTERN_COUNT, TransitionTable};

/// Paint the first `num_rows` generations of `grid`.
///
/// The whole surface is cleared to `dead` first, then only live cells are
/// painted as `cell_size` squares in `alive`. `num_rows` past the end of the
/// grid is clamped. A missing surface is a no-op.
pub fn render_rows<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    num_rows: usize,
    grid: &Grid,
    cell_size: usize,
    alive: Color,
    dead: Color,
) {
    let Some(surface) = surface else {
        return;
    };

    surface.fill(dead);

    for (y, row) in grid.rows().take(num_rows).enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if cell.is_alive() {
                surface.fill_rect(x * cell_size, y * cell_size, cell_size, cell_size, alive);
            }
        }
    }
}

/// Cells between two neighbouring rule icons
const ICON_GAP: usize = 1;

/// Size in pixels of the strip drawn by [`render_rule_table`]
pub fn rule_table_size(cell_size: usize) -> (usize, usize) {
    let cells_wide = PATTERN_COUNT * 3 + (PATTERN_COUNT - 1) * ICON_GAP;
    (cells_wide * cell_size, 2 * cell_size)
}

/// Paint the eight rule icons, 111 on the left down to 000 on the right.
///
/// Each icon is the 3-cell neighborhood with the resulting cell below its
/// center. Cells are inset by one pixel when large enough so the
/// `background` shows through as a border.
pub fn render_rule_table<S: Surface + ?Sized>(
    surface: &mut S,
    table: &TransitionTable,
    cell_size: usize,
    alive: Color,
    dead: Color,
    background: Color,
) {
    surface.fill(background);

    let inset = usize::from(cell_size >= 3);
    let mut paint = |cx: usize, cy: usize, color: Color| {
        surface.fill_rect(
            cx * cell_size + inset,
            cy * cell_size + inset,
            cell_size - 2 * inset,
            cell_size - 2 * inset,
            color,
        );
    };
    let color_of = |cell: Cell| if cell.is_alive() { alive } else { dead };

    for (slot, (_, pattern, output)) in table.iter_descending().enumerate() {
        let left = slot * (3 + ICON_GAP);
        for (dx, cell) in pattern.iter().enumerate() {
            paint(left + dx, 0, color_of(*cell));
        }
        paint(left + 1, 1, color_of(output));
    }
}
