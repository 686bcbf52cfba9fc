//! Pixel targets the automaton can be painted onto.

use macroquad::color::Color;
use macroquad::texture::Image;

/// A rectangular pixel surface addressed from the top-left corner.
/// Drawing outside the surface is clipped without error.
pub trait Surface {
    /// (width, height) in pixels
    fn size(&self) -> (usize, usize);

    /// Paint every pixel with `color`
    fn fill(&mut self, color: Color);

    /// Paint a `w` x `h` block at (`x`, `y`), clipped to the surface
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color);
}

impl Surface for Image {
    fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn fill(&mut self, color: Color) {
        let px: [u8; 4] = color.into();
        self.get_image_data_mut().fill(px);
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        let (width, height) = self.size();
        let x_end = x.saturating_add(w).min(width);
        let y_end = y.saturating_add(h).min(height);

        if x >= x_end || y >= y_end {
            return;
        }

        let px: [u8; 4] = color.into();
        let data = self.get_image_data_mut();
        for row in y..y_end {
            data[row * width + x..row * width + x_end].fill(px);
        }
    }
}

/// Create a surface large enough for `width` x `generations` cells.
/// Dimensions beyond `u16::MAX` pixels are capped and the excess is clipped.
pub fn surface_for(width: usize, generations: usize, cell_size: usize, background: Color) -> Image {
    let px = |cells: usize| u16::try_from(cells.saturating_mul(cell_size)).unwrap_or(u16::MAX);
    Image::gen_image_color(px(width), px(generations), background)
}

/// Whether `surface` already has the size `surface_for` would produce
pub fn fits(surface: &Image, width: usize, generations: usize, cell_size: usize) -> bool {
    let px = |cells: usize| cells.saturating_mul(cell_size).min(u16::MAX as usize);
    surface.size() == (px(width), px(generations))
}
