/// Camera places the rendered automaton on screen: where its top-left
/// corner sits and how much it is magnified.
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = one surface pixel per screen pixel
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub const MIN_ZOOM: f32 = 0.25;
    pub const MAX_ZOOM: f32 = 8.0;

    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            drag_anchor: None,
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow a drag gesture. Call every frame with whether the drag
    /// button is held; the first held frame only records the anchor.
    pub fn drag(&mut self, held: bool, pointer: (f32, f32)) {
        if !held {
            self.drag_anchor = None;
            return;
        }

        if let Some((ax, ay)) = self.drag_anchor {
            self.pan(pointer.0 - ax, pointer.1 - ay);
        }
        self.drag_anchor = Some(pointer);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Screen rectangle (x, y, w, h) covered by a surface of the given
    /// pixel size whose unzoomed top-left corner is at `origin`
    pub fn surface_rect(&self, origin: (f32, f32), size: (usize, usize)) -> (f32, f32, f32, f32) {
        (
            origin.0 + self.offset_x,
            origin.1 + self.offset_y,
            size.0 as f32 * self.zoom,
            size.1 as f32 * self.zoom,
        )
    }

    /// Which (column, generation) lies under a screen position, if any
    pub fn screen_to_cell(
        &self,
        screen: (f32, f32),
        origin: (f32, f32),
        cell_size: usize,
        dimensions: (usize, usize),
    ) -> Option<(usize, usize)> {
        let scale = cell_size as f32 * self.zoom;
        let x = (screen.0 - origin.0 - self.offset_x) / scale;
        let y = (screen.1 - origin.1 - self.offset_y) / scale;

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x as usize, y as usize);
        (col < dimensions.0 && row < dimensions.1).then_some((col, row))
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
        self.drag_anchor = None;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
