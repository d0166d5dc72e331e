//! Drawing surface abstraction
//!
//! The subset of the canvas 2D API the game needs. The browser implements it
//! on `CanvasRenderingContext2d` (see `platform::web`).

/// 2D immediate-mode drawing surface
pub trait Surface {
    /// Fill style for subsequent `fill_rect` / `fill` calls (CSS color)
    fn set_fill_color(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    /// Clockwise arc around (x, y) from `start` to `end` radians
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Fill the current path
    fn fill(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
}

/// Surface that only counts what would be drawn (headless runs)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountingSurface {
    pub rects: usize,
    pub arcs: usize,
    pub fills: usize,
    /// Current save/restore nesting depth
    pub depth: usize,
    pub max_depth: usize,
}

impl CountingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for CountingSurface {
    fn set_fill_color(&mut self, _color: &str) {}

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.rects += 1;
    }

    fn begin_path(&mut self) {}

    fn arc(&mut self, _x: f32, _y: f32, _radius: f32, _start: f32, _end: f32) {
        self.arcs += 1;
    }

    fn line_to(&mut self, _x: f32, _y: f32) {}

    fn fill(&mut self) {
        self.fills += 1;
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn translate(&mut self, _x: f32, _y: f32) {}

    fn rotate(&mut self, _angle: f32) {}
}
