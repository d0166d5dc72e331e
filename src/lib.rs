//! Grid Muncher - a tiny arcade game on a rotated grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, player movement, collection)
//! - `scheduler`: Display-refresh driven frame loop
//! - `input`: Arrow-key to direction mapping
//! - `renderer`: Immediate-mode 2D drawing of a game frame
//! - `platform`: Browser bindings (canvas surface, animation frames)
//! - `settings`: Data-driven game configuration

pub mod input;
pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use input::InputHandler;
pub use scheduler::{AnimationLoop, FrameHost};
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Number of columns (and rows) in the square grid
    pub const COLUMN_COUNT: u32 = 1 + 16;
    /// Largest grid accepted; keeps cell indices well inside `i32`
    pub const MAX_COLUMN_COUNT: u32 = 1024;
    /// Empty cells drawn around the grid on every side
    pub const BORDER_PADDING: u32 = 4;
    pub const MAX_BORDER_PADDING: u32 = 1024;
    /// Display-refresh frames per game tick
    pub const TICK_DIVISOR: u64 = 12;

    /// Canvas edge length in pixels
    pub const CANVAS_SIZE: u32 = 1024;
    /// Radius of the grid reference dots in pixels
    pub const GRID_DOT_RADIUS: f32 = 2.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
