//! Grid-to-screen mapping

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::mix;
use crate::settings::Settings;
use crate::sim::Cell;

/// Pixel geometry derived from canvas size, grid width and border padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Canvas edge length
    pub size: f32,
    /// Edge length of one grid cell
    pub cell_size: f32,
    /// Border width (padding cells × cell size)
    pub padding: f32,
}

impl Layout {
    pub fn new(canvas_size: u32, column_count: u32, border_padding: u32) -> Self {
        let size = canvas_size as f32;
        let span = column_count
            .saturating_add(border_padding.saturating_mul(2))
            .max(1);
        let cell_size = size / span as f32;
        Self {
            size,
            cell_size,
            padding: border_padding as f32 * cell_size,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.canvas_size,
            settings.column_count,
            settings.border_padding,
        )
    }

    /// Center of `cell` in (unrotated) screen space
    pub fn cell_to_screen(&self, cell: Cell) -> Vec2 {
        let offset = self.padding + 0.5 * self.cell_size;
        Vec2::new(
            offset + cell.x as f32 * self.cell_size,
            offset + cell.y as f32 * self.cell_size,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(0.5 * self.size)
    }

    /// Player glyph radius; also the collectible square's edge
    pub fn player_radius(&self) -> f32 {
        0.5 * self.cell_size
    }
}

/// Mouth opening in radians for a tick phase (tick index, possibly
/// fractional). Closed on even ticks, 90° on odd ticks, linear in between.
pub fn mouth_aperture(phase: f32) -> f32 {
    let t = phase.rem_euclid(2.0);
    let t = if t > 1.0 { 2.0 - t } else { t };
    mix(0.0, FRAC_PI_2, t)
}
