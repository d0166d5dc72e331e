//! Per-tick frame drawing

use std::f32::consts::{FRAC_PI_4, TAU};

use super::layout::{Layout, mouth_aperture};
use super::surface::Surface;
use crate::settings::{Settings, Theme};
use crate::sim::{Cell, GameState};

/// Draws complete frames of the game
#[derive(Debug, Clone)]
pub struct Renderer {
    layout: Layout,
    theme: Theme,
    grid_dot_radius: f32,
}

impl Renderer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            layout: Layout::from_settings(settings),
            theme: settings.theme.clone(),
            grid_dot_radius: settings.grid_dot_radius,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Draw one frame. `phase` is the tick index (frame / tick divisor) and
    /// drives the mouth animation.
    pub fn draw<S: Surface>(&self, surface: &mut S, state: &GameState, phase: f32) {
        self.draw_background(surface);

        let center = self.layout.center();
        surface.save();
        surface.translate(center.x, center.y);
        surface.rotate(FRAC_PI_4);
        surface.translate(-center.x, -center.y);

        self.draw_player(surface, state, phase);
        for &point in &state.collectibles {
            self.draw_point(surface, point);
        }
        for cell in state.grid.cells() {
            self.draw_grid_point(surface, cell);
        }

        surface.restore();
    }

    fn draw_background<S: Surface>(&self, surface: &mut S) {
        surface.set_fill_color(&self.theme.background);
        surface.fill_rect(0.0, 0.0, self.layout.size, self.layout.size);
    }

    fn draw_player<S: Surface>(&self, surface: &mut S, state: &GameState, phase: f32) {
        let pos = self.layout.cell_to_screen(state.player.cell);
        let half_mouth = 0.5 * mouth_aperture(phase);

        surface.set_fill_color(&self.theme.player);
        surface.save();
        surface.begin_path();
        surface.translate(pos.x, pos.y);
        surface.rotate(state.player.direction.angle());
        surface.arc(
            0.0,
            0.0,
            self.layout.player_radius(),
            half_mouth,
            TAU - half_mouth,
        );
        surface.line_to(0.0, 0.0);
        surface.fill();
        surface.restore();
    }

    fn draw_point<S: Surface>(&self, surface: &mut S, cell: Cell) {
        let pos = self.layout.cell_to_screen(cell);
        let size = self.layout.player_radius();
        let half = 0.5 * size;

        surface.set_fill_color(&self.theme.point);
        surface.save();
        surface.translate(pos.x, pos.y);
        surface.rotate(FRAC_PI_4);
        surface.fill_rect(-half, -half, size, size);
        surface.restore();
    }

    fn draw_grid_point<S: Surface>(&self, surface: &mut S, cell: Cell) {
        let pos = self.layout.cell_to_screen(cell);

        surface.set_fill_color(&self.theme.grid);
        surface.begin_path();
        surface.arc(pos.x, pos.y, self.grid_dot_radius, 0.0, TAU);
        surface.fill();
    }
}
