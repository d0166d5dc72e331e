//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Frame-divided ticks only
//! - Stable iteration order (grid order)
//! - No rendering or platform dependencies

pub mod grid;
pub mod state;
pub mod tick;

pub use grid::{Cell, Direction, Grid};
pub use state::{GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick, update};
