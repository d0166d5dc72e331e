//! Keyboard input
//!
//! Arrow keys set the pending direction; the next tick consumes it.

use crate::sim::{Direction, TickInput};

/// Tracks the most recent arrow key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputHandler {
    pending: Direction,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a DOM `KeyboardEvent.key` value. Returns the new pending
    /// direction if the key was an arrow key.
    pub fn handle_key(&mut self, key: &str) -> Option<Direction> {
        let direction = Direction::from_key(key)?;
        self.pending = direction;
        Some(direction)
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    /// Input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            direction: self.pending,
        }
    }
}
