//! Game state and core simulation types
//!
//! Everything the tick mutates lives here; the renderer only reads it.

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, Grid};
use crate::consts::*;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Collectibles remain, the player moves every tick
    #[default]
    Running,
    /// Every collectible has been eaten; terminal
    Completed,
}

/// One-shot notifications produced by a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player ate the collectible at `cell`; `score` is the new total
    Collected { cell: Cell, score: u32 },
    /// Last collectible eaten. Emitted exactly once per session.
    SessionComplete { score: u32 },
}

/// The player token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    pub cell: Cell,
    /// Heading applied on the last tick (drives the glyph rotation)
    pub direction: Direction,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    /// Remaining collectibles, in grid order
    pub collectibles: Vec<Cell>,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks applied so far
    pub tick_count: u64,
    /// Frames per tick
    pub tick_divisor: u64,
    /// Pending notifications for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    initial_collectibles: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(COLUMN_COUNT)
    }
}

impl GameState {
    /// Fresh session on an `column_count`-wide grid with the default tick rate
    pub fn new(column_count: u32) -> Self {
        Self::with_tick_divisor(column_count, TICK_DIVISOR)
    }

    pub fn with_tick_divisor(column_count: u32, tick_divisor: u64) -> Self {
        let grid = Grid::new(column_count);
        let collectibles = grid.collectibles();
        let initial_collectibles = collectibles.len() as u32;

        // A grid too small to hold any point is complete from the start
        let (phase, events) = if collectibles.is_empty() {
            (
                GamePhase::Completed,
                vec![GameEvent::SessionComplete { score: 0 }],
            )
        } else {
            (GamePhase::Running, Vec::new())
        };

        Self {
            grid,
            player: Player::default(),
            collectibles,
            score: 0,
            phase,
            tick_count: 0,
            tick_divisor: tick_divisor.max(1),
            events,
            initial_collectibles,
        }
    }

    /// Number of collectibles at session start
    pub fn initial_collectibles(&self) -> u32 {
        self.initial_collectibles
    }

    /// Number of collectibles still on the board
    pub fn remaining(&self) -> u32 {
        self.collectibles.len() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Completed
    }

    /// True when `frame` lands on a tick boundary
    pub fn is_tick_frame(&self, frame: u64) -> bool {
        frame % self.tick_divisor == 0
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(17);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.cell, Cell::ORIGIN);
        assert_eq!(state.player.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.initial_collectibles(), 64);
        assert_eq!(state.remaining(), 64);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_tick_frames() {
        let state = GameState::new(17);
        assert!(!state.is_tick_frame(1));
        assert!(!state.is_tick_frame(11));
        assert!(state.is_tick_frame(12));
        assert!(state.is_tick_frame(24));
        assert!(!state.is_tick_frame(25));
    }

    #[test]
    fn test_tiny_grid_starts_completed() {
        let state = GameState::new(1);
        assert_eq!(state.remaining(), 0);
        assert!(state.is_complete());
        assert_eq!(state.events, vec![GameEvent::SessionComplete { score: 0 }]);
    }

    #[test]
    fn test_zero_divisor_is_clamped() {
        let state = GameState::with_tick_divisor(5, 0);
        assert_eq!(state.tick_divisor, 1);
        assert!(state.is_tick_frame(3));
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let state = GameState::new(5);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.collectibles, state.collectibles);
        assert_eq!(back.initial_collectibles(), 4);
    }
}
