//! Frame-divided simulation tick
//!
//! Advances the player one cell per tick and resolves point collection.

use super::grid::Direction;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Most recent arrow key direction
    pub direction: Direction,
}

/// Called once per display refresh. Runs [`tick`] when `frame` lands on a
/// tick boundary and returns whether it did.
pub fn update(state: &mut GameState, input: &TickInput, frame: u64) -> bool {
    if !state.is_tick_frame(frame) {
        return false;
    }
    tick(state, input);
    true
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::Completed {
        return;
    }

    state.tick_count += 1;
    state.player.direction = input.direction;
    state.player.cell = state.grid.clamp(state.player.cell.step(input.direction));

    let position = state.player.cell;
    let before = state.collectibles.len();
    state.collectibles.retain(|c| *c != position);
    let eaten = (before - state.collectibles.len()) as u32;

    for _ in 0..eaten {
        state.score += 1;
        log::debug!("Collected {:?}, score {}", position, state.score);
        state.events.push(GameEvent::Collected {
            cell: position,
            score: state.score,
        });
    }

    if state.collectibles.is_empty() {
        state.phase = GamePhase::Completed;
        log::info!("Session complete after {} ticks, score {}", state.tick_count, state.score);
        state.events.push(GameEvent::SessionComplete { score: state.score });
    }
}
