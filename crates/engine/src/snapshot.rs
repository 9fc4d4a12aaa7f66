//! Host-facing frames - serializable mirrors of engine state
//!
//! These are the types a surrounding shell (renderer, web host) consumes.
//! They carry plain arrays and numbers only, so the JSON shape is stable and
//! gated by a schema test; core types never derive serde themselves.

use serde::Serialize;

use match_rush_core::MatchSet;
use match_rush_types::Position;

use crate::engine::{BoardGrid, CascadeStep, Engine};

fn positions_as_pairs(set: &MatchSet) -> Vec<[u8; 2]> {
    set.iter().map(|p| [p.row(), p.col()]).collect()
}

/// Read-only snapshot of the whole engine, for rendering
#[derive(Debug, Clone, Serialize)]
pub struct StateFrame {
    pub board: BoardGrid,
    pub phase: &'static str,
    pub score: u32,
    pub chain: u32,
    pub multiplier: f32,
    pub remaining_secs: u32,
    /// Pending first selection as [row, col], if any
    pub selection: Option<[u8; 2]>,
    /// Cells refilled by the latest generation or settle step
    pub spawned: Vec<[u8; 2]>,
}

impl From<&Engine> for StateFrame {
    fn from(engine: &Engine) -> Self {
        Self {
            board: engine.board_grid(),
            phase: engine.phase_name(),
            score: engine.session().score(),
            chain: engine.session().chain(),
            multiplier: engine.display_multiplier(),
            remaining_secs: engine.session().remaining_secs(),
            selection: engine.selection().map(|p| [p.row(), p.col()]),
            spawned: positions_as_pairs(&engine.spawned()),
        }
    }
}

/// One cascade suspension point, for the driver to present
#[derive(Debug, Clone, Serialize)]
pub struct StepFrame {
    pub board: BoardGrid,
    /// Cells to flash as matched, as [row, col] pairs
    pub matched: Vec<[u8; 2]>,
    /// Cells that just spawned, as [row, col] pairs
    pub spawned: Vec<[u8; 2]>,
    pub chain: u32,
    pub multiplier: f32,
    pub score: u32,
    pub done: bool,
}

impl From<&CascadeStep> for StepFrame {
    fn from(step: &CascadeStep) -> Self {
        Self {
            board: step.board,
            matched: positions_as_pairs(&step.matched),
            spawned: positions_as_pairs(&step.spawned),
            chain: step.chain,
            multiplier: step.multiplier,
            score: step.score,
            done: step.done,
        }
    }
}

impl Engine {
    /// Current state as a serializable frame
    pub fn snapshot(&self) -> StateFrame {
        StateFrame::from(self)
    }
}

/// Flash pair for an invalid move, as [row, col] pairs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InvalidMoveFrame {
    pub first: [u8; 2],
    pub second: [u8; 2],
}

impl InvalidMoveFrame {
    pub fn new(first: Position, second: Position) -> Self {
        Self {
            first: [first.row(), first.col()],
            second: [second.row(), second.col()],
        }
    }
}
