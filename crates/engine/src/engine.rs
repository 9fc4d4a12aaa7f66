//! Engine module - the match lifecycle and cascade state machine
//!
//! The [`Engine`] owns the grid, the session, and the tile bag; there is no
//! global state. One external event drives it: a player selecting a tile.
//! A successful swap starts a cascade, which the external driver advances one
//! suspension point at a time with [`Engine::advance_cascade`] - the engine
//! never sleeps or schedules; pacing belongs to the caller.
//!
//! Cascade iterations alternate two stages:
//!
//! - **Flash**: matched cells are reported (still on the grid) so the driver
//!   can highlight them for `MATCH_FLASH_MS`.
//! - **Settle**: the matched cells are cleared, columns collapse, refill
//!   tiles spawn, and the grid is rescanned. An empty rescan ends the
//!   cascade.
//!
//! Between any two calls the grid is a fully settled, consistent state.

use match_rush_core::{
    chain_multiplier, find_matches, generate, step_score, GenerationError, Grid, MatchSet,
    Session, TileBag,
};
use match_rush_types::{Position, SelectOutcome, GRID_SIZE};

/// u8 rendering of the grid: 0 = empty, 1..=5 = tile index + 1
pub type BoardGrid = [[u8; GRID_SIZE as usize]; GRID_SIZE as usize];

/// Engine lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No match running
    Lobby,
    /// In a match, no pending selection
    Idle,
    /// In a match, first tile of a swap chosen
    AwaitingSecond(Position),
    /// A cascade is resolving
    Cascading(CascadeStage),
}

/// Which suspension point the cascade is paused at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CascadeStage {
    /// Matches found, not yet cleared; payload is the matched set
    Flash(MatchSet),
    /// Flash reported; clear + collapse happens on the next advance
    Settle(MatchSet),
}

/// One settled grid state yielded by [`Engine::advance_cascade`]
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStep {
    /// Grid contents after this step
    pub board: BoardGrid,
    /// Cells to highlight as matched (Flash steps; empty on Settle steps)
    pub matched: MatchSet,
    /// Cells refilled by this step (Settle steps; empty on Flash steps)
    pub spawned: MatchSet,
    /// Chain depth of the current iteration (1-based)
    pub chain: u32,
    /// Multiplier to display; resets to 1.0 when the cascade ends
    pub multiplier: f32,
    /// Accumulated session score after this step
    pub score: u32,
    /// True once no further matches exist
    pub done: bool,
}

/// The match resolution engine
///
/// Lifecycle: [`Engine::start_match`] -> selections and cascades ->
/// [`Engine::end_match`]. A match end requested mid-cascade is deferred until
/// the cascade completes, so the grid is never left partially resolved.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    session: Session,
    bag: TileBag,
    phase: Phase,
    /// Cells spawned by the most recent generation or settle step
    spawned: MatchSet,
    end_pending: bool,
}

impl Engine {
    /// Create an engine in the lobby with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            session: Session::new(),
            bag: TileBag::new(seed),
            phase: Phase::Lobby,
            spawned: MatchSet::new(),
            end_pending: false,
        }
    }

    /// Begin a match: fresh match-free grid, zeroed session
    ///
    /// Generation is retried once before the error is surfaced; with the full
    /// 5-symbol alphabet it does not fail in practice.
    pub fn start_match(&mut self) -> Result<(), GenerationError> {
        self.grid = generate(&mut self.bag).or_else(|_| generate(&mut self.bag))?;
        self.session = Session::new();
        self.spawned = MatchSet::full();
        self.end_pending = false;
        self.phase = Phase::Idle;
        Ok(())
    }

    /// Handle a player selecting the tile at `pos`
    ///
    /// Implements the selection state machine: first pick arms a swap, the
    /// same cell again deselects, a non-adjacent cell re-aims, and an
    /// adjacent cell applies the swap tentatively. A swap that yields no
    /// match is undone on the spot and reported as [`SelectOutcome::InvalidMove`];
    /// otherwise the cascade starts with the chain counter reset.
    pub fn select_tile(&mut self, pos: Position) -> SelectOutcome {
        match self.phase {
            Phase::Lobby | Phase::Cascading(_) => SelectOutcome::Ignored,
            Phase::Idle => {
                self.phase = Phase::AwaitingSecond(pos);
                SelectOutcome::Selected
            }
            Phase::AwaitingSecond(first) => {
                if first == pos {
                    self.phase = Phase::Idle;
                    return SelectOutcome::Deselected;
                }
                if !first.is_adjacent(pos) {
                    self.phase = Phase::AwaitingSecond(pos);
                    return SelectOutcome::Reselected;
                }

                // Tentative swap; the only instant a triple may exist on the
                // grid before the resolver acts
                self.grid.swap(first, pos);
                let matches = find_matches(&self.grid);
                if matches.is_empty() {
                    // Invalid move: swap back (swap is its own inverse)
                    self.grid.swap(first, pos);
                    self.phase = Phase::Idle;
                    return SelectOutcome::InvalidMove {
                        first,
                        second: pos,
                    };
                }

                self.session.reset_chain();
                self.phase = Phase::Cascading(CascadeStage::Flash(matches));
                SelectOutcome::CascadeStarted
            }
        }
    }

    /// Advance the running cascade by one suspension point
    ///
    /// Call repeatedly after [`SelectOutcome::CascadeStarted`] until the
    /// returned step has `done == true`. Calling outside a cascade is a
    /// caller bug and panics.
    pub fn advance_cascade(&mut self) -> CascadeStep {
        let stage = match self.phase {
            Phase::Cascading(stage) => stage,
            _ => panic!("advance_cascade called outside a cascade"),
        };

        match stage {
            CascadeStage::Flash(matched) => {
                let depth = self.session.bump_chain();
                self.phase = Phase::Cascading(CascadeStage::Settle(matched));
                CascadeStep {
                    board: self.board_grid(),
                    matched,
                    spawned: MatchSet::new(),
                    chain: depth,
                    multiplier: chain_multiplier(depth),
                    score: self.session.score(),
                    done: false,
                }
            }
            CascadeStage::Settle(matched) => {
                let depth = self.session.chain();
                self.session.add_score(step_score(matched.len(), depth));
                self.grid.clear(&matched);
                let spawned = self.grid.collapse_and_refill(&mut self.bag);
                self.spawned = spawned;

                let next = find_matches(&self.grid);
                let done = next.is_empty();
                if done {
                    self.phase = Phase::Idle;
                    if self.end_pending {
                        self.finish();
                    }
                } else {
                    self.phase = Phase::Cascading(CascadeStage::Flash(next));
                }

                CascadeStep {
                    board: self.board_grid(),
                    matched: MatchSet::new(),
                    spawned,
                    chain: depth,
                    multiplier: if done { 1.0 } else { chain_multiplier(depth) },
                    score: self.session.score(),
                    done,
                }
            }
        }
    }

    /// End the match
    ///
    /// Immediate while idle or awaiting a selection (returns `true`). While a
    /// cascade is resolving the end is deferred until the cascade completes
    /// (returns `false`); the final score then reflects the full cascade.
    pub fn end_match(&mut self) -> bool {
        match self.phase {
            Phase::Lobby => true,
            Phase::Cascading(_) => {
                self.end_pending = true;
                false
            }
            Phase::Idle | Phase::AwaitingSecond(_) => {
                self.finish();
                true
            }
        }
    }

    fn finish(&mut self) {
        // Session survives into the lobby so the final score stays readable
        self.phase = Phase::Lobby;
        self.end_pending = false;
    }

    /// One-second decrement from the timer collaborator; returns remaining
    /// time. The collaborator calls [`Engine::end_match`] when this hits zero.
    pub fn timer_tick(&mut self) -> u32 {
        if self.in_match() {
            self.session.tick_second()
        } else {
            self.session.remaining_secs()
        }
    }

    pub fn in_match(&self) -> bool {
        !matches!(self.phase, Phase::Lobby)
    }

    pub fn is_cascading(&self) -> bool {
        matches!(self.phase, Phase::Cascading(_))
    }

    /// The pending first selection, if any
    pub fn selection(&self) -> Option<Position> {
        match self.phase {
            Phase::AwaitingSecond(pos) => Some(pos),
            _ => None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Cells spawned by the latest generation or settle step
    pub fn spawned(&self) -> MatchSet {
        self.spawned
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.bag.seed()
    }

    /// Multiplier to display right now: the running chain's while cascading,
    /// otherwise x1.0
    pub fn display_multiplier(&self) -> f32 {
        match self.phase {
            Phase::Cascading(_) if self.session.chain() >= 1 => {
                chain_multiplier(self.session.chain())
            }
            _ => 1.0,
        }
    }

    pub(crate) fn phase_name(&self) -> &'static str {
        match self.phase {
            Phase::Lobby => "lobby",
            Phase::Idle => "idle",
            Phase::AwaitingSecond(_) => "awaiting_second",
            Phase::Cascading(_) => "cascading",
        }
    }

    /// Render the grid into the u8 matrix form used by snapshots
    pub fn board_grid(&self) -> BoardGrid {
        let mut out = [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.grid.write_u8_grid(&mut out);
        out
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
