//! Core match-3 logic - pure, deterministic, and testable
//!
//! This crate contains the board, match detection, generation, collapse, and
//! scoring rules. It has **zero dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: the same seed produces the same board and refill draws
//! - **Testable**: tile draws go through the [`TileSource`] seam, so tests can
//!   script exact refill sequences
//! - **Portable**: runs anywhere the engine is embedded (terminal, web shell,
//!   headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 7x7 grid with swap, clear, and gravity collapse/refill
//! - [`matcher`]: run detection (all cells on runs of 3+ equal tiles)
//! - [`matchset`]: bit-packed position set shared by matcher and mutations
//! - [`generator`]: initial fill with no pre-existing matches
//! - [`rng`]: seeded LCG and the tile-drawing seam
//! - [`scoring`]: chain multiplier and per-step points
//! - [`session`]: per-match score/chain/timer state
//!
//! # Invariants
//!
//! Immediately after generation and after every completed cascade step the
//! grid contains no run of three or more equal tiles; the only moment a triple
//! may exist is between a tentative swap and the first match scan. Collapse is
//! stable per column and never exposes a half-compacted grid.
//!
//! # Example
//!
//! ```
//! use match_rush_core::{find_matches, generate, TileBag};
//!
//! let mut bag = TileBag::new(12345);
//! let grid = generate(&mut bag).expect("a 5-symbol alphabet always generates");
//!
//! // Freshly generated boards never contain a match
//! assert!(find_matches(&grid).is_empty());
//! ```

pub mod board;
pub mod generator;
pub mod matcher;
pub mod matchset;
pub mod rng;
pub mod scoring;
pub mod session;

// Re-export commonly used items
pub use board::Grid;
pub use generator::{generate, GenerationError, MAX_REDRAWS};
pub use matcher::{find_matches, MIN_RUN};
pub use matchset::MatchSet;
pub use rng::{SimpleRng, TileBag, TileSource};
pub use scoring::{chain_multiplier, step_score};
pub use session::Session;
