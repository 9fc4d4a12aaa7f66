//! Match resolution engine - the host-facing surface of the system
//!
//! The [`Engine`] wraps the pure core (`match-rush-core`) in a small state
//! machine: one engine instance per embedding, created at startup and driven
//! entirely by calls from the host:
//!
//! - `start_match` / `end_match` from the screen/navigation collaborator
//! - `select_tile` from the input collaborator
//! - `advance_cascade` from the driver, once per suspension point, pacing the
//!   flash and fall animations itself
//! - `timer_tick` from the timer collaborator, once per second
//!
//! [`snapshot`] provides serializable frames for shells that render from
//! JSON.
//!
//! # Example
//!
//! ```
//! use match_rush_engine::Engine;
//! use match_rush_types::{Position, SelectOutcome};
//!
//! let mut engine = Engine::new(12345);
//! engine.start_match().expect("generation succeeds with 5 tile kinds");
//!
//! // Selecting a tile arms a swap; the same tile again deselects it
//! assert_eq!(engine.select_tile(Position::new(3, 3)), SelectOutcome::Selected);
//! assert_eq!(engine.select_tile(Position::new(3, 3)), SelectOutcome::Deselected);
//! ```

pub mod engine;
pub mod snapshot;

pub use engine::{BoardGrid, CascadeStep, Engine};
pub use snapshot::{InvalidMoveFrame, StateFrame, StepFrame};
