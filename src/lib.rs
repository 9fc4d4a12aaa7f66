//! Match Rush (workspace facade crate).
//!
//! This package exposes the stable `match_rush::{core,engine,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use match_rush_core as core;
pub use match_rush_engine as engine;
pub use match_rush_types as types;
