//! RNG module - deterministic tile drawing
//!
//! A simple LCG keeps the engine fully deterministic: the same seed produces
//! the same board and the same refill sequence. Tile draws go through the
//! [`TileSource`] trait so tests can substitute a scripted sequence for the
//! uniform random bag.

use match_rush_types::{Tile, TILE_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current RNG state (for restarting a match with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// A source of tiles for board generation and refill
///
/// The engine uses a [`TileBag`]; tests script exact sequences.
pub trait TileSource {
    /// Draw the next tile
    fn draw(&mut self) -> Tile;
}

/// Uniform random tile drawer backed by [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct TileBag {
    rng: SimpleRng,
}

impl TileBag {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl TileSource for TileBag {
    fn draw(&mut self) -> Tile {
        let index = self.rng.next_range(TILE_KINDS as u32) as usize;
        // Index is always in range by construction
        Tile::from_index(index).unwrap_or(Tile::Ruby)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new(1)
    }
}
