//! MatchSet - a set of grid positions packed into a u64
//!
//! The 7x7 grid has 49 cells, so membership fits one word. Row and column
//! scans can both add the same cell (an L/T intersection) and the set
//! deduplicates for free.

use match_rush_types::{Position, GRID_CELLS};

/// Set of grid positions, one bit per cell in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSet {
    bits: u64,
}

impl MatchSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Create a set containing every cell on the grid
    pub fn full() -> Self {
        Self {
            bits: (1u64 << GRID_CELLS) - 1,
        }
    }

    /// Add a position to the set
    pub fn insert(&mut self, pos: Position) {
        self.bits |= 1u64 << pos.index();
    }

    /// Check membership
    pub fn contains(&self, pos: Position) -> bool {
        self.bits & (1u64 << pos.index()) != 0
    }

    /// Number of positions in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Remove all positions
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Union with another set
    pub fn union(&self, other: MatchSet) -> MatchSet {
        MatchSet {
            bits: self.bits | other.bits,
        }
    }

    /// Iterate members in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let mut remaining = self.bits;
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let index = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            Position::from_index(index)
        })
    }

    /// Collect members into a vector in row-major order
    pub fn positions(&self) -> Vec<Position> {
        self.iter().collect()
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = MatchSet::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}
