//! Board module - manages the 7x7 tile grid
//!
//! The grid is square with a fixed dimension. Cells hold either a tile or
//! nothing. Uses a flat array for cache locality; coordinates are (row, col)
//! with row 0 at the top.
//!
//! Mutations: [`Grid::swap`] for player moves (self-inverse, used to undo an
//! invalid move) and [`Grid::clear`] + [`Grid::collapse_and_refill`] for
//! cascade steps. Refill does not avoid creating new runs; new runs are what
//! feeds the next cascade iteration.

use arrayvec::ArrayVec;

use match_rush_types::{Cell, Position, Tile, GRID_CELLS, GRID_SIZE};

use crate::matchset::MatchSet;
use crate::rng::TileSource;

const N: usize = GRID_SIZE as usize;

/// The game grid - 7x7 cells using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Grid dimension (rows == cols)
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Set cell at a position
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Check whether a cell is empty
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Exchange two cells in place
    ///
    /// Performs no adjacency check; that is the engine's precondition. The
    /// operation is its own inverse, which is how an invalid move is undone.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.index(), b.index());
    }

    /// Clear every cell in the set to empty
    pub fn clear(&mut self, matches: &MatchSet) {
        for pos in matches.iter() {
            self.cells[pos.index()] = None;
        }
    }

    /// Gravity collapse and refill, column by column
    ///
    /// Within each column the surviving tiles are compacted to the bottom,
    /// preserving their relative order, and the vacated cells above them are
    /// refilled with freshly drawn tiles (bottom-up within the vacated band,
    /// columns left to right). Returns the set of refilled cells.
    pub fn collapse_and_refill(&mut self, source: &mut impl TileSource) -> MatchSet {
        let mut spawned = MatchSet::new();

        for col in 0..N as u8 {
            // Collect survivors bottom-up; ArrayVec keeps this allocation-free
            let mut kept: ArrayVec<Tile, N> = ArrayVec::new();
            for row in (0..N as u8).rev() {
                if let Some(tile) = self.get(Position::new(row, col)) {
                    kept.push(tile);
                }
            }

            // Rewrite the column bottom-up: survivors first, then fresh tiles
            let mut row = N as i32 - 1;
            for tile in &kept {
                self.set(Position::new(row as u8, col), Some(*tile));
                row -= 1;
            }
            while row >= 0 {
                let pos = Position::new(row as u8, col);
                self.set(pos, Some(source.draw()));
                spawned.insert(pos);
                row -= 1;
            }
        }

        spawned
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the grid into a u8 matrix (0 = empty, 1..=5 = tile index + 1)
    pub fn write_u8_grid(&self, out: &mut [[u8; N]; N]) {
        for row in 0..N {
            for col in 0..N {
                out[row][col] = match self.cells[row * N + col] {
                    Some(tile) => tile.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }

    /// Create from a 2D array (for tests and debugging)
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        let mut flat = [None; GRID_CELLS];
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                flat[r * N + c] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D array (for tests and debugging)
    pub fn to_rows(&self) -> [[Cell; N]; N] {
        let mut rows = [[None; N]; N];
        for r in 0..N {
            rows[r].copy_from_slice(&self.cells[r * N..(r + 1) * N]);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Script(Vec<Tile>);

    impl TileSource for Script {
        fn draw(&mut self) -> Tile {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 4);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Some(Tile::Jade));
        assert_eq!(grid.get(pos), Some(Tile::Jade));
        assert_eq!(grid.cells()[3 * 7 + 4], Some(Tile::Jade));
    }

    #[test]
    fn test_swap_is_involution() {
        let mut grid = Grid::new();
        let a = Position::new(2, 2);
        let b = Position::new(2, 3);
        grid.set(a, Some(Tile::Ruby));
        grid.set(b, Some(Tile::Azure));

        let before = grid.clone();
        grid.swap(a, b);
        assert_eq!(grid.get(a), Some(Tile::Azure));
        assert_eq!(grid.get(b), Some(Tile::Ruby));

        grid.swap(a, b);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear_empties_only_members() {
        let mut grid = Grid::new();
        for col in 0..7 {
            grid.set(Position::new(6, col), Some(Tile::Amber));
        }

        let set: MatchSet = (0..3).map(|c| Position::new(6, c)).collect();
        grid.clear(&set);

        for col in 0..3 {
            assert_eq!(grid.get(Position::new(6, col)), None);
        }
        for col in 3..7 {
            assert_eq!(grid.get(Position::new(6, col)), Some(Tile::Amber));
        }
    }

    #[test]
    fn test_collapse_preserves_column_order() {
        let mut grid = Grid::new();
        // Column 0, top to bottom: Ruby, (gap), Jade, (gap), Azure
        grid.set(Position::new(0, 0), Some(Tile::Ruby));
        grid.set(Position::new(2, 0), Some(Tile::Jade));
        grid.set(Position::new(4, 0), Some(Tile::Azure));

        // Deterministic refill: every other column is fully empty, so the
        // script must cover 7 cells per empty column plus 4 in column 0.
        let mut script = Script(vec![Tile::Violet; GRID_CELLS]);
        let spawned = grid.collapse_and_refill(&mut script);

        // Survivors compacted to the bottom in their original order
        assert_eq!(grid.get(Position::new(6, 0)), Some(Tile::Azure));
        assert_eq!(grid.get(Position::new(5, 0)), Some(Tile::Jade));
        assert_eq!(grid.get(Position::new(4, 0)), Some(Tile::Ruby));

        // Everything above is freshly spawned
        for row in 0..4 {
            let pos = Position::new(row, 0);
            assert_eq!(grid.get(pos), Some(Tile::Violet));
            assert!(spawned.contains(pos));
        }
        assert!(!spawned.contains(Position::new(4, 0)));

        // No holes anywhere after collapse
        assert_eq!(grid.occupied_count(), GRID_CELLS);
    }

    #[test]
    fn test_collapse_refill_order_is_column_major_bottom_up() {
        let mut grid = Grid::new();
        // Fill everything except two cells in column 1: rows 0 and 1
        for row in 0..7u8 {
            for col in 0..7u8 {
                grid.set(Position::new(row, col), Some(Tile::Ruby));
            }
        }
        grid.set(Position::new(0, 1), None);
        grid.set(Position::new(1, 1), None);

        // First draw goes to the lowest vacated cell (row 1), second to row 0
        let mut script = Script(vec![Tile::Jade, Tile::Violet]);
        let spawned = grid.collapse_and_refill(&mut script);

        assert_eq!(spawned.len(), 2);
        assert_eq!(grid.get(Position::new(1, 1)), Some(Tile::Jade));
        assert_eq!(grid.get(Position::new(0, 1)), Some(Tile::Violet));
    }
}
