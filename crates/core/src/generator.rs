//! Generator module - initial board fill with no pre-existing matches
//!
//! Cells are filled in row-major order. A candidate tile is redrawn whenever
//! it would complete a run of three with the two cells to its left or the two
//! cells above it; earlier cells are already run-free by induction, so those
//! four neighbours are the only ones that need checking.

use match_rush_types::{Position, Tile, GRID_SIZE};

use crate::board::Grid;
use crate::rng::TileSource;

/// Redraw cap per cell; with 5 tile kinds rejection sampling terminates long
/// before this, so hitting the cap means the tile source is degenerate.
pub const MAX_REDRAWS: u32 = 32;

/// Board generation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("redraw cap exceeded at ({row}, {col}); tile source cannot avoid triples")]
    RedrawsExhausted { row: u8, col: u8 },
}

/// Would placing `tile` at (row, col) complete a horizontal or vertical triple
/// with already-filled cells?
fn completes_triple(grid: &Grid, row: u8, col: u8, tile: Tile) -> bool {
    let at = |r: u8, c: u8| grid.get(Position::new(r, c));

    if col >= 2 && at(row, col - 1) == Some(tile) && at(row, col - 2) == Some(tile) {
        return true;
    }
    if row >= 2 && at(row - 1, col) == Some(tile) && at(row - 2, col) == Some(tile) {
        return true;
    }
    false
}

/// Produce a full grid with no run of three or more, horizontally or
/// vertically
pub fn generate(source: &mut impl TileSource) -> Result<Grid, GenerationError> {
    let mut grid = Grid::new();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let mut tile = source.draw();
            let mut redraws = 0;
            while completes_triple(&grid, row, col, tile) {
                redraws += 1;
                if redraws > MAX_REDRAWS {
                    return Err(GenerationError::RedrawsExhausted { row, col });
                }
                tile = source.draw();
            }
            grid.set(Position::new(row, col), Some(tile));
        }
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::find_matches;
    use crate::rng::TileBag;

    #[test]
    fn test_generated_grid_is_full() {
        let mut bag = TileBag::new(1);
        let grid = generate(&mut bag).expect("generation should succeed");
        assert_eq!(grid.occupied_count(), 49);
    }

    #[test]
    fn test_no_spawn_triple_across_seeds() {
        for seed in 1..200u32 {
            let mut bag = TileBag::new(seed);
            let grid = generate(&mut bag).expect("generation should succeed");
            assert!(
                find_matches(&grid).is_empty(),
                "seed {} produced a grid with a pre-existing match",
                seed
            );
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let g1 = generate(&mut TileBag::new(77)).unwrap();
        let g2 = generate(&mut TileBag::new(77)).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_single_tile_source_exhausts_redraws() {
        struct OnlyRuby;
        impl TileSource for OnlyRuby {
            fn draw(&mut self) -> Tile {
                Tile::Ruby
            }
        }

        // A one-symbol alphabet cannot avoid triples: the third cell of row 0
        // is where the redraw cap trips.
        let err = generate(&mut OnlyRuby).unwrap_err();
        assert_eq!(err, GenerationError::RedrawsExhausted { row: 0, col: 2 });
    }
}
