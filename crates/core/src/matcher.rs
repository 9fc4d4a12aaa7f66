//! Matcher module - run detection over the grid
//!
//! A pure scan, no mutation: every maximal horizontal or vertical run of
//! three or more equal tiles contributes all of its cells to the result.
//! Empty cells always break a run and never match.

use match_rush_types::{Position, GRID_SIZE};

use crate::board::Grid;
use crate::matchset::MatchSet;

/// Minimum run length that qualifies as a match
pub const MIN_RUN: usize = 3;

/// Find every cell participating in a run of `MIN_RUN`+ equal tiles
///
/// Rows are scanned left to right, columns top to bottom; a cell that sits on
/// both a horizontal and a vertical run is still a single member of the set.
pub fn find_matches(grid: &Grid) -> MatchSet {
    let mut matches = MatchSet::new();
    let n = GRID_SIZE;

    // Horizontal runs
    for row in 0..n {
        let mut run_value = grid.get(Position::new(row, 0));
        let mut run_start = 0u8;
        for col in 1..=n {
            let value = if col < n {
                grid.get(Position::new(row, col))
            } else {
                None
            };
            if col < n && value == run_value {
                continue;
            }
            if run_value.is_some() && (col - run_start) as usize >= MIN_RUN {
                for k in run_start..col {
                    matches.insert(Position::new(row, k));
                }
            }
            run_value = value;
            run_start = col;
        }
    }

    // Vertical runs
    for col in 0..n {
        let mut run_value = grid.get(Position::new(0, col));
        let mut run_start = 0u8;
        for row in 1..=n {
            let value = if row < n {
                grid.get(Position::new(row, col))
            } else {
                None
            };
            if row < n && value == run_value {
                continue;
            }
            if run_value.is_some() && (row - run_start) as usize >= MIN_RUN {
                for k in run_start..row {
                    matches.insert(Position::new(k, col));
                }
            }
            run_value = value;
            run_start = row;
        }
    }

    matches
}
