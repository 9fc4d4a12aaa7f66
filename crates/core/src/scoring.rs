//! Scoring module - chain-based cascade scoring
//!
//! Each cascade iteration that finds at least one match deepens the chain by
//! one. The multiplier grows linearly with chain depth, `1 + 0.5 * (d - 1)`,
//! with no cap. A step is worth `matched cells * 10 * multiplier`; because
//! the multiplier only takes half-steps, the product is always integral and
//! is computed in integer arithmetic.

use match_rush_types::{CELL_SCORE, MULTIPLIER_STEP_DEN, MULTIPLIER_STEP_NUM};

/// Multiplier for a chain depth (depth starts at 1 for the first iteration)
pub fn chain_multiplier(depth: u32) -> f32 {
    debug_assert!(depth >= 1, "chain depth starts at 1");
    1.0 + (MULTIPLIER_STEP_NUM as f32 / MULTIPLIER_STEP_DEN as f32) * (depth - 1) as f32
}

/// Points for clearing `cells` matched cells at the given chain depth
///
/// Equals `cells * CELL_SCORE * chain_multiplier(depth)` exactly:
/// `cells * 10 * (1 + (d - 1) / 2)` simplifies to `cells * 5 * (d + 1)`.
pub fn step_score(cells: usize, depth: u32) -> u32 {
    (cells as u32)
        .saturating_mul(CELL_SCORE / MULTIPLIER_STEP_DEN)
        .saturating_mul(depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_formula() {
        assert_eq!(chain_multiplier(1), 1.0);
        assert_eq!(chain_multiplier(2), 1.5);
        assert_eq!(chain_multiplier(3), 2.0);
        assert_eq!(chain_multiplier(7), 4.0);
    }

    #[test]
    fn test_multiplier_is_unbounded() {
        assert_eq!(chain_multiplier(101), 51.0);
    }

    #[test]
    fn test_step_score_matches_float_formula() {
        for depth in 1..20u32 {
            for cells in 3..=49usize {
                let expected = (cells as f32) * (CELL_SCORE as f32) * chain_multiplier(depth);
                assert_eq!(step_score(cells, depth) as f32, expected);
            }
        }
    }

    #[test]
    fn test_two_chain_step_values() {
        // 3-cell run on the first iteration, 4-cell run on the second
        assert_eq!(step_score(3, 1), 30);
        assert_eq!(step_score(4, 2), 60);
    }
}
