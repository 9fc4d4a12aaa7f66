//! Session module - ephemeral per-match state
//!
//! Created at match start and discarded at match end. Score is monotone
//! non-decreasing; the chain counter resets at the start of each
//! player-initiated resolution.

use match_rush_types::MATCH_DURATION_SECS;

/// Per-match state: score, chain depth, remaining time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    chain: u32,
    remaining_secs: u32,
}

impl Session {
    /// Fresh session with zero score and a full timer
    pub fn new() -> Self {
        Self {
            score: 0,
            chain: 0,
            remaining_secs: MATCH_DURATION_SECS,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chain(&self) -> u32 {
        self.chain
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Add points to the score (score never decreases)
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Start a new chain lineage for a player move
    pub fn reset_chain(&mut self) {
        self.chain = 0;
    }

    /// Deepen the chain by one cascade iteration; returns the new depth
    pub fn bump_chain(&mut self) -> u32 {
        self.chain += 1;
        self.chain
    }

    /// One-second timer decrement; returns the remaining time
    pub fn tick_second(&mut self) -> u32 {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs
    }

    pub fn expired(&self) -> bool {
        self.remaining_secs == 0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
