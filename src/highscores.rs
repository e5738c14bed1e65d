//! High score tracking
//!
//! Lives for the process lifetime only. The best score never decreases; the
//! recent run list keeps the last few results for display.

use serde::{Deserialize, Serialize};

/// Maximum number of recent runs to keep
pub const MAX_RECENT_RUNS: usize = 10;

/// Result of a single finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Pipes passed
    pub score: u32,
    /// Frames survived
    pub frames: u64,
}

/// Best score plus recent runs (newest first)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    best: u32,
    recent: Vec<RunResult>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score seen so far
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Recent runs, newest first
    pub fn recent(&self) -> &[RunResult] {
        &self.recent
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u32, frames: u64) -> bool {
        self.recent.insert(0, RunResult { score, frames });
        self.recent.truncate(MAX_RECENT_RUNS);

        if self.qualifies(score) {
            self.best = score;
            log::info!("New best score: {}", score);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_is_monotonic() {
        let mut hs = HighScores::new();
        assert!(hs.record(5, 300));
        assert!(!hs.record(2, 100));
        assert_eq!(hs.best(), 5);
        assert!(hs.record(9, 900));
        assert!(!hs.record(9, 950));
        assert_eq!(hs.best(), 9);
    }

    #[test]
    fn test_zero_score_is_not_a_best() {
        let mut hs = HighScores::new();
        assert!(!hs.record(0, 40));
        assert_eq!(hs.best(), 0);
    }

    #[test]
    fn test_recent_runs_capped_newest_first() {
        let mut hs = HighScores::new();
        for i in 0..(MAX_RECENT_RUNS as u32 + 3) {
            hs.record(i, i as u64 * 10);
        }
        assert_eq!(hs.recent().len(), MAX_RECENT_RUNS);
        assert_eq!(hs.recent()[0].score, MAX_RECENT_RUNS as u32 + 2);
    }
}
