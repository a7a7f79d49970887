//! High score leaderboard
//!
//! Lives only as long as the session; nothing is written to disk.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Survival score
    pub score: u64,
    /// Collectible bonus
    pub bonus: u64,
    /// Run number within the session (1-based)
    pub run: u32,
}

impl HighScoreEntry {
    pub fn total(&self) -> u64 {
        self.score + self.bonus
    }
}

/// High score leaderboard, ranked by total (score + bonus)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a total qualifies for the leaderboard
    pub fn qualifies(&self, total: u64) -> bool {
        if total == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if total beats the lowest entry
        self.entries.last().map(|e| total > e.total()).unwrap_or(true)
    }

    /// Get the rank a total would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, total: u64) -> Option<usize> {
        if !self.qualifies(total) {
            return None;
        }
        let rank = self.entries.iter().position(|e| total > e.total());
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, bonus: u64, run: u32) -> Option<usize> {
        let entry = HighScoreEntry { score, bonus, run };
        let total = entry.total();
        if !self.qualifies(total) {
            return None;
        }

        // Find insertion point (sorted descending by total)
        let pos = self.entries.iter().position(|e| total > e.total());
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the best total (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_descending() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(100, 0, 1), Some(1));
        assert_eq!(hs.add_score(300, 20, 2), Some(1));
        assert_eq!(hs.add_score(200, 0, 3), Some(2));
        assert_eq!(hs.top_score(), Some(320));
        let runs: Vec<u32> = hs.entries.iter().map(|e| e.run).collect();
        assert_eq!(runs, vec![2, 3, 1]);
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut hs = HighScores::new();
        assert_eq!(hs.add_score(0, 0, 1), None);
        assert!(hs.is_empty());
    }

    #[test]
    fn test_full_board_trims_and_rejects_low() {
        let mut hs = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            hs.add_score(i * 10, 0, i as u32);
        }
        assert_eq!(hs.potential_rank(5), None);
        assert_eq!(hs.add_score(5, 0, 99), None);
        assert_eq!(hs.potential_rank(1000), Some(1));
        assert_eq!(hs.add_score(1000, 0, 100), Some(1));
        assert_eq!(hs.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(hs.entries.last().map(|e| e.score), Some(20));
    }
}
