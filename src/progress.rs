//! Level completion record
//!
//! Kept in memory for the life of a session; nothing is written to disk.

use serde::{Deserialize, Serialize};

/// Completion state of one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub completed: bool,
    /// Fastest clear in ticks
    pub best_ticks: Option<u64>,
}

/// Completion flags and best times for every level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub levels: Vec<LevelRecord>,
}

impl Progress {
    /// Create an empty record for `level_count` levels
    pub fn new(level_count: usize) -> Self {
        Self {
            levels: vec![LevelRecord::default(); level_count],
        }
    }

    /// Mark a level complete. Returns true if this is a new best time.
    pub fn record(&mut self, level: usize, ticks: u64) -> bool {
        let Some(entry) = self.levels.get_mut(level) else {
            log::warn!("Ignoring completion for unknown level {}", level);
            return false;
        };
        entry.completed = true;

        let improved = entry.best_ticks.is_none_or(|best| ticks < best);
        if improved {
            entry.best_ticks = Some(ticks);
        }
        improved
    }

    pub fn is_completed(&self, level: usize) -> bool {
        self.levels.get(level).is_some_and(|l| l.completed)
    }

    pub fn best_ticks(&self, level: usize) -> Option<u64> {
        self.levels.get(level).and_then(|l| l.best_ticks)
    }

    /// Number of levels cleared at least once
    pub fn completed_count(&self) -> usize {
        self.levels.iter().filter(|l| l.completed).count()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.levels.fill(LevelRecord::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_completion_is_best() {
        let mut progress = Progress::new(3);
        assert!(!progress.is_completed(1));
        assert!(progress.record(1, 900));
        assert!(progress.is_completed(1));
        assert_eq!(progress.best_ticks(1), Some(900));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn test_only_faster_runs_improve() {
        let mut progress = Progress::new(3);
        progress.record(0, 500);
        assert!(!progress.record(0, 600));
        assert!(!progress.record(0, 500));
        assert!(progress.record(0, 450));
        assert_eq!(progress.best_ticks(0), Some(450));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut progress = Progress::new(2);
        assert!(!progress.record(7, 10));
        assert!(!progress.is_completed(7));
        assert_eq!(progress.completed_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut progress = Progress::new(2);
        progress.record(0, 10);
        progress.record(1, 20);
        progress.clear();
        assert_eq!(progress.completed_count(), 0);
        assert_eq!(progress.best_ticks(1), None);
        assert_eq!(progress.level_count(), 2);
    }
}
