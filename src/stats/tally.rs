//! Generic per-key tally shared by every aggregation axis
//!
//! Corporations, cards, milestones and awards all reduce to the same
//! counters keyed by name, so one table type serves all four.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counters for one key (a corporation, card, milestone or award name)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTally {
    /// Times the key appeared (played / claimed / funded)
    pub played: u64,
    /// Times the key appeared on the winning seat
    pub wins: u64,
    /// Sum of match generations across appearances
    pub generations_sum: u64,
}

impl KeyTally {
    /// Wins over appearances; `None` when the key never appeared.
    pub fn win_rate(&self) -> Option<f64> {
        (self.played > 0).then(|| self.wins as f64 / self.played as f64)
    }

    /// Mean match length in generations; `None` when the key never
    /// appeared.
    pub fn average_generations(&self) -> Option<f64> {
        (self.played > 0).then(|| self.generations_sum as f64 / self.played as f64)
    }

    /// Appearances over the total filtered match count; `None` for an
    /// empty match list.
    pub fn pick_rate(&self, total_matches: usize) -> Option<f64> {
        (total_matches > 0).then(|| self.played as f64 / total_matches as f64)
    }
}

/// Tallies keyed by name, built in one pass over the filtered matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyTable {
    entries: HashMap<String, KeyTally>,
}

impl TallyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one appearance of `key`.
    pub fn record(&mut self, key: &str, won: bool, generations: u32) {
        let tally = self.entries.entry(key.to_string()).or_default();
        tally.played += 1;
        if won {
            tally.wins += 1;
        }
        tally.generations_sum += u64::from(generations);
    }

    pub fn get(&self, key: &str) -> Option<&KeyTally> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &KeyTally)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
