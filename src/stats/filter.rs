//! Selected-player filtering applied before aggregation
//!
//! Ratings always use the unfiltered history; only the aggregation pass
//! consumes the filtered list.

use crate::types::MatchRecord;
use std::collections::HashSet;

/// Keep the matches where every selected name appears among the trimmed
/// participant names. An empty selection keeps the full list.
pub fn filter_matches(matches: &[MatchRecord], selected: &HashSet<String>) -> Vec<MatchRecord> {
    if selected.is_empty() {
        return matches.to_vec();
    }

    matches
        .iter()
        .filter(|record| {
            let present: HashSet<&str> = record
                .players
                .iter()
                .map(|p| p.canonical_name())
                .collect();
            selected.iter().all(|name| present.contains(name.trim()))
        })
        .cloned()
        .collect()
}
