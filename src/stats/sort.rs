//! Pluggable orderings over finished tally tables
//!
//! Sorting is a pure transform over the aggregated counters; it carries no
//! state and can be re-applied whenever the viewer picks another column.

use crate::stats::tally::{KeyTally, TallyTable};
use std::cmp::Ordering;
use std::str::FromStr;

/// Comparison key for sorting aggregated entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Played,
    WinRate,
    AverageGenerations,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "played" | "count" => Ok(SortKey::Played),
            "win-rate" | "winrate" | "wins" => Ok(SortKey::WinRate),
            "generations" | "gens" => Ok(SortKey::AverageGenerations),
            other => Err(format!(
                "unknown sort key '{}', expected played, win-rate or generations",
                other
            )),
        }
    }
}

/// Entries of a tally table sorted by the chosen measure, highest first.
/// Ties break on the key name so repeated sorts are identical.
pub fn sorted_entries(table: &TallyTable, key: SortKey) -> Vec<(&str, &KeyTally)> {
    let mut entries: Vec<(&str, &KeyTally)> =
        table.iter().map(|(name, tally)| (name.as_str(), tally)).collect();

    entries.sort_by(|a, b| {
        measure_ordering(b.1, a.1, key).then_with(|| a.0.cmp(b.0))
    });

    entries
}

fn measure_ordering(a: &KeyTally, b: &KeyTally, key: SortKey) -> Ordering {
    match key {
        SortKey::Played => a.played.cmp(&b.played),
        SortKey::WinRate => compare_ratio(a.win_rate(), b.win_rate()),
        SortKey::AverageGenerations => {
            compare_ratio(a.average_generations(), b.average_generations())
        }
    }
}

// Undefined ratios sort below every defined one
fn compare_ratio(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TallyTable {
        let mut table = TallyTable::new();
        // Helion: 3 played, 1 win, avg 10 gens
        table.record("Helion", true, 10);
        table.record("Helion", false, 10);
        table.record("Helion", false, 10);
        // Thorgate: 2 played, 2 wins, avg 14 gens
        table.record("Thorgate", true, 14);
        table.record("Thorgate", true, 14);
        // Ecoline: 1 played, 0 wins, avg 8 gens
        table.record("Ecoline", false, 8);
        table
    }

    #[test]
    fn test_sort_by_played() {
        let table = table();
        let sorted = sorted_entries(&table, SortKey::Played);
        let names: Vec<&str> = sorted.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Helion", "Thorgate", "Ecoline"]);
    }

    #[test]
    fn test_sort_by_win_rate() {
        let table = table();
        let sorted = sorted_entries(&table, SortKey::WinRate);
        assert_eq!(sorted[0].0, "Thorgate");
        assert_eq!(sorted[2].0, "Ecoline");
    }

    #[test]
    fn test_sort_by_average_generations() {
        let table = table();
        let sorted = sorted_entries(&table, SortKey::AverageGenerations);
        let names: Vec<&str> = sorted.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Thorgate", "Helion", "Ecoline"]);
    }

    #[test]
    fn test_sort_is_repeatable() {
        let table = table();
        assert_eq!(
            sorted_entries(&table, SortKey::Played),
            sorted_entries(&table, SortKey::Played)
        );
    }

    #[test]
    fn test_ties_break_on_name() {
        let mut table = TallyTable::new();
        table.record("Zeta", true, 10);
        table.record("Alpha", true, 10);
        let sorted = sorted_entries(&table, SortKey::Played);
        assert_eq!(sorted[0].0, "Alpha");
        assert_eq!(sorted[1].0, "Zeta");
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("played".parse::<SortKey>().unwrap(), SortKey::Played);
        assert_eq!("win-rate".parse::<SortKey>().unwrap(), SortKey::WinRate);
        assert_eq!(
            "gens".parse::<SortKey>().unwrap(),
            SortKey::AverageGenerations
        );
        assert!("bogus".parse::<SortKey>().is_err());
    }
}
