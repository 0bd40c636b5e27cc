//! Aggregation engine: streaming tallies over a filtered match list
//!
//! One linear pass turns the match history into per-corporation, per-card,
//! per-milestone and per-award tallies plus per-player breakdowns. All
//! tallies are rebuilt from scratch on every pass; nothing is persisted.

pub mod aggregate;
pub mod filter;
pub mod sort;
pub mod tally;

// Re-export commonly used types
pub use aggregate::{aggregate, AggregateReport, PlayerBreakdown};
pub use filter::filter_matches;
pub use sort::{sorted_entries, SortKey};
pub use tally::{KeyTally, TallyTable};
