//! Mars Stats - rating and aggregation engine for multiplayer match history
//!
//! This crate replays a history of completed board-game matches to derive
//! pairwise Elo skill ratings per player, and aggregates the same history
//! into per-corporation, per-card, per-milestone and per-award tallies for
//! a viewer to display.

pub mod config;
pub mod error;
pub mod rating;
pub mod source;
pub mod stats;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, StatsError};
pub use types::*;

// Re-export key components
pub use rating::{PairwiseEloEngine, RatingOutcome};
pub use source::MatchSource;
pub use stats::{aggregate, filter_matches, AggregateReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
