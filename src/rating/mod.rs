//! Rating system built on pairwise Elo comparisons
//!
//! This module replays the full match history in chronological order and
//! derives a skill rating per player, using the skillratings crate for the
//! logistic expected-score curve.

pub mod elo;

// Re-export commonly used types
pub use elo::{PairwiseEloConfig, PairwiseEloEngine, RatedMatch, RatedSeat, RatingOutcome};
