//! Error types for the stats engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate. Problems local to a single match record
//! are logged and skipped rather than surfaced through these types; only
//! structural failures become errors.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific stats-engine failures
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("match history is not a sequence of records: {message}")]
    InvalidMatchHistory { message: String },

    #[error("malformed match record {game_id}: {reason}")]
    MalformedRecord { game_id: String, reason: String },

    #[error("rating computation failed: {reason}")]
    RatingComputationFailed { reason: String },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("match source unavailable: {message}")]
    SourceUnavailable { message: String },
}
