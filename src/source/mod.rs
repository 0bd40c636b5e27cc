//! Match history sources
//!
//! The engines never perform I/O themselves; a source is awaited exactly
//! once per run and hands over the full history as an in-memory list.

pub mod file;
pub mod legacy;

// Re-export commonly used types
pub use file::{FileMatchSource, StaticMatchSource};
pub use legacy::{convert_legacy_games, LegacyGameExport};

use crate::error::Result;
use crate::types::MatchRecord;
use async_trait::async_trait;

/// Supplies the match record list both engines consume
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Fetch the full match history, newest first as the upstream stats
    /// endpoint delivers it.
    async fn fetch_matches(&self) -> Result<Vec<MatchRecord>>;
}
