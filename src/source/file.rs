//! File-backed match source
//!
//! Stands in for the remote stats endpoint: the history is a JSON document
//! that has already been fetched and saved to disk. Anything that is not a
//! sequence of match records is a structural failure and aborts the run.

use crate::error::{Result, StatsError};
use crate::source::MatchSource;
use crate::types::MatchRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

/// The stats endpoint wraps the record array in a `data` envelope; plain
/// arrays are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryDocument {
    Enveloped { data: Vec<MatchRecord> },
    Bare(Vec<MatchRecord>),
}

impl HistoryDocument {
    fn into_matches(self) -> Vec<MatchRecord> {
        match self {
            HistoryDocument::Enveloped { data } => data,
            HistoryDocument::Bare(matches) => matches,
        }
    }
}

/// Match source reading a JSON history document from disk
#[derive(Debug, Clone)]
pub struct FileMatchSource {
    path: PathBuf,
}

impl FileMatchSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MatchSource for FileMatchSource {
    async fn fetch_matches(&self) -> Result<Vec<MatchRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StatsError::SourceUnavailable {
                message: format!("{}: {}", self.path.display(), e),
            }
        })?;

        let document: HistoryDocument =
            serde_json::from_str(&raw).map_err(|e| StatsError::InvalidMatchHistory {
                message: e.to_string(),
            })?;

        let matches = document.into_matches();
        info!(
            count = matches.len(),
            path = %self.path.display(),
            "loaded match history"
        );

        Ok(matches)
    }
}

/// In-memory source for tests and benchmarks
#[derive(Debug, Clone, Default)]
pub struct StaticMatchSource {
    matches: Vec<MatchRecord>,
}

impl StaticMatchSource {
    pub fn new(matches: Vec<MatchRecord>) -> Self {
        Self { matches }
    }
}

#[async_trait]
impl MatchSource for StaticMatchSource {
    async fn fetch_matches(&self) -> Result<Vec<MatchRecord>> {
        Ok(self.matches.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const RECORD: &str = r#"{
        "gameId": "g1",
        "createdTimeMs": 1700000000000,
        "durationMs": 60000,
        "generations": 10,
        "map": "tharsis",
        "winner": 0,
        "players": [
            {"id": "a", "name": "Howard", "corp": "Helion", "score": 60, "tieBreakScore": 60},
            {"id": "b", "name": "Yvonne", "corp": "Thorgate", "score": 55, "tieBreakScore": 55}
        ]
    }"#;

    #[tokio::test]
    async fn test_reads_bare_array() {
        let file = write_temp(&format!("[{}]", RECORD));
        let source = FileMatchSource::new(file.path());

        let matches = source.fetch_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].game_id, "g1");
    }

    #[tokio::test]
    async fn test_reads_data_envelope() {
        let file = write_temp(&format!(r#"{{"data": [{}]}}"#, RECORD));
        let source = FileMatchSource::new(file.path());

        let matches = source.fetch_matches().await.unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn test_non_sequence_document_is_fatal() {
        let file = write_temp(r#"{"unexpected": true}"#);
        let source = FileMatchSource::new(file.path());

        let err = source.fetch_matches().await.unwrap_err();
        assert!(err.to_string().contains("not a sequence"));
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let source = FileMatchSource::new("/nonexistent/history.json");
        let err = source.fetch_matches().await.unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    #[tokio::test]
    async fn test_static_source_returns_configured_matches() {
        let source = StaticMatchSource::new(vec![]);
        assert!(source.fetch_matches().await.unwrap().is_empty());
    }
}
