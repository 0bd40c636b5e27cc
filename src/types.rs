//! Canonical match record types consumed by the rating and aggregation engines

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Trimmed display name identifying a player across matches
pub type PlayerName = String;

/// One completed multiplayer match as delivered by the stats source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Opaque identifier, only used for external linking
    #[serde(default)]
    pub game_id: String,
    pub created_time_ms: i64,
    pub duration_ms: i64,
    /// Number of rounds played
    pub generations: u32,
    /// Board variant identifier
    #[serde(default)]
    pub map: String,
    /// Seat index of the declared winner; absent in malformed records
    #[serde(default)]
    pub winner: Option<usize>,
    pub players: Vec<Participant>,
    #[serde(default)]
    pub claimed_milestones: Vec<PlacedEntry>,
    #[serde(default)]
    pub funded_awards: Vec<PlacedEntry>,
}

impl MatchRecord {
    /// The participant the `winner` index points at, if the index is valid.
    pub fn winning_player(&self) -> Option<&Participant> {
        self.winner.and_then(|index| self.players.get(index))
    }

    /// Look up a participant by the in-match id used by milestone and
    /// award entries.
    pub fn participant_by_id(&self, id: &str) -> Option<&Participant> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Creation time as a UTC datetime, if the millisecond value is
    /// representable.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_time_ms).single()
    }
}

/// One player's seat and recorded outcome within a single match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Identifier unique within the match, cross-referenced by `winner`,
    /// `claimedMilestones` and `fundedAwards`
    pub id: String,
    pub name: String,
    /// Corporation played this match
    pub corp: String,
    /// Cards played; duplicates possible, each occurrence counts
    #[serde(default)]
    pub cards: Vec<String>,
    /// Final victory-point total
    pub score: i64,
    /// Secondary score used for pairwise outcome; equal values are a tie
    #[serde(default)]
    pub tie_break_score: f64,
}

impl Participant {
    /// Display name with surrounding whitespace removed. Upstream data
    /// contains trailing-space-corrupted names that would otherwise split
    /// one player into two; every name comparison goes through this.
    pub fn canonical_name(&self) -> &str {
        self.name.trim()
    }
}

/// A milestone claimed or an award funded during a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedEntry {
    pub name: String,
    pub player_id: String,
}
