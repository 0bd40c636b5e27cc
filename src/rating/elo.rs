//! Pairwise Elo rating engine for matches with more than two participants
//!
//! Every unordered pair of seats in a match is treated as a head-to-head
//! Elo comparison, with the K-factor divided by `participants - 1` so a
//! match distributes a comparable total rating exchange regardless of its
//! size. All pairs read the rating snapshot taken at the start of the
//! match; accumulated deltas are applied together once the match is done.

use crate::error::Result;
use crate::types::{MatchRecord, PlayerName};
use serde::{Deserialize, Serialize};
use skillratings::elo::{expected_score, EloRating};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Configuration for the pairwise Elo engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseEloConfig {
    /// Base K-factor, scaled down to `base_k / (participants - 1)` per match
    pub base_k: f64,
    /// Rating assigned to a player on first appearance
    pub initial_rating: f64,
}

impl Default for PairwiseEloConfig {
    fn default() -> Self {
        Self {
            base_k: 32.0,
            initial_rating: 1000.0,
        }
    }
}

impl PairwiseEloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.base_k <= 0.0 {
            return Err(crate::error::StatsError::ConfigurationError {
                message: "Base K-factor must be positive".to_string(),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(crate::error::StatsError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Rating view of one seat in a rated match, parallel to
/// `MatchRecord::players`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedSeat {
    /// Canonical (trimmed) player name
    pub name: PlayerName,
    /// Rating entering the match; 1000 for a first appearance
    pub rating_before: f64,
    /// Signed rating change this match produced for this seat
    pub delta: f64,
}

impl RatedSeat {
    /// Rating immediately after the match was applied.
    pub fn rating_after(&self) -> f64 {
        self.rating_before + self.delta
    }
}

/// A match record plus the per-seat rating fields the replay produced.
/// The original record is carried unchanged; the input list is never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedMatch {
    pub record: MatchRecord,
    pub seats: Vec<RatedSeat>,
}

/// Result of replaying a match history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingOutcome {
    /// Final rating per canonical player name
    pub ratings: HashMap<PlayerName, f64>,
    /// One rated view per input match, oldest first
    pub matches: Vec<RatedMatch>,
}

impl RatingOutcome {
    /// Final rating for a player, if they appear in the history.
    pub fn rating_of(&self, name: &str) -> Option<f64> {
        self.ratings.get(name.trim()).copied()
    }

    /// Ratings sorted highest first, deterministic on ties.
    pub fn standings(&self) -> Vec<(&str, f64)> {
        let mut standings: Vec<(&str, f64)> = self
            .ratings
            .iter()
            .map(|(name, rating)| (name.as_str(), *rating))
            .collect();
        standings.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        standings
    }
}

/// Pairwise Elo rating engine
#[derive(Debug, Clone)]
pub struct PairwiseEloEngine {
    config: PairwiseEloConfig,
}

impl PairwiseEloEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: PairwiseEloConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Replay a match history and derive final ratings plus per-match
    /// rating views.
    ///
    /// The stats source delivers the history newest first, so the replay
    /// walks the slice in reverse to process matches oldest first. The
    /// input is borrowed and left untouched; callers may replay the same
    /// slice any number of times and get identical results.
    pub fn replay(&self, history: &[MatchRecord]) -> RatingOutcome {
        let mut ratings: HashMap<PlayerName, f64> = HashMap::new();
        let mut matches = Vec::with_capacity(history.len());

        for record in history.iter().rev() {
            matches.push(self.apply_match(record, &mut ratings));
        }

        debug!(
            matches = matches.len(),
            players = ratings.len(),
            "rating replay complete"
        );

        RatingOutcome { ratings, matches }
    }

    /// Apply a single match to the rating map and produce its rated view.
    fn apply_match(
        &self,
        record: &MatchRecord,
        ratings: &mut HashMap<PlayerName, f64>,
    ) -> RatedMatch {
        let players = &record.players;
        let count = players.len();

        // Snapshot at match start: pairs within this match never observe
        // each other's deltas.
        let before: Vec<f64> = players
            .iter()
            .map(|p| {
                ratings
                    .get(p.canonical_name())
                    .copied()
                    .unwrap_or(self.config.initial_rating)
            })
            .collect();

        let mut deltas = vec![0.0; count];

        if count < 2 {
            // K / (count - 1) would divide by zero; no rating exchange
            warn!(
                game_id = %record.game_id,
                participants = count,
                "match has fewer than 2 participants, skipping rating exchange"
            );
        } else {
            let adjusted_k = self.config.base_k / (count - 1) as f64;

            for i in 0..count {
                for j in (i + 1)..count {
                    // Equal tie-break scores are a declared tie: no exchange
                    if players[i].tie_break_score == players[j].tie_break_score {
                        continue;
                    }

                    let (expected_i, expected_j) = expected_score(
                        &EloRating { rating: before[i] },
                        &EloRating { rating: before[j] },
                    );

                    let (actual_i, actual_j) =
                        if players[i].tie_break_score > players[j].tie_break_score {
                            (1.0, 0.0)
                        } else {
                            (0.0, 1.0)
                        };

                    deltas[i] += adjusted_k * (actual_i - expected_i);
                    deltas[j] += adjusted_k * (actual_j - expected_j);
                }
            }
        }

        // Apply all accumulated deltas at once
        for (i, p) in players.iter().enumerate() {
            let entry = ratings
                .entry(p.canonical_name().to_string())
                .or_insert(self.config.initial_rating);
            *entry += deltas[i];
        }

        let seats = players
            .iter()
            .enumerate()
            .map(|(i, p)| RatedSeat {
                name: p.canonical_name().to_string(),
                rating_before: before[i],
                delta: deltas[i],
            })
            .collect();

        RatedMatch {
            record: record.clone(),
            seats,
        }
    }
}

impl Default for PairwiseEloEngine {
    fn default() -> Self {
        Self {
            config: PairwiseEloConfig::default(),
        }
    }
}
