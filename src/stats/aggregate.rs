//! Single-pass aggregation over a (possibly filtered) match list

use crate::stats::tally::TallyTable;
use crate::types::{MatchRecord, PlayerName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-player usage counts across each aggregation axis, plus game and
/// win totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerBreakdown {
    pub games: u64,
    pub wins: u64,
    pub corps: HashMap<String, u64>,
    pub cards: HashMap<String, u64>,
    pub milestones: HashMap<String, u64>,
    pub awards: HashMap<String, u64>,
}

/// Everything one aggregation pass produces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Number of matches the pass consumed, the denominator for pick rates
    pub total_matches: usize,
    pub corps: TallyTable,
    pub cards: TallyTable,
    pub milestones: TallyTable,
    pub awards: TallyTable,
    pub players: HashMap<PlayerName, PlayerBreakdown>,
}

/// Build the full aggregate report in one linear pass.
///
/// Win attribution goes through the record's `winner` index; a record
/// whose index is missing or out of range contributes plays but no wins.
/// Milestone and award entries referencing an unknown participant id are
/// skipped without failing the pass.
pub fn aggregate(matches: &[MatchRecord]) -> AggregateReport {
    let mut report = AggregateReport {
        total_matches: matches.len(),
        ..Default::default()
    };

    for record in matches {
        let winner = record.winning_player();
        if winner.is_none() {
            warn!(
                game_id = %record.game_id,
                winner = ?record.winner,
                "winner index missing or out of range, skipping win attribution"
            );
        }
        let winner_id = winner.map(|p| p.id.as_str());

        for player in &record.players {
            let won = winner_id == Some(player.id.as_str());
            let name = player.canonical_name();

            report.corps.record(&player.corp, won, record.generations);

            let breakdown = report.players.entry(name.to_string()).or_default();
            breakdown.games += 1;
            if won {
                breakdown.wins += 1;
            }
            *breakdown.corps.entry(player.corp.clone()).or_default() += 1;

            for card in &player.cards {
                report.cards.record(card, won, record.generations);
                let breakdown = report.players.entry(name.to_string()).or_default();
                *breakdown.cards.entry(card.clone()).or_default() += 1;
            }
        }

        for entry in &record.claimed_milestones {
            match record.participant_by_id(&entry.player_id) {
                Some(player) => {
                    let won = winner_id == Some(player.id.as_str());
                    report.milestones.record(&entry.name, won, record.generations);
                    let breakdown = report
                        .players
                        .entry(player.canonical_name().to_string())
                        .or_default();
                    *breakdown.milestones.entry(entry.name.clone()).or_default() += 1;
                }
                None => warn!(
                    game_id = %record.game_id,
                    player_id = %entry.player_id,
                    milestone = %entry.name,
                    "milestone references unknown participant, skipping"
                ),
            }
        }

        for entry in &record.funded_awards {
            match record.participant_by_id(&entry.player_id) {
                Some(player) => {
                    let won = winner_id == Some(player.id.as_str());
                    report.awards.record(&entry.name, won, record.generations);
                    let breakdown = report
                        .players
                        .entry(player.canonical_name().to_string())
                        .or_default();
                    *breakdown.awards.entry(entry.name.clone()).or_default() += 1;
                }
                None => warn!(
                    game_id = %record.game_id,
                    player_id = %entry.player_id,
                    award = %entry.name,
                    "award references unknown participant, skipping"
                ),
            }
        }
    }

    debug!(
        matches = report.total_matches,
        corps = report.corps.len(),
        cards = report.cards.len(),
        players = report.players.len(),
        "aggregation pass complete"
    );

    report
}
