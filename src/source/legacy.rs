//! Conversion of the older per-game export format into canonical records
//!
//! Early match history was kept as one raw game export per file. Those
//! exports carry no creation timestamp of their own, only the server's
//! purge time, which trails creation by a fixed 17 days. The first tableau
//! entry is the corporation, the remainder are the cards played. Legacy
//! exports know nothing about milestones, awards or a winner index.

use crate::error::{Result, StatsError};
use crate::types::{MatchRecord, Participant};
use serde::Deserialize;
use tracing::warn;

/// Offset between a game's creation and its scheduled purge
const PURGE_OFFSET_MS: i64 = 17 * 24 * 60 * 60 * 1000;

/// One game in the older export format
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyGameExport {
    pub game: LegacyGame,
    pub players: Vec<LegacyPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGame {
    pub generation: u32,
    pub expected_purge_time_ms: i64,
    pub game_options: LegacyGameOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGameOptions {
    pub board_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlayer {
    pub id: String,
    pub name: String,
    pub tableau: Vec<LegacyCard>,
    pub victory_points_breakdown: LegacyVictoryPoints,
    pub timer: LegacyTimer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCard {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyVictoryPoints {
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTimer {
    pub started_at: i64,
}

/// Convert one legacy export into a canonical match record.
///
/// Victory-point totals double as the tie-break score since the old format
/// never recorded one. The winner index stays absent; the aggregation pass
/// treats such records as plays without win attribution.
pub fn convert_legacy_game(export: &LegacyGameExport) -> Result<MatchRecord> {
    if export.players.is_empty() {
        return Err(StatsError::MalformedRecord {
            game_id: String::new(),
            reason: "legacy export has no players".to_string(),
        }
        .into());
    }

    let created_time_ms = export.game.expected_purge_time_ms - PURGE_OFFSET_MS;
    let duration_ms = export.players[0].timer.started_at - created_time_ms;

    let players = export
        .players
        .iter()
        .map(|p| {
            let corp = p.tableau.first().map(|c| c.name.clone()).ok_or_else(|| {
                StatsError::MalformedRecord {
                    game_id: String::new(),
                    reason: format!("legacy player {} has an empty tableau", p.name),
                }
            })?;

            Ok(Participant {
                id: p.id.clone(),
                name: p.name.clone(),
                corp,
                // First tableau entry is the corporation, not a card
                cards: p.tableau[1..].iter().map(|c| c.name.clone()).collect(),
                score: p.victory_points_breakdown.total,
                tie_break_score: p.victory_points_breakdown.total as f64,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MatchRecord {
        game_id: String::new(),
        created_time_ms,
        duration_ms,
        generations: export.game.generation,
        map: export.game.game_options.board_name.clone(),
        winner: None,
        players,
        claimed_milestones: vec![],
        funded_awards: vec![],
    })
}

/// Convert a batch of legacy exports, skipping the ones that cannot be
/// converted.
pub fn convert_legacy_games(exports: &[LegacyGameExport]) -> Vec<MatchRecord> {
    exports
        .iter()
        .filter_map(|export| match convert_legacy_game(export) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "skipping unconvertible legacy game");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{
        "game": {
            "generation": 9,
            "expectedPurgeTimeMs": 1601468800000,
            "gameOptions": {"boardName": "tharsis"}
        },
        "players": [
            {
                "id": "p-red",
                "name": "Howard",
                "tableau": [{"name": "Helion"}, {"name": "Birds"}, {"name": "Zeppelins"}],
                "victoryPointsBreakdown": {"total": 61},
                "timer": {"startedAt": 1600005200000, "sumElapsed": 3000000}
            },
            {
                "id": "p-green",
                "name": "Yvonne",
                "tableau": [{"name": "Thorgate"}],
                "victoryPointsBreakdown": {"total": 55},
                "timer": {"startedAt": 1600005200000, "sumElapsed": 2500000}
            }
        ]
    }"#;

    #[test]
    fn test_convert_legacy_export() {
        let export: LegacyGameExport = serde_json::from_str(EXPORT).unwrap();
        let record = convert_legacy_game(&export).unwrap();

        assert_eq!(record.created_time_ms, 1601468800000 - PURGE_OFFSET_MS);
        assert_eq!(
            record.duration_ms,
            1600005200000 - record.created_time_ms
        );
        assert_eq!(record.generations, 9);
        assert_eq!(record.map, "tharsis");
        assert!(record.winner.is_none());

        let howard = &record.players[0];
        assert_eq!(howard.corp, "Helion");
        assert_eq!(howard.cards, vec!["Birds", "Zeppelins"]);
        assert_eq!(howard.score, 61);
        assert_eq!(howard.tie_break_score, 61.0);

        // A tableau with only the corporation yields no cards
        assert!(record.players[1].cards.is_empty());
    }

    #[test]
    fn test_empty_tableau_is_malformed() {
        let mut export: LegacyGameExport = serde_json::from_str(EXPORT).unwrap();
        export.players[0].tableau.clear();
        assert!(convert_legacy_game(&export).is_err());
    }

    #[test]
    fn test_batch_conversion_skips_broken_exports() {
        let good: LegacyGameExport = serde_json::from_str(EXPORT).unwrap();
        let mut broken = good.clone();
        broken.players.clear();

        let records = convert_legacy_games(&[good, broken]);
        assert_eq!(records.len(), 1);
    }
}
