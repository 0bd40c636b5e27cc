//! Property tests for the rating engine

use mars_stats::rating::PairwiseEloEngine;
use mars_stats::types::{MatchRecord, Participant};
use proptest::prelude::*;

/// Build a match from per-seat tie-break scores. Seat names repeat across
/// matches so histories exercise returning players.
fn build_match(index: usize, scores: &[u32]) -> MatchRecord {
    let players = scores
        .iter()
        .enumerate()
        .map(|(seat, &score)| Participant {
            id: format!("seat-{}", seat),
            name: format!("Player{}", (index + seat) % 6),
            corp: "Helion".to_string(),
            cards: vec![],
            score: i64::from(score),
            tie_break_score: f64::from(score),
        })
        .collect();

    MatchRecord {
        game_id: format!("game-{}", index),
        created_time_ms: index as i64 * 1000,
        duration_ms: 0,
        generations: 10,
        map: "tharsis".to_string(),
        winner: Some(0),
        players,
        claimed_milestones: vec![],
        funded_awards: vec![],
    }
}

fn arb_history() -> impl Strategy<Value = Vec<MatchRecord>> {
    prop::collection::vec(prop::collection::vec(0u32..100, 2..=5), 1..12).prop_map(|games| {
        games
            .iter()
            .enumerate()
            .map(|(index, scores)| build_match(index, scores))
            .collect()
    })
}

proptest! {
    /// Every match is a zero-sum exchange; a tied pair simply contributes
    /// nothing to either side.
    #[test]
    fn replay_is_zero_sum_per_match(history in arb_history()) {
        let outcome = PairwiseEloEngine::default().replay(&history);
        for rated in &outcome.matches {
            let total: f64 = rated.seats.iter().map(|s| s.delta).sum();
            prop_assert!(total.abs() < 1e-6);
        }
    }

    /// Replaying an unmutated list twice yields identical outcomes.
    #[test]
    fn replay_is_deterministic(history in arb_history()) {
        let engine = PairwiseEloEngine::default();
        let first = engine.replay(&history);
        let second = engine.replay(&history);

        prop_assert_eq!(&first.ratings, &second.ratings);
        for (a, b) in first.matches.iter().zip(second.matches.iter()) {
            for (sa, sb) in a.seats.iter().zip(b.seats.iter()) {
                prop_assert_eq!(sa.rating_before, sb.rating_before);
                prop_assert_eq!(sa.delta, sb.delta);
            }
        }
    }

    /// Ratings stay finite no matter what the history contains.
    #[test]
    fn ratings_stay_finite(history in arb_history()) {
        let outcome = PairwiseEloEngine::default().replay(&history);
        for rating in outcome.ratings.values() {
            prop_assert!(rating.is_finite());
        }
    }
}
