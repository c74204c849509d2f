//! Full replay of the scoring pipeline from raw strokes.

use std::collections::HashMap;

use crate::models::{
    HoleStrokes, Pair, PairHandicap, PairHoleResult, PairKey, Player, PlayerHoleScore, PlayerId,
};

use super::{pair_hole_result, player_hole_scores, running_totals};

/// A fully re-derived result set.
#[derive(Debug, Clone, Default)]
pub struct Recalculated {
    pub pair_results: Vec<PairHoleResult>,
    pub player_scores: Vec<PlayerHoleScore>,
}

/// Replay every recorded hole through the scoring engine, from scratch.
///
/// Strokes are processed in ascending hole-number order regardless of input
/// order; each hole's totals fold over all strictly-prior holes. Holes with
/// no recorded strokes are simply absent from the output. The replay is a
/// pure function of its inputs, so re-running it over the same strokes
/// yields identical results, safe to invoke after any retroactive edit to
/// strokes, handicaps, or turbo holes.
pub fn recalculate(
    players: &[Player],
    hole_strokes: &[HoleStrokes],
    handicaps: &HashMap<PairKey, PairHandicap>,
    turbo_holes: &[u32],
    pairs: &[Pair],
) -> Recalculated {
    let mut sorted: Vec<&HoleStrokes> = hole_strokes.iter().collect();
    sorted.sort_by_key(|s| s.hole_number);

    let mut out = Recalculated::default();

    for strokes in sorted {
        let hole_number = strokes.hole_number;
        let is_turbo = turbo_holes.contains(&hole_number);

        for pair in pairs {
            let result = match handicaps.get(&pair.pair_key) {
                Some(handicap) => pair_hole_result(pair, hole_number, strokes, handicap, is_turbo),
                None => {
                    let neutral = PairHandicap::neutral(
                        pair.pair_key.clone(),
                        pair.player_a_id.clone(),
                        pair.player_b_id.clone(),
                    );
                    pair_hole_result(pair, hole_number, strokes, &neutral, is_turbo)
                }
            };
            out.pair_results.push(result);
        }

        let previous_totals = running_totals(&out.player_scores, hole_number.saturating_sub(1));
        let hole_scores =
            player_hole_scores(players, &out.pair_results, hole_number, &previous_totals);
        out.player_scores.extend(hole_scores);
    }

    out
}

/// Re-derive `running_total` on every score from the `hole_score` sums.
///
/// Output is grouped by player, each player's scores in hole order. Used to
/// repair stale intermediate totals after a non-latest hole was edited in
/// place.
pub fn rebuild_running_totals(player_scores: &[PlayerHoleScore]) -> Vec<PlayerHoleScore> {
    let mut by_player: Vec<(&PlayerId, Vec<&PlayerHoleScore>)> = Vec::new();
    for score in player_scores {
        match by_player.iter_mut().find(|(id, _)| *id == &score.player_id) {
            Some((_, scores)) => scores.push(score),
            None => by_player.push((&score.player_id, vec![score])),
        }
    }

    let mut result = Vec::with_capacity(player_scores.len());
    for (_, mut scores) in by_player {
        scores.sort_by_key(|s| s.hole_number);
        let mut total = 0;
        for score in scores {
            total += score.hole_score;
            result.push(PlayerHoleScore {
                running_total: total,
                ..score.clone()
            });
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerId;
    use crate::scoring::generate_pairs;

    fn roster(ids: &[&str]) -> Vec<Player> {
        ids.iter()
            .map(|id| Player::with_id(*id, id.to_uppercase()))
            .collect()
    }

    fn hole(hole_number: u32, strokes: &[(&str, u32)]) -> HoleStrokes {
        HoleStrokes::new(
            hole_number,
            strokes
                .iter()
                .map(|(id, s)| (PlayerId::from(*id), *s))
                .collect(),
        )
    }

    fn total_of(scores: &[PlayerHoleScore], id: &str, hole_number: u32) -> i32 {
        scores
            .iter()
            .find(|s| s.player_id == PlayerId::from(id) && s.hole_number == hole_number)
            .unwrap()
            .running_total
    }

    #[test]
    fn test_recalculate_processes_holes_in_order() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        // Input deliberately out of order.
        let strokes = vec![
            hole(3, &[("a", 5), ("b", 4)]),
            hole(1, &[("a", 3), ("b", 5)]),
            hole(2, &[("a", 4), ("b", 4)]),
        ];

        let out = recalculate(&players, &strokes, &HashMap::new(), &[], &pairs);

        assert_eq!(out.pair_results.len(), 3);
        assert_eq!(out.player_scores.len(), 6);
        // a: +1, 0, -1 -> running totals 1, 1, 0
        assert_eq!(total_of(&out.player_scores, "a", 1), 1);
        assert_eq!(total_of(&out.player_scores, "a", 2), 1);
        assert_eq!(total_of(&out.player_scores, "a", 3), 0);
    }

    #[test]
    fn test_recalculate_idempotent() {
        let players = roster(&["a", "b", "c"]);
        let pairs = generate_pairs(&players);
        let strokes = vec![
            hole(1, &[("a", 3), ("b", 4), ("c", 5)]),
            hole(2, &[("a", 5), ("b", 4), ("c", 3)]),
        ];

        let first = recalculate(&players, &strokes, &HashMap::new(), &[2], &pairs);
        let second = recalculate(&players, &strokes, &HashMap::new(), &[2], &pairs);

        assert_eq!(first.pair_results, second.pair_results);
        assert_eq!(first.player_scores, second.player_scores);
    }

    #[test]
    fn test_recalculate_applies_turbo_holes() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        let strokes = vec![hole(2, &[("a", 3), ("b", 5)])];

        let out = recalculate(&players, &strokes, &HashMap::new(), &[2], &pairs);
        assert_eq!(out.pair_results[0].player_a_score, 2);
        assert!(out.pair_results[0].is_turbo);
    }

    #[test]
    fn test_recalculate_applies_handicaps() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        let handicap = PairHandicap {
            pair_key: pairs[0].pair_key.clone(),
            player_a_id: pairs[0].player_a_id.clone(),
            player_b_id: pairs[0].player_b_id.clone(),
            value: 1,
            handicap_holes: vec![1],
        };
        let handicaps = HashMap::from([(pairs[0].pair_key.clone(), handicap)]);
        let strokes = vec![hole(1, &[("a", 4), ("b", 5)])];

        let out = recalculate(&players, &strokes, &handicaps, &[], &pairs);
        // B receives a stroke: 4 vs 4, tie.
        assert_eq!(out.pair_results[0].player_a_score, 0);
    }

    #[test]
    fn test_recalculate_missing_handicap_defaults_neutral() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        let strokes = vec![hole(1, &[("a", 4), ("b", 5)])];

        let out = recalculate(&players, &strokes, &HashMap::new(), &[], &pairs);
        assert_eq!(out.pair_results[0].player_a_score, 1);
    }

    #[test]
    fn test_recalculate_edit_ripples_forward() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        let original = vec![hole(1, &[("a", 3), ("b", 5)]), hole(2, &[("a", 3), ("b", 5)])];
        let edited = vec![hole(1, &[("a", 5), ("b", 3)]), hole(2, &[("a", 3), ("b", 5)])];

        let before = recalculate(&players, &original, &HashMap::new(), &[], &pairs);
        let after = recalculate(&players, &edited, &HashMap::new(), &[], &pairs);

        assert_eq!(total_of(&before.player_scores, "a", 2), 2);
        // Hole 1 flipped, so hole 2's running total moves even though its
        // strokes did not change.
        assert_eq!(total_of(&after.player_scores, "a", 2), 0);
    }

    #[test]
    fn test_recalculate_empty_strokes() {
        let players = roster(&["a", "b"]);
        let pairs = generate_pairs(&players);
        let out = recalculate(&players, &[], &HashMap::new(), &[], &pairs);
        assert!(out.pair_results.is_empty());
        assert!(out.player_scores.is_empty());
    }

    #[test]
    fn test_rebuild_running_totals() {
        let stale = vec![
            PlayerHoleScore {
                player_id: "a".into(),
                hole_number: 2,
                hole_score: -1,
                running_total: 99,
            },
            PlayerHoleScore {
                player_id: "a".into(),
                hole_number: 1,
                hole_score: 1,
                running_total: 99,
            },
            PlayerHoleScore {
                player_id: "b".into(),
                hole_number: 1,
                hole_score: -1,
                running_total: 99,
            },
        ];

        let rebuilt = rebuild_running_totals(&stale);

        assert_eq!(total_of(&rebuilt, "a", 1), 1);
        assert_eq!(total_of(&rebuilt, "a", 2), 0);
        assert_eq!(total_of(&rebuilt, "b", 1), -1);
    }

    #[test]
    fn test_rebuild_running_totals_empty() {
        assert!(rebuild_running_totals(&[]).is_empty());
    }
}
