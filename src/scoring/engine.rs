//! Hole result calculation and per-player aggregation.
//!
//! Everything here is a pure function over in-memory values: no I/O, no
//! state, total over well-typed inputs.

use std::collections::HashMap;

use crate::models::{
    HoleStrokes, Pair, PairHandicap, PairHoleResult, Player, PlayerHoleScore, PlayerId,
};

/// Handicap adjustment for one hole of a pair, as `(player_a, player_b)`
/// deltas on adjusted strokes.
///
/// The receiving player plays the hole one stroke better: `value > 0` means
/// player A gives, so player B gets -1; `value < 0` the reverse. A zero
/// value never adjusts, even if the hole is listed.
pub fn handicap_adjustment(handicap: &PairHandicap, hole_number: u32) -> (i32, i32) {
    if !handicap.handicap_holes.contains(&hole_number) {
        return (0, 0);
    }

    match handicap.value {
        v if v > 0 => (0, -1),
        v if v < 0 => (-1, 0),
        _ => (0, 0),
    }
}

/// Score one pair on one hole.
///
/// Fewer adjusted strokes wins (+1/-1, 0 on a tie), doubled on a turbo hole.
/// Player B's score is derived by negating player A's (never recomputed),
/// so each result is zero-sum by construction. A player with no stroke
/// entry is treated as having played 0 strokes.
pub fn pair_hole_result(
    pair: &Pair,
    hole_number: u32,
    strokes: &HoleStrokes,
    handicap: &PairHandicap,
    is_turbo: bool,
) -> PairHoleResult {
    let player_a_strokes = strokes.strokes_for(&pair.player_a_id);
    let player_b_strokes = strokes.strokes_for(&pair.player_b_id);

    let (adj_a, adj_b) = handicap_adjustment(handicap, hole_number);
    let player_a_adjusted = player_a_strokes as i32 + adj_a;
    let player_b_adjusted = player_b_strokes as i32 + adj_b;

    let base = match player_a_adjusted.cmp(&player_b_adjusted) {
        std::cmp::Ordering::Less => 1,
        std::cmp::Ordering::Greater => -1,
        std::cmp::Ordering::Equal => 0,
    };

    let multiplier = if is_turbo { 2 } else { 1 };
    let player_a_score = base * multiplier;

    PairHoleResult {
        pair_key: pair.pair_key.clone(),
        hole_number,
        player_a_id: pair.player_a_id.clone(),
        player_b_id: pair.player_b_id.clone(),
        player_a_strokes,
        player_b_strokes,
        player_a_adjusted,
        player_b_adjusted,
        player_a_score,
        player_b_score: -player_a_score,
        is_turbo,
    }
}

/// Each player's net score for one hole: the sum of their signed scores
/// across every pair they belong to, with the running total threaded from
/// `previous_totals` (0 when absent).
pub fn player_hole_scores(
    players: &[Player],
    pair_results: &[PairHoleResult],
    hole_number: u32,
    previous_totals: &HashMap<PlayerId, i32>,
) -> Vec<PlayerHoleScore> {
    players
        .iter()
        .map(|player| {
            let hole_score: i32 = pair_results
                .iter()
                .filter(|r| r.hole_number == hole_number)
                .filter_map(|r| r.score_for(&player.id))
                .sum();

            PlayerHoleScore {
                player_id: player.id.clone(),
                hole_number,
                hole_score,
                running_total: previous_totals.get(&player.id).copied().unwrap_or(0) + hole_score,
            }
        })
        .collect()
}

/// Whether the given hole scores sum to exactly zero.
///
/// Sums `hole_score`, not `running_total`. A failure indicates a scoring
/// defect; callers report it but still apply the result.
pub fn verify_zero_sum(scores: &[PlayerHoleScore]) -> bool {
    scores.iter().map(|s| s.hole_score).sum::<i32>() == 0
}

/// Cumulative score per player over all holes up to and including
/// `up_to_hole`. Players with no scores in range are simply absent.
pub fn running_totals(scores: &[PlayerHoleScore], up_to_hole: u32) -> HashMap<PlayerId, i32> {
    let mut totals: HashMap<PlayerId, i32> = HashMap::new();
    for score in scores {
        if score.hole_number <= up_to_hole {
            *totals.entry(score.player_id.clone()).or_insert(0) += score.hole_score;
        }
    }
    totals
}
