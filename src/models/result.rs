//! Derived scoring results.

use serde::{Deserialize, Serialize};

use super::{PairKey, Player, PlayerId};

/// Outcome of one pair's head-to-head match on one hole.
///
/// `player_b_score` is always the exact negation of `player_a_score`, which
/// makes every pair result a zero-sum exchange by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairHoleResult {
    /// Canonical pair key
    pub pair_key: PairKey,

    /// 1-based hole number
    pub hole_number: u32,

    /// First player of the sorted pair
    pub player_a_id: PlayerId,

    /// Second player of the sorted pair
    pub player_b_id: PlayerId,

    /// Player A raw strokes
    pub player_a_strokes: u32,

    /// Player B raw strokes
    pub player_b_strokes: u32,

    /// Player A strokes after handicap adjustment
    pub player_a_adjusted: i32,

    /// Player B strokes after handicap adjustment
    pub player_b_adjusted: i32,

    /// +1/-1/0 for player A, doubled on a turbo hole
    pub player_a_score: i32,

    /// Exact negation of `player_a_score`
    pub player_b_score: i32,

    /// Whether the 2x turbo multiplier applied
    pub is_turbo: bool,
}

impl PairHoleResult {
    /// The signed score of the given player in this result, if they belong
    /// to the pair.
    pub fn score_for(&self, player_id: &PlayerId) -> Option<i32> {
        if &self.player_a_id == player_id {
            Some(self.player_a_score)
        } else if &self.player_b_id == player_id {
            Some(self.player_b_score)
        } else {
            None
        }
    }
}

/// One player's net score for one hole, with the running total threaded
/// through in hole-number order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHoleScore {
    /// Player this score belongs to
    pub player_id: PlayerId,

    /// 1-based hole number
    pub hole_number: u32,

    /// Sum of this player's pair scores on this hole
    pub hole_score: i32,

    /// Cumulative score through this hole
    pub running_total: i32,
}

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// The ranked player
    pub player: Player,

    /// Net score over all holes
    pub total_score: i32,

    /// Competition rank: ties share a rank, the next distinct score takes
    /// its 1-based position (5,5,3 ranks as 1,1,3)
    pub rank: u32,
}
