//! Completed-round history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    GameConfig, HoleStrokes, PairHoleResult, Player, PlayerHoleScore, PlayerId, RankingEntry,
};

/// Final standing of one player, flattened for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSummary {
    /// Player id within that round
    pub player_id: PlayerId,

    /// Player display name
    pub player_name: String,

    /// Net score over all holes
    pub total_score: i32,

    /// Competition rank (1 = winner)
    pub rank: u32,
}

impl From<&RankingEntry> for RankingSummary {
    fn from(entry: &RankingEntry) -> Self {
        Self {
            player_id: entry.player.id.clone(),
            player_name: entry.player.name.clone(),
            total_score: entry.total_score,
            rank: entry.rank,
        }
    }
}

/// One append-only record per finished round.
///
/// Carries the final rankings plus the full configuration and derived result
/// snapshot, so past rounds can be re-inspected without re-deriving anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the round finished
    pub completed_at: DateTime<Utc>,

    /// Roster of that round
    pub players: Vec<Player>,

    /// Number of holes played
    pub number_of_holes: u32,

    /// Final standings, best first
    pub rankings: Vec<RankingSummary>,

    /// Id of the rank-1 player (first of a tie group)
    pub winner_id: PlayerId,

    /// Name of the rank-1 player
    pub winner_name: String,

    /// Full round configuration
    pub config: GameConfig,

    /// Raw stroke entries
    pub hole_strokes: Vec<HoleStrokes>,

    /// Derived pairwise results
    pub pair_results: Vec<PairHoleResult>,

    /// Derived per-player hole scores
    pub player_scores: Vec<PlayerHoleScore>,
}

impl HistoryRecord {
    /// Assemble a record from a round's final state, stamped with the
    /// current time.
    pub fn new(
        config: GameConfig,
        rankings: &[RankingEntry],
        hole_strokes: Vec<HoleStrokes>,
        pair_results: Vec<PairHoleResult>,
        player_scores: Vec<PlayerHoleScore>,
    ) -> Self {
        let (winner_id, winner_name) = rankings
            .first()
            .map(|r| (r.player.id.clone(), r.player.name.clone()))
            .unwrap_or_else(|| (PlayerId::from(""), String::new()));

        Self {
            completed_at: Utc::now(),
            players: config.players.clone(),
            number_of_holes: config.number_of_holes,
            rankings: rankings.iter().map(RankingSummary::from).collect(),
            winner_id,
            winner_name,
            config,
            hole_strokes,
            pair_results,
            player_scores,
        }
    }
}
