//! Final standings with tie-aware ranks.

use crate::models::{Player, PlayerHoleScore, RankingEntry};

use super::running_totals;

/// Rank players by total score, highest first.
///
/// Competition ranking: tied players share a rank, and the next distinct
/// score takes its 1-based position in the sorted list (5,5,3 ranks as
/// 1,1,3). The sort is stable, so tied players keep roster order.
pub fn final_rankings(players: &[Player], scores: &[PlayerHoleScore]) -> Vec<RankingEntry> {
    let totals = running_totals(scores, u32::MAX);

    let mut ranked: Vec<RankingEntry> = players
        .iter()
        .map(|player| RankingEntry {
            player: player.clone(),
            total_score: totals.get(&player.id).copied().unwrap_or(0),
            rank: 0,
        })
        .collect();

    ranked.sort_by_key(|entry| std::cmp::Reverse(entry.total_score));

    let mut current_rank = 1;
    for i in 0..ranked.len() {
        if i > 0 && ranked[i].total_score < ranked[i - 1].total_score {
            current_rank = i as u32 + 1;
        }
        ranked[i].rank = current_rank;
    }

    ranked
}
