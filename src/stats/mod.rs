//! Cross-round statistics derived from the history store.
//!
//! Rounds mint fresh player ids every time, so lifetime stats join players
//! on their name, case-insensitively. The first spelling seen is kept as
//! the display name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::HistoryRecord;

/// One round's final score, with the date it was played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundScore {
    pub score: i32,
    pub date: DateTime<Utc>,
}

/// Lifetime statistics for one player name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Display name (first spelling seen)
    pub display_name: String,

    /// Rounds this player appeared in
    pub games_played: u32,

    /// Rounds finished at rank 1; ties at rank 1 count for all tied players
    pub wins: u32,

    /// wins / games_played (0 when no games)
    pub win_rate: f64,

    /// Mean final score across rounds
    pub avg_score: f64,

    /// Highest final score
    pub best_round: Option<RoundScore>,

    /// Lowest final score
    pub worst_round: Option<RoundScore>,

    /// Final scores in chronological order
    pub score_trend: Vec<RoundScore>,
}

/// Lifetime head-to-head record between two player names.
///
/// Wins are decided by the higher final total in rounds both players
/// appeared in; equal totals count as ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct H2HRecord {
    pub player_a_name: String,
    pub player_b_name: String,
    pub player_a_wins: u32,
    pub player_b_wins: u32,
    pub ties: u32,
    pub games_played: u32,
}

/// Trim and lowercase for case-insensitive matching across rounds.
pub fn normalize_player_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Collect unique player names across all rounds, first spelling kept.
pub fn unique_player_names(games: &[HistoryRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    let mut names = Vec::new();
    for game in games {
        for ranking in &game.rankings {
            let key = normalize_player_name(&ranking.player_name);
            if !seen.contains(&key) {
                seen.push(key);
                names.push(ranking.player_name.clone());
            }
        }
    }
    names
}

/// Compute lifetime statistics for one player name.
pub fn compute_player_stats(player_name: &str, games: &[HistoryRecord]) -> PlayerStats {
    let normalized = normalize_player_name(player_name);

    let mut games_played = 0;
    let mut wins = 0;
    let mut total_score = 0i64;
    let mut best_round: Option<RoundScore> = None;
    let mut worst_round: Option<RoundScore> = None;
    let mut score_trend = Vec::new();

    for game in games {
        let Some(ranking) = game
            .rankings
            .iter()
            .find(|r| normalize_player_name(&r.player_name) == normalized)
        else {
            continue;
        };

        games_played += 1;
        if ranking.rank == 1 {
            wins += 1;
        }
        total_score += ranking.total_score as i64;

        let round = RoundScore {
            score: ranking.total_score,
            date: game.completed_at,
        };
        if best_round.as_ref().map_or(true, |b| round.score > b.score) {
            best_round = Some(round.clone());
        }
        if worst_round.as_ref().map_or(true, |w| round.score < w.score) {
            worst_round = Some(round.clone());
        }
        score_trend.push(round);
    }

    score_trend.sort_by_key(|r| r.date);

    let (win_rate, avg_score) = if games_played > 0 {
        (
            wins as f64 / games_played as f64,
            total_score as f64 / games_played as f64,
        )
    } else {
        (0.0, 0.0)
    };

    PlayerStats {
        display_name: player_name.to_string(),
        games_played,
        wins,
        win_rate,
        avg_score,
        best_round,
        worst_round,
        score_trend,
    }
}

/// Compute statistics for every player seen in the history, sorted by win
/// rate then games played, both descending.
pub fn compute_all_player_stats(games: &[HistoryRecord]) -> Vec<PlayerStats> {
    let mut all: Vec<PlayerStats> = unique_player_names(games)
        .iter()
        .map(|name| compute_player_stats(name, games))
        .collect();

    all.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap()
            .then(b.games_played.cmp(&a.games_played))
    });

    all
}

/// Compute head-to-head records for every pair of names that shared a
/// round, sorted by games played descending.
///
/// Each record is oriented with the lexicographically-smaller normalized
/// name as player A.
pub fn compute_h2h_records(games: &[HistoryRecord]) -> Vec<H2HRecord> {
    let mut records: Vec<H2HRecord> = Vec::new();

    for game in games {
        for i in 0..game.rankings.len() {
            for j in (i + 1)..game.rankings.len() {
                let (first, second) = (&game.rankings[i], &game.rankings[j]);
                let norm_first = normalize_player_name(&first.player_name);
                let norm_second = normalize_player_name(&second.player_name);

                // Orient so player A is the smaller normalized name.
                let (a, b) = if norm_first <= norm_second {
                    (first, second)
                } else {
                    (second, first)
                };
                let (norm_a, norm_b) = if norm_first <= norm_second {
                    (norm_first, norm_second)
                } else {
                    (norm_second, norm_first)
                };

                let idx = records
                    .iter()
                    .position(|r| {
                        normalize_player_name(&r.player_a_name) == norm_a
                            && normalize_player_name(&r.player_b_name) == norm_b
                    })
                    .unwrap_or_else(|| {
                        records.push(H2HRecord {
                            player_a_name: a.player_name.clone(),
                            player_b_name: b.player_name.clone(),
                            player_a_wins: 0,
                            player_b_wins: 0,
                            ties: 0,
                            games_played: 0,
                        });
                        records.len() - 1
                    });
                let record = &mut records[idx];

                record.games_played += 1;
                match a.total_score.cmp(&b.total_score) {
                    std::cmp::Ordering::Greater => record.player_a_wins += 1,
                    std::cmp::Ordering::Less => record.player_b_wins += 1,
                    std::cmp::Ordering::Equal => record.ties += 1,
                }
            }
        }
    }

    records.sort_by(|a, b| b.games_played.cmp(&a.games_played));
    records
}

/// Look up the record for two names, oriented so the first argument is
/// player A. Matches case-insensitively.
pub fn h2h_for_pair(records: &[H2HRecord], a: &str, b: &str) -> Option<H2HRecord> {
    let norm_a = normalize_player_name(a);
    let norm_b = normalize_player_name(b);

    records.iter().find_map(|r| {
        let rec_a = normalize_player_name(&r.player_a_name);
        let rec_b = normalize_player_name(&r.player_b_name);
        if rec_a == norm_a && rec_b == norm_b {
            Some(r.clone())
        } else if rec_a == norm_b && rec_b == norm_a {
            Some(H2HRecord {
                player_a_name: r.player_b_name.clone(),
                player_b_name: r.player_a_name.clone(),
                player_a_wins: r.player_b_wins,
                player_b_wins: r.player_a_wins,
                ties: r.ties,
                games_played: r.games_played,
            })
        } else {
            None
        }
    })
}
