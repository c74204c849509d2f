//! The current-round aggregate and its validated mutation boundary.
//!
//! All rejection logic lives here, in front of the pure scoring core: every
//! mutator validates its input against the product policy, then calls into
//! [`crate::scoring`] and replaces the derived state wholesale. On rejection
//! the prior state is left untouched. The core itself never fails.

mod rematch;

pub use rematch::*;

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{
    GameConfig, HistoryRecord, HoleStrokes, PairHandicap, PairHoleResult, PairKey, Player,
    PlayerHoleScore, PlayerId, RankingEntry,
};
use crate::scoring::{
    distribute_handicap_holes, final_rankings, generate_pairs, pair_hole_result,
    player_hole_scores, rebuild_running_totals, recalculate, running_totals, verify_zero_sum,
};

/// Smallest roster the product allows.
pub const MIN_PLAYERS: usize = 2;
/// Largest roster the product allows.
pub const MAX_PLAYERS: usize = 6;
/// Smallest round the product allows.
pub const MIN_HOLES: u32 = 1;
/// Largest round the product allows.
pub const MAX_HOLES: u32 = 36;
/// Largest accepted stroke count for one hole.
pub const MAX_STROKES: u32 = 20;
/// Hole count used when a roster is set before a hole count.
pub const DEFAULT_HOLES: u32 = 18;

/// Rejection reasons for round mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {0}")]
    PlayerCount(usize),

    #[error("number of holes must be between {MIN_HOLES} and {MAX_HOLES}, got {0}")]
    HoleCount(u32),

    #[error("handicap cannot exceed the number of holes ({holes}), got {value}")]
    HandicapTooLarge { value: i32, holes: u32 },

    #[error("no handicap entry for pair {0}")]
    UnknownPair(PairKey),

    #[error("stroke values must be between 0 and {MAX_STROKES}, got {strokes} for player {player_id}")]
    StrokesOutOfRange { player_id: PlayerId, strokes: u32 },

    #[error("hole number must be between 1 and {holes}, got {hole}")]
    HoleOutOfRange { hole: u32, holes: u32 },

    #[error("game has not been configured yet")]
    NotConfigured,
}

/// One round in progress: configuration plus the derived scoring state.
#[derive(Debug, Clone)]
pub struct Game {
    config: Option<GameConfig>,
    current_hole: u32,
    hole_strokes: Vec<HoleStrokes>,
    pair_results: Vec<PairHoleResult>,
    player_scores: Vec<PlayerHoleScore>,
    is_complete: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh, unconfigured round.
    pub fn new() -> Self {
        Self {
            config: None,
            current_hole: 1,
            hole_strokes: Vec::new(),
            pair_results: Vec::new(),
            player_scores: Vec::new(),
            is_complete: false,
        }
    }

    pub fn config(&self) -> Option<&GameConfig> {
        self.config.as_ref()
    }

    pub fn current_hole(&self) -> u32 {
        self.current_hole
    }

    pub fn hole_strokes(&self) -> &[HoleStrokes] {
        &self.hole_strokes
    }

    pub fn pair_results(&self) -> &[PairHoleResult] {
        &self.pair_results
    }

    pub fn player_scores(&self) -> &[PlayerHoleScore] {
        &self.player_scores
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether a configured round has at least one scored hole.
    pub fn has_active_game(&self) -> bool {
        self.config.is_some() && !self.hole_strokes.is_empty()
    }

    fn config_mut(&mut self) -> Result<&mut GameConfig, GameError> {
        self.config.as_mut().ok_or(GameError::NotConfigured)
    }

    /// Set the roster. Creates the config on first call (with the default
    /// hole count) and preserves any existing handicap/turbo configuration.
    pub fn set_players(&mut self, players: Vec<Player>) -> Result<(), GameError> {
        if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
            return Err(GameError::PlayerCount(players.len()));
        }

        match self.config.as_mut() {
            Some(config) => config.players = players,
            None => self.config = Some(GameConfig::new(players, DEFAULT_HOLES)),
        }
        Ok(())
    }

    /// Set the hole count. Creates the config (with an empty roster) when
    /// called before `set_players`.
    pub fn set_number_of_holes(&mut self, number_of_holes: u32) -> Result<(), GameError> {
        if !(MIN_HOLES..=MAX_HOLES).contains(&number_of_holes) {
            return Err(GameError::HoleCount(number_of_holes));
        }

        match self.config.as_mut() {
            Some(config) => config.number_of_holes = number_of_holes,
            None => self.config = Some(GameConfig::new(Vec::new(), number_of_holes)),
        }
        Ok(())
    }

    /// Ensure every pair in the roster has a handicap entry, defaulting new
    /// pairs to zero and preserving existing entries.
    pub fn initialize_handicaps(&mut self) -> Result<(), GameError> {
        let config = self.config_mut()?;
        for pair in generate_pairs(&config.players) {
            config
                .handicaps
                .entry(pair.pair_key.clone())
                .or_insert_with(|| {
                    PairHandicap::neutral(pair.pair_key, pair.player_a_id, pair.player_b_id)
                });
        }
        Ok(())
    }

    /// Set a pair's handicap value. Resets that pair's handicap holes, which
    /// must be reselected or auto-distributed afterwards. Re-scores played
    /// holes, since who-gives-to-whom affects every hole already played.
    pub fn set_handicap(&mut self, pair_key: &PairKey, value: i32) -> Result<(), GameError> {
        let config = self.config_mut()?;
        if value.unsigned_abs() > config.number_of_holes {
            return Err(GameError::HandicapTooLarge {
                value,
                holes: config.number_of_holes,
            });
        }

        let (player_a_id, player_b_id) = match config.handicaps.get(pair_key) {
            Some(existing) => (existing.player_a_id.clone(), existing.player_b_id.clone()),
            None => pair_key.players(),
        };
        config.handicaps.insert(
            pair_key.clone(),
            PairHandicap {
                pair_key: pair_key.clone(),
                player_a_id,
                player_b_id,
                value,
                handicap_holes: Vec::new(),
            },
        );

        self.rescore_if_played();
        Ok(())
    }

    /// Fill a pair's handicap holes with the evenly-spaced default for its
    /// current value. Manual per-hole edits afterwards override this.
    pub fn auto_distribute_handicap_holes(&mut self, pair_key: &PairKey) -> Result<(), GameError> {
        let config = self.config_mut()?;
        let number_of_holes = config.number_of_holes;
        match config.handicaps.get_mut(pair_key) {
            Some(handicap) => {
                handicap.handicap_holes = distribute_handicap_holes(handicap.value, number_of_holes)
            }
            None => return Err(GameError::UnknownPair(pair_key.clone())),
        }

        self.rescore_if_played();
        Ok(())
    }

    /// Replace a pair's handicap holes. The pair must already have an entry.
    pub fn set_handicap_holes(
        &mut self,
        pair_key: &PairKey,
        holes: Vec<u32>,
    ) -> Result<(), GameError> {
        let config = self.config_mut()?;
        match config.handicaps.get_mut(pair_key) {
            Some(handicap) => handicap.handicap_holes = holes,
            None => return Err(GameError::UnknownPair(pair_key.clone())),
        }

        self.rescore_if_played();
        Ok(())
    }

    /// Replace the turbo hole set.
    pub fn set_turbo_holes(&mut self, holes: Vec<u32>) -> Result<(), GameError> {
        let config = self.config_mut()?;
        config.turbo_holes = holes;

        self.rescore_if_played();
        Ok(())
    }

    /// Toggle one hole in or out of the turbo set.
    pub fn toggle_turbo_hole(&mut self, hole: u32) -> Result<(), GameError> {
        let config = self.config_mut()?;
        if let Some(pos) = config.turbo_holes.iter().position(|&h| h == hole) {
            config.turbo_holes.remove(pos);
        } else {
            config.turbo_holes.push(hole);
            config.turbo_holes.sort_unstable();
        }

        self.rescore_if_played();
        Ok(())
    }

    /// Score one hole.
    ///
    /// The submission is atomic: it either replaces the hole's strokes and
    /// every derived value for that hole, or rejects and leaves all state
    /// unchanged. Re-submitting a hole replaces the prior entry rather than
    /// appending. Editing a non-latest hole ripples into every later hole's
    /// running total.
    pub fn submit_hole_strokes(&mut self, strokes: HoleStrokes) -> Result<(), GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;

        let hole_number = strokes.hole_number;
        if hole_number < 1 || hole_number > config.number_of_holes {
            return Err(GameError::HoleOutOfRange {
                hole: hole_number,
                holes: config.number_of_holes,
            });
        }
        for (player_id, &value) in &strokes.strokes {
            if value > MAX_STROKES {
                return Err(GameError::StrokesOutOfRange {
                    player_id: player_id.clone(),
                    strokes: value,
                });
            }
        }

        let is_turbo = config.is_turbo(hole_number);
        let pairs = generate_pairs(&config.players);
        let mut new_results = Vec::with_capacity(pairs.len());
        for pair in &pairs {
            let result = match config.handicaps.get(&pair.pair_key) {
                Some(handicap) => {
                    pair_hole_result(pair, hole_number, &strokes, handicap, is_turbo)
                }
                None => {
                    let neutral = PairHandicap::neutral(
                        pair.pair_key.clone(),
                        pair.player_a_id.clone(),
                        pair.player_b_id.clone(),
                    );
                    pair_hole_result(pair, hole_number, &strokes, &neutral, is_turbo)
                }
            };
            new_results.push(result);
        }
        let players = config.players.clone();

        // Drop any prior data for this hole; re-scoring replaces it.
        self.hole_strokes.retain(|s| s.hole_number != hole_number);
        self.pair_results.retain(|r| r.hole_number != hole_number);
        self.player_scores.retain(|s| s.hole_number != hole_number);

        self.pair_results.extend(new_results);

        let previous_totals = running_totals(&self.player_scores, hole_number.saturating_sub(1));
        let hole_scores = player_hole_scores(
            &players,
            &self.pair_results,
            hole_number,
            &previous_totals,
        );
        self.check_zero_sum(hole_number, &hole_scores);
        self.player_scores.extend(hole_scores);

        // An edit behind the frontier leaves later running totals stale.
        if self
            .player_scores
            .iter()
            .any(|s| s.hole_number > hole_number)
        {
            self.player_scores = rebuild_running_totals(&self.player_scores);
        }

        self.hole_strokes.push(strokes);
        debug!(hole = hole_number, "scored hole");
        Ok(())
    }

    /// Replay all recorded strokes through the scoring engine from scratch,
    /// replacing the derived state. Converges with the incremental submit
    /// path.
    pub fn recalculate(&mut self) -> Result<(), GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;

        let pairs = generate_pairs(&config.players);
        let out = recalculate(
            &config.players,
            &self.hole_strokes,
            &config.handicaps,
            &config.turbo_holes,
            &pairs,
        );

        for strokes in &self.hole_strokes {
            let hole: Vec<PlayerHoleScore> = out
                .player_scores
                .iter()
                .filter(|s| s.hole_number == strokes.hole_number)
                .cloned()
                .collect();
            self.check_zero_sum(strokes.hole_number, &hole);
        }

        self.pair_results = out.pair_results;
        self.player_scores = out.player_scores;
        Ok(())
    }

    fn rescore_if_played(&mut self) {
        if !self.hole_strokes.is_empty() {
            // Config mutators only run with a config present, so the replay
            // cannot fail.
            let _ = self.recalculate();
        }
    }

    // Zero-sum failure means a scoring defect. Reported, not blocking: the
    // computed result is still applied.
    fn check_zero_sum(&self, hole_number: u32, hole_scores: &[PlayerHoleScore]) {
        if !verify_zero_sum(hole_scores) {
            let sum: i32 = hole_scores.iter().map(|s| s.hole_score).sum();
            warn!(hole = hole_number, sum, "hole scores do not sum to zero");
        }
    }

    /// Jump to a hole.
    pub fn go_to_hole(&mut self, hole: u32) -> Result<(), GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;
        if hole < 1 || hole > config.number_of_holes {
            return Err(GameError::HoleOutOfRange {
                hole,
                holes: config.number_of_holes,
            });
        }
        self.current_hole = hole;
        Ok(())
    }

    /// Advance to the next hole, clamped to the last one.
    pub fn go_to_next_hole(&mut self) -> Result<(), GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;
        self.current_hole = (self.current_hole + 1).min(config.number_of_holes);
        Ok(())
    }

    /// Step back one hole, clamped to the first.
    pub fn go_to_previous_hole(&mut self) {
        self.current_hole = self.current_hole.saturating_sub(1).max(1);
    }

    /// Final standings for the round as played so far.
    pub fn rankings(&self) -> Result<Vec<RankingEntry>, GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;
        Ok(final_rankings(&config.players, &self.player_scores))
    }

    /// Mark the round finished.
    pub fn complete(&mut self) {
        self.is_complete = true;
    }

    /// Snapshot the finished round for the history store.
    pub fn history_record(&self) -> Result<HistoryRecord, GameError> {
        let config = self.config.as_ref().ok_or(GameError::NotConfigured)?;
        let rankings = final_rankings(&config.players, &self.player_scores);
        Ok(HistoryRecord::new(
            config.clone(),
            &rankings,
            self.hole_strokes.clone(),
            self.pair_results.clone(),
            self.player_scores.clone(),
        ))
    }

    /// Discard everything and return to the unconfigured state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Build a handicap map with a neutral entry for every pair of the roster.
pub fn neutral_handicaps(players: &[Player]) -> HashMap<PairKey, PairHandicap> {
    generate_pairs(players)
        .into_iter()
        .map(|pair| {
            (
                pair.pair_key.clone(),
                PairHandicap::neutral(pair.pair_key, pair.player_a_id, pair.player_b_id),
            )
        })
        .collect()
}
