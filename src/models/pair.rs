//! Canonical unordered player pair.

use serde::{Deserialize, Serialize};

use super::{PairKey, PlayerId};

/// One head-to-head match-up, with its canonical key and sorted ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    /// Canonical pair key
    pub pair_key: PairKey,

    /// First player of the sorted pair
    pub player_a_id: PlayerId,

    /// Second player of the sorted pair
    pub player_b_id: PlayerId,
}

impl Pair {
    /// Build the canonical pair for two players, sorting the ids.
    pub fn new(a: &PlayerId, b: &PlayerId) -> Self {
        let pair_key = PairKey::new(a, b);
        let (player_a_id, player_b_id) = pair_key.players();
        Self {
            pair_key,
            player_a_id,
            player_b_id,
        }
    }

    /// Whether the given player belongs to this pair.
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        &self.player_a_id == player_id || &self.player_b_id == player_id
    }
}
