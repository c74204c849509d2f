//! Per-pair handicap configuration.

use serde::{Deserialize, Serialize};

use super::{PairKey, PlayerId};

/// Stroke handicap between the two players of a pair.
///
/// `value > 0` means player A (the better player) gives `|value|` strokes to
/// player B; `value < 0` means the reverse; `0` means no handicap. The
/// strokes apply only on the holes listed in `handicap_holes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairHandicap {
    /// Canonical pair key
    pub pair_key: PairKey,

    /// First player of the sorted pair
    pub player_a_id: PlayerId,

    /// Second player of the sorted pair
    pub player_b_id: PlayerId,

    /// Signed stroke count; magnitude never exceeds the hole count
    pub value: i32,

    /// 1-based hole numbers the handicap strokes land on
    pub handicap_holes: Vec<u32>,
}

impl PairHandicap {
    /// A zero handicap for the given pair.
    pub fn neutral(pair_key: PairKey, player_a_id: PlayerId, player_b_id: PlayerId) -> Self {
        Self {
            pair_key,
            player_a_id,
            player_b_id,
            value: 0,
            handicap_holes: Vec::new(),
        }
    }

    /// Whether a stroke applies on the given hole.
    pub fn applies_to(&self, hole_number: u32) -> bool {
        self.value != 0 && self.handicap_holes.contains(&hole_number)
    }
}
