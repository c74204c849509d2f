//! Raw per-hole stroke entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PlayerId;

/// Raw stroke counts for one hole.
///
/// One entry exists per scored hole; re-submitting the same hole number
/// replaces the prior entry. A player missing from `strokes` is treated as
/// having played 0 strokes by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleStrokes {
    /// 1-based hole number
    pub hole_number: u32,

    /// Raw stroke count per player
    pub strokes: HashMap<PlayerId, u32>,
}

impl HoleStrokes {
    /// Create an entry for one hole.
    pub fn new(hole_number: u32, strokes: HashMap<PlayerId, u32>) -> Self {
        Self {
            hole_number,
            strokes,
        }
    }

    /// A player's raw strokes, defaulting a missing entry to 0.
    pub fn strokes_for(&self, player_id: &PlayerId) -> u32 {
        self.strokes.get(player_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strokes_for_present_player() {
        let mut strokes = HashMap::new();
        strokes.insert(PlayerId::from("a"), 4);
        let entry = HoleStrokes::new(1, strokes);
        assert_eq!(entry.strokes_for(&"a".into()), 4);
    }

    #[test]
    fn test_strokes_for_missing_player_defaults_to_zero() {
        let entry = HoleStrokes::new(1, HashMap::new());
        assert_eq!(entry.strokes_for(&"ghost".into()), 0);
    }

    #[test]
    fn test_hole_strokes_serialization() {
        let mut strokes = HashMap::new();
        strokes.insert(PlayerId::from("a"), 4);
        strokes.insert(PlayerId::from("b"), 6);
        let entry = HoleStrokes::new(3, strokes);
        let json = serde_json::to_string(&entry).unwrap();
        let back: HoleStrokes = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
