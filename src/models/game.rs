//! Round configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{PairHandicap, PairKey, Player};

/// Configuration of one round, fixed at setup and owned for the round's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Roster, in seating order
    pub players: Vec<Player>,

    /// Number of holes in the round
    pub number_of_holes: u32,

    /// Handicap per pair, keyed by canonical pair key
    pub handicaps: HashMap<PairKey, PairHandicap>,

    /// 1-based hole numbers scored at 2x
    pub turbo_holes: Vec<u32>,
}

impl GameConfig {
    /// A config with the given roster and hole count, no handicaps and no
    /// turbo holes.
    pub fn new(players: Vec<Player>, number_of_holes: u32) -> Self {
        Self {
            players,
            number_of_holes,
            handicaps: HashMap::new(),
            turbo_holes: Vec::new(),
        }
    }

    /// Whether the given hole is scored at 2x.
    pub fn is_turbo(&self, hole_number: u32) -> bool {
        self.turbo_holes.contains(&hole_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_is_empty() {
        let config = GameConfig::new(vec![Player::with_id("a", "Alice")], 18);
        assert_eq!(config.number_of_holes, 18);
        assert!(config.handicaps.is_empty());
        assert!(config.turbo_holes.is_empty());
    }

    #[test]
    fn test_is_turbo() {
        let mut config = GameConfig::new(Vec::new(), 9);
        config.turbo_holes = vec![3, 7];
        assert!(config.is_turbo(3));
        assert!(!config.is_turbo(4));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = GameConfig::new(
            vec![Player::with_id("a", "Alice"), Player::with_id("b", "Bob")],
            9,
        );
        config.turbo_holes = vec![9];
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
