//! Player model.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A player in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier, minted at setup
    pub id: PlayerId,

    /// Display name
    pub name: String,
}

impl Player {
    /// Create a player with a fresh random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::random(),
            name: name.into(),
        }
    }

    /// Create a player with a specific id (fixtures, deserialized data).
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Look up a player's name by id, falling back to the raw id string.
pub fn player_name(players: &[Player], id: &PlayerId) -> String {
    players
        .iter()
        .find(|p| &p.id == id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.as_str().to_string())
}
