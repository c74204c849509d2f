//! Player identity and canonical pair keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a player within one round.
///
/// Minted fresh for every round; ids are never reused across "play again"
/// sessions, so handicap configuration keyed by id cannot bleed between
/// unrelated games.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap an existing identifier string.
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Mint a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Separator between the two player ids inside a pair key.
const PAIR_KEY_SEPARATOR: &str = "::";

/// Order-independent identity for an unordered pair of players.
///
/// The two ids are sorted lexicographically and joined with `::`, so
/// `PairKey::new(a, b) == PairKey::new(b, a)`. The sorted order it encodes
/// is authoritative: a handicap record's `player_a_id`/`player_b_id` must
/// match re-deriving the key, not whichever argument order a caller used.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(String);

impl PairKey {
    /// Build the canonical key for two player ids.
    pub fn new(a: &PlayerId, b: &PlayerId) -> Self {
        let (first, second) = if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        };
        Self(format!(
            "{}{}{}",
            first.as_str(),
            PAIR_KEY_SEPARATOR,
            second.as_str()
        ))
    }

    /// Recover the two player ids, in the key's sorted order.
    pub fn players(&self) -> (PlayerId, PlayerId) {
        match self.0.split_once(PAIR_KEY_SEPARATOR) {
            Some((a, b)) => (PlayerId::from(a), PlayerId::from(b)),
            None => (PlayerId::from(self.0.as_str()), PlayerId::from("")),
        }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairKey({})", self.0)
    }
}
