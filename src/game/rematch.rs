//! "Play again" setup: fresh identities, carried-over configuration.
//!
//! A rematch never reuses player ids. New ids are minted and the previous
//! round's handicaps are remapped onto them by matching player names; the
//! pair keys are recomputed from the new ids. Because pair keys encode the
//! sorted id order, the new ids may sort the other way around; in that
//! case the handicap value's sign is flipped so who-gives-to-whom is
//! preserved.

use std::collections::HashMap;

use crate::models::{HistoryRecord, Pair, PairHandicap, PairKey, Player, PlayerId};

/// Mint a fresh roster with the same names, in the same order.
pub fn rematch_players(old_players: &[Player]) -> Vec<Player> {
    old_players
        .iter()
        .map(|p| Player::new(p.name.clone()))
        .collect()
}

/// Remap handicaps from an old roster onto a new one, joining on exact
/// player name.
///
/// Pairs where either name has no match in `new_players` are silently
/// dropped; partial handicap loss is acceptable degradation on a rematch.
pub fn remap_handicaps(
    old_players: &[Player],
    new_players: &[Player],
    handicaps: &HashMap<PairKey, PairHandicap>,
) -> HashMap<PairKey, PairHandicap> {
    let old_to_new: HashMap<&PlayerId, &PlayerId> = old_players
        .iter()
        .filter_map(|old| {
            new_players
                .iter()
                .find(|new| new.name == old.name)
                .map(|new| (&old.id, &new.id))
        })
        .collect();

    let mut remapped = HashMap::new();
    for handicap in handicaps.values() {
        let (Some(new_a), Some(new_b)) = (
            old_to_new.get(&handicap.player_a_id).copied(),
            old_to_new.get(&handicap.player_b_id).copied(),
        ) else {
            continue;
        };

        let pair = Pair::new(new_a, new_b);
        // The new ids may sort the other way around than the old ones did;
        // the value's sign follows the A-side of the sorted pair.
        let value = if &pair.player_a_id == new_a {
            handicap.value
        } else {
            -handicap.value
        };

        remapped.insert(
            pair.pair_key.clone(),
            PairHandicap {
                pair_key: pair.pair_key,
                player_a_id: pair.player_a_id,
                player_b_id: pair.player_b_id,
                value,
                handicap_holes: handicap.handicap_holes.clone(),
            },
        );
    }
    remapped
}

/// Everything needed to start a rematch of a finished round: fresh players
/// plus the remapped handicaps, hole count, and turbo holes.
pub fn rematch_setup(
    record: &HistoryRecord,
) -> (Vec<Player>, HashMap<PairKey, PairHandicap>, u32, Vec<u32>) {
    let new_players = rematch_players(&record.players);
    let handicaps = remap_handicaps(&record.players, &new_players, &record.config.handicaps);
    (
        new_players,
        handicaps,
        record.number_of_holes,
        record.config.turbo_holes.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handicap_between(a: &str, b: &str, value: i32, holes: Vec<u32>) -> PairHandicap {
        let pair = Pair::new(&a.into(), &b.into());
        PairHandicap {
            pair_key: pair.pair_key,
            player_a_id: pair.player_a_id,
            player_b_id: pair.player_b_id,
            value,
            handicap_holes: holes,
        }
    }

    fn as_map(handicaps: Vec<PairHandicap>) -> HashMap<PairKey, PairHandicap> {
        handicaps
            .into_iter()
            .map(|h| (h.pair_key.clone(), h))
            .collect()
    }

    #[test]
    fn test_rematch_players_fresh_ids_same_names() {
        let old = vec![Player::with_id("old-a", "Alice"), Player::with_id("old-b", "Bob")];
        let new = rematch_players(&old);
        assert_eq!(new.len(), 2);
        assert_eq!(new[0].name, "Alice");
        assert_eq!(new[1].name, "Bob");
        assert_ne!(new[0].id, old[0].id);
        assert_ne!(new[1].id, old[1].id);
    }

    #[test]
    fn test_remap_empty_handicaps() {
        let old = vec![Player::with_id("old-a", "Alice")];
        let new = vec![Player::with_id("new-a", "Alice")];
        assert!(remap_handicaps(&old, &new, &HashMap::new()).is_empty());
    }

    #[test]
    fn test_remap_translates_keys() {
        let old = vec![Player::with_id("old-a", "Alice"), Player::with_id("old-b", "Bob")];
        let new = vec![Player::with_id("new-a", "Alice"), Player::with_id("new-b", "Bob")];
        let handicaps = as_map(vec![handicap_between("old-a", "old-b", 2, vec![3, 9])]);

        let remapped = remap_handicaps(&old, &new, &handicaps);
        let new_key = PairKey::new(&"new-a".into(), &"new-b".into());

        assert_eq!(remapped.len(), 1);
        let entry = &remapped[&new_key];
        assert_eq!(entry.pair_key, new_key);
        assert_eq!(entry.player_a_id.as_str(), "new-a");
        assert_eq!(entry.player_b_id.as_str(), "new-b");
        assert_eq!(entry.value, 2);
        assert_eq!(entry.handicap_holes, vec![3, 9]);
    }

    #[test]
    fn test_remap_flips_sign_when_sort_order_reverses() {
        let old = vec![Player::with_id("old-a", "Alice"), Player::with_id("old-b", "Bob")];
        // New ids sort the other way around: Bob's id now comes first.
        let new = vec![
            Player::with_id("zzz-alice", "Alice"),
            Player::with_id("aaa-bob", "Bob"),
        ];
        // Alice gives 3 strokes to Bob.
        let handicaps = as_map(vec![handicap_between("old-a", "old-b", 3, vec![1, 2, 5])]);

        let remapped = remap_handicaps(&old, &new, &handicaps);
        let new_key = PairKey::new(&"zzz-alice".into(), &"aaa-bob".into());
        let entry = &remapped[&new_key];

        // Player A is now Bob, so the value flips: Bob receives 3.
        assert_eq!(entry.player_a_id.as_str(), "aaa-bob");
        assert_eq!(entry.player_b_id.as_str(), "zzz-alice");
        assert_eq!(entry.value, -3);
        assert_eq!(entry.handicap_holes, vec![1, 2, 5]);
    }

    #[test]
    fn test_remap_drops_unresolvable_pairs() {
        let old = vec![Player::with_id("old-a", "Alice"), Player::with_id("old-b", "Bob")];
        // Bob is gone; Charlie replaces him.
        let new = vec![
            Player::with_id("new-a", "Alice"),
            Player::with_id("new-c", "Charlie"),
        ];
        let handicaps = as_map(vec![handicap_between("old-a", "old-b", 3, vec![1, 5, 10])]);

        assert!(remap_handicaps(&old, &new, &handicaps).is_empty());
    }

    #[test]
    fn test_remap_multiple_pairs() {
        let old = vec![
            Player::with_id("old-a", "Alice"),
            Player::with_id("old-b", "Bob"),
            Player::with_id("old-c", "Carol"),
        ];
        let new = vec![
            Player::with_id("new-a", "Alice"),
            Player::with_id("new-b", "Bob"),
            Player::with_id("new-c", "Carol"),
        ];
        let handicaps = as_map(vec![
            handicap_between("old-a", "old-b", 1, vec![1]),
            handicap_between("old-a", "old-c", -2, vec![4, 9]),
            handicap_between("old-b", "old-c", 0, Vec::new()),
        ]);

        let remapped = remap_handicaps(&old, &new, &handicaps);
        assert_eq!(remapped.len(), 3);
        let ac = &remapped[&PairKey::new(&"new-a".into(), &"new-c".into())];
        assert_eq!(ac.value, -2);
        assert_eq!(ac.handicap_holes, vec![4, 9]);
    }

    #[test]
    fn test_rematch_setup_carries_configuration() {
        use crate::models::{GameConfig, RankingEntry};

        let players = vec![Player::with_id("old-a", "Alice"), Player::with_id("old-b", "Bob")];
        let mut config = GameConfig::new(players.clone(), 9);
        config.turbo_holes = vec![9];
        config.handicaps = as_map(vec![handicap_between("old-a", "old-b", 2, vec![1, 6])]);
        let rankings = vec![
            RankingEntry {
                player: players[0].clone(),
                total_score: 3,
                rank: 1,
            },
            RankingEntry {
                player: players[1].clone(),
                total_score: -3,
                rank: 2,
            },
        ];
        let record = HistoryRecord::new(config, &rankings, Vec::new(), Vec::new(), Vec::new());

        let (new_players, handicaps, holes, turbo) = rematch_setup(&record);
        assert_eq!(new_players.len(), 2);
        assert_ne!(new_players[0].id, players[0].id);
        assert_eq!(holes, 9);
        assert_eq!(turbo, vec![9]);
        assert_eq!(handicaps.len(), 1);
        let entry = handicaps.values().next().unwrap();
        assert_eq!(entry.value.abs(), 2);
        assert_eq!(entry.handicap_holes, vec![1, 6]);
    }
}
