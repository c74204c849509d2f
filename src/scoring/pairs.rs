//! Pair enumeration and handicap-stroke distribution.

use crate::models::{Pair, Player};

/// Enumerate all C(n,2) unordered pairs from the roster, in index order.
///
/// Zero or one players yields an empty list. Each pair carries its canonical
/// key and canonically-sorted ids.
pub fn generate_pairs(players: &[Player]) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(players.len().saturating_sub(1) * players.len() / 2);
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            pairs.push(Pair::new(&players[i].id, &players[j].id));
        }
    }
    pairs
}

/// Pick which holes receive a handicap stroke, by even spacing.
///
/// The hole range is divided into `|value|` equal-width segments and the
/// first hole of each segment is chosen. Only the magnitude of `value`
/// matters; the sign (who gives to whom) is resolved at scoring time.
/// `|value| >= number_of_holes` selects every hole.
pub fn distribute_handicap_holes(value: i32, number_of_holes: u32) -> Vec<u32> {
    let magnitude = value.unsigned_abs();
    if magnitude == 0 || number_of_holes == 0 {
        return Vec::new();
    }

    if magnitude >= number_of_holes {
        return (1..=number_of_holes).collect();
    }

    // floor(i * holes / |value|) + 1, kept in integer arithmetic
    (0..magnitude)
        .map(|i| i * number_of_holes / magnitude + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PairKey;
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::with_id(format!("p{}", i), format!("P{}", i)))
            .collect()
    }

    #[test]
    fn test_generate_pairs_counts() {
        assert_eq!(generate_pairs(&roster(0)).len(), 0);
        assert_eq!(generate_pairs(&roster(1)).len(), 0);
        assert_eq!(generate_pairs(&roster(2)).len(), 1);
        assert_eq!(generate_pairs(&roster(4)).len(), 6);
        assert_eq!(generate_pairs(&roster(6)).len(), 15);
    }

    #[test]
    fn test_generate_pairs_unique_keys() {
        let pairs = generate_pairs(&roster(6));
        let keys: HashSet<_> = pairs.iter().map(|p| p.pair_key.clone()).collect();
        assert_eq!(keys.len(), pairs.len());
    }

    #[test]
    fn test_generate_pairs_canonical_ids() {
        // Roster order deliberately reversed relative to lexicographic order.
        let players = vec![Player::with_id("zulu", "Z"), Player::with_id("alpha", "A")];
        let pairs = generate_pairs(&players);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].player_a_id.as_str(), "alpha");
        assert_eq!(pairs[0].player_b_id.as_str(), "zulu");
        assert_eq!(
            pairs[0].pair_key,
            PairKey::new(&players[0].id, &players[1].id)
        );
    }

    #[test]
    fn test_generate_pairs_stable_for_same_input() {
        let players = roster(5);
        assert_eq!(generate_pairs(&players), generate_pairs(&players));
    }

    #[test]
    fn test_distribute_even_spacing() {
        assert_eq!(
            distribute_handicap_holes(9, 18),
            vec![1, 3, 5, 7, 9, 11, 13, 15, 17]
        );
    }

    #[test]
    fn test_distribute_zero_value() {
        assert_eq!(distribute_handicap_holes(0, 18), Vec::<u32>::new());
    }

    #[test]
    fn test_distribute_zero_holes() {
        assert_eq!(distribute_handicap_holes(5, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_distribute_value_exceeds_holes() {
        let holes = distribute_handicap_holes(25, 18);
        assert_eq!(holes, (1..=18).collect::<Vec<_>>());
    }

    #[test]
    fn test_distribute_sign_does_not_matter() {
        assert_eq!(
            distribute_handicap_holes(-7, 18),
            distribute_handicap_holes(7, 18)
        );
    }

    #[test]
    fn test_distribute_single_stroke_lands_on_first_hole() {
        assert_eq!(distribute_handicap_holes(1, 18), vec![1]);
    }

    #[test]
    fn test_distribute_uneven_split() {
        // 18 / 4 = 4.5 -> floor(0)=0, floor(4.5)=4, floor(9)=9, floor(13.5)=13
        assert_eq!(distribute_handicap_holes(4, 18), vec![1, 5, 10, 14]);
    }
}
