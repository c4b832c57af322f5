//! # Fast-Cactus Evaluator
//!
//! A perfect-hash variant of the reference evaluator: the non-flush
//! `UNIQUE5` table is rebuilt once as a `HashMap` keyed by the 13-bit
//! bit-rank mask, trading the reference evaluator's binary search over
//! `PRODUCTS` for an O(1) lookup on the common non-flush, non-pair path.
//! Five and six-card hands use this directly; seven-card hands are scored
//! by evaluating all 21 five-card subsets and keeping the best.
//!
//! Built from a `HashMap` rather than Senzee's original perfect-hash
//! polynomial constants (see the design ledger) — functionally equivalent,
//! since both simply map a bit-rank mask to a rank.

use super::cactus::evaluate_five;
use crate::card::Card;
use crate::rank_score::EvalRank;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `bit_or >> 16` (13-bit rank mask) to `EvalRank` value, populated for
/// every five distinct ranks a non-flush hand can show.
static UNIQUE_LOOKUP: Lazy<HashMap<u32, u16>> = Lazy::new(build_unique_lookup);

fn build_unique_lookup() -> HashMap<u32, u16> {
    use crate::card::{Rank, Suit};
    let mut map = HashMap::with_capacity(2048);
    // Every combination of five distinct ranks, dealt off-suit so the
    // flush path never triggers, populates the perfect-hash table with
    // the reference evaluator's own answer.
    let ranks = Rank::ALL;
    let suits = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];
    for combo in combinations_indices(ranks.len(), 5) {
        let mask: u32 = combo.iter().map(|&i| 1u32 << i).sum();
        let cards = [
            Card::new(ranks[combo[0]], suits[0]),
            Card::new(ranks[combo[1]], suits[1 % 4]),
            Card::new(ranks[combo[2]], suits[2 % 4]),
            Card::new(ranks[combo[3]], suits[3 % 4]),
            Card::new(ranks[combo[4]], suits[0]),
        ];
        let rank = evaluate_five(cards);
        map.insert(mask, rank.value());
    }
    map
}

fn combinations_indices(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn recurse(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            recurse(i + 1, n, k, current, out);
            current.pop();
        }
    }
    recurse(0, n, k, &mut current, &mut result);
    result
}

/// Evaluate exactly five cards via the perfect-hash lookup, falling back
/// to the reference evaluator for flushes and paired hands (the lookup
/// only covers the distinct-rank, non-flush path).
pub fn evaluate_five_fast(cards: [Card; 5]) -> EvalRank {
    let suit_and = cards.iter().fold(0xFu32, |acc, c| acc & c.suit_nibble());
    let has_pair = {
        let mut counts = [0u8; 13];
        for c in cards.iter() {
            counts[c.rank_index() as usize] += 1;
        }
        counts.iter().any(|&n| n > 1)
    };
    if suit_and != 0 || has_pair {
        return evaluate_five(cards);
    }
    let mask = cards.iter().fold(0u32, |acc, c| acc | c.bit_rank()) >> 16;
    match UNIQUE_LOOKUP.get(&mask) {
        Some(&value) => EvalRank::new(value),
        None => evaluate_five(cards),
    }
}

/// Evaluate six or seven cards by scoring every five-card subset and
/// keeping the strongest (lowest) score.
pub fn evaluate_best_of(cards: &[Card]) -> EvalRank {
    debug_assert!(cards.len() == 5 || cards.len() == 6 || cards.len() == 7);
    if cards.len() == 5 {
        return evaluate_five_fast([cards[0], cards[1], cards[2], cards[3], cards[4]]);
    }
    let mut best = EvalRank::new(EvalRank::WORST_HIGH_CARD + 1);
    for combo in combinations_indices(cards.len(), 5) {
        let five = [
            cards[combo[0]],
            cards[combo[1]],
            cards[combo[2]],
            cards[combo[3]],
            cards[combo[4]],
        ];
        let score = evaluate_five_fast(five);
        if score.value() < best.value() {
            best = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn hand(notation: &str) -> Vec<Card> {
        notation
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn fast_cactus_agrees_with_reference_on_five_cards() {
        let cards = hand("As Ks Qs Js Ts");
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        assert_eq!(evaluate_five_fast(five).value(), evaluate_five(five).value());
    }

    #[test]
    fn fast_cactus_agrees_on_a_paired_hand() {
        let cards = hand("Ah As Kd Qc Jh");
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        assert_eq!(evaluate_five_fast(five).value(), evaluate_five(five).value());
    }

    #[test]
    fn seven_card_extension_picks_the_best_subset() {
        let cards = hand("As Ks Qs Js Ts 2h 3d");
        let best = evaluate_best_of(&cards);
        assert_eq!(best.value(), 1);
    }
}
