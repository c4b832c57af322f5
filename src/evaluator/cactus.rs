//! # Cactus Reference Evaluator
//!
//! The reference five-card evaluator: Cactus-Kev's classic algorithm, here
//! returning [`EvalRank`] (1 = best, 7462 = worst high card) instead of the
//! higher-is-better convention the lookup tables were originally generated
//! under. This is the slowest of the three evaluators in the module but the
//! simplest to audit; [`fast_cactus`](super::fast_cactus) and
//! [`two_plus_two`](super::two_plus_two) must agree with it on every input.

use super::cactus_tables::{FLUSHES, PRODUCTS, PRODUCT_VALUES, UNIQUE5};
use crate::card::Card;
use crate::rank_score::EvalRank;

/// Evaluate exactly five cards, returning their Cactus-Kev rank.
///
/// # Panics
/// Never panics; callers are expected to have already validated that
/// `cards.len() == 5` (see [`crate::evaluator::evaluate`]).
pub fn evaluate_five(cards: [Card; 5]) -> EvalRank {
    let bit_or = cards.iter().fold(0u32, |acc, c| acc | c.bits());
    let suit_and = cards.iter().fold(0xFu32, |acc, c| acc & c.suit_nibble());

    if suit_and != 0 {
        let bitmask = (bit_or >> 16) as usize;
        let value = FLUSHES[bitmask];
        if value != 0 {
            return EvalRank::new(value);
        }
    }

    let bitmask = (bit_or >> 16) as usize;
    let value = UNIQUE5[bitmask];
    if value != 0 {
        return EvalRank::new(value);
    }

    let product: u32 = cards.iter().map(|c| c.prime()).product();
    let index = PRODUCTS
        .binary_search(&product)
        .expect("every five-card prime product is present in the table");
    EvalRank::new(PRODUCT_VALUES[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use std::str::FromStr;

    fn hand(notation: &str) -> [Card; 5] {
        let cards: Vec<Card> = notation
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    #[test]
    fn royal_flush_is_best_possible() {
        let rank = evaluate_five(hand("As Ks Qs Js Ts"));
        assert_eq!(rank.value(), 1);
    }

    #[test]
    fn worst_high_card_is_7462() {
        let rank = evaluate_five(hand("7d 5c 4h 3s 2d"));
        assert_eq!(rank.value(), 7462);
    }

    #[test]
    fn steel_wheel_straight_flush_ranks_tenth() {
        let rank = evaluate_five(hand("5s 4s 3s 2s As"));
        assert_eq!(rank.value(), 10);
    }

    #[test]
    fn four_of_a_kind_beats_full_house() {
        let quads = evaluate_five(hand("Ah As Ad Ac Kh"));
        let boat = evaluate_five(hand("Kh Ks Kd Ac Ah"));
        assert!(quads.value() < boat.value());
    }

    #[test]
    fn flush_beats_straight() {
        let flush = evaluate_five(hand("2s 5s 8s Js Ks"));
        let straight = evaluate_five(hand("9h 8c 7d 6s 5h"));
        assert!(flush.value() < straight.value());
    }
}
