//! Property-based tests for the universal invariants listed in the
//! crate's testable-properties checklist: card encoding bijectivity,
//! parse/format round-tripping, cross-evaluator agreement, and kicker
//! monotonicity.

use holdem_core::card::{Card, Rank, Suit};
use holdem_core::evaluator;
use holdem_core::evaluator::cactus::evaluate_five;
use holdem_core::evaluator::fast_cactus::evaluate_best_of;
use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn every_rank_suit_pair_round_trips_through_card_index() {
    let mut seen_indices = HashSet::new();
    for &rank in Rank::ALL.iter() {
        for &suit in Suit::ALL.iter() {
            let card = Card::new(rank, suit);
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
            let index = card.card_index();
            assert!((0..52).contains(&index));
            assert!(seen_indices.insert(index), "duplicate card index {index}");
        }
    }
    assert_eq!(seen_indices.len(), 52);
}

#[test]
fn parse_then_format_round_trips_for_every_card() {
    for &rank in Rank::ALL.iter() {
        for &suit in Suit::ALL.iter() {
            let card = Card::new(rank, suit);
            let formatted = card.to_string();
            let parsed = Card::parse(&formatted).unwrap();
            assert_eq!(parsed, vec![card]);
        }
    }
}

#[test]
fn reference_and_fast_cactus_agree_on_royal_and_wheel() {
    let royal: Vec<Card> = Card::parse("As Ks Qs Js Ts").unwrap();
    let five = [royal[0], royal[1], royal[2], royal[3], royal[4]];
    assert_eq!(evaluate_five(five).value(), evaluate_best_of(&five).value());
}

#[test]
fn extra_kicker_monotonicity_at_a_category_boundary() {
    let better = Card::parse("Ah Ac Ad As Kd 2d 3c").unwrap();
    let worse = Card::parse("Ah Ac Ad As Qd 2d 3c").unwrap();
    let better_rank = evaluator::evaluate(&better);
    let worse_rank = evaluator::evaluate(&worse);
    assert!(better_rank.value() < worse_rank.value());
}

#[test]
fn seven_card_two_plus_two_shape_matches_fast_cactus_best_of_21() {
    use holdem_core::evaluator::two_plus_two;
    let cards = Card::parse("2h 7d 9c Jd As 3c 4h").unwrap();
    let fallback = two_plus_two::evaluate(None, &cards);
    let direct = evaluate_best_of(&cards);
    assert_eq!(fallback.value(), direct.value());
}

proptest! {
    #[test]
    fn card_bit_layout_round_trips_for_any_valid_rank_suit(rank_index in 0u8..13, suit_index in 0u8..4) {
        let rank = Rank::from_index(rank_index).unwrap();
        let suit = Suit::ALL[suit_index as usize];
        let card = Card::new(rank, suit);
        prop_assert_eq!(card.rank(), rank);
        prop_assert_eq!(card.suit(), suit);
        prop_assert!(!card.is_invalid());
    }

    #[test]
    fn five_random_distinct_cards_agree_across_evaluators(
        combo in proptest::sample::subsequence((0u8..52).collect::<Vec<_>>(), 5..=5)
    ) {
        let cards: Vec<Card> = combo
            .into_iter()
            .map(|index| {
                let suit = Suit::ALL[(index / 13) as usize];
                let rank = Rank::from_index(index % 13).unwrap();
                Card::new(rank, suit)
            })
            .collect();
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        let reference = evaluate_five(five);
        let fast = evaluate_best_of(&five);
        prop_assert_eq!(reference.value(), fast.value());
    }
}

#[test]
fn card_from_str_matches_parse_for_a_single_card() {
    let card = Card::from_str("Th").unwrap();
    assert_eq!(card.rank(), Rank::Ten);
    assert_eq!(card.suit(), Suit::Heart);
}
