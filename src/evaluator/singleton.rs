//! # Evaluator Singleton
//!
//! A single, lazily-built [`Evaluator`] shared process-wide via
//! `once_cell::sync::Lazy<Arc<Evaluator>>`. The evaluator picks among the
//! three interchangeable implementations by card count: the two-plus-two
//! table when loaded and the hand has 5-7 cards, otherwise the
//! fast-cactus perfect-hash evaluator (with its own 21-subset fallback
//! for 6-7 cards), and the plain reference evaluator underneath both.

use super::cactus::evaluate_five;
use super::fast_cactus::evaluate_best_of;
use super::two_plus_two::{self, TwoPlusTwoTable};
use crate::card::Card;
use crate::rank_score::EvalRank;
use once_cell::sync::Lazy;
use std::sync::Arc;

static EVALUATOR_INSTANCE: Lazy<Arc<Evaluator>> = Lazy::new(|| Arc::new(Evaluator::new()));

/// The crate's hand evaluator: a thin dispatcher over the three
/// implementations in [`super`].
pub struct Evaluator {
    two_plus_two: Option<Arc<TwoPlusTwoTable>>,
}

impl Evaluator {
    fn new() -> Self {
        Self { two_plus_two: None }
    }

    /// Install a loaded two-plus-two table, preferring it for future
    /// evaluations of 5-7 card hands.
    pub fn load_two_plus_two(&mut self, table: Arc<TwoPlusTwoTable>) {
        self.two_plus_two = Some(table);
    }

    /// Score any 5, 6, or 7 card hand.
    pub fn evaluate(&self, cards: &[Card]) -> EvalRank {
        match cards.len() {
            5 if self.two_plus_two.is_none() => evaluate_five(
                [cards[0], cards[1], cards[2], cards[3], cards[4]],
            ),
            5 | 6 | 7 => two_plus_two::evaluate(self.two_plus_two.as_ref(), cards),
            n => panic!("evaluator only scores 5-7 card hands, got {n}"),
        }
    }
}

/// Access the process-wide evaluator singleton.
pub fn instance() -> Arc<Evaluator> {
    EVALUATOR_INSTANCE.clone()
}

/// Score any 5, 6, or 7 card hand using the process-wide singleton. This
/// is the entry point [`crate::evaluator::evaluate`] re-exports.
pub fn evaluate(cards: &[Card]) -> EvalRank {
    instance().evaluate(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn cards(notation: &str) -> Vec<Card> {
        notation
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect()
    }

    #[test]
    fn singleton_scores_five_card_royal_flush() {
        let rank = evaluate(&cards("As Ks Qs Js Ts"));
        assert_eq!(rank.value(), 1);
    }

    #[test]
    fn singleton_scores_seven_card_hand_via_best_subset() {
        let rank = evaluate(&cards("As Ks Qs Js Ts 2h 3d"));
        assert_eq!(rank.value(), 1);
    }

    #[test]
    fn fast_cactus_fallback_agrees_with_direct_reference_call() {
        let hand = cards("2h 7d 9c Jd As");
        let direct = evaluate_best_of(&hand);
        assert_eq!(evaluate(&hand).value(), direct.value());
    }
}
