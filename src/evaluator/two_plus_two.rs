//! # Two-Plus-Two Evaluator
//!
//! The state-machine evaluator: starting from state 53, each card index
//! (0..52) walks `state = TABLE[state + card_index + 1]` until seven
//! transitions have been taken, at which point the state itself is the
//! hand's rank. The full ~32.5M-entry transition table this scheme needs
//! is out of scope to ship or generate here (see the design ledger); this
//! module defines the table's shape and loading contract
//! ([`TwoPlusTwoTable`]) and falls back to the fast-cactus 21-subset
//! evaluator whenever no table has been loaded, so the crate's evaluator
//! selection policy (seven cards prefer this path) degrades gracefully.

use super::fast_cactus::evaluate_best_of;
use crate::card::Card;
use crate::rank_score::EvalRank;
use std::sync::Arc;

/// A loaded two-plus-two transition table. The table maps `state + card +
/// 1` to the next state for up to seven card draws starting from state 53;
/// the terminal state after seven draws is the hand rank directly
/// (already oriented low-is-better to match [`EvalRank`]).
pub struct TwoPlusTwoTable {
    transitions: Vec<i32>,
}

impl TwoPlusTwoTable {
    pub const START_STATE: i32 = 53;

    /// Wrap a raw transition table, as produced by an offline table
    /// generator and loaded via [`super::file_io::LutFileManager`].
    pub fn new(transitions: Vec<i32>) -> Self {
        Self { transitions }
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Borrow the raw transition table, for serialization by
    /// [`super::file_io::LutFileManager`].
    pub fn transitions_for_write(&self) -> &[i32] {
        &self.transitions
    }

    /// Walk the table for the given card sequence (any order, 5 to 7
    /// cards), returning the terminal state as an `EvalRank`.
    fn evaluate(&self, cards: &[Card]) -> EvalRank {
        let mut state = Self::START_STATE;
        for card in cards {
            let index = (state + card.card_index() as i32 + 1) as usize;
            state = self.transitions[index];
        }
        EvalRank::new(state.max(0) as u16)
    }
}

/// Evaluate 5, 6, or 7 cards, preferring `table` when present and falling
/// back to the fast-cactus 21-subset evaluator otherwise.
pub fn evaluate(table: Option<&Arc<TwoPlusTwoTable>>, cards: &[Card]) -> EvalRank {
    match table {
        Some(t) if !t.is_empty() => t.evaluate(cards),
        _ => evaluate_best_of(cards),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_table_falls_back_to_fast_cactus() {
        use std::str::FromStr;
        let cards: Vec<Card> = "As Ks Qs Js Ts 2h 3d"
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect();
        let rank = evaluate(None, &cards);
        assert_eq!(rank.value(), 1);
    }

    #[test]
    fn empty_table_also_falls_back() {
        use std::str::FromStr;
        let cards: Vec<Card> = "As Ks Qs Js Ts"
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect();
        let table = Arc::new(TwoPlusTwoTable::new(Vec::new()));
        let rank = evaluate(Some(&table), &cards);
        assert_eq!(rank.value(), 1);
    }
}
