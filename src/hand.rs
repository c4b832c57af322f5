//! # Hand Module
//!
//! This module provides the `Hand` struct: an ordered, duplicate-free
//! collection of 1 to 7 cards, generalized from the teacher's fixed 5-7
//! card container to also carry variant pockets (Omaha's 4 cards, Badugi's
//! up-to-4 cards) and partial hands accepted by variants that score short
//! hands under their own rules (spec §9). Evaluation and description are
//! delegated to [`crate::evaluator`] and [`crate::description`]; this
//! module is purely a validated card container plus notation.

use crate::card::Card;
use crate::errors::PokerError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum number of cards a `Hand` may hold (hole cards + board for the
/// deepest double-board variants considered by the evaluator).
pub const MAX_HAND_SIZE: usize = 7;

/// A validated, duplicate-free collection of 1 to 7 cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Construct a hand from cards, validating size (1..=7) and uniqueness.
    pub fn new(cards: Vec<Card>) -> Result<Self, PokerError> {
        if cards.is_empty() || cards.len() > MAX_HAND_SIZE {
            return Err(PokerError::InvalidHandSize { size: cards.len() });
        }
        let mut seen = HashSet::new();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    /// Build a hand from a slice.
    pub fn from_cards(cards: &[Card]) -> Result<Self, PokerError> {
        Self::new(cards.to_vec())
    }

    /// Build a hand by concatenating a pocket with board cards (the common
    /// case of evaluating a player's best hand on a given board).
    pub fn from_pocket_and_board(pocket: &[Card], board: &[Card]) -> Result<Self, PokerError> {
        let mut cards = Vec::with_capacity(pocket.len() + board.len());
        cards.extend_from_slice(pocket);
        cards.extend_from_slice(board);
        Self::new(cards)
    }

    /// Parse a whitespace-separated card notation string, e.g.
    /// `"As Ks Qs Js Ts"`.
    pub fn from_notation(notation: &str) -> Result<Self, PokerError> {
        let cards = Card::parse(notation)?;
        Self::new(cards)
    }

    /// The cards, in the order supplied at construction.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// All `k`-card combinations of this hand's cards, in lexicographic
    /// index order. Used by variant remappers (Omaha's 2-of-4, Badugi's
    /// best-subset search) to enumerate candidate sub-hands.
    pub fn combinations(&self, k: usize) -> Vec<Vec<Card>> {
        crate::odds::combinations(&self.cards, k)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_and_oversized_and_duplicate_hands() {
        assert!(Hand::new(vec![]).is_err());
        let seven = Card::parse("As Ks Qs Js Ts 9s 8s").unwrap();
        assert!(Hand::new(seven).is_ok());
        let eight = Card::parse("As Ks Qs Js Ts 9s 8s 7s").unwrap();
        assert!(Hand::new(eight).is_err());
        let dup = Card::parse("As As Ks Js Ts").unwrap();
        assert!(Hand::new(dup).is_err());
    }

    #[test]
    fn from_notation_round_trips_display() {
        let hand = Hand::from_notation("As Ks Qs Js Ts").unwrap();
        assert_eq!(hand.to_string(), "As Ks Qs Js Ts");
        assert_eq!(hand.len(), 5);
    }

    #[test]
    fn from_pocket_and_board_concatenates() {
        let pocket = Card::parse("Ah Kh").unwrap();
        let board = Card::parse("Qh Jh Th").unwrap();
        let hand = Hand::from_pocket_and_board(&pocket, &board).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.cards()[0], pocket[0]);
        assert_eq!(hand.cards()[4], board[2]);
    }

    #[test]
    fn combinations_of_four_choose_two_has_six_entries() {
        let hand = Hand::from_notation("Ah Kh Qh Jh").unwrap();
        let combos = hand.combinations(2);
        assert_eq!(combos.len(), 6);
    }
}
