//! # Board Module
//!
//! This module provides the `Board` struct for representing community
//! cards shared by all players. Unlike the teacher's Hold'em-only
//! flop/turn/river builder, this `Board` is variant-agnostic: it is simply
//! the ordered sequence of board cards dealt so far, up to the deepest
//! single-board length the catalog uses (5). Double-board hi/lo variants
//! keep a second `Board` for the low side; street-by-street dealing
//! progression is owned by [`crate::dealer::Dealer`], which knows each
//! variant's street schedule ([`crate::variants::catalog::Street`]).

use crate::card::Card;
use crate::errors::PokerError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Maximum community-card length considered by the catalog's evaluators.
pub const MAX_BOARD_SIZE: usize = 5;

/// Community cards shared by all players in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// An empty board, as dealt before any street.
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build a board from already-dealt cards, validating uniqueness and
    /// the maximum board length.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, PokerError> {
        if cards.len() > MAX_BOARD_SIZE {
            return Err(PokerError::CombinedCardsExceedLimit { total: cards.len() });
        }
        let mut seen = HashSet::new();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
        }
        Ok(Self { cards })
    }

    /// Parse a whitespace-separated card notation string into a board.
    pub fn from_notation(notation: &str) -> Result<Self, PokerError> {
        Self::from_cards(Card::parse(notation)?)
    }

    /// Append newly dealt cards, rejecting duplicates against the existing
    /// board or cards exceeding the maximum board length.
    pub fn extend(&mut self, new_cards: &[Card]) -> Result<(), PokerError> {
        if self.cards.len() + new_cards.len() > MAX_BOARD_SIZE {
            return Err(PokerError::CombinedCardsExceedLimit {
                total: self.cards.len() + new_cards.len(),
            });
        }
        let existing: HashSet<Card> = self.cards.iter().copied().collect();
        for &card in new_cards {
            if existing.contains(&card) || new_cards.iter().filter(|&&c| c == card).count() > 1 {
                return Err(PokerError::DuplicateWithExistingBoardCard(card));
            }
        }
        self.cards.extend_from_slice(new_cards);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_accumulates_streets() {
        let mut board = Board::new();
        board.extend(&Card::parse("Kd Qh Jc").unwrap()).unwrap();
        assert_eq!(board.len(), 3);
        board.extend(&Card::parse("Ts").unwrap()).unwrap();
        board.extend(&Card::parse("9h").unwrap()).unwrap();
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn extend_rejects_duplicates_and_overflow() {
        let mut board = Board::new();
        board.extend(&Card::parse("Kd Qh Jc").unwrap()).unwrap();
        assert!(board.extend(&Card::parse("Kd").unwrap()).is_err());

        let mut board = Board::new();
        board
            .extend(&Card::parse("Kd Qh Jc Ts 9h").unwrap())
            .unwrap();
        assert!(board.extend(&Card::parse("8c").unwrap()).is_err());
    }

    #[test]
    fn from_notation_parses_cards() {
        let board = Board::from_notation("Ah Kh Qh").unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board.to_string(), "Ah Kh Qh");
    }
}
