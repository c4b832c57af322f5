//! # Hole Cards Module
//!
//! This module provides the `HoleCards` struct for representing a player's two private cards
//! in Texas Hold'em and Hold'em-family variants (Omaha's four-card pocket is represented
//! directly as a `Hand` fragment in [`crate::hand`] instead, since its notation and
//! combinatorial selection rules differ).
//!
//! ## Key Features
//!
//! - **Validation**: Ensures no duplicate cards during construction
//! - **Properties**: Pair detection, suitedness, connectivity analysis
//! - **Notation**: Standard poker abbreviations ("AKs", "QQ", "T9o")
//! - **Serialization**: Full serde support for persistence
//!
//! ## Examples
//!
//! ```rust
//! use holdem_core::hole_cards::HoleCards;
//!
//! let hole_cards = HoleCards::from_notation("AKs").unwrap();
//! assert!(hole_cards.is_suited());
//! assert!(!hole_cards.is_pair());
//! assert_eq!(hole_cards.connectivity(), 0);
//! assert_eq!(hole_cards.notation(), "AKs");
//! ```

use crate::card::{Card, Rank, Suit};
use crate::errors::PokerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Represents a player's two private hole cards in poker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoleCards {
    /// The two cards, stored in rank-descending order
    pub cards: [Card; 2],
}

impl HoleCards {
    /// Create new hole cards from two individual cards
    ///
    /// # Errors
    /// Returns an error if the cards are identical (same rank and suit)
    pub fn new(card1: Card, card2: Card) -> Result<Self, PokerError> {
        if card1 == card2 {
            return Err(PokerError::DuplicateCard(card1));
        }

        let (high, low) = if card1.rank() >= card2.rank() {
            (card1, card2)
        } else {
            (card2, card1)
        };

        Ok(Self { cards: [high, low] })
    }

    /// Create hole cards from standard poker notation
    ///
    /// # Supported Formats
    /// - "AKs" - suited Ace-King
    /// - "QQ" - pocket Queens
    /// - "T9o" - offsuit Ten-Nine
    pub fn from_notation(s: &str) -> Result<Self, PokerError> {
        if s.len() < 2 || s.len() > 3 {
            return Err(PokerError::InvalidHoleCardsNotationLength { length: s.len() });
        }

        let chars: Vec<char> = s.chars().collect();

        let rank1 = Rank::from_char(chars[0]).ok_or(PokerError::InvalidRankCharacter {
            character: chars[0],
        })?;
        let rank2 = Rank::from_char(chars[1]).ok_or(PokerError::InvalidRankCharacter {
            character: chars[1],
        })?;

        let suited = if s.len() == 3 {
            if rank1 == rank2 {
                return Err(PokerError::PairsCannotHaveSuitedness);
            }
            match chars[2] {
                's' => true,
                'o' => false,
                _ => {
                    return Err(PokerError::InvalidSuitednessIndicator {
                        indicator: chars[2],
                    })
                }
            }
        } else {
            if rank1 != rank2 {
                return Err(PokerError::NonPairMustSpecifySuitedness);
            }
            false
        };

        let suit1 = Suit::Spade;
        let suit2 = if suited { Suit::Spade } else { Suit::Heart };

        let card1 = Card::new(rank1, suit1);
        let card2 = Card::new(rank2, suit2);

        Self::new(card1, card2)
    }

    /// Get the first card (higher rank)
    pub fn first_card(&self) -> Card {
        self.cards[0]
    }

    /// Get the second card (lower rank)
    pub fn second_card(&self) -> Card {
        self.cards[1]
    }

    /// Check if the hole cards form a pocket pair
    pub fn is_pair(&self) -> bool {
        self.cards[0].rank() == self.cards[1].rank()
    }

    /// Check if both cards have the same suit (suited)
    pub fn is_suited(&self) -> bool {
        self.cards[0].suit() == self.cards[1].suit()
    }

    /// Calculate the connectivity between the two cards: the number of
    /// ranks strictly between them (0 = adjacent). Pairs are perfectly
    /// connected (0).
    pub fn connectivity(&self) -> u8 {
        if self.is_pair() {
            0
        } else {
            let rank1 = self.cards[0].rank_index() as i8;
            let rank2 = self.cards[1].rank_index() as i8;
            (rank1 - rank2 - 1) as u8
        }
    }

    /// Generate standard poker notation for the hole cards
    pub fn notation(&self) -> String {
        let rank1_char = self.cards[0].rank().glyph();
        let rank2_char = self.cards[1].rank().glyph();

        if self.is_pair() {
            format!("{}{}", rank1_char, rank2_char)
        } else if self.is_suited() {
            format!("{}{}s", rank1_char, rank2_char)
        } else {
            format!("{}{}o", rank1_char, rank2_char)
        }
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cards[0], self.cards[1])
    }
}

impl PartialOrd for HoleCards {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HoleCards {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.cards[0].rank_index().cmp(&other.cards[0].rank_index()) {
            Ordering::Equal => match self.cards[1].rank_index().cmp(&other.cards[1].rank_index()) {
                Ordering::Equal => self.is_suited().cmp(&other.is_suited()),
                ord => ord,
            },
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_hole_cards_creation() {
        let card1 = Card::from_str("As").unwrap();
        let card2 = Card::from_str("Ks").unwrap();
        let hole_cards = HoleCards::new(card1, card2).unwrap();

        assert_eq!(hole_cards.first_card(), card1);
        assert_eq!(hole_cards.second_card(), card2);
    }

    #[test]
    fn test_duplicate_cards_error() {
        let card = Card::from_str("As").unwrap();
        let result = HoleCards::new(card, card);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PokerError::DuplicateCard(_)));
    }

    #[test]
    fn test_from_notation_pairs() {
        let aa = HoleCards::from_notation("AA").unwrap();
        assert!(aa.is_pair());
        assert_eq!(aa.notation(), "AA");
    }

    #[test]
    fn test_from_notation_suited() {
        let aks = HoleCards::from_notation("AKs").unwrap();
        assert!(aks.is_suited());
        assert!(!aks.is_pair());
        assert_eq!(aks.notation(), "AKs");
        assert_eq!(aks.connectivity(), 0);
    }

    #[test]
    fn test_from_notation_offsuit() {
        let ako = HoleCards::from_notation("AKo").unwrap();
        assert!(!ako.is_suited());
        assert_eq!(ako.notation(), "AKo");
    }

    #[test]
    fn test_connectivity() {
        let one_gapper = HoleCards::from_notation("J9s").unwrap();
        assert_eq!(one_gapper.connectivity(), 1);
        let a2s = HoleCards::from_notation("A2s").unwrap();
        assert_eq!(a2s.connectivity(), 11);
    }

    #[test]
    fn test_invalid_notation() {
        assert!(HoleCards::from_notation("").is_err());
        assert!(HoleCards::from_notation("A").is_err());
        assert!(HoleCards::from_notation("AKx").is_err());
        assert!(HoleCards::from_notation("AK").is_err());
        assert!(HoleCards::from_notation("1K").is_err());
    }

    #[test]
    fn test_ordering() {
        let aks = HoleCards::from_notation("AKs").unwrap();
        let ako = HoleCards::from_notation("AKo").unwrap();
        let aqs = HoleCards::from_notation("AQs").unwrap();
        assert!(aks > ako);
        assert!(aqs < aks);
    }

    #[test]
    fn test_serialization() {
        let hole_cards = HoleCards::from_notation("AKs").unwrap();
        let serialized = serde_json::to_string(&hole_cards).unwrap();
        let deserialized: HoleCards = serde_json::from_str(&serialized).unwrap();
        assert_eq!(hole_cards, deserialized);
    }

    #[test]
    fn test_hole_cards_notation_round_trip() {
        let all_notations = [
            "AA", "KK", "QQ", "AKs", "AKo", "T9s", "J8o", "22",
        ];
        for notation in all_notations.iter() {
            let hole_cards = HoleCards::from_notation(notation).unwrap();
            assert_eq!(hole_cards.notation(), *notation);
        }
    }
}
