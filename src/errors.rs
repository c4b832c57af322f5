//! # Poker Error Types
//!
//! This module defines comprehensive error types for the poker library,
//! replacing string-based errors with structured, type-safe error handling.

use std::fmt;

/// Comprehensive error type for all poker-related operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokerError {
    /// Invalid card rank (must be 0-12)
    InvalidCardRank { rank: u8 },
    /// Invalid card suit (must be 0-3, or one-hot 1/2/4/8)
    InvalidCardSuit { suit: u8 },
    /// Invalid card string format
    InvalidCardString { string: String },
    /// Invalid rank character in card string
    InvalidRankCharacter { character: char },
    /// Invalid suit character in card string
    InvalidSuitCharacter { character: char },
    /// Parse error at a specific character position within the input text
    InvalidCardAtPosition { position: usize, text: String },
    /// Duplicate card found
    DuplicateCard(crate::card::Card),
    /// Invalid hand size for the requested operation
    InvalidHandSize { size: usize },
    /// Invalid hole cards notation length
    InvalidHoleCardsNotationLength { length: usize },
    /// Invalid suitedness indicator (must be 's' or 'o')
    InvalidSuitednessIndicator { indicator: char },
    /// Pairs cannot have suitedness indicators
    PairsCannotHaveSuitedness,
    /// Non-pair hole cards must specify suitedness
    NonPairMustSpecifySuitedness,
    /// Invalid street transition in board dealing
    InvalidStreetTransition,
    /// Flop must consist of exactly 3 cards
    FlopMustBeThreeCards { actual: usize },
    /// Must have exactly 3 cards before dealing turn
    MustHaveThreeCardsForTurn { actual: usize },
    /// Must have exactly 4 cards before dealing river
    MustHaveFourCardsForRiver { actual: usize },
    /// Cannot deal from current street
    CannotDealFromStreet { current_street: String },
    /// Combined hole cards and board exceed the evaluator's card limit
    CombinedCardsExceedLimit { total: usize },
    /// Duplicate cards in new deal
    DuplicateCardsInDeal,
    /// New card duplicates existing board card
    DuplicateWithExistingBoardCard(crate::card::Card),
    /// A variant type id was registered twice
    InvalidId { id: [u8; 2] },
    /// A type id was looked up but refers to a different variant than expected
    MismatchedIdAndType { id: [u8; 2] },
    /// A type id has no registered descriptor
    UnknownTypeId { id: [u8; 2] },
    /// A type id string was not exactly two bytes
    InvalidType { text: String },
    /// The dealer attempted to split runs more than once, or outside a
    /// splittable street
    RunsAlreadySplit,
    /// `ChangeRuns` was called while the dealer was not at a single-run,
    /// split-eligible street
    NotAtSplittableStreet,
    /// An operation requiring a fresh/streeting dealer was attempted
    /// outside that state
    DealerNotReady,
    /// An operation was attempted on a dealer that has already finished
    DealerDone,
    /// An operation requiring at least one active player found none
    NoActivePlayers,
    /// The combination universe supplied to the odds/EV enumerator was empty
    EmptyCombinationUniverse,
    /// A pocket did not have the size the calculator expected
    PocketSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PokerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokerError::InvalidCardRank { rank } => {
                write!(f, "Invalid card rank: {}. Rank must be 0-12", rank)
            }
            PokerError::InvalidCardSuit { suit } => {
                write!(f, "Invalid card suit: {}", suit)
            }
            PokerError::InvalidCardString { string } => {
                write!(
                    f,
                    "Invalid card string: '{}'. Must be exactly one card (rank + suit)",
                    string
                )
            }
            PokerError::InvalidRankCharacter { character } => {
                write!(
                    f,
                    "Invalid rank character: '{}'. Must be 2-9, T, J, Q, K, or A",
                    character
                )
            }
            PokerError::InvalidSuitCharacter { character } => {
                write!(
                    f,
                    "Invalid suit character: '{}'. Must be h, d, c, or s",
                    character
                )
            }
            PokerError::InvalidCardAtPosition { position, text } => {
                write!(f, "Invalid card at position {} in '{}'", position, text)
            }
            PokerError::DuplicateCard(card) => {
                write!(f, "Duplicate card found: {}", card)
            }
            PokerError::InvalidHandSize { size } => {
                write!(f, "Invalid hand size: {}", size)
            }
            PokerError::InvalidHoleCardsNotationLength { length } => {
                write!(
                    f,
                    "Invalid hole cards notation length: {}. Must be 2 or 3 characters",
                    length
                )
            }
            PokerError::InvalidSuitednessIndicator { indicator } => {
                write!(
                    f,
                    "Invalid suitedness indicator: '{}'. Must be 's' or 'o'",
                    indicator
                )
            }
            PokerError::PairsCannotHaveSuitedness => {
                write!(f, "Pairs cannot have suitedness indicators")
            }
            PokerError::NonPairMustSpecifySuitedness => {
                write!(
                    f,
                    "Non-pair hole cards must specify suitedness with 's' or 'o'"
                )
            }
            PokerError::InvalidStreetTransition => {
                write!(f, "Invalid street transition")
            }
            PokerError::FlopMustBeThreeCards { actual } => {
                write!(f, "Flop must consist of exactly 3 cards, got {}", actual)
            }
            PokerError::MustHaveThreeCardsForTurn { actual } => {
                write!(
                    f,
                    "Must have exactly 3 cards before dealing turn, got {}",
                    actual
                )
            }
            PokerError::MustHaveFourCardsForRiver { actual } => {
                write!(
                    f,
                    "Must have exactly 4 cards before dealing river, got {}",
                    actual
                )
            }
            PokerError::CannotDealFromStreet { current_street } => {
                write!(f, "Cannot deal from street: {}", current_street)
            }
            PokerError::CombinedCardsExceedLimit { total } => {
                write!(f, "Combined cards exceed evaluator limit, got {}", total)
            }
            PokerError::DuplicateCardsInDeal => {
                write!(f, "Duplicate cards in new deal")
            }
            PokerError::DuplicateWithExistingBoardCard(card) => {
                write!(f, "New card duplicates existing board card: {}", card)
            }
            PokerError::InvalidId { id } => {
                write!(
                    f,
                    "Type id '{}{}' is already registered",
                    id[0] as char, id[1] as char
                )
            }
            PokerError::MismatchedIdAndType { id } => {
                write!(
                    f,
                    "Type id '{}{}' does not match the requested variant",
                    id[0] as char, id[1] as char
                )
            }
            PokerError::UnknownTypeId { id } => {
                write!(f, "Unknown type id '{}{}'", id[0] as char, id[1] as char)
            }
            PokerError::InvalidType { text } => {
                write!(f, "Invalid type id string: '{}'. Must be two bytes", text)
            }
            PokerError::RunsAlreadySplit => {
                write!(f, "Dealer runs have already been split once")
            }
            PokerError::NotAtSplittableStreet => {
                write!(f, "Dealer is not at a single-run, split-eligible street")
            }
            PokerError::DealerNotReady => {
                write!(f, "Dealer is not in a state that supports this operation")
            }
            PokerError::DealerDone => {
                write!(f, "Dealer has already finished dealing")
            }
            PokerError::NoActivePlayers => {
                write!(f, "No active players remain")
            }
            PokerError::EmptyCombinationUniverse => {
                write!(f, "Combination universe is empty")
            }
            PokerError::PocketSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Pocket size mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for PokerError {}

/// Convert PokerError to String for backward compatibility
impl From<PokerError> for String {
    fn from(error: PokerError) -> String {
        error.to_string()
    }
}

/// Convert &str to PokerError for backward compatibility
impl From<&str> for PokerError {
    fn from(s: &str) -> PokerError {
        PokerError::InvalidCardString {
            string: s.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    #[test]
    fn test_error_display() {
        let error = PokerError::InvalidCardRank { rank: 13 };
        assert_eq!(
            error.to_string(),
            "Invalid card rank: 13. Rank must be 0-12"
        );

        let error = PokerError::DuplicateCard(Card::new(Rank::Ace, Suit::Spade));
        assert!(error.to_string().contains("Duplicate card found"));
    }

    #[test]
    fn test_error_conversion() {
        let error = PokerError::InvalidCardRank { rank: 13 };
        let string: String = error.into();
        assert!(string.contains("Invalid card rank"));

        let error: PokerError = "test string".into();
        assert!(matches!(error, PokerError::InvalidCardString { .. }));
    }

    #[test]
    fn test_catalog_errors_display() {
        let error = PokerError::UnknownTypeId { id: *b"Zz" };
        assert!(error.to_string().contains("Zz"));

        let error = PokerError::PocketSizeMismatch {
            expected: 2,
            actual: 4,
        };
        assert!(error.to_string().contains("expected 2"));
    }
}
