//! # Poker Core Library
//!
//! A poker-hand evaluation and game-orchestration core: card encoding,
//! decks, hole cards, community boards, three interchangeable hand
//! evaluators, a variant catalog and dealer state machine, and odds/EV
//! calculators, all built around a single `EvalRank` score (lower is
//! better) shared by every supported variant.
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_core::{Card, Deck, HoleCards, Hand, Board};
//! use holdem_core::deck::DeckType;
//! use std::str::FromStr;
//!
//! let card = Card::from_str("As").unwrap();
//! let hole_cards = HoleCards::from_notation("AKs").unwrap();
//!
//! let mut board = Board::new();
//! board.extend(&Card::parse("Kd Qh Jc").unwrap()).unwrap();
//! board.extend(&Card::parse("Ts").unwrap()).unwrap();
//! board.extend(&Card::parse("9h").unwrap()).unwrap();
//!
//! let hand = Hand::from_pocket_and_board(&hole_cards.cards, board.cards()).unwrap();
//! let rank = holdem_core::evaluator::evaluate(hand.cards());
//! println!("{}", holdem_core::description::long_description(rank, hand.cards()));
//!
//! let _ = Deck::new(DeckType::French);
//! ```
//!
//! ## Features
//!
//! - **Cactus-Kev scoring**: bit-packed 32-bit cards, perfect-hash and
//!   reference evaluators agreeing on every input
//! - **Variant-agnostic**: one `EvalRank` scale, with pure remapper
//!   functions adapting it to Short-deck, Omaha, Razz, Lowball, Badugi,
//!   Soko, and more
//! - **Street-driven dealing**: a catalog of variant descriptors drives a
//!   single dealer state machine, including split-pot run-outs
//! - **Odds & EV**: exhaustive enumeration with a 169-row preflop
//!   shortcut and a parallel worker pool for deeper boards

/// Core poker card representation with bit-packed Cactus-Kev encoding.
pub mod card;

/// Deck of cards representation with shuffle and deal functionality.
pub mod deck;

/// Complete poker hand representation for 1-7 card evaluation.
pub mod hand;

/// Hole cards representation for player's private cards.
pub mod hole_cards;

/// Community cards (board) representation.
pub mod board;

/// Comprehensive error types for poker operations.
pub mod errors;

/// Hand evaluation: reference, fast-cactus, and two-plus-two evaluators.
pub mod evaluator;

/// Hand strength score and variant rank remappers.
pub mod rank_score;

/// Variant catalog: type descriptors and street schedules.
pub mod variants;

/// Street-driven dealer state machine.
pub mod dealer;

/// Odds calculation via exhaustive combination enumeration.
pub mod odds;

/// Parallel expected-value calculator.
pub mod ev;

/// Embedded 169-row starting-pockets shortcut table.
pub mod starting;

/// Canonical English hand description renderer.
pub mod description;

pub use board::Board;
pub use card::Card;
pub use deck::Deck;
pub use errors::PokerError;
pub use evaluator::Evaluator;
pub use hand::Hand;
pub use hole_cards::HoleCards;
pub use rank_score::EvalRank;
pub use variants::{TypeDescriptor, TypeRegistry};

#[cfg(test)]
mod tests {}
