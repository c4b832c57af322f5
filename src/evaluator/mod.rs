//! # Evaluator Module
//!
//! Three interchangeable five/six/seven-card hand evaluators sharing one
//! [`EvalRank`](crate::rank_score::EvalRank) output: the reference
//! Cactus-Kev implementation ([`cactus`]), a perfect-hash speedup over it
//! ([`fast_cactus`]), and an optional state-machine table evaluator
//! ([`two_plus_two`]) that falls back to the perfect-hash path when no
//! table has been loaded. [`singleton`] exposes the process-wide default
//! selection; most callers only need [`evaluate`].

/// Generated Cactus-Kev flush/unique/prime-product lookup tables.
mod cactus_tables;

/// Reference Cactus-Kev five-card evaluator.
pub mod cactus;

/// Perfect-hash speedup over the reference evaluator, with a 21-subset
/// extension for six and seven-card hands.
pub mod fast_cactus;

/// Optional state-machine table evaluator.
pub mod two_plus_two;

/// Process-wide evaluator singleton and selection policy.
pub mod singleton;

/// Atomic, checksummed file persistence for the two-plus-two table.
pub mod file_io;

pub use file_io::{LutFileManager, TableInfo, TableType};
pub use singleton::{instance, Evaluator};
pub use two_plus_two::TwoPlusTwoTable;

use crate::card::Card;
use crate::rank_score::EvalRank;

/// Score a 5, 6, or 7 card hand using the process-wide evaluator
/// singleton (see [`singleton::evaluate`]).
pub fn evaluate(cards: &[Card]) -> EvalRank {
    singleton::evaluate(cards)
}
