//! # Deck Module
//!
//! This module provides the `Deck` struct together with `DeckType` (the
//! family of reduced decks used by Short/Manila/Spanish/Royal variants) and
//! the `Shuffler` capability trait the deck consumes for randomization.
//!
//! ## Deck Representation
//!
//! A deck holds the full underlying card sequence `v` (suit-major, rank
//! ascending within each suit: Spade 2..Ace, Heart 2..Ace, ...), a draw
//! cursor, and a logical limit (`limit = k * |unshuffled|` for a `Shoe(k)`).
//! `remaining()` is always `max(0, limit - cursor)`; after any sequence of
//! draws, the concatenation of returned cards equals the first `cursor`
//! positions of the underlying sequence.
//!
//! ## Examples
//!
//! ```rust
//! use holdem_core::deck::{Deck, DeckType};
//! use rand::SeedableRng;
//!
//! let mut deck = Deck::new(DeckType::French);
//! assert_eq!(deck.remaining(), 52);
//!
//! let mut rng = rand::rngs::StdRng::from_seed([1; 32]);
//! deck.shuffle(&mut rng);
//!
//! let hole_cards = deck.draw(2);
//! assert_eq!(hole_cards.len(), 2);
//! assert_eq!(deck.remaining(), 50);
//! ```

use crate::card::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The family of decks consumed by the variant catalog, encoded as the
/// lowest rank included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckType {
    /// 52 cards, Two and up.
    French,
    /// 36 cards, Six and up.
    Short,
    /// 32 cards, Seven and up.
    Manila,
    /// 28 cards, Eight and up.
    Spanish,
    /// 20 cards, Ten and up.
    Royal,
    /// `k` concatenated repetitions of the French deck (a casino shoe).
    Shoe(u8),
}

impl DeckType {
    /// The lowest rank included in a single repetition of this deck.
    fn lowest_rank(self) -> Rank {
        match self {
            DeckType::French | DeckType::Shoe(_) => Rank::Two,
            DeckType::Short => Rank::Six,
            DeckType::Manila => Rank::Seven,
            DeckType::Spanish => Rank::Eight,
            DeckType::Royal => Rank::Ten,
        }
    }

    /// The unshuffled card sequence for one repetition of this deck type,
    /// suit-major then ascending rank.
    fn unshuffled_once(self) -> Vec<Card> {
        let lowest = self.lowest_rank().index();
        let mut cards = Vec::new();
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                if rank.index() >= lowest {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Number of repetitions making up this deck (1 unless `Shoe(k)`).
    fn repetitions(self) -> u8 {
        match self {
            DeckType::Shoe(k) => k.max(1),
            _ => 1,
        }
    }

    /// The full underlying sequence: `repetitions()` copies of
    /// `unshuffled_once()`.
    pub fn unshuffled(self) -> Vec<Card> {
        let once = self.unshuffled_once();
        let mut all = Vec::with_capacity(once.len() * self.repetitions() as usize);
        for _ in 0..self.repetitions() {
            all.extend_from_slice(&once);
        }
        all
    }

    /// The deck's card set with `exclude` removed from every repetition's
    /// worth of the base order (duplicates across shoe repetitions are not
    /// removed — only cards literally equal to an excluded card).
    pub fn exclude(self, exclude: &[Card]) -> Vec<Card> {
        let excluded: HashSet<Card> = exclude.iter().copied().collect();
        self.unshuffled()
            .into_iter()
            .filter(|c| !excluded.contains(c))
            .collect()
    }
}

/// The capability a deck needs to randomize itself. Implemented for
/// anything that can swap two positions and be driven a fixed number of
/// times; this is the only randomness dependency in the crate.
pub trait Shuffler {
    /// Randomize the first `n` positions of a sequence by calling
    /// `swap(i, j)` as many times as needed.
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize));
}

/// A `rand::Rng`-backed shuffler using a Fisher-Yates pass, the default and
/// only shuffler implementation the crate ships.
pub struct RngShuffler<'a, R: rand::Rng> {
    pub rng: &'a mut R,
}

impl<'a, R: rand::Rng> Shuffler for RngShuffler<'a, R> {
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in (1..n).rev() {
            let j = self.rng.random_range(0..=i);
            swap(i, j);
        }
    }
}

/// A deck of cards: the full underlying sequence, a draw cursor, and a
/// logical limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
    limit: usize,
}

impl Deck {
    /// Create a fresh, unshuffled deck of the given type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use holdem_core::deck::{Deck, DeckType};
    ///
    /// let deck = Deck::new(DeckType::Short);
    /// assert_eq!(deck.remaining(), 36);
    /// ```
    pub fn new(deck_type: DeckType) -> Self {
        let cards = deck_type.unshuffled();
        let limit = cards.len();
        Self {
            cards,
            cursor: 0,
            limit,
        }
    }

    /// Create a deck from an explicit card sequence (e.g. the result of
    /// `DeckType::exclude`), useful for dealing against a known dead-card
    /// set.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let limit = cards.len();
        Self {
            cards,
            cursor: 0,
            limit,
        }
    }

    /// Shuffle the deck using the supplied shuffler, running it `times`
    /// times over the *entire* underlying sequence (not just the
    /// unconsumed portion), per the deck contract.
    pub fn shuffle_with<S: Shuffler>(&mut self, shuffler: &mut S, times: usize) {
        let cards = &mut self.cards;
        for _ in 0..times {
            shuffler.shuffle(cards.len(), &mut |i, j| cards.swap(i, j));
        }
    }

    /// Convenience wrapper over [`Deck::shuffle_with`] for a plain
    /// `rand::Rng`, run once.
    pub fn shuffle<R: rand::Rng>(&mut self, rng: &mut R) {
        let mut shuffler = RngShuffler { rng };
        self.shuffle_with(&mut shuffler, 1);
    }

    /// Draw up to `n` cards, advancing the cursor by
    /// `min(n, limit - cursor)`. Never returns more than requested, may
    /// return fewer if the deck is exhausted; never panics.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let available = self.remaining();
        let take = n.min(available);
        let start = self.cursor;
        self.cursor += take;
        self.cards[start..start + take].to_vec()
    }

    /// Draw a single card, or `None` if the deck is exhausted.
    pub fn draw_one(&mut self) -> Option<Card> {
        let drawn = self.draw(1);
        drawn.into_iter().next()
    }

    /// Cards remaining to be drawn.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.cursor)
    }

    /// True if no cards remain.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Reset the draw cursor to the start without reshuffling.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// The full underlying sequence (both drawn and undrawn cards).
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards already drawn, in draw order.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// The cards not yet drawn.
    pub fn undrawn(&self) -> &[Card] {
        &self.cards[self.cursor..self.limit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn new_french_deck_has_52_cards() {
        let deck = Deck::new(DeckType::French);
        assert_eq!(deck.remaining(), 52);
        let set: HashSet<Card> = deck.all_cards().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn reduced_deck_sizes_match_spec() {
        assert_eq!(Deck::new(DeckType::Short).remaining(), 36);
        assert_eq!(Deck::new(DeckType::Manila).remaining(), 32);
        assert_eq!(Deck::new(DeckType::Spanish).remaining(), 28);
        assert_eq!(Deck::new(DeckType::Royal).remaining(), 20);
    }

    #[test]
    fn shoe_multiplies_the_unshuffled_order_and_limit() {
        let deck = Deck::new(DeckType::Shoe(2));
        assert_eq!(deck.remaining(), 104);
        assert_eq!(deck.all_cards().len(), 104);
        assert_eq!(deck.all_cards()[0], deck.all_cards()[52]);
    }

    #[test]
    fn draw_advances_cursor_and_never_exceeds_remaining() {
        let mut deck = Deck::new(DeckType::French);
        let five = deck.draw(5);
        assert_eq!(five.len(), 5);
        assert_eq!(deck.remaining(), 47);

        let mut deck = Deck::new(DeckType::French);
        let all = deck.draw(60);
        assert_eq!(all.len(), 52);
        assert!(deck.is_empty());
        assert!(deck.draw(5).is_empty());
        assert!(deck.draw_one().is_none());
    }

    #[test]
    fn drawn_cards_equal_the_prefix_of_the_underlying_sequence() {
        let mut deck = Deck::new(DeckType::French);
        let first = deck.draw(10);
        assert_eq!(first, deck.drawn());
        assert_eq!(deck.drawn(), &deck.all_cards()[..10]);
    }

    #[test]
    fn shuffle_preserves_card_set_and_changes_order() {
        let mut deck = Deck::new(DeckType::French);
        let original: Vec<Card> = deck.all_cards().to_vec();
        let mut rng = rand::rngs::StdRng::from_seed([7; 32]);
        deck.shuffle(&mut rng);
        assert_ne!(deck.all_cards(), original.as_slice());
        let set: HashSet<Card> = deck.all_cards().iter().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn exclude_removes_named_cards() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spade);
        let cards = DeckType::French.exclude(&[ace_spades]);
        assert_eq!(cards.len(), 51);
        assert!(!cards.contains(&ace_spades));
    }

    #[test]
    fn reset_rewinds_cursor_without_reshuffling() {
        let mut deck = Deck::new(DeckType::French);
        deck.draw(10);
        let snapshot = deck.all_cards().to_vec();
        deck.reset();
        assert_eq!(deck.remaining(), 52);
        assert_eq!(deck.all_cards(), snapshot.as_slice());
    }

    #[test]
    fn serialization_round_trip() {
        let mut deck = Deck::new(DeckType::French);
        deck.draw(5);
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(back.remaining(), deck.remaining());
        assert_eq!(back.all_cards(), deck.all_cards());
    }
}
