//! # Card Module
//!
//! This module provides the `Card` type and its supporting `Rank`/`Suit`
//! enums. A card is a 32-bit value carrying four redundant projections of
//! (rank, suit), chosen so that every evaluator in [`crate::evaluator`] can
//! extract the projection it needs without re-deriving it:
//!
//! - bits 16..=28: one-hot bit-rank (bit `16+r` set, `r` = rank index 0..=12).
//! - bits 12..=15: one-hot suit nibble (spade=1, heart=2, diamond=4, club=8).
//! - bits 8..=11: the rank as a 4-bit integer.
//! - bits 0..=7: the rank's prime factor, from `(2,3,5,7,11,13,17,19,23,29,31,37,41)`.
//!
//! The product of the five primes of a five-card hand is a unique key per
//! rank-multiset; the OR of the five bit-ranks is a unique key per rank-set;
//! the AND of the five suit nibbles is non-zero exactly when all five cards
//! share a suit. Every Cactus-family evaluator is built on these three
//! identities.
//!
//! ## Examples
//!
//! ```rust
//! use holdem_core::card::Card;
//! use std::str::FromStr;
//!
//! let ace_of_spades = Card::from_str("As").unwrap();
//! assert_eq!(ace_of_spades.rank_index(), 12);
//! assert_eq!(ace_of_spades.suit_index(), 0);
//! assert_eq!(ace_of_spades.prime(), 41);
//! ```

use crate::errors::PokerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The thirteen primes assigned to rank indices 0 (Two) through 12 (Ace).
pub const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// All-ones sentinel used wherever a card slot has no valid value.
pub const INVALID_CARD: u32 = u32::MAX;

/// A poker rank, Two through Ace, stored as a zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Build a rank from its zero-based index (0=Two .. 12=Ace).
    pub fn from_index(index: u8) -> Result<Self, PokerError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(PokerError::InvalidCardRank { rank: index })
    }

    /// Zero-based index, 0 (Two) through 12 (Ace).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// This rank's prime factor.
    pub fn prime(self) -> u32 {
        PRIMES[self.index() as usize]
    }

    /// One-hot bit-rank mask (bit `index()` set, unshifted).
    pub fn bit(self) -> u16 {
        1u16 << self.index()
    }

    /// Capital-letter glyph: A K Q J T 9..2.
    pub fn glyph(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Singular name ("Ace", "King", "Nine", ...).
    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Plural name ("Sixes" is special-cased; otherwise append "s").
    pub fn plural_name(self) -> String {
        match self {
            Rank::Six => "Sixes".to_string(),
            other => format!("{}s", other.name()),
        }
    }

    /// Parse a single rank character, including the two-character "10".
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A card suit, encoded the way the card layout needs it: one bit each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Spade = 1,
    Heart = 2,
    Diamond = 4,
    Club = 8,
}

impl Suit {
    /// All four suits in presentation order (spade, heart, diamond, club).
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Build a suit from its presentation-order index (0=spade .. 3=club).
    pub fn from_index(index: u8) -> Result<Self, PokerError> {
        match index {
            0 => Ok(Suit::Spade),
            1 => Ok(Suit::Heart),
            2 => Ok(Suit::Diamond),
            3 => Ok(Suit::Club),
            _ => Err(PokerError::InvalidCardSuit { suit: index }),
        }
    }

    /// Build a suit from its one-hot bit value (1, 2, 4, or 8).
    pub fn from_bit(bit: u8) -> Result<Self, PokerError> {
        match bit {
            1 => Ok(Suit::Spade),
            2 => Ok(Suit::Heart),
            4 => Ok(Suit::Diamond),
            8 => Ok(Suit::Club),
            _ => Err(PokerError::InvalidCardSuit { suit: bit }),
        }
    }

    /// Presentation-order index: spade=0, heart=1, diamond=2, club=3.
    pub fn index(self) -> u8 {
        match self {
            Suit::Spade => 0,
            Suit::Heart => 1,
            Suit::Diamond => 2,
            Suit::Club => 3,
        }
    }

    /// The one-hot nibble value used in the card layout.
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn glyph(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
        }
    }

    pub fn plural_name(self) -> String {
        format!("{}s", self.name())
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Unicode playing-card code points, one row per suit, ordered Ace, Two..Ten,
/// Jack, Knight, Queen, King. The knight slot is treated as a Jack substitute
/// per the parser's documented surface.
const UNICODE_SPADES: [char; 14] = [
    '🂡', '🂢', '🂣', '🂤', '🂥', '🂦', '🂧', '🂨', '🂩', '🂪', '🂫', '🂬', '🂭', '🂮',
];
const UNICODE_HEARTS: [char; 14] = [
    '🂱', '🂲', '🂳', '🂴', '🂵', '🂶', '🂷', '🂸', '🂹', '🂺', '🂻', '🂼', '🂽', '🂾',
];
const UNICODE_DIAMONDS: [char; 14] = [
    '🃁', '🃂', '🃃', '🃄', '🃅', '🃆', '🃇', '🃈', '🃉', '🃊', '🃋', '🃌', '🃍', '🃎',
];
const UNICODE_CLUBS: [char; 14] = [
    '🃑', '🃒', '🃓', '🃔', '🃕', '🃖', '🃗', '🃘', '🃙', '🃚', '🃛', '🃜', '🃝', '🃞',
];

/// Rank order within a Unicode suit block: Ace, 2..10, Jack, Knight, Queen, King.
fn rank_for_unicode_slot(slot: usize) -> Option<Rank> {
    match slot {
        0 => Some(Rank::Ace),
        1 => Some(Rank::Two),
        2 => Some(Rank::Three),
        3 => Some(Rank::Four),
        4 => Some(Rank::Five),
        5 => Some(Rank::Six),
        6 => Some(Rank::Seven),
        7 => Some(Rank::Eight),
        8 => Some(Rank::Nine),
        9 => Some(Rank::Ten),
        10 => Some(Rank::Jack),
        11 => Some(Rank::Jack), // Knight, treated as Jack substitute.
        12 => Some(Rank::Queen),
        13 => Some(Rank::King),
        _ => None,
    }
}

fn unicode_lookup(c: char) -> Option<(Rank, Suit)> {
    for (slot, &ch) in UNICODE_SPADES.iter().enumerate() {
        if ch == c {
            return Some((rank_for_unicode_slot(slot)?, Suit::Spade));
        }
    }
    for (slot, &ch) in UNICODE_HEARTS.iter().enumerate() {
        if ch == c {
            return Some((rank_for_unicode_slot(slot)?, Suit::Heart));
        }
    }
    for (slot, &ch) in UNICODE_DIAMONDS.iter().enumerate() {
        if ch == c {
            return Some((rank_for_unicode_slot(slot)?, Suit::Diamond));
        }
    }
    for (slot, &ch) in UNICODE_CLUBS.iter().enumerate() {
        if ch == c {
            return Some((rank_for_unicode_slot(slot)?, Suit::Club));
        }
    }
    None
}

fn suit_from_symbol(c: char) -> Option<Suit> {
    match c {
        's' | 'S' | '♠' | '♤' => Some(Suit::Spade),
        'h' | 'H' | '♥' | '♡' => Some(Suit::Heart),
        'd' | 'D' | '♦' | '♢' => Some(Suit::Diamond),
        'c' | 'C' | '♣' | '♧' => Some(Suit::Club),
        _ => None,
    }
}

/// A single playing card, encoded as the 32-bit layout documented at the
/// top of this module. Two cards compare equal iff their rank and suit
/// match; ordering is by rank first, suit second (spade < heart < diamond <
/// club), matching the presentation order of [`Suit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Construct the 32-bit layout from a rank and suit.
    ///
    /// # Examples
    /// ```
    /// use holdem_core::card::{Card, Rank, Suit};
    ///
    /// let ace_spades = Card::new(Rank::Ace, Suit::Spade);
    /// assert_eq!(ace_spades.rank(), Rank::Ace);
    /// assert_eq!(ace_spades.suit(), Suit::Spade);
    /// ```
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let bit_rank = 1u32 << (16 + rank.index() as u32);
        let suit_nibble = (suit.bit() as u32) << 12;
        let rank_nibble = (rank.index() as u32) << 8;
        let prime = rank.prime();
        Card(bit_rank | suit_nibble | rank_nibble | prime)
    }

    /// The single all-ones sentinel value.
    pub const INVALID: Card = Card(INVALID_CARD);

    /// True if this is the [`Card::INVALID`] sentinel.
    pub fn is_invalid(self) -> bool {
        self.0 == INVALID_CARD
    }

    /// Raw 32-bit representation.
    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn rank(self) -> Rank {
        Rank::from_index(self.rank_index()).expect("card carries a valid rank nibble")
    }

    pub fn suit(self) -> Suit {
        Suit::from_bit(((self.0 >> 12) & 0xF) as u8).expect("card carries a valid suit nibble")
    }

    /// Zero-based rank index, 0 (Two) through 12 (Ace).
    pub fn rank_index(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    /// Presentation-order suit index, 0 (spade) through 3 (club).
    pub fn suit_index(self) -> u8 {
        self.suit().index()
    }

    /// One-hot bit-rank mask, shifted into bits 16..=28.
    pub fn bit_rank(self) -> u32 {
        self.0 & 0x1FFF0000
    }

    /// This card's rank prime (bits 0..=7).
    pub fn prime(self) -> u32 {
        self.0 & 0xFF
    }

    /// One-hot suit nibble (bits 12..=15), unshifted value 1/2/4/8.
    pub fn suit_nibble(self) -> u32 {
        (self.0 >> 12) & 0xF
    }

    /// Index into 0..52 as `suit_index * 13 + rank_index`.
    pub fn card_index(self) -> u8 {
        self.suit_index() * 13 + self.rank_index()
    }

    /// Parse every card found in `text`, skipping whitespace, per the
    /// surface syntax: ASCII rank+suit pairs (including the two-character
    /// "10"), Unicode suit glyphs, and standalone Unicode playing-card
    /// runes.
    pub fn parse(text: &str) -> Result<Vec<Card>, PokerError> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        let mut i = 0usize;
        while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                i += 1;
                continue;
            }
            if let Some((rank, suit)) = unicode_lookup(c) {
                out.push(Card::new(rank, suit));
                i += 1;
                continue;
            }
            // "10" two-character rank prefix.
            if c == '1' && chars.get(i + 1) == Some(&'0') {
                let suit_char = chars
                    .get(i + 2)
                    .copied()
                    .ok_or_else(|| PokerError::InvalidCardAtPosition {
                        position: i,
                        text: text.to_string(),
                    })?;
                let suit =
                    suit_from_symbol(suit_char).ok_or_else(|| PokerError::InvalidCardAtPosition {
                        position: i,
                        text: text.to_string(),
                    })?;
                out.push(Card::new(Rank::Ten, suit));
                i += 3;
                continue;
            }
            if let Some(rank) = Rank::from_char(c) {
                let suit_char = chars
                    .get(i + 1)
                    .copied()
                    .ok_or_else(|| PokerError::InvalidCardAtPosition {
                        position: i,
                        text: text.to_string(),
                    })?;
                let suit =
                    suit_from_symbol(suit_char).ok_or_else(|| PokerError::InvalidCardAtPosition {
                        position: i,
                        text: text.to_string(),
                    })?;
                out.push(Card::new(rank, suit));
                i += 2;
                continue;
            }
            return Err(PokerError::InvalidCardAtPosition {
                position: i,
                text: text.to_string(),
            });
        }
        Ok(out)
    }

    /// Two-character shorthand, e.g. "As", "Td". Formatting beyond this
    /// shorthand is delegated to [`crate::description`].
    pub fn shorthand(self) -> String {
        format!("{}{}", self.rank().glyph(), self.suit().glyph())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.shorthand())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = Card::parse(s)?;
        match cards.as_slice() {
            [card] => Ok(*card),
            _ => Err(PokerError::InvalidCardString {
                string: s.to_string(),
            }),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.rank_index().cmp(&other.rank_index()) {
            Ordering::Equal => self.suit_index().cmp(&other.suit_index()),
            ord => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_produces_the_documented_layout() {
        let card = Card::new(Rank::Ace, Suit::Spade);
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Spade);
        assert_eq!(card.rank_index(), 12);
        assert_eq!(card.suit_index(), 0);
        assert_eq!(card.prime(), 41);
        assert_eq!(card.bit_rank(), 1u32 << 28);
        assert_eq!(card.suit_nibble(), 1);
    }

    #[test]
    fn every_rank_suit_pair_round_trips_and_indexes_uniquely() {
        let mut seen = std::collections::HashSet::new();
        for &rank in Rank::ALL.iter() {
            for &suit in Suit::ALL.iter() {
                let card = Card::new(rank, suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                let idx = card.card_index();
                assert!(idx <= 51);
                assert!(seen.insert(idx), "duplicate card index {}", idx);
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn parse_ascii_shorthand() {
        let cards = Card::parse("Ah Kd 10c 2s").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Heart));
        assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamond));
        assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Club));
        assert_eq!(cards[3], Card::new(Rank::Two, Suit::Spade));
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_unicode_suit_glyphs() {
        let cards = Card::parse("ah AH A♠ a♤").unwrap();
        assert!(cards.iter().all(|c| c.rank() == Rank::Ace));
    }

    #[test]
    fn parse_standalone_unicode_rune() {
        let cards = Card::parse("🂡").unwrap();
        assert_eq!(cards, vec![Card::new(Rank::Ace, Suit::Spade)]);
    }

    #[test]
    fn parse_knight_rune_is_a_jack_substitute() {
        let cards = Card::parse("🂫").unwrap();
        assert_eq!(cards[0].rank(), Rank::Jack);
        assert_eq!(cards[0].suit(), Suit::Spade);
    }

    #[test]
    fn parse_reports_position_on_bad_input() {
        let err = Card::parse("Ah Xz").unwrap_err();
        match err {
            PokerError::InvalidCardAtPosition { position, .. } => assert_eq!(position, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parse_format_round_trip_for_every_card() {
        for &rank in Rank::ALL.iter() {
            for &suit in Suit::ALL.iter() {
                let card = Card::new(rank, suit);
                let text = card.shorthand();
                let parsed = Card::parse(&text).unwrap();
                assert_eq!(parsed, vec![card]);
            }
        }
    }

    #[test]
    fn ordering_is_rank_then_suit() {
        let two_spades = Card::new(Rank::Two, Suit::Spade);
        let two_hearts = Card::new(Rank::Two, Suit::Heart);
        let three_spades = Card::new(Rank::Three, Suit::Spade);
        assert!(two_spades < two_hearts);
        assert!(two_hearts < three_spades);
    }

    #[test]
    fn serialization_round_trip() {
        let card = Card::new(Rank::Queen, Suit::Club);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }

    #[test]
    fn invalid_sentinel_is_all_ones() {
        assert!(Card::INVALID.is_invalid());
        assert_eq!(Card::INVALID.bits(), u32::MAX);
    }
}
