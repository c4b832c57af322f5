//! # Description Renderer
//!
//! Turns a finished `(EvalRank, best-five-cards)` pair into the canonical
//! English text from the category table: a short form ("Ace-high") and a
//! long form ("Straight Flush, Ace-high, Royal"). `Invalid` and the
//! zero-value sentinel both render as `"None"`, matching the spec's
//! user-visible contract for unscorable hands.

use crate::card::{Card, Rank};
use crate::rank_score::{self, EvalRank, HandCategory};

/// Straight flush epithets, by the straight's high card.
fn straight_flush_epithet(high: Rank) -> Option<&'static str> {
    match high {
        Rank::Ace => Some("Royal"),
        Rank::King => Some("Platinum Oxide"),
        Rank::Five => Some("Steel Wheel"),
        _ => None,
    }
}

fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for c in cards {
        counts[c.rank_index() as usize] += 1;
    }
    counts
}

fn ranks_descending_by_count_then_rank(cards: &[Card]) -> Vec<Rank> {
    let counts = rank_counts(cards);
    let mut entries: Vec<(u8, u8)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(i, &n)| (i as u8, n))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    entries
        .into_iter()
        .map(|(i, _)| Rank::from_index(i).unwrap())
        .collect()
}

/// Is this straight's low card an ace (the wheel, A-2-3-4-5)? Used to
/// pick the straight's "high" rank for display, since a wheel's highest
/// dealt card is the ace but it plays as a five-high straight.
fn straight_high_rank(cards: &[Card]) -> Rank {
    let mut indices: Vec<u8> = cards.iter().map(|c| c.rank_index()).collect();
    indices.sort_unstable();
    indices.dedup();
    if indices == [0, 1, 2, 3, 12] {
        Rank::Five
    } else {
        Rank::from_index(*indices.last().unwrap()).unwrap()
    }
}

/// Render the canonical short-form description ("Ace-high", "Aces full
/// of Kings", ...).
pub fn short_description(rank: EvalRank, best: &[Card]) -> String {
    if rank.is_invalid() || rank.value() == 0 {
        return "None".to_string();
    }
    let ranks = ranks_descending_by_count_then_rank(best);
    match rank.category() {
        HandCategory::StraightFlush => {
            format!("{}-high", straight_high_rank(best).name())
        }
        HandCategory::FourOfAKind => format!("{}s", ranks[0].name()),
        HandCategory::FullHouse => format!("{}s full of {}s", ranks[0].name(), ranks[1].name()),
        HandCategory::Flush => format!("{}-high", ranks[0].name()),
        HandCategory::Straight => format!("{}-high", straight_high_rank(best).name()),
        HandCategory::ThreeOfAKind => format!("{}s", ranks[0].name()),
        HandCategory::TwoPair => format!("{}s over {}s", ranks[0].name(), ranks[1].name()),
        HandCategory::Pair => format!("{}s", ranks[0].name()),
        HandCategory::HighCard => format!("{}-high", ranks[0].name()),
        HandCategory::Invalid => "None".to_string(),
    }
}

/// Render the canonical long-form description ("Straight Flush,
/// Ace-high, Royal", "Pair, Aces, kickers King, Queen, Jack", ...).
pub fn long_description(rank: EvalRank, best: &[Card]) -> String {
    if rank.is_invalid() || rank.value() == 0 {
        return "None".to_string();
    }
    let ranks = ranks_descending_by_count_then_rank(best);
    match rank.category() {
        HandCategory::StraightFlush => {
            let high = straight_high_rank(best);
            match straight_flush_epithet(high) {
                Some(epithet) => format!("Straight Flush, {}-high, {}", high.name(), epithet),
                None => format!("Straight Flush, {}-high", high.name()),
            }
        }
        HandCategory::FourOfAKind => {
            format!("Four of a Kind, {}s, kicker {}", ranks[0].name(), ranks[1].name())
        }
        HandCategory::FullHouse => {
            format!("Full House, {}s full of {}s", ranks[0].name(), ranks[1].name())
        }
        HandCategory::Flush => format!(
            "Flush, {}-high, kickers {}, {}, {}, {}",
            ranks[0].name(), ranks[1].name(), ranks[2].name(), ranks[3].name(), ranks[4].name()
        ),
        HandCategory::Straight => format!("Straight, {}-high", straight_high_rank(best).name()),
        HandCategory::ThreeOfAKind => format!(
            "Three of a Kind, {}s, kickers {}, {}",
            ranks[0].name(), ranks[1].name(), ranks[2].name()
        ),
        HandCategory::TwoPair => format!(
            "Two Pair, {}s over {}s, kicker {}",
            ranks[0].name(), ranks[1].name(), ranks[2].name()
        ),
        HandCategory::Pair => format!(
            "Pair, {}s, kickers {}, {}, {}",
            ranks[0].name(), ranks[1].name(), ranks[2].name(), ranks[3].name()
        ),
        HandCategory::HighCard => format!(
            "{}-high, kickers {}, {}, {}, {}",
            ranks[0].name(), ranks[1].name(), ranks[2].name(), ranks[3].name(), ranks[4].name()
        ),
        HandCategory::Invalid => "None".to_string(),
    }
}

/// Render an ace-to-five low hand (Razz, Eight-or-better) in the
/// standard "high card of the low, kickers ..." style, e.g.
/// `"Seven-low, kickers Five, Four, Three, Two"`. `cards` need not be
/// pre-sorted; this renders whatever five distinct-rank cards the caller
/// passes, so callers applying the eight-or-better qualifier should
/// reject non-qualifying hands before calling this.
pub fn low_description(cards: [Card; 5]) -> String {
    let sorted = rank_score::low_cards_descending(cards);
    format!(
        "{}-low, kickers {}, {}, {}, {}",
        sorted[0].rank().name(),
        sorted[1].rank().name(),
        sorted[2].rank().name(),
        sorted[3].rank().name(),
        sorted[4].rank().name(),
    )
}

/// Render a Razz hand: identical wording to [`low_description`], since
/// Razz is plain ace-to-five low with no eight-or-better qualifier.
pub fn razz_description(cards: [Card; 5]) -> String {
    low_description(cards)
}

/// Render a Badugi hand from its full pocket: finds the winning
/// distinct-suit, distinct-rank subset (aces low) and lists its ranks
/// descending, e.g. `"Four, Three, Two-low"` for a 3-card badugi, or
/// `"None"` if no card qualifies (a hand with no valid 1-card subset,
/// which cannot happen for any non-empty pocket).
pub fn badugi_description(cards: &[Card]) -> String {
    match rank_score::badugi_best_subset(cards) {
        None => "None".to_string(),
        Some(subset) => {
            let names: Vec<&str> = subset.iter().map(|c| c.rank().name()).collect();
            match names.split_last() {
                Some((last, rest)) if !rest.is_empty() => {
                    format!("{}, {}-low", rest.join(", "), last)
                }
                Some((last, _)) => format!("{}-low", last),
                None => "None".to_string(),
            }
        }
    }
}

/// Render a Soko four-card hand, naming its band the way the hi-hand
/// renderer names a five-card one, shifted down to Soko's four-card
/// bands (Four Flush and Four Straight slot between Two Pair and Pair).
pub fn soko_description(cards: [Card; 4]) -> String {
    let mut rank_counts = [0u8; 13];
    for c in cards.iter() {
        rank_counts[c.rank_index() as usize] += 1;
    }
    let suits_match = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
    let mut indices: Vec<u8> = cards.iter().map(|c| c.rank_index()).collect();
    indices.sort_unstable();
    indices.dedup();
    let is_straight = indices.len() == 4 && indices[3] - indices[0] == 3;

    let mut ranks: Vec<(u8, u8)> = rank_counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(i, &n)| (i as u8, n))
        .collect();
    ranks.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    let name = |i: u8| Rank::from_index(i).unwrap().name();

    if rank_counts.iter().any(|&c| c == 4) {
        format!("Four of a Kind, {}s", name(ranks[0].0))
    } else if rank_counts.iter().any(|&c| c == 3) {
        format!("Three of a Kind, {}s, kicker {}", name(ranks[0].0), name(ranks[1].0))
    } else if rank_counts.iter().filter(|&&c| c == 2).count() == 2 {
        format!("Two Pair, {}s over {}s", name(ranks[0].0), name(ranks[1].0))
    } else if is_straight && suits_match {
        format!("Four Straight Flush, {}-high", name(indices[3]))
    } else if suits_match {
        format!("Four Flush, {}-high", name(indices[3]))
    } else if is_straight {
        format!("Four Straight, {}-high", name(indices[3]))
    } else if rank_counts.iter().filter(|&&c| c == 2).count() == 1 {
        format!("Pair, {}s", name(ranks[0].0))
    } else {
        format!("{}-high", name(indices[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator;
    use std::str::FromStr;

    fn best(notation: &str) -> Vec<Card> {
        notation.split_whitespace().map(|s| Card::from_str(s).unwrap()).collect()
    }

    #[test]
    fn royal_flush_renders_with_royal_epithet() {
        let cards = best("Ah Kh Qh Jh Th");
        let rank = evaluator::evaluate(&cards);
        assert_eq!(long_description(rank, &cards), "Straight Flush, Ace-high, Royal");
    }

    #[test]
    fn steel_wheel_renders_with_steel_wheel_epithet() {
        let cards = best("5c 4c 3c 2c Ac");
        let rank = evaluator::evaluate(&cards);
        assert_eq!(long_description(rank, &cards), "Straight Flush, Five-high, Steel Wheel");
    }

    #[test]
    fn four_of_a_kind_names_quads_and_kicker() {
        let cards = best("Ah As Ad Ac Kh");
        let rank = evaluator::evaluate(&cards);
        assert_eq!(long_description(rank, &cards), "Four of a Kind, Aces, kicker King");
    }

    #[test]
    fn low_description_names_high_card_and_kickers_ace_low() {
        let cards = best("7h 5s 4d 3c 2h");
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        assert_eq!(low_description(five), "Seven-low, kickers Five, Four, Three, Two");
    }

    #[test]
    fn low_description_treats_ace_as_lowest_kicker() {
        let cards = best("6h 4s 3d 2c Ah");
        let five = [cards[0], cards[1], cards[2], cards[3], cards[4]];
        assert_eq!(low_description(five), "Six-low, kickers Four, Three, Two, Ace");
    }

    #[test]
    fn badugi_description_drops_the_colliding_suit() {
        let cards = best("2h 3s 4c Ah");
        assert_eq!(badugi_description(&cards), "Four, Three, Two-low");
    }

    #[test]
    fn badugi_description_four_card_rainbow() {
        let cards = best("4c 3d 2h As");
        assert_eq!(badugi_description(&cards), "Four, Three, Two, Ace-low");
    }

    #[test]
    fn soko_description_four_flush() {
        let cards = best("Ah Kh 9h 4h");
        let four = [cards[0], cards[1], cards[2], cards[3]];
        assert_eq!(soko_description(four), "Four Flush, Ace-high");
    }

    #[test]
    fn invalid_rank_renders_as_none() {
        assert_eq!(long_description(EvalRank::INVALID, &[]), "None");
        assert_eq!(short_description(EvalRank::INVALID, &[]), "None");
    }
}
