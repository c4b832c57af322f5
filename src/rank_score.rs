//! # Rank Score
//!
//! [`EvalRank`] is the crate-wide hand strength score: lower is better,
//! mirroring the original Cactus-Kev convention (1 = royal flush, 7462 =
//! worst possible high card, 7463 = [`EvalRank::INVALID`] for partial or
//! unevaluable hands). [`HandCategory`] names the band an `EvalRank` falls
//! into; the remapper functions below adapt a base five-card evaluator to
//! the variant family's own scoring rules by transforming either the input
//! cards or the resulting score.

use crate::card::{Card, Rank};
use crate::variants::catalog::EvalKind;
use std::cmp::Ordering;
use std::fmt;

/// Hand strength score. Lower is better; see module docs for the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EvalRank(u16);

impl EvalRank {
    pub const BEST: u16 = 1;
    pub const WORST_HIGH_CARD: u16 = 7462;
    pub const INVALID_VALUE: u16 = 7463;

    /// Sentinel for hands that cannot be scored under the requested rules
    /// (e.g. a Badugi hand with zero distinct ranks, or a qualifier-less
    /// eight-or-better low).
    pub const INVALID: EvalRank = EvalRank(Self::INVALID_VALUE);

    pub fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_invalid(self) -> bool {
        self.0 == Self::INVALID_VALUE
    }

    /// The category this score falls in, per the standard Cactus-Kev bands.
    pub fn category(self) -> HandCategory {
        match self.0 {
            1..=10 => HandCategory::StraightFlush,
            11..=166 => HandCategory::FourOfAKind,
            167..=322 => HandCategory::FullHouse,
            323..=1599 => HandCategory::Flush,
            1600..=1609 => HandCategory::Straight,
            1610..=2467 => HandCategory::ThreeOfAKind,
            2468..=3325 => HandCategory::TwoPair,
            3326..=6185 => HandCategory::Pair,
            6186..=7462 => HandCategory::HighCard,
            _ => HandCategory::Invalid,
        }
    }
}

impl fmt::Display for EvalRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.category(), self.0)
    }
}

impl PartialOrd for EvalRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `EvalRank` orders so that a *better* hand compares *greater*, matching
/// the natural expectation of `max_by_key`/tournament-style comparisons
/// even though the underlying score is lower-is-better.
impl Ord for EvalRank {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// The nine standard high-hand categories, plus `Invalid` for unscorable
/// hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    Invalid,
}

/// A base five-card evaluator: anything implementing Cactus-Kev semantics
/// (reference, fast-cactus, or two-plus-two) can be passed to the remapper
/// functions below.
pub type BaseEval = fn([Card; 5]) -> EvalRank;

/// Short/Manila/Spanish decks drop enough low cards that flushes become
/// harder to make than full houses; this swaps their bands and recomputes
/// the deck's lowest straight as ace-low running from the deck's lowest
/// rank (e.g. short deck's A-6-7-8-9), the role A-2-3-4-5 plays in a full
/// deck. The base evaluator's tables are built for a full 52-card deck and
/// know nothing about this pattern, so it is detected and scored directly
/// rather than derived from `base`'s answer.
///
/// Flush's 1277-value band (323..=1599) is relocated to 167..=1443,
/// directly above Four of a Kind. FullHouse's 156-value band (167..=322)
/// is relocated to 1444..=1599, directly *below* Straight and above the
/// relocated Flush band — the full range of values Flush now occupies, so
/// the two bands stay disjoint (an earlier version of this remap placed
/// FullHouse at 323..=478, which overlapped the relocated Flush band and
/// let full houses beat flushes, the opposite of the short-deck rule).
fn remap_reduced_deck(base: BaseEval, cards: [Card; 5], lowest: Rank) -> EvalRank {
    if is_reduced_deck_wheel(cards, lowest) {
        let all_same_suit = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
        // Worst straight flush (10) / worst straight (1609): the deck's
        // lowest rank can never be dealt alongside 2-3-4-5, so these slots
        // are otherwise unused once `lowest` is above Two.
        return EvalRank::new(if all_same_suit { 10 } else { 1609 });
    }
    let raw = base(cards);
    match raw.category() {
        HandCategory::Flush => EvalRank::new(167 + (raw.value() - 323)),
        HandCategory::FullHouse => EvalRank::new(1444 + (raw.value() - 167)),
        _ => raw,
    }
}

/// True if `cards` are exactly an ace-low straight running from `lowest`:
/// `{Ace, lowest, lowest+1, lowest+2, lowest+3}`, regardless of suit.
fn is_reduced_deck_wheel(cards: [Card; 5], lowest: Rank) -> bool {
    let mut indices: Vec<u8> = cards.iter().map(|c| c.rank_index()).collect();
    indices.sort_unstable();
    let mut expected = [
        lowest.index(),
        lowest.index() + 1,
        lowest.index() + 2,
        lowest.index() + 3,
        Rank::Ace.index(),
    ];
    expected.sort_unstable();
    indices == expected
}

/// Short-deck (6+) remap: see [`remap_reduced_deck`].
pub fn remap_short_deck(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    remap_reduced_deck(base, cards, Rank::Six)
}

/// Manila (7+) remap: identical treatment to [`remap_short_deck`], shifted
/// to the deck's higher floor (the ace-low straight is A-7-8-9-T).
pub fn remap_manila(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    remap_reduced_deck(base, cards, Rank::Seven)
}

/// Spanish (8+) remap: identical treatment, shifted again (A-8-9-T-J).
pub fn remap_spanish(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    remap_reduced_deck(base, cards, Rank::Eight)
}

/// Royal-only variants (restricted to Ten-and-up decks) use the unmodified
/// base evaluator: every straight flush in a 20-card deck is already a
/// royal or a run of consecutive broadway cards, so no remapping is
/// required beyond dealing from [`crate::deck::DeckType::Royal`].
pub fn remap_royal(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    base(cards)
}

/// Jacks-or-better: suppress any category below a pair, and any pair
/// lower than jacks, to [`EvalRank::INVALID`] (a qualifying hand is
/// required to open or to win).
pub fn remap_jacks_or_better(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    let raw = base(cards);
    if raw.category() != HandCategory::Pair {
        return raw;
    }
    let pair_rank = pair_rank_of(cards);
    match pair_rank {
        Some(rank) if rank.index() >= Rank::Jack.index() => raw,
        _ => EvalRank::INVALID,
    }
}

fn pair_rank_of(cards: [Card; 5]) -> Option<Rank> {
    let mut counts = [0u8; 13];
    for c in cards.iter() {
        counts[c.rank_index() as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n == 2)
        .map(|(i, _)| Rank::from_index(i as u8).unwrap())
        .max_by_key(|r| r.index())
}

/// Ace-to-five low score (eight-or-better, Razz): lower is better, aces
/// always low, straights and flushes ignored. Pairs are scored against
/// each other in descending order of the paired/tripled/quadrupled rank,
/// then the remaining kickers, high to low. Returns
/// [`EvalRank::INVALID`] when the hand contains a pair or worse and the
/// variant requires a qualifying unpaired eight-low (the caller decides
/// whether to apply the qualifier).
pub fn ace_to_five_low(cards: [Card; 5]) -> EvalRank {
    let mut ranks: Vec<u8> = cards
        .iter()
        .map(|c| {
            if c.rank() == Rank::Ace {
                0
            } else {
                c.rank_index()
            }
        })
        .collect();
    ranks.sort_unstable();
    ranks.reverse();
    let mut score: u32 = 0;
    for &r in &ranks {
        score = score * 13 + r as u32;
    }
    // 13^5 - 1 is the largest possible raw score; scale down by 6 so the
    // full range fits a u16 while preserving relative order.
    EvalRank::new((score / 6).min(u16::MAX as u32) as u16)
}

/// The same five cards sorted descending by ace-to-five low value (aces
/// sort last, since they play low): the order
/// [`crate::description::low_description`] renders a low hand in.
pub fn low_cards_descending(cards: [Card; 5]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| {
        let low_rank = if c.rank() == Rank::Ace { -1i16 } else { c.rank_index() as i16 };
        -low_rank
    });
    sorted
}

/// True if an ace-to-five low hand qualifies as an eight-or-better: five
/// distinct ranks, all eight or lower (ace counts low).
pub fn qualifies_eight_or_better(cards: [Card; 5]) -> bool {
    let mut seen = [false; 13];
    for c in cards.iter() {
        let low_rank = if c.rank() == Rank::Ace {
            0u8
        } else {
            c.rank_index()
        };
        if low_rank > Rank::Eight.index() - 1 {
            return false;
        }
        if seen[low_rank as usize] {
            return false;
        }
        seen[low_rank as usize] = true;
    }
    true
}

/// 2-to-7 lowball ("deuce-to-seven"): invert the base high evaluator's
/// ranking while keeping aces high and straights/flushes live, by simply
/// reversing the score scale. A pat 7-5-4-3-2 remains the best possible
/// low; straights and flushes count against the hand exactly as they
/// would in the high game.
pub fn remap_deuce_to_seven(base: BaseEval, cards: [Card; 5]) -> EvalRank {
    let raw = base(cards);
    let inverted = (EvalRank::WORST_HIGH_CARD + 1) - raw.value();
    EvalRank::new(inverted)
}

/// Badugi score: count of distinct suits *and* ranks among the best
/// qualifying subset (at most one card per suit, at most one card per
/// rank, aces low), then the bitmask of included ranks used as a
/// low-to-high tiebreak. Fewer cards is always better than more
/// (`4-n` dominates the score), matching the corrected formula recorded
/// in the design ledger's open-question resolution.
pub fn badugi_score(cards: &[Card]) -> EvalRank {
    const LARGE_OFFSET: u16 = 1000;
    match badugi_best_subset(cards) {
        None => EvalRank::INVALID,
        Some(subset) => {
            let mut bitmask: u16 = 0;
            for c in &subset {
                let low_rank = if c.rank() == Rank::Ace { 0u8 } else { c.rank_index() };
                bitmask |= 1 << low_rank;
            }
            let penalty = (4 - subset.len() as u16) * LARGE_OFFSET;
            EvalRank::new(penalty + bitmask)
        }
    }
}

/// The winning Badugi subset itself (distinct suits, distinct ranks, aces
/// low), as used by [`badugi_score`] and by
/// [`crate::description::badugi_description`] to render it. Returns the
/// cards in descending rank order (aces last, since they play low), the
/// order the renderer presents them in.
pub fn badugi_best_subset(cards: &[Card]) -> Option<Vec<Card>> {
    let mut best: Option<(u8, u16, Vec<Card>)> = None;
    let n = cards.len();
    for mask in 1u32..(1 << n) {
        let subset: Vec<Card> = (0..n).filter(|&i| mask & (1 << i) != 0).map(|i| cards[i]).collect();
        if !subset_is_badugi_valid(&subset) {
            continue;
        }
        let count = subset.len() as u8;
        let mut bitmask: u16 = 0;
        for c in &subset {
            let low_rank = if c.rank() == Rank::Ace { 0u8 } else { c.rank_index() };
            bitmask |= 1 << low_rank;
        }
        let better = match &best {
            None => true,
            Some((best_count, best_mask, _)) => {
                count > *best_count || (count == *best_count && bitmask < *best_mask)
            }
        };
        if better {
            best = Some((count, bitmask, subset));
        }
    }
    best.map(|(_, _, mut subset)| {
        subset.sort_by_key(|c| {
            let low_rank = if c.rank() == Rank::Ace { -1i16 } else { c.rank_index() as i16 };
            -low_rank
        });
        subset
    })
}

fn subset_is_badugi_valid(cards: &[Card]) -> bool {
    let mut suits_seen = 0u8;
    let mut ranks_seen = 0u16;
    for c in cards {
        let suit_bit = 1u8 << c.suit_index();
        if suits_seen & suit_bit != 0 {
            return false;
        }
        suits_seen |= suit_bit;
        let low_rank = if c.rank() == Rank::Ace { 0u8 } else { c.rank_index() };
        let rank_bit = 1u16 << low_rank;
        if ranks_seen & rank_bit != 0 {
            return false;
        }
        ranks_seen |= rank_bit;
    }
    true
}

/// Soko's banded category order: four-flush and four-straight (4-card
/// hands) slot in between a pair and two pair. Computed on the fly
/// rather than via a precomputed table, since Soko always evaluates
/// exactly four cards.
pub fn soko_score(cards: [Card; 4]) -> EvalRank {
    let mut rank_counts = [0u8; 13];
    for c in cards.iter() {
        rank_counts[c.rank_index() as usize] += 1;
    }
    let suits_match = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
    let mut indices: Vec<u8> = cards.iter().map(|c| c.rank_index()).collect();
    indices.sort_unstable();
    indices.dedup();
    let is_straight = indices.len() == 4 && indices[3] - indices[0] == 3;

    let quad = rank_counts.iter().any(|&c| c == 4);
    let trip = rank_counts.iter().any(|&c| c == 3);
    let pair_count = rank_counts.iter().filter(|&&c| c == 2).count();

    let (band, tiebreak) = if quad {
        (0u16, high_card_tiebreak(&cards))
    } else if trip {
        (1, high_card_tiebreak(&cards))
    } else if pair_count == 2 {
        (2, high_card_tiebreak(&cards))
    } else if is_straight && suits_match {
        (3, indices[3] as u16)
    } else if suits_match {
        (4, high_card_tiebreak(&cards))
    } else if is_straight {
        (5, indices[3] as u16)
    } else if pair_count == 1 {
        (6, high_card_tiebreak(&cards))
    } else {
        (7, high_card_tiebreak(&cards))
    };
    EvalRank::new(band * 20 + (20 - tiebreak.min(19)))
}

fn high_card_tiebreak(cards: &[Card]) -> u16 {
    cards.iter().map(|c| c.rank_index() as u16).max().unwrap_or(0)
}

/// Score a variant's finished hand from its already-concatenated cards
/// (pocket and board combined, or the raw pocket for board-less
/// variants), dispatching to the remapper [`EvalKind`] names. This is the
/// prior missing link: every remapper above existed but nothing on the
/// odds/EV/dealer paths ever called one, so every variant silently scored
/// as plain high-cactus.
///
/// [`EvalKind::Omaha`] and [`EvalKind::OmahaHiLo`] constrain how many
/// pocket cards may be used and so cannot be scored from a flat card list;
/// callers with a variant/pocket/board triple should use [`eval_hand`]
/// instead, which also covers [`EvalKind::Fusion`]'s own constraint.
pub fn eval_for(kind: EvalKind, cards: &[Card]) -> EvalRank {
    match kind {
        // The fast evaluator singleton handles 5/6/7 cards directly; used
        // here instead of the combinatorial path below since this is the
        // hot path for odds/EV enumeration over plain high hands.
        EvalKind::Standard | EvalKind::EightOrBetterHighLow => crate::evaluator::evaluate(cards),
        _ => eval_for_with_cards(kind, cards).0,
    }
}

/// As [`eval_for`], but also returns the specific cards the winning
/// sub-hand used, for showdown description rendering.
pub fn eval_for_with_cards(kind: EvalKind, cards: &[Card]) -> (EvalRank, Vec<Card>) {
    match kind {
        EvalKind::Standard | EvalKind::EightOrBetterHighLow => {
            best_of_five_with_cards(cards, crate::evaluator::cactus::evaluate_five)
        }
        EvalKind::ShortDeck => best_of_five_with_cards(cards, |c| remap_short_deck(crate::evaluator::cactus::evaluate_five, c)),
        EvalKind::Manila => best_of_five_with_cards(cards, |c| remap_manila(crate::evaluator::cactus::evaluate_five, c)),
        EvalKind::Spanish => best_of_five_with_cards(cards, |c| remap_spanish(crate::evaluator::cactus::evaluate_five, c)),
        EvalKind::Royal => best_of_five_with_cards(cards, |c| remap_royal(crate::evaluator::cactus::evaluate_five, c)),
        EvalKind::JacksOrBetter => {
            best_of_five_with_cards(cards, |c| remap_jacks_or_better(crate::evaluator::cactus::evaluate_five, c))
        }
        EvalKind::Razz => best_of_five_with_cards(cards, ace_to_five_low),
        EvalKind::DeuceToSevenLowball => {
            best_of_five_with_cards(cards, |c| remap_deuce_to_seven(crate::evaluator::cactus::evaluate_five, c))
        }
        EvalKind::Badugi => match badugi_best_subset(cards) {
            Some(subset) => (badugi_score(cards), subset),
            None => (EvalRank::INVALID, Vec::new()),
        },
        EvalKind::Soko => best_of_four_with_cards(cards, soko_score),
        EvalKind::Omaha | EvalKind::OmahaHiLo | EvalKind::Fusion => (EvalRank::INVALID, Vec::new()),
    }
}

fn best_of_five_with_cards(cards: &[Card], scorer: impl Fn([Card; 5]) -> EvalRank) -> (EvalRank, Vec<Card>) {
    if cards.len() < 5 {
        return (EvalRank::INVALID, Vec::new());
    }
    crate::odds::combinations(cards, 5)
        .into_iter()
        .map(|c| {
            let five = [c[0], c[1], c[2], c[3], c[4]];
            (scorer(five), five)
        })
        .max_by_key(|(r, _)| *r)
        .map(|(r, five)| (r, five.to_vec()))
        .unwrap_or((EvalRank::INVALID, Vec::new()))
}

fn best_of_four_with_cards(cards: &[Card], scorer: impl Fn([Card; 4]) -> EvalRank) -> (EvalRank, Vec<Card>) {
    if cards.len() < 4 {
        return (EvalRank::INVALID, Vec::new());
    }
    crate::odds::combinations(cards, 4)
        .into_iter()
        .map(|c| {
            let four = [c[0], c[1], c[2], c[3]];
            (scorer(four), four)
        })
        .max_by_key(|(r, _)| *r)
        .map(|(r, four)| (r, four.to_vec()))
        .unwrap_or((EvalRank::INVALID, Vec::new()))
}

/// Every 5-card hand usable under Omaha's "exactly 2 pocket + exactly 3
/// board" constraint. Empty if there are fewer than 2 pocket cards or
/// fewer than 3 board cards (the constraint can't be satisfied yet).
fn omaha_candidates(pocket: &[Card], board: &[Card]) -> Vec<[Card; 5]> {
    if pocket.len() < 2 || board.len() < 3 {
        return Vec::new();
    }
    let pocket_pairs = crate::odds::combinations(pocket, 2);
    let board_triples = crate::odds::combinations(board, 3);
    let mut hands = Vec::with_capacity(pocket_pairs.len() * board_triples.len());
    for p in &pocket_pairs {
        for b in &board_triples {
            hands.push([p[0], p[1], b[0], b[1], b[2]]);
        }
    }
    hands
}

fn best_omaha_hi_with_cards(pocket: &[Card], board: &[Card]) -> (EvalRank, Vec<Card>) {
    omaha_candidates(pocket, board)
        .into_iter()
        .map(|five| (crate::evaluator::cactus::evaluate_five(five), five))
        .max_by_key(|(r, _)| *r)
        .map(|(r, five)| (r, five.to_vec()))
        .unwrap_or((EvalRank::INVALID, Vec::new()))
}

fn best_omaha_lo_with_cards(pocket: &[Card], board: &[Card]) -> Option<(EvalRank, Vec<Card>)> {
    omaha_candidates(pocket, board)
        .into_iter()
        .filter(|&five| qualifies_eight_or_better(five))
        .map(|five| (ace_to_five_low(five), five))
        .max_by_key(|(r, _)| *r)
        .map(|(r, five)| (r, five.to_vec()))
}

fn best_eight_or_better_lo_with_cards(cards: &[Card]) -> Option<(EvalRank, Vec<Card>)> {
    if cards.len() < 5 {
        return None;
    }
    crate::odds::combinations(cards, 5)
        .into_iter()
        .filter(|c| qualifies_eight_or_better([c[0], c[1], c[2], c[3], c[4]]))
        .map(|c| {
            let five = [c[0], c[1], c[2], c[3], c[4]];
            (ace_to_five_low(five), five)
        })
        .max_by_key(|(r, _)| *r)
        .map(|(r, five)| (r, five.to_vec()))
}

/// Fusion's own constraint: at most 2 of the pocket's 4 cards may be used
/// (0, 1, or 2), the rest from the board — looser than Omaha's "exactly
/// 2" but tighter than Hold'em/Stud's unconstrained best-of.
fn fusion_candidates(pocket: &[Card], board: &[Card]) -> Vec<[Card; 5]> {
    let mut hands = Vec::new();
    let max_pocket_use = pocket.len().min(2);
    for k in 0..=max_pocket_use {
        let board_take = 5usize.saturating_sub(k);
        if board.len() < board_take {
            continue;
        }
        let pocket_combos = if k == 0 { vec![Vec::new()] } else { crate::odds::combinations(pocket, k) };
        let board_combos = crate::odds::combinations(board, board_take);
        for p in &pocket_combos {
            for b in &board_combos {
                let mut five = p.clone();
                five.extend_from_slice(b);
                hands.push([five[0], five[1], five[2], five[3], five[4]]);
            }
        }
    }
    hands
}

fn best_fusion_hi_with_cards(pocket: &[Card], board: &[Card]) -> (EvalRank, Vec<Card>) {
    fusion_candidates(pocket, board)
        .into_iter()
        .map(|five| (crate::evaluator::cactus::evaluate_five(five), five))
        .max_by_key(|(r, _)| *r)
        .map(|(r, five)| (r, five.to_vec()))
        .unwrap_or((EvalRank::INVALID, Vec::new()))
}

/// Score a player's best hand given separate pocket and board cards,
/// applying whatever pocket-usage constraint the variant requires
/// (Omaha-family games: exactly 2 pocket cards; Fusion: at most 2; every
/// other variant: no constraint, the two lists are just concatenated).
pub fn eval_hand(kind: EvalKind, pocket: &[Card], board: &[Card]) -> EvalRank {
    match kind {
        EvalKind::Omaha | EvalKind::OmahaHiLo => best_omaha_hi_with_cards(pocket, board).0,
        EvalKind::Fusion => best_fusion_hi_with_cards(pocket, board).0,
        _ => {
            let mut cards = pocket.to_vec();
            cards.extend_from_slice(board);
            eval_for(kind, &cards)
        }
    }
}

/// As [`eval_hand`], but also returns the specific cards the winning
/// sub-hand used. Used post-showdown, where the per-hand combinatorial
/// cost of also tracking cards is no longer the bottleneck it is during
/// odds/EV enumeration.
pub fn eval_hand_with_cards(kind: EvalKind, pocket: &[Card], board: &[Card]) -> (EvalRank, Vec<Card>) {
    match kind {
        EvalKind::Omaha | EvalKind::OmahaHiLo => best_omaha_hi_with_cards(pocket, board),
        EvalKind::Fusion => best_fusion_hi_with_cards(pocket, board),
        _ => {
            let mut cards = pocket.to_vec();
            cards.extend_from_slice(board);
            eval_for_with_cards(kind, &cards)
        }
    }
}

/// The low side of a hi/lo split variant, or `None` for every other kind.
pub fn eval_hand_lo(kind: EvalKind, pocket: &[Card], board: &[Card]) -> Option<EvalRank> {
    eval_hand_lo_with_cards(kind, pocket, board).map(|(r, _)| r)
}

/// As [`eval_hand_lo`], but also returns the winning low sub-hand's cards.
pub fn eval_hand_lo_with_cards(kind: EvalKind, pocket: &[Card], board: &[Card]) -> Option<(EvalRank, Vec<Card>)> {
    match kind {
        EvalKind::OmahaHiLo => best_omaha_lo_with_cards(pocket, board),
        EvalKind::EightOrBetterHighLow => {
            let mut cards = pocket.to_vec();
            cards.extend_from_slice(board);
            best_eight_or_better_lo_with_cards(&cards)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::cactus::evaluate_five;
    use std::str::FromStr;

    fn hand(notation: &str) -> [Card; 5] {
        let cards: Vec<Card> = notation
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect();
        [cards[0], cards[1], cards[2], cards[3], cards[4]]
    }

    #[test]
    fn category_bands_match_cactus_kev() {
        assert_eq!(EvalRank::new(1).category(), HandCategory::StraightFlush);
        assert_eq!(EvalRank::new(166).category(), HandCategory::FourOfAKind);
        assert_eq!(EvalRank::new(322).category(), HandCategory::FullHouse);
        assert_eq!(EvalRank::new(1599).category(), HandCategory::Flush);
        assert_eq!(EvalRank::new(7462).category(), HandCategory::HighCard);
    }

    #[test]
    fn ordering_treats_better_hand_as_greater() {
        let best = EvalRank::new(1);
        let worst = EvalRank::new(7462);
        assert!(best > worst);
    }

    #[test]
    fn jacks_or_better_suppresses_low_pairs() {
        let low_pair = hand("8h 8s Kd 4c 2h");
        assert!(remap_jacks_or_better(evaluate_five, low_pair).is_invalid());
        let jacks = hand("Jh Js Kd 4c 2h");
        assert!(!remap_jacks_or_better(evaluate_five, jacks).is_invalid());
    }

    #[test]
    fn ace_to_five_low_prefers_wheel() {
        let wheel = ace_to_five_low(hand("5h 4s 3d 2c As"));
        let seven_low = ace_to_five_low(hand("7h 4s 3d 2c As"));
        assert!(wheel < seven_low);
    }

    #[test]
    fn eight_or_better_qualifier_rejects_pairs_and_high_cards() {
        assert!(qualifies_eight_or_better(hand("8h 6s 4d 2c As")));
        assert!(!qualifies_eight_or_better(hand("9h 6s 4d 2c As")));
        assert!(!qualifies_eight_or_better(hand("8h 8s 4d 2c As")));
    }

    #[test]
    fn badugi_four_card_rainbow_beats_three_card() {
        let four_cards: Vec<Card> = Card::parse("Ah 2s 3d 4c").unwrap();
        let three_cards: Vec<Card> = Card::parse("Ah 2s 3d 4h").unwrap();
        let four = badugi_score(&four_cards);
        let three = badugi_score(&three_cards);
        assert!(four.value() < three.value());
    }

    #[test]
    fn short_deck_flush_beats_full_house() {
        let flush = remap_short_deck(evaluate_five, hand("Ah Kh 9h 7h 6h"));
        let full_house = remap_short_deck(evaluate_five, hand("6h 6s 6d 7c 7h"));
        assert!(flush > full_house);
        assert_eq!(flush.category(), HandCategory::Flush);
        assert_eq!(full_house.category(), HandCategory::FullHouse);
    }

    #[test]
    fn short_deck_wheel_is_the_worst_straight_and_straight_flush() {
        let wheel_rainbow = remap_short_deck(evaluate_five, hand("Ah 6s 7d 8c 9h"));
        let wheel_flush = remap_short_deck(evaluate_five, hand("Ah 6h 7h 8h 9h"));
        let worst_nonwheel_straight = remap_short_deck(evaluate_five, hand("7h 8s 9d Tc Jh"));
        assert!(wheel_rainbow < worst_nonwheel_straight);
        assert!(wheel_flush.category() == HandCategory::StraightFlush);
        assert!(wheel_flush > wheel_rainbow);
    }

    #[test]
    fn manila_wheel_runs_from_seven() {
        let wheel = remap_manila(evaluate_five, hand("Ah 7s 8d 9c Th"));
        assert!(!wheel.is_invalid());
        let non_wheel = remap_manila(evaluate_five, hand("8h 9s Td Jc Qh"));
        assert!(wheel < non_wheel);
    }

    #[test]
    fn eval_for_dispatches_short_deck_through_remapper() {
        let cards: Vec<Card> = Card::parse("Ah 9h 8h 7h 6h").unwrap();
        let dispatched = eval_for(EvalKind::ShortDeck, &cards);
        let direct = remap_short_deck(evaluate_five, hand("Ah 9h 8h 7h 6h"));
        assert_eq!(dispatched, direct);
    }

    #[test]
    fn eval_for_picks_best_five_of_seven_for_badugi() {
        let cards: Vec<Card> = Card::parse("Ah 2s 3d 4c Kh Qh Jh").unwrap();
        let (rank, best) = eval_for_with_cards(EvalKind::Badugi, &cards);
        assert!(!rank.is_invalid());
        assert_eq!(best.len(), 4);
    }

    #[test]
    fn eval_hand_enforces_omaha_exactly_two_pocket_constraint() {
        let pocket: Vec<Card> = Card::parse("Ah As Kd Kc").unwrap();
        let board: Vec<Card> = Card::parse("Ad Ac 2h 3s 4d").unwrap();
        let (rank, best) = eval_hand_with_cards(EvalKind::Omaha, &pocket, &board);
        assert!(!rank.is_invalid());
        let pocket_used = best.iter().filter(|c| pocket.contains(c)).count();
        let board_used = best.iter().filter(|c| board.contains(c)).count();
        assert_eq!(pocket_used, 2, "Omaha hand must use exactly 2 pocket cards, used {pocket_used}");
        assert_eq!(board_used, 3, "Omaha hand must use exactly 3 board cards, used {board_used}");
    }

    #[test]
    fn eval_hand_fusion_allows_at_most_two_pocket_cards() {
        let pocket: Vec<Card> = Card::parse("Ah As Ks Qs").unwrap();
        let board: Vec<Card> = Card::parse("Ad Ac 2h 3s 4d").unwrap();
        let (rank, best) = eval_hand_with_cards(EvalKind::Fusion, &pocket, &board);
        assert!(!rank.is_invalid());
        let used_pocket = best.iter().filter(|c| pocket.contains(c)).count();
        assert!(used_pocket <= 2, "Fusion hand used {used_pocket} pocket cards, exceeding the limit of 2");
    }

    #[test]
    fn eval_hand_lo_is_none_outside_hi_lo_variants() {
        let pocket: Vec<Card> = Card::parse("Ah 2s").unwrap();
        let board: Vec<Card> = Card::parse("3d 4c 5h 6s 7d").unwrap();
        assert!(eval_hand_lo(EvalKind::Standard, &pocket, &board).is_none());
    }

    #[test]
    fn eval_hand_lo_qualifies_eight_or_better_omaha_hi_lo() {
        let pocket: Vec<Card> = Card::parse("Ah 2s Kd Qc").unwrap();
        let board: Vec<Card> = Card::parse("3d 4c 5h Th 9s").unwrap();
        let lo = eval_hand_lo(EvalKind::OmahaHiLo, &pocket, &board);
        assert!(lo.is_some());
    }
}
