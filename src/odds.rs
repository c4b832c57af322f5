//! # Odds Calculator
//!
//! Equity estimation via exhaustive enumeration of the unseen cards: for
//! each possible completion of the board (and, where needed, opponents'
//! pockets), every contending hand is evaluated and win/split/loss
//! counters are accumulated. [`combinations`] is the shared lexicographic
//! combination enumerator other modules (notably
//! [`crate::hand::Hand::combinations`]) also use for sub-hand selection.

use crate::card::Card;
use crate::hole_cards::HoleCards;
use crate::rank_score;
use crate::starting;
use crate::variants::catalog::EvalKind;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// A shared flag the enumeration loop polls between completions; signal
/// it to abandon a long-running calculation early. Shared by the serial
/// odds path here and the parallel path in [`crate::ev`].
#[derive(Debug, Default)]
pub struct Cancel(AtomicBool);

impl Cancel {
    pub fn new() -> Arc<Self> {
        Arc::new(Self(AtomicBool::new(false)))
    }

    pub fn signal(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The number of ways to choose `k` items from `n`, i.e. `C(n, k)`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// Every `k`-element combination of `items`, in lexicographic index
/// order (the order [0,1,...,k-1] is emitted first).
pub fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k == 0 || k > n {
        return if k == 0 { vec![Vec::new()] } else { Vec::new() };
    }
    let mut result = Vec::with_capacity(binomial(n, k) as usize);
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        result.push(indices.iter().map(|&i| items[i]).collect());

        let mut i = k;
        loop {
            if i == 0 {
                return result;
            }
            i -= 1;
            if indices[i] != i + n - k {
                break;
            }
        }
        indices[i] += 1;
        for j in (i + 1)..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Running tally of enumeration outcomes for one contender.
#[derive(Debug, Default)]
pub struct OutcomeCounters {
    pub wins: AtomicU64,
    pub splits: AtomicU64,
    pub losses: AtomicU64,
    pub total: AtomicU64,
}

impl OutcomeCounters {
    pub fn snapshot(&self) -> (u64, u64, u64, u64) {
        (
            self.wins.load(Ordering::Relaxed),
            self.splits.load(Ordering::Relaxed),
            self.losses.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }
}

/// Win/tie/loss equity for one contender across every board completion,
/// plus the specific unseen cards ("outs") that completed a winning or
/// splitting board for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Equity {
    pub win: f64,
    pub split: f64,
    pub lose: f64,
    pub outs: Vec<Card>,
}

/// The heads-up preflop shortcut (§8.7): when there are exactly two
/// contenders, no board cards yet, and a Standard-evaluated 2-card pocket
/// each, the answer is a lookup into the precomputed 169-row
/// [`crate::starting`] table rather than a full enumeration. The second
/// contender's row is derived by swapping win/lose, since the table is
/// built against "one random, non-overlapping opponent hand" and a
/// heads-up match is zero-sum between the two.
fn heads_up_preflop_shortcut(eval_kind: EvalKind, pockets: &[Vec<Card>], board: &[Card], target_len: usize) -> Option<Vec<Equity>> {
    if eval_kind != EvalKind::Standard || pockets.len() != 2 || !board.is_empty() || target_len != 5 {
        return None;
    }
    if pockets[0].len() != 2 || pockets[1].len() != 2 {
        return None;
    }
    let hole = HoleCards::new(pockets[0][0], pockets[0][1]).ok()?;
    let row = starting::lookup_notation(&hole.notation())?;
    let first = Equity {
        win: row.wins as f64 / row.total() as f64,
        split: row.splits as f64 / row.total() as f64,
        lose: row.losses as f64 / row.total() as f64,
        outs: Vec::new(),
    };
    let second = Equity {
        win: first.lose,
        split: first.split,
        lose: first.win,
        outs: Vec::new(),
    };
    Some(vec![first, second])
}

/// Exhaustively enumerate every way to complete `board` up to `target_len`
/// cards from `deck_remaining`, evaluating each contender's best
/// `pocket + board` hand (per `eval_kind`'s pocket-usage rule) at each
/// completion and tallying outcomes. Returns one [`Equity`] per contender,
/// in input order, plus `true` if the enumeration ran to completion
/// (`false` if `cancel` cut it short, in which case the equities reflect
/// only the completions seen so far).
///
/// Heads-up, zero board cards, a 2-card Standard pocket each: answered
/// instantly from [`crate::starting`] instead of enumerating (§8.7).
pub fn calculate_equity(
    eval_kind: EvalKind,
    pockets: &[Vec<Card>],
    board: &[Card],
    deck_remaining: &[Card],
    target_len: usize,
    cancel: &Cancel,
) -> Result<(Vec<Equity>, bool), crate::errors::PokerError> {
    if let Some(shortcut) = heads_up_preflop_shortcut(eval_kind, pockets, board, target_len) {
        return Ok((shortcut, true));
    }
    if deck_remaining.is_empty() && board.len() < target_len {
        return Err(crate::errors::PokerError::EmptyCombinationUniverse);
    }
    let needed = target_len.saturating_sub(board.len());
    let counters: Vec<OutcomeCounters> = pockets.iter().map(|_| OutcomeCounters::default()).collect();
    let outs: Vec<Mutex<Vec<Card>>> = pockets.iter().map(|_| Mutex::new(Vec::new())).collect();

    let completions = combinations(deck_remaining, needed);
    let mut completed = true;
    for completion in &completions {
        if cancel.is_cancelled() {
            completed = false;
            break;
        }
        let mut full_board = board.to_vec();
        full_board.extend_from_slice(completion);

        let scores: Vec<u16> = pockets
            .iter()
            .map(|pocket| rank_score::eval_hand(eval_kind, pocket, &full_board).value())
            .collect();

        let best = *scores.iter().min().unwrap();
        let winners = scores.iter().filter(|&&s| s == best).count();

        for (i, &score) in scores.iter().enumerate() {
            counters[i].total.fetch_add(1, Ordering::Relaxed);
            if score == best {
                outs[i].lock().unwrap().extend(completion.iter().copied());
                if winners > 1 {
                    counters[i].splits.fetch_add(1, Ordering::Relaxed);
                } else {
                    counters[i].wins.fetch_add(1, Ordering::Relaxed);
                }
            } else {
                counters[i].losses.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    let equities = counters
        .iter()
        .zip(outs.into_iter())
        .map(|(c, o)| {
            let (wins, splits, losses, total) = c.snapshot();
            let outs = o.into_inner().unwrap();
            if total == 0 {
                Equity { win: 0.0, split: 0.0, lose: 0.0, outs }
            } else {
                Equity {
                    win: wins as f64 / total as f64,
                    split: splits as f64 / total as f64,
                    lose: losses as f64 / total as f64,
                    outs,
                }
            }
        })
        .collect();

    Ok((equities, completed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use std::str::FromStr;

    #[test]
    fn binomial_matches_known_values() {
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 6), 0);
    }

    #[test]
    fn combinations_of_four_choose_two_produces_six_pairs_in_lex_order() {
        let items = [1, 2, 3, 4];
        let combos = combinations(&items, 2);
        assert_eq!(combos, vec![
            vec![1, 2], vec![1, 3], vec![1, 4],
            vec![2, 3], vec![2, 4], vec![3, 4],
        ]);
    }

    #[test]
    fn pocket_aces_dominates_pocket_deuces_on_a_small_universe() {
        // A reduced remaining-card universe keeps this test's C(n,5)
        // enumeration small while still exercising the full equity path.
        // A non-empty board forces the full enumeration path rather than
        // the heads-up preflop shortcut.
        let aces: Vec<Card> = Card::parse("Ah Ad").unwrap();
        let deuces: Vec<Card> = Card::parse("2h 2d").unwrap();
        let flop: Vec<Card> = Card::parse("Kc Qc Jc").unwrap();
        let remaining: Vec<Card> = Card::parse("Tc 9c 8c 7c 6c 5c 4c 3c").unwrap();

        let (equities, completed) = calculate_equity(
            EvalKind::Standard,
            &[aces, deuces],
            &flop,
            &remaining,
            5,
            &Cancel::default(),
        )
        .unwrap();
        assert!(completed);
        assert!(equities[0].win > equities[1].win);
        assert!(!equities[0].outs.is_empty());
    }

    #[test]
    fn cancelling_mid_enumeration_reports_incomplete() {
        let aces: Vec<Card> = Card::parse("Ah Ad").unwrap();
        let deuces: Vec<Card> = Card::parse("2h 2d").unwrap();
        let flop: Vec<Card> = Card::parse("Kc Qc Jc").unwrap();
        let remaining: Vec<Card> = Card::parse("Tc 9c").unwrap();
        let cancel = Cancel::new();
        cancel.signal();

        let (equities, completed) = calculate_equity(
            EvalKind::Standard,
            &[aces, deuces],
            &flop,
            &remaining,
            5,
            &cancel,
        )
        .unwrap();
        assert!(!completed);
        assert_eq!(equities[0].win, 0.0);
    }

    #[test]
    fn heads_up_preflop_uses_starting_table_shortcut() {
        let aces: Vec<Card> = Card::parse("Ah Ad").unwrap();
        let deuces: Vec<Card> = Card::parse("2c 2d").unwrap();
        let (equities, completed) = calculate_equity(
            EvalKind::Standard,
            &[aces, deuces],
            &[],
            &[],
            5,
            &Cancel::default(),
        )
        .unwrap();
        assert!(completed);
        assert!(equities[0].win > equities[1].win);
        assert!((equities[0].win + equities[0].split + equities[0].lose - 1.0).abs() < 1e-9);
    }
}
