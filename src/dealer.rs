//! # Dealer
//!
//! [`Dealer`] drives a single hand through its variant's street schedule:
//! dealing pockets and board cards in order, tracking which players are
//! still active, supporting a single split into two runs when the pot
//! goes all-in before the final street, and lazily building the showdown
//! [`DealerResult`] once every street has been dealt.

use crate::board::Board;
use crate::card::Card;
use crate::deck::Deck;
use crate::errors::PokerError;
use crate::rank_score::{self, EvalRank};
use crate::variants::catalog::{StreetKind, TypeDescriptor};

/// The dealer's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// No street has been dealt yet.
    Fresh,
    /// Mid-hand; at least one street has been dealt but not all of them.
    Streeting,
    /// All action streets before the river are complete and the pot has
    /// not yet been split; [`Dealer::split_runs`] may still be called.
    Splittable,
    /// Every street has been dealt and results can be computed.
    Evaluating,
    /// [`Dealer::result`] has been called; no further mutation is
    /// permitted.
    Done,
}

/// One complete deal-out of the remaining streets, used for both the
/// single-run default case and each half of a split pot.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub board: Board,
    pub second_board: Option<Board>,
}

/// Per-player pocket cards plus active/folded status.
#[derive(Debug, Clone)]
pub struct Seat {
    pub pocket: Vec<Card>,
    pub active: bool,
}

/// One seat's scored hand for a single run: the hi score (every variant)
/// and, for hi/lo split variants, the lo score, each paired with the
/// specific cards that produced it.
#[derive(Debug, Clone)]
pub struct Eval {
    pub seat: usize,
    pub hi_rank: EvalRank,
    pub hi_best: Vec<Card>,
    pub lo_rank: Option<EvalRank>,
    pub lo_best: Option<Vec<Card>>,
}

/// The showdown outcome of one [`Run`]: every active seat's [`Eval`],
/// plus the winner determination for each side of the pot. `hi_order` and
/// `lo_order` are indices into `evals`, best-first; `hi_pivot`/`lo_pivot`
/// are how many of those leading entries are tied for best (more than one
/// means a split).
#[derive(Debug, Clone)]
pub struct DealerResult {
    pub evals: Vec<Eval>,
    pub hi_order: Vec<usize>,
    pub hi_pivot: usize,
    pub lo_order: Vec<usize>,
    pub lo_pivot: usize,
}

/// Sort `evals`' indices best-first by `key`, dropping any `EvalRank::INVALID`
/// entry, and report how many leading entries tie for best.
fn rank_order(evals: &[Eval], key: impl Fn(&Eval) -> Option<EvalRank>) -> (Vec<usize>, usize) {
    let mut scored: Vec<(usize, EvalRank)> = evals
        .iter()
        .enumerate()
        .filter_map(|(i, e)| key(e).filter(|r| !r.is_invalid()).map(|r| (i, r)))
        .collect();
    // EvalRank's Ord is reversed (better hand compares greater), so a
    // descending sort by rank puts the best hand first.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    let pivot = match scored.first() {
        Some((_, best)) => scored.iter().take_while(|(_, r)| r == best).count(),
        None => 0,
    };
    (scored.into_iter().map(|(i, _)| i).collect(), pivot)
}

/// Drives one hand of a variant from `Fresh` to `Done`.
pub struct Dealer {
    descriptor: TypeDescriptor,
    deck: Deck,
    seats: Vec<Seat>,
    street_index: usize,
    runs: Vec<Run>,
    state: DealerState,
}

impl Dealer {
    /// Start a fresh hand for `num_seats` players using the variant's
    /// deck and street schedule.
    pub fn new(descriptor: TypeDescriptor, deck: Deck, num_seats: usize) -> Self {
        Self {
            descriptor,
            deck,
            seats: (0..num_seats)
                .map(|_| Seat { pocket: Vec::new(), active: true })
                .collect(),
            street_index: 0,
            runs: vec![Run::default()],
            state: DealerState::Fresh,
        }
    }

    pub fn state(&self) -> DealerState {
        self.state
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    fn active_count(&self) -> usize {
        self.seats.iter().filter(|s| s.active).count()
    }

    /// Mark a seat as folded. Once only one seat remains active the
    /// dealer stays in whatever state it was in; callers decide whether
    /// an uncontested pot short-circuits the hand.
    pub fn deactivate(&mut self, seat: usize) -> Result<(), PokerError> {
        if self.state == DealerState::Done {
            return Err(PokerError::DealerDone);
        }
        let s = self.seats.get_mut(seat).ok_or(PokerError::NoActivePlayers)?;
        s.active = false;
        if self.active_count() == 0 {
            return Err(PokerError::NoActivePlayers);
        }
        Ok(())
    }

    /// Deal the next street: pocket cards to every active seat, or board
    /// cards to the current run(s).
    pub fn deal_next_street(&mut self) -> Result<(), PokerError> {
        if self.state == DealerState::Done || self.state == DealerState::Evaluating {
            return Err(PokerError::DealerDone);
        }
        if self.active_count() == 0 {
            return Err(PokerError::NoActivePlayers);
        }
        let street = self
            .descriptor
            .streets
            .get(self.street_index)
            .ok_or(PokerError::DealerNotReady)?
            .clone();

        match street.kind {
            StreetKind::Pocket => {
                for seat in self.seats.iter_mut().filter(|s| s.active) {
                    let dealt = self.deck.draw(street.cards_dealt as usize);
                    seat.pocket.extend(dealt);
                }
            }
            StreetKind::Board => {
                let dealt = self.deck.draw(street.cards_dealt as usize);
                for run in self.runs.iter_mut() {
                    run.board.extend(&dealt)?;
                    if self.descriptor.double_board {
                        if run.second_board.is_none() {
                            run.second_board = Some(Board::new());
                        }
                        run.second_board.as_mut().unwrap().extend(&dealt)?;
                    }
                }
            }
            StreetKind::BettingOnly => {}
        }

        self.street_index += 1;
        self.state = if self.street_index >= self.descriptor.streets.len() {
            DealerState::Evaluating
        } else if street.splittable_after {
            DealerState::Splittable
        } else {
            DealerState::Streeting
        };
        Ok(())
    }

    /// Split the pot into two independent runs of the remaining deck,
    /// each completing the hand's remaining streets with its own cards.
    /// May only be called once, and only while [`DealerState::Splittable`].
    pub fn split_runs(&mut self) -> Result<(), PokerError> {
        if self.state != DealerState::Splittable {
            return Err(PokerError::NotAtSplittableStreet);
        }
        if self.runs.len() > 1 {
            return Err(PokerError::RunsAlreadySplit);
        }
        let existing = self.runs[0].clone();
        self.runs.push(existing);
        self.state = DealerState::Streeting;
        Ok(())
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Mark the hand ready for showdown once every street has been dealt.
    pub fn finish(&mut self) -> Result<(), PokerError> {
        if self.state != DealerState::Evaluating {
            return Err(PokerError::DealerNotReady);
        }
        self.state = DealerState::Done;
        Ok(())
    }

    fn evaluate_run(&self, run: &Run) -> DealerResult {
        let kind = self.descriptor.eval_kind;
        let evals: Vec<Eval> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(seat, s)| {
                let (hi_rank, hi_best) = rank_score::eval_hand_with_cards(kind, &s.pocket, run.board.cards());
                let (lo_rank, lo_best) = match rank_score::eval_hand_lo_with_cards(kind, &s.pocket, run.board.cards()) {
                    Some((rank, best)) => (Some(rank), Some(best)),
                    None => (None, None),
                };
                Eval { seat, hi_rank, hi_best, lo_rank, lo_best }
            })
            .collect();

        let (hi_order, hi_pivot) = rank_order(&evals, |e| Some(e.hi_rank));
        let (lo_order, lo_pivot) = rank_order(&evals, |e| e.lo_rank);

        DealerResult { evals, hi_order, hi_pivot, lo_order, lo_pivot }
    }

    /// Score every active seat's hand for every run, once the hand has
    /// reached [`DealerState::Evaluating`] or [`DealerState::Done`]. One
    /// [`DealerResult`] per run — a single-element slice for an unsplit
    /// pot, two for a split pot (§4.7 result construction).
    pub fn results(&self) -> Result<Vec<DealerResult>, PokerError> {
        if self.state != DealerState::Evaluating && self.state != DealerState::Done {
            return Err(PokerError::DealerNotReady);
        }
        Ok(self.runs.iter().map(|run| self.evaluate_run(run)).collect())
    }
}
