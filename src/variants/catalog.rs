//! # Variant Catalog
//!
//! [`TypeDescriptor`] captures everything [`crate::dealer::Dealer`] needs
//! to run a hand of a given poker variant: which deck to use, how many
//! pocket/board cards are dealt, the street schedule, whether the pot can
//! split into a second run, and which [`crate::rank_score`] remapper
//! scores a finished hand. [`TypeRegistry`] is the process-wide catalog,
//! keyed by the two-byte ids used in wire/CLI contexts (`"he"` for
//! Hold'em, `"eo"` for Omaha/8, etc.).

use crate::deck::DeckType;
use crate::errors::PokerError;
use std::collections::HashMap;
use std::sync::RwLock;

/// What a street deals and whether it is eligible for the pot to split
/// into two runs (Hold'em/Omaha convention: any street before all-in
/// action resolves may be re-run once, per [`crate::dealer::Dealer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetKind {
    /// Deals pocket/hole cards to every active player.
    Pocket,
    /// Deals shared community cards.
    Board,
    /// A betting-only street with no cards dealt (stud's fifth-street
    /// style rounds are modeled as Pocket streets instead).
    BettingOnly,
}

/// One step of a variant's deal order.
#[derive(Debug, Clone)]
pub struct Street {
    pub name: &'static str,
    pub kind: StreetKind,
    /// Cards dealt to each active player (`Pocket`) or to the board
    /// (`Board`) on this street.
    pub cards_dealt: u8,
    /// Whether the pot may still split into two runs after this street's
    /// betting round (false once only one street of action remains).
    pub splittable_after: bool,
}

/// How a finished hand's best 5-card (or 4-card, for Badugi/Soko) score
/// is computed from its raw cards, selecting among the
/// [`crate::rank_score`] remappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalKind {
    Standard,
    ShortDeck,
    Manila,
    Spanish,
    Royal,
    JacksOrBetter,
    EightOrBetterHighLow,
    Razz,
    DeuceToSevenLowball,
    Badugi,
    Soko,
    Omaha,
    OmahaHiLo,
    /// At most 2 of the pocket's cards may be used per hand, the rest
    /// from the board — Dallas/Houston's wide pocket with a looser
    /// constraint than Omaha's "exactly 2".
    Fusion,
}

/// A poker variant's full set of rules relevant to dealing and scoring.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub id: [u8; 2],
    pub name: &'static str,
    pub deck: DeckType,
    pub pocket_size: usize,
    pub max_board_size: usize,
    pub streets: Vec<Street>,
    pub double_board: bool,
    pub eval_kind: EvalKind,
}

/// Parse a two-byte type id from a string.
pub fn parse_type(text: &str) -> Result<[u8; 2], PokerError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(PokerError::InvalidType { text: text.to_string() });
    }
    Ok([bytes[0], bytes[1]])
}

fn holdem_streets() -> Vec<Street> {
    vec![
        Street { name: "preflop", kind: StreetKind::Pocket, cards_dealt: 2, splittable_after: true },
        Street { name: "flop", kind: StreetKind::Board, cards_dealt: 3, splittable_after: true },
        Street { name: "turn", kind: StreetKind::Board, cards_dealt: 1, splittable_after: true },
        Street { name: "river", kind: StreetKind::Board, cards_dealt: 1, splittable_after: false },
    ]
}

fn omaha_streets() -> Vec<Street> {
    vec![
        Street { name: "preflop", kind: StreetKind::Pocket, cards_dealt: 4, splittable_after: true },
        Street { name: "flop", kind: StreetKind::Board, cards_dealt: 3, splittable_after: true },
        Street { name: "turn", kind: StreetKind::Board, cards_dealt: 1, splittable_after: true },
        Street { name: "river", kind: StreetKind::Board, cards_dealt: 1, splittable_after: false },
    ]
}

fn seven_card_stud_streets() -> Vec<Street> {
    vec![
        Street { name: "third", kind: StreetKind::Pocket, cards_dealt: 3, splittable_after: true },
        Street { name: "fourth", kind: StreetKind::Pocket, cards_dealt: 1, splittable_after: true },
        Street { name: "fifth", kind: StreetKind::Pocket, cards_dealt: 1, splittable_after: true },
        Street { name: "sixth", kind: StreetKind::Pocket, cards_dealt: 1, splittable_after: true },
        Street { name: "seventh", kind: StreetKind::Pocket, cards_dealt: 1, splittable_after: false },
    ]
}

fn draw_streets() -> Vec<Street> {
    vec![
        Street { name: "deal", kind: StreetKind::Pocket, cards_dealt: 5, splittable_after: true },
        Street { name: "draw", kind: StreetKind::BettingOnly, cards_dealt: 0, splittable_after: false },
    ]
}

fn badugi_streets() -> Vec<Street> {
    vec![
        Street { name: "deal", kind: StreetKind::Pocket, cards_dealt: 4, splittable_after: true },
        Street { name: "first-draw", kind: StreetKind::BettingOnly, cards_dealt: 0, splittable_after: true },
        Street { name: "second-draw", kind: StreetKind::BettingOnly, cards_dealt: 0, splittable_after: true },
        Street { name: "third-draw", kind: StreetKind::BettingOnly, cards_dealt: 0, splittable_after: false },
    ]
}

/// A Hold'em-shaped street schedule with a wider pocket, for the
/// Dallas/Houston/Fusion family: same board, different hole-card count.
fn n_card_holdem_streets(pocket_cards: u8) -> Vec<Street> {
    vec![
        Street { name: "preflop", kind: StreetKind::Pocket, cards_dealt: pocket_cards, splittable_after: true },
        Street { name: "flop", kind: StreetKind::Board, cards_dealt: 3, splittable_after: true },
        Street { name: "turn", kind: StreetKind::Board, cards_dealt: 1, splittable_after: true },
        Street { name: "river", kind: StreetKind::Board, cards_dealt: 1, splittable_after: false },
    ]
}

/// A single-draw street schedule dealing `pocket_cards` cards with one
/// following draw round, for the Five-O/Six-O family.
fn n_card_draw_streets(pocket_cards: u8) -> Vec<Street> {
    vec![
        Street { name: "deal", kind: StreetKind::Pocket, cards_dealt: pocket_cards, splittable_after: true },
        Street { name: "draw", kind: StreetKind::BettingOnly, cards_dealt: 0, splittable_after: false },
    ]
}

fn soko_streets() -> Vec<Street> {
    vec![
        Street { name: "preflop", kind: StreetKind::Pocket, cards_dealt: 4, splittable_after: true },
        Street { name: "flop", kind: StreetKind::Board, cards_dealt: 3, splittable_after: true },
        Street { name: "turn", kind: StreetKind::Board, cards_dealt: 1, splittable_after: true },
        Street { name: "river", kind: StreetKind::Board, cards_dealt: 1, splittable_after: false },
    ]
}

/// Build the built-in variant catalog: Hold'em, Short-deck Hold'em,
/// Manila, Spanish, Royal Hold'em, Omaha, Omaha Hi/Lo, Seven-card Stud,
/// Seven-card Stud Hi/Lo, Razz, 2-to-7 Triple Draw, Jacks-or-Better,
/// Badugi, Soko, Five-O, Six-O, Dallas, Houston, and Fusion.
pub fn builtin_descriptors() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor {
            id: *b"he",
            name: "Texas Hold'em",
            deck: DeckType::French,
            pocket_size: 2,
            max_board_size: 5,
            streets: holdem_streets(),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"sh",
            name: "Short-deck Hold'em",
            deck: DeckType::Short,
            pocket_size: 2,
            max_board_size: 5,
            streets: holdem_streets(),
            double_board: false,
            eval_kind: EvalKind::ShortDeck,
        },
        TypeDescriptor {
            id: *b"ma",
            name: "Manila",
            deck: DeckType::Manila,
            pocket_size: 2,
            max_board_size: 5,
            streets: holdem_streets(),
            double_board: false,
            eval_kind: EvalKind::Manila,
        },
        TypeDescriptor {
            id: *b"sp",
            name: "Spanish Hold'em",
            deck: DeckType::Spanish,
            pocket_size: 2,
            max_board_size: 5,
            streets: holdem_streets(),
            double_board: false,
            eval_kind: EvalKind::Spanish,
        },
        TypeDescriptor {
            id: *b"ro",
            name: "Royal Hold'em",
            deck: DeckType::Royal,
            pocket_size: 2,
            max_board_size: 5,
            streets: holdem_streets(),
            double_board: false,
            eval_kind: EvalKind::Royal,
        },
        TypeDescriptor {
            id: *b"om",
            name: "Omaha",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 5,
            streets: omaha_streets(),
            double_board: false,
            eval_kind: EvalKind::Omaha,
        },
        TypeDescriptor {
            id: *b"o8",
            name: "Omaha Hi/Lo",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 5,
            streets: omaha_streets(),
            double_board: true,
            eval_kind: EvalKind::OmahaHiLo,
        },
        TypeDescriptor {
            id: *b"st",
            name: "Seven-card Stud",
            deck: DeckType::French,
            pocket_size: 7,
            max_board_size: 0,
            streets: seven_card_stud_streets(),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"s8",
            name: "Seven-card Stud Hi/Lo",
            deck: DeckType::French,
            pocket_size: 7,
            max_board_size: 0,
            streets: seven_card_stud_streets(),
            double_board: false,
            eval_kind: EvalKind::EightOrBetterHighLow,
        },
        TypeDescriptor {
            id: *b"rz",
            name: "Razz",
            deck: DeckType::French,
            pocket_size: 7,
            max_board_size: 0,
            streets: seven_card_stud_streets(),
            double_board: false,
            eval_kind: EvalKind::Razz,
        },
        TypeDescriptor {
            id: *b"27",
            name: "2-to-7 Triple Draw",
            deck: DeckType::French,
            pocket_size: 5,
            max_board_size: 0,
            streets: draw_streets(),
            double_board: false,
            eval_kind: EvalKind::DeuceToSevenLowball,
        },
        TypeDescriptor {
            id: *b"jb",
            name: "Jacks-or-Better Draw",
            deck: DeckType::French,
            pocket_size: 5,
            max_board_size: 0,
            streets: draw_streets(),
            double_board: false,
            eval_kind: EvalKind::JacksOrBetter,
        },
        TypeDescriptor {
            id: *b"bd",
            name: "Badugi",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 0,
            streets: badugi_streets(),
            double_board: false,
            eval_kind: EvalKind::Badugi,
        },
        TypeDescriptor {
            id: *b"sk",
            name: "Soko",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 5,
            streets: soko_streets(),
            double_board: false,
            eval_kind: EvalKind::Soko,
        },
        TypeDescriptor {
            id: *b"5o",
            name: "Five-O",
            deck: DeckType::French,
            pocket_size: 5,
            max_board_size: 0,
            streets: n_card_draw_streets(5),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"6o",
            name: "Six-O",
            deck: DeckType::French,
            pocket_size: 6,
            max_board_size: 0,
            streets: n_card_draw_streets(6),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"da",
            name: "Dallas Hold'em",
            deck: DeckType::French,
            pocket_size: 3,
            max_board_size: 5,
            streets: n_card_holdem_streets(3),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"ho",
            name: "Houston Hold'em",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 5,
            streets: n_card_holdem_streets(4),
            double_board: false,
            eval_kind: EvalKind::Standard,
        },
        TypeDescriptor {
            id: *b"fu",
            name: "Fusion Hold'em",
            deck: DeckType::French,
            pocket_size: 4,
            max_board_size: 5,
            streets: n_card_holdem_streets(4),
            double_board: false,
            eval_kind: EvalKind::Fusion,
        },
    ]
}

/// Process-wide catalog of variant descriptors, keyed by two-byte id.
pub struct TypeRegistry {
    entries: RwLock<HashMap<[u8; 2], TypeDescriptor>>,
}

impl TypeRegistry {
    /// A registry pre-populated with [`builtin_descriptors`].
    pub fn with_builtins() -> Self {
        let registry = Self {
            entries: RwLock::new(HashMap::new()),
        };
        for descriptor in builtin_descriptors() {
            registry
                .register(descriptor)
                .expect("builtin ids are unique");
        }
        registry
    }

    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new descriptor, failing if its id is already taken.
    pub fn register(&self, descriptor: TypeDescriptor) -> Result<(), PokerError> {
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(&descriptor.id) {
            return Err(PokerError::InvalidId { id: descriptor.id });
        }
        entries.insert(descriptor.id, descriptor);
        Ok(())
    }

    /// Look up a descriptor by id.
    pub fn get(&self, id: [u8; 2]) -> Result<TypeDescriptor, PokerError> {
        self.entries
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(PokerError::UnknownTypeId { id })
    }

    /// Look up a descriptor by its two-character string id.
    pub fn get_str(&self, text: &str) -> Result<TypeDescriptor, PokerError> {
        self.get(parse_type(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_resolves_every_id() {
        let registry = TypeRegistry::with_builtins();
        for descriptor in builtin_descriptors() {
            let looked_up = registry.get(descriptor.id).unwrap();
            assert_eq!(looked_up.name, descriptor.name);
        }
    }

    #[test]
    fn registering_duplicate_id_fails() {
        let registry = TypeRegistry::empty();
        let holdem = builtin_descriptors().into_iter().find(|d| d.id == *b"he").unwrap();
        registry.register(holdem.clone()).unwrap();
        assert!(registry.register(holdem).is_err());
    }

    #[test]
    fn fusion_and_manila_and_spanish_are_registered() {
        let registry = TypeRegistry::with_builtins();
        assert_eq!(registry.get_str("fu").unwrap().eval_kind, EvalKind::Fusion);
        assert_eq!(registry.get_str("ma").unwrap().eval_kind, EvalKind::Manila);
        assert_eq!(registry.get_str("sp").unwrap().eval_kind, EvalKind::Spanish);
        assert_eq!(registry.get_str("ro").unwrap().eval_kind, EvalKind::Royal);
        assert_eq!(registry.get_str("s8").unwrap().eval_kind, EvalKind::EightOrBetterHighLow);
    }

    #[test]
    fn unknown_id_lookup_fails() {
        let registry = TypeRegistry::with_builtins();
        assert!(registry.get(*b"zz").is_err());
    }

    #[test]
    fn parse_type_requires_exactly_two_bytes() {
        assert!(parse_type("h").is_err());
        assert!(parse_type("he").is_ok());
        assert!(parse_type("heh").is_err());
    }
}
