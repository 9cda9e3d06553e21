//! Chance and Community Chest cards.
//!
//! Decks are conveyor belts: a drawn card goes to the bottom of its deck,
//! except a get-out-of-jail card, which the player keeps until used.

use serde::{Deserialize, Serialize};

use super::property::PropertyKind;

/// What a card does when drawn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "card", rename_all = "camelCase")]
pub enum CardKind {
    /// Advance to a fixed square.
    AdvanceTo { position: usize },
    /// Advance to the next square of a kind.
    AdvanceToNearest { kind: PropertyKind },
    /// Move by a number of squares; negative moves backward.
    MoveBy { offset: i64 },
    GoToJail,
    Pay { amount: i64 },
    Collect { amount: i64 },
    PayEachPlayer { amount: i64 },
    CollectFromEachPlayer { amount: i64 },
    /// Kept in hand until used to leave jail.
    GetOutOfJail,
    GeneralRepairs { house: i64, hotel: i64 },
}

/// A card and the deck it returns to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Name of the deck (and of the squares that draw from it).
    pub deck: String,

    #[serde(flatten)]
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn new(deck: impl Into<String>, kind: CardKind) -> Self {
        Self {
            deck: deck.into(),
            kind,
        }
    }

    /// Kept by the player instead of returning to the deck.
    #[must_use]
    pub fn is_kept(&self) -> bool {
        matches!(self.kind, CardKind::GetOutOfJail)
    }
}
