//! Board data: squares, property sets, card decks and their providers.
//!
//! ## Key Types
//!
//! - `Property`: one square and its mutable ownership state
//! - `PropertySet`: shared kind and building cost of a color group
//! - `Lot`: read-only join of a square with its set
//! - `Card` / `CardKind`: deck cards
//! - `BoardProvider`: supplies `BoardData` once per game creation

pub mod card;
pub mod property;
pub mod provider;

pub use card::{Card, CardKind};
pub use property::{Lot, Property, PropertyKind, PropertySet, SetId};
pub use provider::{BoardData, BoardError, BoardProvider, DeckData, JsonBoard, StandardBoard};
