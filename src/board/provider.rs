//! Board providers: where a new game gets its squares, sets and decks.
//!
//! A provider is consulted once per game creation. `StandardBoard` ships
//! the classic 40-square board; `JsonBoard` reads the same format from any
//! string; `BoardData` itself is a provider, which keeps tests short.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::CardKind;
use super::property::{Property, PropertySet, SetId};

const STANDARD_BOARD: &str = include_str!("../../data/standard_board.json");

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board has no squares")]
    Empty,
    #[error("square {position} references unknown set {set}")]
    UnknownSet { position: usize, set: SetId },
    #[error("set {0} is defined twice")]
    DuplicateSet(SetId),
    #[error("deck {0} is defined twice")]
    DuplicateDeck(String),
}

/// One named deck, in printed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckData {
    pub name: String,
    pub cards: Vec<CardKind>,
}

/// Static definition of a board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    pub squares: Vec<Property>,
    pub sets: Vec<PropertySet>,
    #[serde(default)]
    pub decks: Vec<DeckData>,
}

impl BoardData {
    /// Parse and validate a board from JSON.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let data: BoardData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check that every square's set exists and ids are unique.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.squares.is_empty() {
            return Err(BoardError::Empty);
        }

        let mut sets = FxHashSet::default();
        for set in &self.sets {
            if !sets.insert(set.id) {
                return Err(BoardError::DuplicateSet(set.id));
            }
        }

        for (position, square) in self.squares.iter().enumerate() {
            if !sets.contains(&square.set) {
                return Err(BoardError::UnknownSet {
                    position,
                    set: square.set,
                });
            }
        }

        let mut decks = FxHashSet::default();
        for deck in &self.decks {
            if !decks.insert(deck.name.as_str()) {
                return Err(BoardError::DuplicateDeck(deck.name.clone()));
            }
        }

        Ok(())
    }
}

/// Supplies static board data for a new game.
pub trait BoardProvider {
    fn board(&self) -> Result<BoardData, BoardError>;
}

impl BoardProvider for BoardData {
    fn board(&self) -> Result<BoardData, BoardError> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// The classic board with Chance and Community Chest.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBoard;

impl BoardProvider for StandardBoard {
    fn board(&self) -> Result<BoardData, BoardError> {
        BoardData::from_json(STANDARD_BOARD)
    }
}

/// A board described by a JSON document.
#[derive(Clone, Debug)]
pub struct JsonBoard {
    json: String,
}

impl JsonBoard {
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl BoardProvider for JsonBoard {
    fn board(&self) -> Result<BoardData, BoardError> {
        BoardData::from_json(&self.json)
    }
}
