//! # monopoly-engine
//!
//! A rules engine for a Monopoly variant: dice movement, property
//! acquisition, rent, mortgages, building development, card decks, jail,
//! and a turn-order auction that suspends and resumes the turn.
//!
//! ## Design Principles
//!
//! 1. **Offers, not commands**: Every operation answers with an [`Offer`],
//!    the action (or choice of actions) the caller should take next. The
//!    engine computes what is offered; it does not police what is chosen.
//!
//! 2. **One writer**: All mutation goes through [`StateUpdater`]. The rules
//!    engine reads [`GameState`] and decides.
//!
//! 3. **Closed vocabulary**: [`Action`] and [`CardKind`] are tagged enums,
//!    so every dispatch is an exhaustive match.
//!
//! 4. **Injected randomness**: Dice are a trait. Games are reproducible
//!    from a seed, or fully scripted with [`LoadedDice`].
//!
//! ## Modules
//!
//! - `core`: Players, state, updater, actions, RNG, configuration, errors
//! - `board`: Squares, sets, cards and board providers
//! - `rules`: `RulesEngine` trait
//! - `game`: The rules engine
//! - `store`: Games by id
//!
//! ## Example
//!
//! ```
//! use monopoly_engine::{Action, Game, GameConfig, LoadedDice, RulesEngine, StandardBoard};
//!
//! let config = GameConfig::default().with_players(2);
//! let mut game = Game::from_provider(&StandardBoard, config)
//!     .unwrap()
//!     .with_dice(LoadedDice::new([(3, 4)]));
//!
//! let offer = game.apply(&Action::Roll).unwrap();
//! assert!(offer.is(&Action::GoTo { position: 7 }));
//!
//! let offer = game.apply(&Action::GoTo { position: 7 }).unwrap();
//! assert!(offer.is(&Action::DrawCard));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Action, Auction, Dice, GameConfig, GameError, GameResult, GameRng, GameState,
    LoadedDice, Offer, Player, PlayerId, PlayerMap, StateUpdater,
};

pub use crate::board::{
    BoardData, BoardError, BoardProvider, Card, CardKind, DeckData, JsonBoard, Lot, Property,
    PropertyKind, PropertySet, SetId, StandardBoard,
};

pub use crate::rules::RulesEngine;

pub use crate::game::Game;

pub use crate::store::{GameId, GameStore};
