//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! Everything here is independent of where the board comes from. The rules
//! themselves live in [`crate::game`]; this module only holds the data they
//! read and the updater they write through.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod updater;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{Dice, GameRng, LoadedDice};
pub use config::GameConfig;
pub use action::{Action, Offer};
pub use state::{Auction, GameState};
pub use updater::StateUpdater;
pub use error::{GameError, GameResult};
