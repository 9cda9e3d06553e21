//! Games by id.
//!
//! The store owns every live game and a board provider to create new ones
//! from. It is an ordinary value: a host keeps one and guards it however
//! it serializes requests.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::BoardProvider;
use crate::core::{GameConfig, GameError, GameResult};
use crate::game::Game;

/// Opaque game identifier. Ids are handed out sequentially.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Live games, created from one board provider.
pub struct GameStore<P: BoardProvider> {
    provider: P,
    config: GameConfig,
    games: FxHashMap<GameId, Game>,
    next_id: u32,
}

impl<P: BoardProvider> GameStore<P> {
    /// New games use `config` unless created with their own.
    #[must_use]
    pub fn new(provider: P, config: GameConfig) -> Self {
        Self {
            provider,
            config,
            games: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Create a game with the store's configuration.
    pub fn create(&mut self) -> GameResult<GameId> {
        self.create_with(self.config.clone())
    }

    /// Create a game with its own configuration.
    pub fn create_with(&mut self, config: GameConfig) -> GameResult<GameId> {
        let game = Game::from_provider(&self.provider, config)?;
        let id = GameId(self.next_id);
        self.next_id += 1;
        self.games.insert(id, game);
        info!("Stored game {}", id);
        Ok(id)
    }

    pub fn get(&self, id: GameId) -> GameResult<&Game> {
        self.games.get(&id).ok_or_else(|| {
            warn!("Lookup of unknown game {}", id);
            GameError::UnknownGame(id)
        })
    }

    pub fn get_mut(&mut self, id: GameId) -> GameResult<&mut Game> {
        self.games.get_mut(&id).ok_or_else(|| {
            warn!("Lookup of unknown game {}", id);
            GameError::UnknownGame(id)
        })
    }

    /// Remove a finished game.
    pub fn remove(&mut self, id: GameId) -> GameResult<Game> {
        self.games.remove(&id).ok_or(GameError::UnknownGame(id))
    }

    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Ids of every live game, in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        let mut ids: Vec<_> = self.games.keys().copied().collect();
        ids.sort();
        ids
    }
}
