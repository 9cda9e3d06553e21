//! Game configuration.
//!
//! House rules and table size are configured at game creation. The engine
//! never hardcodes fees, bonuses or the jail square.
//!
//! ```
//! use monopoly_engine::core::GameConfig;
//!
//! let config = GameConfig::default().with_players(4).with_seed(7);
//! assert_eq!(config.player_count, 4);
//! assert_eq!(config.starting_cash, 1200);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players.
    pub player_count: usize,

    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Bonus collected when passing the first square.
    pub go_bonus: i64,

    /// Fee paid to leave jail early.
    pub jail_fee: i64,

    /// Board index of the jail square.
    pub jail_position: usize,

    /// Turns served when jailed.
    pub jail_sentence: u8,

    /// Consecutive doubles that send a player to jail.
    pub doubles_limit: u8,

    /// Most houses a property can hold (the last one is the hotel).
    pub max_houses: u8,

    /// Interest charged on lifting a mortgage, in percent of half the price.
    pub lift_interest_percent: i64,

    /// Interest for encumbered properties, in percent of half the price.
    pub encumbered_interest_percent: i64,

    /// Name of the square that sends a player to jail.
    pub go_to_jail_square: String,

    /// Seed for dice and deck shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            starting_cash: 1200,
            go_bonus: 200,
            jail_fee: 50,
            jail_position: 10,
            jail_sentence: 3,
            doubles_limit: 3,
            max_houses: 5,
            lift_interest_percent: 110,
            encumbered_interest_percent: 120,
            go_to_jail_square: "Go To Jail".to_string(),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_jail(mut self, position: usize, sentence: u8, fee: i64) -> Self {
        self.jail_position = position;
        self.jail_sentence = sentence;
        self.jail_fee = fee;
        self
    }

    /// Cost to lift a mortgage on a property listed at `price`.
    ///
    /// Truncates toward zero: `price / 2 * 1.1` (or `1.2` when encumbered).
    #[must_use]
    pub fn lift_cost(&self, price: i64, encumbered: bool) -> i64 {
        let percent = if encumbered {
            self.encumbered_interest_percent
        } else {
            self.lift_interest_percent
        };
        price * percent / 200
    }

    /// Check the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::PlayerCount(self.player_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.player_count, 3);
        assert_eq!(config.go_bonus, 200);
        assert_eq!(config.jail_fee, 50);
        assert_eq!(config.doubles_limit, 3);
    }

    #[test]
    fn test_lift_cost_truncates() {
        let config = GameConfig::default();

        assert_eq!(config.lift_cost(200, false), 110);
        assert_eq!(config.lift_cost(200, true), 120);
        // 1.1 * 30 = 33, 1.1 * 35 = 38.5
        assert_eq!(config.lift_cost(60, false), 33);
        assert_eq!(config.lift_cost(70, false), 38);
    }

    #[test]
    fn test_validate_player_count() {
        assert!(GameConfig::default().with_players(2).validate().is_ok());
        assert!(GameConfig::default().with_players(8).validate().is_ok());
        assert!(matches!(
            GameConfig::default().with_players(1).validate(),
            Err(GameError::PlayerCount(1))
        ));
        assert!(GameConfig::default().with_players(9).validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"player_count": 4, "seed": 9}"#).unwrap();

        assert_eq!(config.player_count, 4);
        assert_eq!(config.seed, 9);
        assert_eq!(config.starting_cash, 1200);
    }
}
