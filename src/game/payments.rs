//! Cash to and from the bank and the other players.
//!
//! None of these check funds; cash may go negative.

use tracing::debug;

use super::Game;
use crate::core::{Dice, GameResult, Offer};

impl<D: Dice> Game<D> {
    pub fn pay_bank(&mut self, amount: i64) -> GameResult<Offer> {
        self.updater().pay_bank(amount);
        debug!("{} paid the bank {}", self.state.player, amount);
        self.surface(Offer::end_turn())
    }

    pub fn collect(&mut self, amount: i64) -> GameResult<Offer> {
        self.pay_bank(-amount)
    }

    /// Pay `amount` to every other player.
    pub fn pay_each_player(&mut self, amount: i64) -> GameResult<Offer> {
        self.updater().pay_each_player(amount);
        debug!("{} paid each player {}", self.state.player, amount);
        self.surface(Offer::end_turn())
    }

    /// Collect `amount` from every other player.
    pub fn collect_from_each_player(&mut self, amount: i64) -> GameResult<Offer> {
        self.pay_each_player(-amount)
    }
}
