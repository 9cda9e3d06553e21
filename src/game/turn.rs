//! Turn flow: rolling, jail, passing Go and handing over the turn.

use tracing::{debug, info};

use super::Game;
use crate::core::{Action, Dice, GameResult, Offer};

impl<D: Dice> Game<D> {
    /// Roll both dice and work out where the current player goes.
    ///
    /// Rolling the configured number of doubles in a row sends the player
    /// to jail wherever the dice land. A jailed player leaves free on
    /// doubles, must pay on their last jail turn, and otherwise serves time.
    pub fn roll(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        let (d1, d2) = self.dice.roll();
        let mut updater = self.updater();
        updater.mark_started();
        updater.set_roll(d1, d2);

        let id = self.state.player;
        let player = self.state.current();
        let (doubles, in_jail) = (player.doubles, player.in_jail);
        debug!("{} rolled {} and {}", id, d1, d2);

        if doubles >= self.config.doubles_limit {
            info!("{} rolled {} doubles in a row", id, doubles);
            self.updater().clear_doubles();
            return self.surface(Offer::one(Action::GoToJail));
        }

        let destination = self.state.destination(self.state.roll_total());
        if in_jail > 0 {
            let action = if d1 == d2 {
                Action::LeaveJail {
                    position: Some(destination),
                    amount: None,
                }
            } else if in_jail == 1 {
                Action::LeaveJail {
                    position: Some(destination),
                    amount: Some(self.config.jail_fee),
                }
            } else {
                Action::ServeTime
            };
            return self.surface(Offer::one(action));
        }

        self.jump(destination)
    }

    /// Move forward to `position`, collecting the Go bonus if that wraps
    /// around the board.
    pub fn jump(&mut self, position: usize) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.check_position(position)?;

        let action = if position < self.state.current().position {
            Action::PassGo {
                position,
                amount: self.config.go_bonus,
            }
        } else {
            Action::GoTo { position }
        };
        self.surface(Offer::one(action))
    }

    pub fn go_to_jail(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.updater().go_to_jail();
        info!("{} went to jail", self.state.player);
        self.surface(Offer::end_turn())
    }

    /// Leave jail, paying `amount` if given, then move to `position` if
    /// given or roll.
    pub fn leave_jail(&mut self, position: Option<usize>, amount: Option<i64>) -> GameResult<Offer> {
        self.check_no_auction()?;
        if let Some(position) = position {
            self.check_position(position)?;
        }

        let mut updater = self.updater();
        if let Some(amount) = amount {
            updater.pay_bank(amount);
        }
        updater.leave_jail();
        info!("{} left jail", self.state.player);

        match position {
            Some(position) => self.jump(position),
            None => self.surface(Offer::roll()),
        }
    }

    pub fn serve_time(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.updater().serve_time();
        debug!(
            "{} serves time, {} turns left",
            self.state.player,
            self.state.current().in_jail
        );
        self.surface(Offer::end_turn())
    }

    /// Collect `amount` for passing Go, then move to `position`.
    pub fn pass_go(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.check_position(position)?;
        self.updater().pay_bank(-amount);
        debug!("{} passed Go and collected {}", self.state.player, amount);
        self.surface(Offer::one(Action::GoTo { position }))
    }

    /// Hand the turn to the next player, unless the current one rolled
    /// doubles and goes again.
    ///
    /// A jailed next player is offered a way out before rolling: their
    /// card if they hold one, otherwise the fee.
    pub fn end_turn(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;

        if self.state.current().doubles < 1 {
            self.updater().advance_player();
            info!("Turn passed to {}", self.state.player);
        }

        let next = self.state.current();
        let offer = if next.is_jailed() {
            let release = if next.has_release_card() {
                Action::UseCard
            } else {
                Action::pay_to_leave_jail(self.config.jail_fee)
            };
            Offer::choice([release, Action::Roll])
        } else {
            Offer::roll()
        };
        self.surface(offer)
    }
}
