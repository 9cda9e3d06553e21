//! The rules engine.
//!
//! `Game` owns one game's state, its configuration and its dice. Each
//! public operation validates its inputs, writes through the
//! [`StateUpdater`], and returns the next [`Offer`].
//!
//! Operations are grouped by concern:
//!
//! - `turn`: rolling, jail, passing Go, ending the turn
//! - `landing`: moving onto a square and what it demands
//! - `cards`: drawing, keeping and using cards
//! - `payments`: cash to the bank and between players
//! - `property`: buying, rent, mortgages and development
//! - `auction`: the bidding sub-game

mod auction;
mod cards;
mod landing;
mod payments;
mod property;
mod turn;

use tracing::{info, warn};

use crate::board::BoardProvider;
use crate::core::{
    Action, Dice, GameConfig, GameError, GameResult, GameRng, GameState, Offer, StateUpdater,
};
use crate::rules::RulesEngine;

/// One game: state, configuration and dice.
#[derive(Clone, Debug)]
pub struct Game<D: Dice = GameRng> {
    state: GameState,
    config: GameConfig,
    dice: D,
}

impl Game<GameRng> {
    /// Create a game from a board provider, seeded from the config.
    pub fn from_provider<P: BoardProvider + ?Sized>(
        provider: &P,
        config: GameConfig,
    ) -> GameResult<Self> {
        let board = provider.board()?;
        let state = GameState::new(board, &config)?;
        let dice = GameRng::new(config.seed).for_context("dice");
        info!(
            "Created game with {} players on {} squares",
            state.player_count(),
            state.board_size()
        );
        Self::new(state, config, dice)
    }
}

impl<D: Dice> Game<D> {
    /// Assemble a game. The config must fit the table and its jail must
    /// be on the board.
    pub fn new(state: GameState, config: GameConfig, dice: D) -> GameResult<Self> {
        config.validate()?;
        state.check_position(config.jail_position).inspect_err(|err| {
            warn!("Rejected config: {}", err);
        })?;
        Ok(Self {
            state,
            config,
            dice,
        })
    }

    /// Replace the dice, keeping state and config.
    #[must_use]
    pub fn with_dice<E: Dice>(self, dice: E) -> Game<E> {
        Game {
            state: self.state,
            config: self.config,
            dice,
        }
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn updater(&mut self) -> StateUpdater<'_> {
        StateUpdater::new(&mut self.state, &self.config)
    }

    /// Record a turn-level offer as pending and hand it back.
    ///
    /// Offers made while an auction is running belong to the auction and
    /// are not recorded.
    fn surface(&mut self, offer: Offer) -> GameResult<Offer> {
        if self.state.auction.is_none() {
            self.updater().set_pending(offer.clone());
        }
        Ok(offer)
    }

    /// What to offer after a side action (mortgage, development) that
    /// does not advance the turn.
    fn resume(&self) -> Offer {
        match &self.state.auction {
            Some(auction) if auction.closed => Offer::one(Action::EndAuction),
            Some(_) => Offer::bid_or_stay(),
            None => self.state.pending.clone(),
        }
    }

    fn check_position(&self, position: usize) -> GameResult<()> {
        self.state.check_position(position).inspect_err(|err| {
            warn!("Rejected request: {}", err);
        })
    }

    fn check_no_auction(&self) -> GameResult<()> {
        if self.state.auction.is_some() {
            warn!("Rejected turn action while an auction is in progress");
            return Err(GameError::AuctionInProgress);
        }
        Ok(())
    }
}

impl<D: Dice> RulesEngine for Game<D> {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn apply(&mut self, action: &Action) -> GameResult<Offer> {
        match *action {
            Action::Roll => self.roll(),
            Action::GoToJail => self.go_to_jail(),
            Action::LeaveJail { position, amount } => self.leave_jail(position, amount),
            Action::UseCard => self.use_card(),
            Action::ServeTime => self.serve_time(),
            Action::PassGo { position, amount } => self.pass_go(position, amount),
            Action::DrawCard => self.draw_card(),
            Action::CollectCard => self.collect_card(),
            Action::Jump { position } => self.jump(position),
            Action::GoTo { position } => self.go_to(position),
            Action::Pay { amount } => self.pay_bank(amount),
            Action::Collect { amount } => self.collect(amount),
            Action::PayEachPlayer { amount } => self.pay_each_player(amount),
            Action::CollectFromEachPlayer { amount } => self.collect_from_each_player(amount),
            Action::Buy { position, price } => self.buy_property(position, price),
            Action::Rent { position, amount } => self.pay_rent(position, amount),
            Action::EndTurn => self.end_turn(),
            Action::Mortgage { position, amount } => self.mortgage(position, amount),
            Action::LiftMortgage { position, amount } => self.lift_mortgage(position, amount),
            Action::Develop { position, amount } => self.develop(position, amount),
            Action::Demolish { position, amount } => self.demolish(position, amount),
            Action::Auction {
                position,
                interrupt,
            } => self.auction(position, interrupt),
            Action::Bid { amount: Some(amount) } => self.bid(amount),
            Action::Bid { amount: None } => {
                warn!("Rejected bid without an amount");
                Err(GameError::MissingBid)
            }
            Action::Stay => self.stay(),
            Action::EndAuction => self.end_auction(),
        }
    }
}
