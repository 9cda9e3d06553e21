//! The only writer of [`GameState`].
//!
//! Each method is one named mutation. Preconditions (positions on the
//! board, enough cash, a legal development) are the rules engine's job;
//! nothing here re-validates them, and no method refuses for lack of funds.

use super::action::Offer;
use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::player::PlayerId;
use super::state::{Auction, GameState};

/// Applies single mutations to a game state.
pub struct StateUpdater<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> StateUpdater<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Read the state being updated.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.state
    }

    // === Turn ===

    pub fn mark_started(&mut self) {
        self.state.started = true;
    }

    /// Record a roll and extend or reset the doubles streak.
    pub fn set_roll(&mut self, d1: u8, d2: u8) {
        self.state.roll = (d1, d2);
        let player = &mut self.state.players[self.state.player];
        if d1 == d2 {
            player.doubles += 1;
        } else {
            player.doubles = 0;
        }
    }

    pub fn clear_doubles(&mut self) {
        self.state.players[self.state.player].doubles = 0;
    }

    /// Record the offer the caller was last given.
    pub fn set_pending(&mut self, offer: Offer) {
        self.state.pending = offer;
    }

    /// Hand the turn to the next seat.
    pub fn advance_player(&mut self) {
        self.state.player = self.state.player.next(self.state.player_count());
    }

    // === Movement and jail ===

    pub fn go_to(&mut self, position: usize) {
        self.state.players[self.state.player].position = position;
    }

    pub fn go_to_jail(&mut self) {
        let player = &mut self.state.players[self.state.player];
        player.position = self.config.jail_position;
        player.in_jail = self.config.jail_sentence;
        player.doubles = 0;
    }

    pub fn leave_jail(&mut self) {
        self.state.players[self.state.player].in_jail = 0;
    }

    pub fn serve_time(&mut self) {
        let player = &mut self.state.players[self.state.player];
        player.in_jail = player.in_jail.saturating_sub(1);
    }

    // === Cash ===

    /// Current player pays the bank. A negative amount is a credit.
    pub fn pay_bank(&mut self, amount: i64) {
        self.state.players[self.state.player].cash -= amount;
    }

    pub fn pay_player(&mut self, payee: PlayerId, amount: i64) {
        self.state.players[self.state.player].cash -= amount;
        self.state.players[payee].cash += amount;
    }

    /// Current player pays `amount` to every other player.
    pub fn pay_each_player(&mut self, amount: i64) {
        let payer = self.state.player;
        let others = self.state.player_count() as i64 - 1;
        for (id, player) in self.state.players.iter_mut() {
            if id == payer {
                player.cash -= amount * others;
            } else {
                player.cash += amount;
            }
        }
    }

    // === Property ===

    /// Current player takes ownership. Payment is a separate call.
    pub fn acquire_property(&mut self, position: usize) {
        self.state.board[position].owner = Some(self.state.player);
    }

    /// Owner receives `amount`; the property is mortgaged.
    pub fn mortgage_property(&mut self, position: usize, amount: i64) {
        let property = &mut self.state.board[position];
        property.mortgaged = true;
        if let Some(owner) = property.owner {
            self.state.players[owner].cash += amount;
        }
    }

    /// Owner pays `amount`; the mortgage is lifted. An encumbered
    /// property stays encumbered.
    pub fn unmortgage_property(&mut self, position: usize, amount: i64) {
        let property = &mut self.state.board[position];
        property.mortgaged = false;
        if let Some(owner) = property.owner {
            self.state.players[owner].cash -= amount;
        }
    }

    pub fn encumber(&mut self, position: usize) {
        self.state.board[position].encumbered = true;
    }

    /// Owner pays `amount` for one more house.
    pub fn develop(&mut self, position: usize, amount: i64) {
        let property = &mut self.state.board[position];
        property.houses += 1;
        if let Some(owner) = property.owner {
            self.state.players[owner].cash -= amount;
        }
    }

    /// Owner receives `amount` for one house sold back.
    pub fn demolish(&mut self, position: usize, amount: i64) {
        let property = &mut self.state.board[position];
        property.houses = property.houses.saturating_sub(1);
        if let Some(owner) = property.owner {
            self.state.players[owner].cash += amount;
        }
    }

    // === Cards ===

    /// Move a deck's head to its tail.
    pub fn swap_card(&mut self, deck: &str) -> GameResult<()> {
        let cards = self
            .state
            .decks
            .get_mut(deck)
            .ok_or_else(|| GameError::UnknownDeck(deck.to_string()))?;
        let card = cards
            .pop_front()
            .ok_or_else(|| GameError::EmptyDeck(deck.to_string()))?;
        cards.push_back(card);
        Ok(())
    }

    /// Move a deck's head into the current player's hand.
    pub fn collect_card(&mut self, deck: &str) -> GameResult<()> {
        let cards = self
            .state
            .decks
            .get_mut(deck)
            .ok_or_else(|| GameError::UnknownDeck(deck.to_string()))?;
        let card = cards
            .pop_front()
            .ok_or_else(|| GameError::EmptyDeck(deck.to_string()))?;
        self.state.players[self.state.player].cards.push(card);
        Ok(())
    }

    /// Return the current player's oldest card to the tail of its deck.
    pub fn use_card(&mut self) -> GameResult<()> {
        let player = &mut self.state.players[self.state.player];
        if player.cards.is_empty() {
            return Err(GameError::NoHeldCard);
        }
        let card = player.cards.remove(0);
        self.state
            .decks
            .entry(card.deck.clone())
            .or_default()
            .push_back(card);
        Ok(())
    }

    // === Auction ===

    /// Open an auction; the first bidder becomes the current player.
    pub fn start_auction(
        &mut self,
        position: usize,
        bidders: Vec<PlayerId>,
        initiator: PlayerId,
        resume: Offer,
    ) {
        let auction = Auction {
            position,
            bidders,
            order: 0,
            highest_bidder: None,
            amount: 0,
            initiator,
            resume,
            closed: false,
        };
        self.state.player = auction.current_bidder();
        self.state.auction = Some(auction);
    }

    /// The current player becomes the highest bidder at `amount`.
    pub fn record_bid(&mut self, amount: i64) {
        let bidder = self.state.player;
        if let Some(auction) = self.state.auction.as_mut() {
            auction.highest_bidder = Some(bidder);
            auction.amount = amount;
        }
    }

    /// Pass the bid to the next player in the auction order.
    pub fn advance_auction_order(&mut self) {
        if let Some(auction) = self.state.auction.as_mut() {
            auction.order = auction.next_order();
            self.state.player = auction.current_bidder();
        }
    }

    pub fn close_auction(&mut self) {
        if let Some(auction) = self.state.auction.as_mut() {
            auction.closed = true;
        }
    }

    /// Drop the auction and hand the turn back to whoever it interrupted.
    pub fn resume_after_auction(&mut self) {
        if let Some(auction) = self.state.auction.take() {
            self.state.player = auction.initiator;
            self.state.pending = auction.resume;
        }
    }
}
