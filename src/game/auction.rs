//! The auction sub-game.
//!
//! An auction suspends the turn. Every player gets a turn to bid, in seat
//! order starting after the initiator, and the bid passes around until it
//! comes back to the highest bidder. While it runs, the current player is
//! whoever is bidding. Settling it (buying, lifting the mortgage, or
//! nobody bidding) restores the initiator and the suspended offer.

use tracing::{debug, info};

use super::Game;
use crate::core::{Action, Dice, GameError, GameResult, Offer};

impl<D: Dice> Game<D> {
    /// Put `position` up for auction.
    ///
    /// With `interrupt` the current turn resumes where it left off
    /// afterwards; otherwise the auction ends the turn.
    pub fn auction(&mut self, position: usize, interrupt: bool) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.check_position(position)?;

        let resume = if interrupt {
            self.state.pending.clone()
        } else {
            Offer::end_turn()
        };
        let initiator = self.state.player;
        let bidders = initiator.rotation(self.state.player_count());

        self.updater()
            .start_auction(position, bidders, initiator, resume);
        info!(
            "{} opened an auction for {}",
            initiator, self.state.board[position].name
        );
        Ok(Offer::bid_or_stay())
    }

    /// Current bidder offers `amount`. A bid that does not beat the
    /// highest so far changes nothing.
    pub fn bid(&mut self, amount: i64) -> GameResult<Offer> {
        let auction = self.state.auction()?;
        if auction.closed {
            return Ok(Offer::one(Action::EndAuction));
        }
        if amount <= auction.amount {
            debug!(
                "Rejected bid of {} from {}, highest is {}",
                amount, self.state.player, auction.amount
            );
            return Ok(Offer::bid_or_stay());
        }

        let mut updater = self.updater();
        updater.record_bid(amount);
        updater.advance_auction_order();
        debug!("Bid of {} accepted", amount);

        self.close_if_done()
    }

    /// Current bidder passes.
    pub fn stay(&mut self) -> GameResult<Offer> {
        if self.state.auction()?.closed {
            return Ok(Offer::one(Action::EndAuction));
        }

        debug!("{} stays", self.state.player);
        self.updater().advance_auction_order();
        self.close_if_done()
    }

    /// Close the auction if the bid has come back around to the highest
    /// bidder, or gone all the way around with nobody bidding.
    fn close_if_done(&mut self) -> GameResult<Offer> {
        let auction = self.state.auction()?;
        let done = match auction.highest_bidder {
            Some(bidder) => bidder == self.state.player,
            None => auction.order == 0,
        };
        if !done {
            return Ok(Offer::bid_or_stay());
        }

        self.updater().close_auction();
        Ok(Offer::one(Action::EndAuction))
    }

    /// Settle a closed auction.
    ///
    /// Nobody bidding, or the owner winning their own square, simply
    /// resumes the suspended turn. Otherwise the winner is offered the
    /// square at their bid, and lifting its mortgage as well when it is
    /// mortgaged and they can afford both.
    pub fn end_auction(&mut self) -> GameResult<Offer> {
        let auction = self.state.auction()?;
        if !auction.closed {
            return Err(GameError::AuctionOpen);
        }

        let position = auction.position;
        let amount = auction.amount;
        let Some(winner) = auction.highest_bidder else {
            info!("Auction for position {} closed unsold", position);
            return self.finish_auction();
        };

        let property = &self.state.board[position];
        if property.owner == Some(winner) {
            info!("{} kept position {}", winner, position);
            return self.finish_auction();
        }

        info!("{} won position {} for {}", winner, position, amount);
        let mut offer = Offer::one(Action::Buy {
            position,
            price: amount,
        });
        if property.mortgaged {
            let cost = self.config.lift_cost(property.price, false);
            if self.state.players[winner].cash >= cost + amount {
                offer.push(Action::LiftMortgage {
                    position,
                    amount: cost,
                });
            }
        }
        Ok(offer)
    }

    /// The winning bid, if a closed auction for `position` awaits its
    /// purchase by the current player.
    pub(super) fn settlement(&self, position: usize) -> Option<i64> {
        let auction = self.state.auction.as_ref()?;
        let won = auction.closed
            && auction.position == position
            && auction.highest_bidder == Some(self.state.player);
        won.then_some(auction.amount)
    }

    /// Drop the auction and return to the suspended turn.
    pub(super) fn finish_auction(&mut self) -> GameResult<Offer> {
        self.updater().resume_after_auction();
        debug!("Turn resumes with {}", self.state.player);
        Ok(self.state.pending.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{self, MAYFAIR};
    use crate::core::{Action, GameError, LoadedDice, Offer, PlayerId};
    use crate::game::Game;
    use crate::rules::RulesEngine;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn open(game: &mut Game<LoadedDice>) {
        let offer = game.auction(MAYFAIR, false).unwrap();
        assert_eq!(offer, Offer::bid_or_stay());
    }

    #[test]
    fn test_bidding_starts_after_initiator() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);

        let auction = game.state().auction().unwrap();
        assert_eq!(auction.bidders, vec![P1, P2, P0]);
        assert_eq!(game.state().player, P1);
    }

    #[test]
    fn test_second_auction_rejected() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);

        assert!(matches!(
            game.auction(MAYFAIR, false),
            Err(GameError::AuctionInProgress)
        ));
        assert!(matches!(game.end_turn(), Err(GameError::AuctionInProgress)));
    }

    #[test]
    fn test_low_bid_is_ignored() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);
        game.bid(100).unwrap();

        let offer = game.bid(100).unwrap();

        assert_eq!(offer, Offer::bid_or_stay());
        let auction = game.state().auction().unwrap();
        assert_eq!(auction.highest_bidder, Some(P1));
        assert_eq!(game.state().player, P2);
    }

    #[test]
    fn test_auction_closes_back_at_highest_bidder() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);

        assert_eq!(game.bid(100).unwrap(), Offer::bid_or_stay());
        assert_eq!(game.stay().unwrap(), Offer::bid_or_stay());
        let offer = game.stay().unwrap();

        assert!(offer.is(&Action::EndAuction));
        assert_eq!(game.state().player, P1);
    }

    #[test]
    fn test_end_auction_before_close_fails() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);
        assert!(matches!(game.end_auction(), Err(GameError::AuctionOpen)));
    }

    #[test]
    fn test_winner_buys_and_turn_resumes() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);
        game.bid(100).unwrap();
        game.stay().unwrap();
        game.stay().unwrap();

        let offer = game.end_auction().unwrap();
        assert!(offer.is(&Action::Buy {
            position: MAYFAIR,
            price: 100
        }));

        let offer = game.buy_property(MAYFAIR, 100).unwrap();

        assert!(offer.is(&Action::EndTurn));
        assert!(game.state().auction.is_none());
        assert_eq!(game.state().player, P0);
        assert_eq!(game.state().board[MAYFAIR].owner, Some(P1));
        assert_eq!(game.state().players[P1].cash, 1100);
    }

    #[test]
    fn test_nobody_bids() {
        let mut game = fixtures::game(|_| {});
        open(&mut game);

        game.stay().unwrap();
        game.stay().unwrap();
        assert!(game.stay().unwrap().is(&Action::EndAuction));

        let offer = game.end_auction().unwrap();

        assert!(offer.is(&Action::EndTurn));
        assert!(game.state().auction.is_none());
        assert_eq!(game.state().board[MAYFAIR].owner, None);
        assert_eq!(game.state().player, P0);
    }

    #[test]
    fn test_interrupting_auction_resumes_pending() {
        let mut game = fixtures::game(|state| {
            state.board[MAYFAIR].owner = Some(P0);
        });
        let pending = game.jump(3).unwrap();

        game.auction(MAYFAIR, true).unwrap();
        game.stay().unwrap();
        game.stay().unwrap();
        game.bid(10).unwrap();
        game.stay().unwrap();
        assert!(game.stay().unwrap().is(&Action::EndAuction));

        let offer = game.end_auction().unwrap();

        assert_eq!(offer, pending);
        assert_eq!(game.state().board[MAYFAIR].owner, Some(P0));
        assert_eq!(game.state().players[P0].cash, 1200);
    }

    #[test]
    fn test_mortgaged_win_offers_lift() {
        let mut game = fixtures::game(|state| {
            state.board[MAYFAIR].owner = Some(P2);
            state.board[MAYFAIR].mortgaged = true;
        });
        open(&mut game);
        game.bid(100).unwrap();
        game.stay().unwrap();
        game.stay().unwrap();

        let offer = game.end_auction().unwrap();
        assert_eq!(
            offer,
            Offer::choice([
                Action::Buy {
                    position: MAYFAIR,
                    price: 100
                },
                Action::LiftMortgage {
                    position: MAYFAIR,
                    amount: 220
                }
            ])
        );

        game.lift_mortgage(MAYFAIR, 220).unwrap();

        let property = &game.state().board[MAYFAIR];
        assert_eq!(property.owner, Some(P1));
        assert!(!property.mortgaged);
        assert!(!property.encumbered);
        assert_eq!(game.state().players[P1].cash, 880);
        assert_eq!(game.state().players[P2].cash, 1300);
        assert!(game.state().auction.is_none());
    }

    #[test]
    fn test_bid_without_auction_fails() {
        let mut game = fixtures::game(|_| {});
        assert!(matches!(game.bid(10), Err(GameError::NoAuction)));
        assert!(matches!(game.stay(), Err(GameError::NoAuction)));
    }
}
