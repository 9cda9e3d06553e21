//! Property: buying, rent, mortgages and development.
//!
//! `use_property` is the read-only query that decides what an owner may do
//! with a square. The mutating operations trust that the caller only
//! applies what it offered.

use tracing::{debug, info};

use super::Game;
use crate::board::PropertyKind;
use crate::core::{Action, Dice, GameError, GameResult, Offer, PlayerId};

impl<D: Dice> Game<D> {
    fn owner_of(&self, position: usize) -> GameResult<PlayerId> {
        self.check_position(position)?;
        self.state.board[position]
            .owner
            .ok_or(GameError::Unowned(position))
    }

    /// Current player takes `position` for `price`. The bank is paid for
    /// an unowned square, the prior owner otherwise; a mortgaged square
    /// changing hands becomes encumbered.
    fn transfer(&mut self, position: usize, price: i64, encumber: bool) {
        let property = &self.state.board[position];
        let prior = property.owner;
        let mortgaged = property.mortgaged;

        let mut updater = self.updater();
        match prior {
            None => updater.pay_bank(price),
            Some(owner) => {
                updater.pay_player(owner, price);
                if mortgaged && encumber {
                    updater.encumber(position);
                }
            }
        }
        updater.acquire_property(position);
        info!(
            "{} bought {} for {}",
            self.state.player, self.state.board[position].name, price
        );
    }

    /// Buy `position` at `price`.
    ///
    /// Settling a won auction for this square completes the auction and
    /// resumes the turn it interrupted.
    pub fn buy_property(&mut self, position: usize, price: i64) -> GameResult<Offer> {
        self.check_position(position)?;

        let settling = self.settlement(position).is_some();
        if !settling {
            self.check_no_auction()?;
        }
        self.transfer(position, price, true);
        if settling {
            return self.finish_auction();
        }
        self.surface(Offer::end_turn())
    }

    /// Pay `amount` of rent to the owner of `position`.
    pub fn pay_rent(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        let owner = self.owner_of(position)?;
        self.updater().pay_player(owner, amount);
        debug!("{} paid {} rent to {}", self.state.player, amount, owner);
        self.surface(Offer::end_turn())
    }

    /// What the owner of `position` may do with it.
    ///
    /// Always offers an interrupting auction. A mortgaged square offers
    /// lifting the mortgage if affordable and nothing else. An undeveloped
    /// square may be mortgaged. Houses go up evenly (least developed first)
    /// and come down evenly (most developed first), only on a complete,
    /// unmortgaged residential set.
    pub fn use_property(&self, position: usize) -> GameResult<Offer> {
        let lot = self.state.lot(position)?;
        let owner_id = lot.owner().ok_or(GameError::Unowned(position))?;
        let owner = &self.state.players[owner_id];
        let property = lot.property;

        let mut offer = Offer::one(Action::Auction {
            position,
            interrupt: true,
        });

        if property.mortgaged {
            let cost = self.config.lift_cost(property.price, property.encumbered);
            if cost <= owner.cash {
                offer.push(Action::LiftMortgage {
                    position,
                    amount: cost,
                });
            }
            return Ok(offer);
        }

        if property.houses == 0 {
            offer.push(Action::Mortgage {
                position,
                amount: property.price / 2,
            });
        }

        if lot.kind() != PropertyKind::Residential || !self.state.owns_full_set(position, owner_id)
        {
            return Ok(offer);
        }

        let members: Vec<_> = self
            .state
            .set_members(position)
            .map(|(_, member)| member)
            .collect();
        if members.iter().any(|member| member.mortgaged) {
            return Ok(offer);
        }
        let least = members.iter().map(|m| m.houses).min().unwrap_or(0);
        let most = members.iter().map(|m| m.houses).max().unwrap_or(0);
        let building = lot.building();

        if property.houses < self.config.max_houses
            && property.houses == least
            && building <= owner.cash
        {
            offer.push(Action::Develop {
                position,
                amount: building,
            });
        }
        if property.houses > 0 && property.houses == most {
            offer.push(Action::Demolish {
                position,
                amount: building / 2,
            });
        }

        Ok(offer)
    }

    /// Owner mortgages `position` for `amount`.
    pub fn mortgage(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        let owner = self.owner_of(position)?;
        self.updater().mortgage_property(position, amount);
        info!("{} mortgaged position {} for {}", owner, position, amount);
        Ok(self.resume())
    }

    /// Owner pays `amount` to lift the mortgage on `position`.
    ///
    /// Offered to an auction winner, this buys the square at the winning
    /// bid first (without encumbering it) and then settles the auction.
    pub fn lift_mortgage(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        if let Some(bid) = self.settlement(position) {
            self.transfer(position, bid, false);
            self.updater().unmortgage_property(position, amount);
            return self.finish_auction();
        }

        let owner = self.owner_of(position)?;
        self.updater().unmortgage_property(position, amount);
        info!("{} lifted the mortgage on position {}", owner, position);
        Ok(self.resume())
    }

    /// Owner pays `amount` to add a house to `position`.
    pub fn develop(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        let owner = self.owner_of(position)?;
        self.updater().develop(position, amount);
        debug!("{} built on position {}", owner, position);
        Ok(self.resume())
    }

    /// Owner sells a house on `position` back for `amount`.
    pub fn demolish(&mut self, position: usize, amount: i64) -> GameResult<Offer> {
        let owner = self.owner_of(position)?;
        self.updater().demolish(position, amount);
        debug!("{} sold a house on position {}", owner, position);
        Ok(self.resume())
    }
}
