//! Landing: moving onto a square and working out what it demands.

use tracing::debug;

use super::Game;
use crate::board::{Lot, PropertyKind};
use crate::core::{Action, Dice, GameResult, Offer, PlayerId};

impl<D: Dice> Game<D> {
    /// Move the current player to `position` and evaluate the square.
    ///
    /// In order: the go-to-jail square, card squares, tax squares, unowned
    /// purchasable squares (buy if affordable, or auction), then rent. A
    /// square that is kindless, mortgaged, unowned or the player's own
    /// demands nothing.
    pub fn go_to(&mut self, position: usize) -> GameResult<Offer> {
        self.check_no_auction()?;
        self.check_position(position)?;
        self.updater().go_to(position);

        let lot = self.state.lot(position)?;
        let player = self.state.player;
        debug!("{} landed on {}", player, lot.property.name);

        let offer = if lot.property.name == self.config.go_to_jail_square {
            Offer::one(Action::GoToJail)
        } else if self.state.deck_at(position).is_some() {
            Offer::one(Action::DrawCard)
        } else if lot.is_tax() {
            Offer::one(Action::Pay {
                amount: lot.property.price,
            })
        } else if lot.is_purchasable() {
            let price = lot.property.price;
            let auction = Action::Auction {
                position,
                interrupt: false,
            };
            if self.state.current().cash >= price {
                Offer::choice([Action::Buy { position, price }, auction])
            } else {
                Offer::one(auction)
            }
        } else {
            match self.rent_due(&lot, player) {
                Some(amount) => Offer::one(Action::Rent { position, amount }),
                None => Offer::end_turn(),
            }
        };

        self.surface(offer)
    }

    /// Rent `visitor` owes for standing on `lot`, if any.
    fn rent_due(&self, lot: &Lot<'_>, visitor: PlayerId) -> Option<i64> {
        let property = lot.property;
        let owner = property.owner?;
        if lot.kind() == PropertyKind::None || property.mortgaged || owner == visitor {
            return None;
        }

        let amount = match lot.kind() {
            PropertyKind::Residential => {
                if property.houses >= 1 {
                    property.rent_at(usize::from(property.houses))
                } else if self.state.owns_full_set(lot.position, owner) {
                    2 * property.rent_at(0)
                } else {
                    property.rent_at(0)
                }
            }
            PropertyKind::Utility => {
                let multiplier = if self.state.owns_full_set(lot.position, owner) {
                    10
                } else {
                    4
                };
                multiplier * self.state.roll_total() as i64
            }
            PropertyKind::Station => {
                let owned = self.state.owned_in_set(lot.position, owner);
                property.rent_at(owned.saturating_sub(1))
            }
            PropertyKind::None => return None,
        };

        debug!("Rent on {} is {}", property.name, amount);
        Some(amount)
    }
}
