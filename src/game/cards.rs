//! Card squares: drawing, keeping and using cards.

use tracing::{debug, info};

use super::Game;
use crate::board::CardKind;
use crate::core::{Action, Dice, GameError, GameResult, Offer};

impl<D: Dice> Game<D> {
    /// Name of the deck drawn from at the current player's square.
    fn current_deck(&self) -> GameResult<String> {
        let position = self.state.current().position;
        self.check_position(position)?;
        self.state
            .deck_at(position)
            .map(str::to_string)
            .ok_or_else(|| {
                let name = self.state.board.get(position).map(|p| p.name.clone());
                GameError::UnknownDeck(name.unwrap_or_default())
            })
    }

    /// Turn over the top card of the current square's deck.
    ///
    /// A get-out-of-jail card stays on top until collected. Every other
    /// card goes to the bottom of the deck and becomes the next action.
    pub fn draw_card(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        let deck = self.current_deck()?;
        let card = self.state.peek_card(&deck)?.clone();
        debug!("{} drew {:?} from {}", self.state.player, card.kind, deck);

        if card.is_kept() {
            return self.surface(Offer::one(Action::CollectCard));
        }

        let position = self.state.current().position;
        let size = self.state.board_size();
        let offer = match card.kind {
            CardKind::AdvanceTo { position } => {
                self.check_position(position)?;
                Offer::one(Action::Jump { position })
            }
            CardKind::AdvanceToNearest { kind } => match self.state.find_next(kind) {
                Some(position) => Offer::one(Action::Jump { position }),
                None => Offer::end_turn(),
            },
            CardKind::MoveBy { offset } => {
                let target = (position as i64 + offset).rem_euclid(size as i64) as usize;
                if offset >= 0 {
                    Offer::one(Action::Jump { position: target })
                } else {
                    Offer::one(Action::GoTo { position: target })
                }
            }
            CardKind::GoToJail => Offer::one(Action::GoToJail),
            CardKind::Pay { amount } => Offer::one(Action::Pay { amount }),
            CardKind::Collect { amount } => Offer::one(Action::Collect { amount }),
            CardKind::PayEachPlayer { amount } => Offer::one(Action::PayEachPlayer { amount }),
            CardKind::CollectFromEachPlayer { amount } => {
                Offer::one(Action::CollectFromEachPlayer { amount })
            }
            CardKind::GeneralRepairs { .. } | CardKind::GetOutOfJail => Offer::end_turn(),
        };

        self.updater().swap_card(&deck)?;
        self.surface(offer)
    }

    /// Keep the top card of the current square's deck.
    pub fn collect_card(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        let deck = self.current_deck()?;
        self.updater().collect_card(&deck)?;
        info!("{} kept a card from {}", self.state.player, deck);
        self.surface(Offer::end_turn())
    }

    /// Spend the oldest held card to leave jail, then roll.
    pub fn use_card(&mut self) -> GameResult<Offer> {
        self.check_no_auction()?;
        let mut updater = self.updater();
        updater.use_card()?;
        updater.leave_jail();
        info!("{} used a card to leave jail", self.state.player);
        self.surface(Offer::roll())
    }
}
