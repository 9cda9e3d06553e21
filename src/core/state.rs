//! Game state: the full mutable snapshot of one game.
//!
//! ## GameState
//!
//! - Board squares, the set table and card decks
//! - Players and whose turn it is
//! - Last dice roll
//! - The active auction, if any
//! - The last turn-level offer, to resume after side actions
//!
//! Reads go through the query helpers here. Writes go through
//! [`StateUpdater`](super::updater::StateUpdater) only.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::Offer;
use super::config::GameConfig;
use super::error::{GameError, GameResult};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{BoardData, BoardError, Card, Lot, Property, PropertyKind, PropertySet, SetId};

/// An auction in progress.
///
/// Bidders take turns in seat order starting after the initiator. The
/// auction closes when the turn comes back around to the highest bidder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    /// Square being sold.
    pub position: usize,

    /// Every player once, in bidding order.
    pub bidders: Vec<PlayerId>,

    /// Index into `bidders` of whoever acts next.
    pub order: usize,

    pub highest_bidder: Option<PlayerId>,

    /// Highest bid so far; never decreases.
    pub amount: i64,

    /// Whose turn the auction interrupted.
    pub initiator: PlayerId,

    /// What to offer once the auction is settled.
    pub resume: Offer,

    /// No more bids are taken.
    pub closed: bool,
}

impl Auction {
    /// The player whose bid it is.
    #[must_use]
    pub fn current_bidder(&self) -> PlayerId {
        self.bidders[self.order]
    }

    /// Order index after the current one, wrapping.
    #[must_use]
    pub fn next_order(&self) -> usize {
        (self.order + 1) % self.bidders.len()
    }

    /// Closed without any bid.
    #[must_use]
    pub fn is_unsold(&self) -> bool {
        self.closed && self.highest_bidder.is_none()
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Squares in board order; positions index into this.
    pub board: Vec<Property>,

    /// Set table, looked up by a square's `set`.
    pub sets: FxHashMap<SetId, PropertySet>,

    /// Decks by name. The head is the next card drawn.
    pub decks: FxHashMap<String, Vector<Card>>,

    pub players: PlayerMap<Player>,

    /// Whose turn it is (or whose bid, during an auction).
    pub player: PlayerId,

    pub started: bool,

    /// Last dice roll.
    pub roll: (u8, u8),

    pub auction: Option<Auction>,

    /// Last turn-level offer surfaced to the caller.
    pub pending: Offer,
}

impl GameState {
    /// Create a game: every player gets the starting cash on the first
    /// square, and each deck is shuffled once.
    pub fn new(board: BoardData, config: &GameConfig) -> GameResult<Self> {
        config.validate()?;
        let players = vec![Player::new(config.starting_cash); config.player_count];
        let mut state = Self::with_players(board, players)?;

        if config.jail_position >= state.board_size() {
            return Err(GameError::InvalidPosition {
                position: config.jail_position,
                board_size: state.board_size(),
            });
        }

        let mut rng = GameRng::new(config.seed).for_context("decks");
        let mut names: Vec<_> = state.decks.keys().cloned().collect();
        names.sort();
        for name in names {
            if let Some(deck) = state.decks.get_mut(&name) {
                let mut cards: Vec<Card> = deck.iter().cloned().collect();
                rng.shuffle(&mut cards);
                *deck = cards.into_iter().collect();
            }
        }

        Ok(state)
    }

    /// Create a game with explicit players and decks in printed order.
    pub fn with_players(board: BoardData, players: Vec<Player>) -> GameResult<Self> {
        board.validate()?;
        if players.is_empty() {
            return Err(GameError::PlayerCount(0));
        }

        let sets = board.sets.into_iter().map(|set| (set.id, set)).collect();
        let decks = board
            .decks
            .into_iter()
            .map(|deck| {
                let cards = deck
                    .cards
                    .into_iter()
                    .map(|kind| Card::new(deck.name.clone(), kind))
                    .collect();
                (deck.name, cards)
            })
            .collect();

        Ok(Self {
            board: board.squares,
            sets,
            decks,
            players: PlayerMap::from(players),
            player: PlayerId::new(0),
            started: false,
            roll: (0, 0),
            auction: None,
            pending: Offer::roll(),
        })
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Validation ===

    pub fn check_position(&self, position: usize) -> GameResult<()> {
        if position < self.board_size() {
            Ok(())
        } else {
            Err(GameError::InvalidPosition {
                position,
                board_size: self.board_size(),
            })
        }
    }

    // === Players ===

    /// The player whose turn (or bid) it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.player]
    }

    /// Sum of the last roll.
    #[must_use]
    pub fn roll_total(&self) -> usize {
        usize::from(self.roll.0) + usize::from(self.roll.1)
    }

    /// Square reached by moving `steps` forward from the current player.
    #[must_use]
    pub fn destination(&self, steps: usize) -> usize {
        (self.current().position + steps) % self.board_size()
    }

    // === Squares and sets ===

    /// Join the square at `position` with its set.
    pub fn lot(&self, position: usize) -> GameResult<Lot<'_>> {
        self.check_position(position)?;
        let property = &self.board[position];
        let set = self.sets.get(&property.set).ok_or(BoardError::UnknownSet {
            position,
            set: property.set,
        })?;
        Ok(Lot {
            position,
            property,
            set,
        })
    }

    /// Every square sharing a set with `position`, itself included.
    pub fn set_members(&self, position: usize) -> impl Iterator<Item = (usize, &Property)> {
        let set = self.board.get(position).map(|property| property.set);
        self.board
            .iter()
            .enumerate()
            .filter(move |(_, member)| Some(member.set) == set)
    }

    /// Whether `owner` holds every member of the set of `position`.
    #[must_use]
    pub fn owns_full_set(&self, position: usize, owner: PlayerId) -> bool {
        self.set_members(position)
            .all(|(_, member)| member.owner == Some(owner))
    }

    /// How many members of the set of `position` `owner` holds.
    #[must_use]
    pub fn owned_in_set(&self, position: usize, owner: PlayerId) -> usize {
        self.set_members(position)
            .filter(|(_, member)| member.owner == Some(owner))
            .count()
    }

    /// First square of `kind` strictly ahead of the current player,
    /// wrapping around the board.
    #[must_use]
    pub fn find_next(&self, kind: PropertyKind) -> Option<usize> {
        let start = self.current().position;
        let size = self.board_size();
        (1..=size)
            .map(|step| (start + step) % size)
            .find(|&position| {
                self.sets
                    .get(&self.board[position].set)
                    .is_some_and(|set| set.kind == kind)
            })
    }

    // === Decks ===

    /// The deck drawn from at `position`, if it is a card square.
    #[must_use]
    pub fn deck_at(&self, position: usize) -> Option<&str> {
        let name = self.board.get(position)?.name.as_str();
        self.decks.contains_key(name).then_some(name)
    }

    pub fn deck(&self, name: &str) -> GameResult<&Vector<Card>> {
        self.decks
            .get(name)
            .ok_or_else(|| GameError::UnknownDeck(name.to_string()))
    }

    /// Next card of a deck, without drawing it.
    pub fn peek_card(&self, name: &str) -> GameResult<&Card> {
        self.deck(name)?
            .front()
            .ok_or_else(|| GameError::EmptyDeck(name.to_string()))
    }

    // === Auction ===

    pub fn auction(&self) -> GameResult<&Auction> {
        self.auction.as_ref().ok_or(GameError::NoAuction)
    }
}
