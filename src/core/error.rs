//! Error types for the rules engine.
//!
//! Errors are reported upward and never recovered internally. Running out
//! of cash is not an error; a rejected auction bid is a normal outcome.

use thiserror::Error;

use crate::board::BoardError;
use crate::store::GameId;

/// Everything that can make an engine request fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("position {position} is off a board of {board_size} squares")]
    InvalidPosition { position: usize, board_size: usize },
    #[error("unsupported player count: {0}")]
    PlayerCount(usize),
    #[error("unknown deck: {0}")]
    UnknownDeck(String),
    #[error("deck is empty: {0}")]
    EmptyDeck(String),
    #[error("player holds no card")]
    NoHeldCard,
    #[error("property at {0} has no owner")]
    Unowned(usize),
    #[error("no auction in progress")]
    NoAuction,
    #[error("an auction is already in progress")]
    AuctionInProgress,
    #[error("auction is still taking bids")]
    AuctionOpen,
    #[error("bid requires an amount")]
    MissingBid,
    #[error("still forced to act after {0} steps")]
    ForcedLoop(usize),
    #[error("unknown game: {0}")]
    UnknownGame(GameId),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
