//! Rules engine trait for game implementations.
//!
//! Implementors decide:
//! - How each action modifies state
//! - What is offered next

use crate::core::action::{Action, Offer};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, GameResult};
use crate::core::state::GameState;

/// Most forced actions `advance` applies before giving up.
pub const MAX_FORCED_STEPS: usize = 256;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply`: Validate indices before mutating; fail closed
/// - `apply`: Insufficient funds is never an error
/// - `apply`: Must be deterministic given the same dice
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Get the current game state.
    fn state(&self) -> &GameState;

    /// Apply one action and return what is offered next.
    fn apply(&mut self, action: &Action) -> GameResult<Offer>;

    // === Convenience Methods ===

    /// The last turn-level offer surfaced to the caller.
    fn pending(&self) -> &Offer {
        &self.state().pending
    }

    /// Apply actions in order, stopping at the first error.
    ///
    /// Returns the offer after the last action, or the pending offer if
    /// `actions` is empty.
    fn apply_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a Action>) -> GameResult<Offer>
    where
        Self: Sized,
    {
        let mut offer = self.pending().clone();
        for action in actions {
            offer = self.apply(action)?;
        }
        Ok(offer)
    }

    /// Follow single-action offers until a choice (or an end of turn) is
    /// reached.
    ///
    /// Stops before applying `endTurn` or anything that needs the caller:
    /// a roll, a choice, or an auction bid. A board that keeps forcing
    /// moves past [`MAX_FORCED_STEPS`] fails with `ForcedLoop`.
    fn advance(&mut self, mut offer: Offer) -> GameResult<Offer> {
        let mut steps = 0;
        loop {
            let forced = match offer.actions() {
                [action] if action.is_forced() => Some(action.clone()),
                _ => None,
            };
            let Some(action) = forced else {
                return Ok(offer);
            };
            if steps == MAX_FORCED_STEPS {
                return Err(GameError::ForcedLoop(steps));
            }
            steps += 1;
            offer = self.apply(&action)?;
        }
    }
}
