//! Rules engine trait.
//!
//! A rules engine owns one game's state and answers every applied action
//! with the next [`Offer`](crate::core::Offer). Callers (a web layer, a
//! bot, a test) only ever talk to this trait.

pub mod engine;

pub use engine::{RulesEngine, MAX_FORCED_STEPS};
