//! Deterministic random number generation and injectable dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!   (deck shuffling never perturbs the dice)
//! - **Injectable**: the rules engine rolls through the `Dice` trait, so
//!   tests can script every roll with `LoadedDice`
//!
//! ```
//! use monopoly_engine::core::{Dice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Faces on one die.
pub const DIE_FACES: u8 = 6;

/// Source of dice rolls for the rules engine.
pub trait Dice {
    /// Roll two independent dice, each in `1..=6`.
    fn roll(&mut self) -> (u8, u8);
}

/// Deterministic RNG for dice and deck shuffling.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random integer in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Roll a single die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl Dice for GameRng {
    fn roll(&mut self) -> (u8, u8) {
        (self.roll_die(), self.roll_die())
    }
}

/// Scripted dice: yields queued rolls in order.
///
/// Once the script runs out every roll is `(1, 2)`, a non-double.
#[derive(Clone, Debug, Default)]
pub struct LoadedDice {
    rolls: VecDeque<(u8, u8)>,
}

impl LoadedDice {
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Queue another roll.
    pub fn push(&mut self, roll: (u8, u8)) {
        self.rolls.push_back(roll);
    }

    /// Rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> (u8, u8) {
        self.rolls.pop_front().unwrap_or((1, 2))
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> (u8, u8) {
        (**self).roll()
    }
}
