//! This module contains the random source used to pick the secret word out of the candidate list.
//!
//! The game state never reaches for a global generator. Instead, it takes anything implementing
//! [`WordSelector`], so that play can use a `fastrand` generator and tests can pin the choice.

use fastrand::Rng;

/// This trait represents the capability of choosing one entry out of a list of candidates.
pub trait WordSelector {
    /// This function returns an index within `0..len`. It is never called with a `len` of zero.
    fn select(&mut self, len: usize) -> usize;
}

/// This struct holds a selector that picks uniformly at random, backed by a `fastrand` generator.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    /// This field contains the generator, kept around to avoid going through the thread local one
    /// every time a new game starts.
    rng: Rng,
}

impl RandomSelector {
    /// This function creates a selector seeded from the system's entropy.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// This function creates a selector whose sequence of choices is fully determined by `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSelector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }
}

/// This struct holds a selector that always picks the same position, clamped to the last entry of
/// whatever list it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSelector(
    /// This field contains the position to pick.
    pub usize,
);

impl WordSelector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
