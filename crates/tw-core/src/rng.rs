//! Deterministic per-walker RNG.
//!
//! Each walker gets its own `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (walker_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive walker IDs across the seed space.  Controllers
//! that draw from a walker's own RNG produce the same choices regardless of
//! how many other walkers exist or in which order they were asked.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, WalkerId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-walker deterministic RNG handed to controllers.
pub struct WalkerRng(SmallRng);

impl WalkerRng {
    /// Seed deterministically from the run's global seed and a walker ID.
    pub fn new(global_seed: u64, walker: WalkerId) -> Self {
        let seed = global_seed ^ u64::from(walker.0).wrapping_mul(MIXING_CONSTANT);
        WalkerRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// One of the four cardinal directions, uniformly.
    pub fn cardinal(&mut self) -> Direction {
        Direction::CARDINALS[self.0.gen_range(0..Direction::CARDINALS.len())]
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
