//! Randomness used for placement
//!
//! The simulation only ever asks for uniform integers over an inclusive
//! range. Hosts can plug in their own source; `SessionRng` is the seeded
//! default so a run can be reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    fn random_int(&mut self, min: i32, max: i32) -> i32;
}

/// Seeded PCG generator for one play session
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: Pcg32,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}
