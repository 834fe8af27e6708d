//! Deterministic per-floor RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each floor gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (floor_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive floor IDs uniformly across the seed space.
//! This means:
//!
//! - Floors never share RNG state, so the arrivals on one floor do not depend
//!   on how many draws another floor made.
//! - Adding floors at the top of the building does not disturb the seeds of
//!   existing floors.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::FloorId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-floor deterministic RNG driving the passenger generator.
pub struct FloorRng(SmallRng);

impl FloorRng {
    /// Seed deterministically from the run's global seed and a floor ID.
    pub fn new(global_seed: u64, floor: FloorId) -> Self {
        let seed = global_seed ^ u64::from(floor.0).wrapping_mul(MIXING_CONSTANT);
        FloorRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
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
}
