//! Deterministic scheduler-owned RNG.
//!
//! # Determinism strategy
//!
//! The scheduler draws randomness for exactly two decisions per spawned
//! group: the group size and (when not pinned by configuration) the customer
//! model coin-flip.  All draws come from one `SmallRng` seeded once at
//! scheduler construction, so a run is reproducible from its seed alone.
//!
//! Reseeding happens only through [`SpawnRng::reseed`], for deterministic
//! replay in tests — never implicitly per tick.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by the spawn scheduler.
pub struct SpawnRng(SmallRng);

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        SpawnRng(SmallRng::seed_from_u64(seed))
    }

    /// Restart the stream from `seed`.  Intended for replaying a recorded
    /// session; production code seeds once and never calls this.
    pub fn reseed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
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
}
