//! A small pseudorandom number generator, after the minimal C PCG32 from
//! <https://www.pcg-random.org/>, exposed through the [RngCore](rand_core::RngCore) trait.
//!
//! A [base](crate::base) holds a source of rng for the satisfiability search, consulted only
//! when the [split selection](crate::config::SplitSelection) is random.
//! The base structure accepts anything satisfying [Rng](rand::Rng), and the canonical
//! [Base](crate::base::Base) pins [MinimalPCG32] so the rest of the library stays simple.
//! Swapping the parameter is all that is needed for a different source of rng.
//!
//! Seeded runs are reproducible: the same seed and the same sequence of operations give the
//! same outputs, within a release.

use rand::SeedableRng;
use rand_core::{RngCore, impls};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}
