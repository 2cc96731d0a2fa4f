use std::ops::Range;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random draw made during a generation run.
///
/// Stages never reach for a global generator: the run's source is passed in,
/// so seeding it makes the whole run reproducible. Any [`rand::Rng`] is a source.
pub trait RandomSource {
    /// Uniform integer in `0..100`, compared against density thresholds.
    fn percent(&mut self) -> u8;

    /// Uniform integer in `range`. An empty range yields `range.start`.
    fn integer(&mut self, range: Range<i64>) -> i64;

    /// Fresh seed for a coherent noise kernel.
    fn noise_seed(&mut self) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn percent(&mut self) -> u8 {
        self.gen_range(0..100)
    }

    fn integer(&mut self, range: Range<i64>) -> i64 {
        if range.is_empty() {
            return range.start;
        }
        self.gen_range(range)
    }

    fn noise_seed(&mut self) -> u32 {
        self.gen_range(0..99999)
    }
}

/// Generator used for a run with the given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
