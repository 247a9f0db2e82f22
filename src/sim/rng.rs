//! Seeded random sequences
//!
//! Level layouts must be reproducible across sessions and replays: the same
//! seed string always yields the same ordered sequence of draws. The seed
//! string is folded to a 64-bit integer with FNV-1a, which then seeds a
//! PCG generator. The sequence is an explicit value owned by its caller;
//! there is no ambient generator state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Fold a seed string into a 64-bit integer (FNV-1a)
pub fn fold_seed(seed: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// A reproducible sequence of uniform draws derived from a seed string
#[derive(Debug, Clone)]
pub struct SeededSequence {
    rng: Pcg32,
}

impl SeededSequence {
    pub fn new(seed: &str) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(fold_seed(seed)),
        }
    }

    /// Next draw in `[0, 1)`
    pub fn next_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Next draw in `[lo, hi)`
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }
}
