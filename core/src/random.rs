use rand::prelude::*;
use rand::rngs::SmallRng;

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Reproducible source backed by a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random_range(0.0..1.0)
    }
}

/// Maps a unit value onto `0..len`, the same as `floor(unit * len)`.
///
/// Values outside `[0, 1)` are clamped so a misbehaving source can never index out of range.
/// `len` must be non-zero.
pub fn pick_index(len: usize, unit: f64) -> usize {
    debug_assert!(len > 0);
    // float to int casts saturate, and NaN becomes 0
    ((unit * len as f64) as usize).min(len - 1)
}
