//! Thread-local RNG adapter.

use rand::Rng;

use crate::ports::RandomSource;

/// Production randomness backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn range_inclusive(&self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}
