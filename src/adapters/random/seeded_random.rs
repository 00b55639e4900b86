//! Seeded RNG adapter for reproducible runs.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Deterministic randomness: the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl RandomSource for SeededRandomSource {
    fn next_f64(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }

    fn next_index(&self, upper: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..upper))
    }

    fn range_inclusive(&self, min: u32, max: u32) -> u32 {
        self.with_rng(|rng| rng.gen_range(min..=max))
    }
}
