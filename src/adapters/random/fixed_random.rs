//! Scripted randomness for deterministic tests and demos.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::RandomSource;

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each call consumes one value and maps it into the requested range:
/// `next_index` takes it modulo `upper`, `range_inclusive` clamps it,
/// `next_f64` divides by 100 (so `25` reads as `0.25`).
#[derive(Debug)]
pub struct FixedRandomSource {
    values: Vec<u64>,
    cursor: AtomicUsize,
}

impl FixedRandomSource {
    /// Panics in debug builds if `values` is empty; an empty script yields zeros.
    pub fn new(values: Vec<u64>) -> Self {
        debug_assert!(!values.is_empty(), "FixedRandomSource needs at least one value");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// A source that always returns the same value.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    fn next_raw(&self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}

impl RandomSource for FixedRandomSource {
    fn next_f64(&self) -> f64 {
        (self.next_raw() as f64 / 100.0).clamp(0.0, 0.999_999)
    }

    fn next_index(&self, upper: usize) -> usize {
        (self.next_raw() % upper.max(1) as u64) as usize
    }

    fn range_inclusive(&self, min: u32, max: u32) -> u32 {
        (self.next_raw().min(u32::MAX as u64) as u32).clamp(min, max)
    }
}
