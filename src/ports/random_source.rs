//! RandomSource port - Interface for the randomness behind selection and animation.
//!
//! Keeping randomness behind a port lets the selection engine stay a pure
//! function of its input and this source, and lets tests script outcomes.
//! Nothing here is cryptographically secure.

/// Source of uniform random numbers.
///
/// Methods take `&self` so one source can be shared behind an `Arc`;
/// adapters use interior mutability where their generator needs it.
///
/// # Example
///
/// ```ignore
/// let index = rng.next_index(options.len());
/// let winner = &options[index];
/// ```
pub trait RandomSource: Send + Sync {
    /// Uniform float in `[0.0, 1.0)`.
    fn next_f64(&self) -> f64;

    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn next_index(&self, upper: usize) -> usize;

    /// Uniform integer in `[min, max]`, both inclusive.
    fn range_inclusive(&self, min: u32, max: u32) -> u32;
}
