//! Random Source Adapters
//!
//! - **ThreadRandomSource** - `rand::thread_rng()` (production)
//! - **SeededRandomSource** - seeded `StdRng` (reproducible runs)
//! - **FixedRandomSource** - scripted values (deterministic tests)

mod fixed_random;
mod seeded_random;
mod thread_random;

pub use fixed_random::FixedRandomSource;
pub use seeded_random::SeededRandomSource;
pub use thread_random::ThreadRandomSource;
