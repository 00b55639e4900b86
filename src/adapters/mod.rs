//! Adapters - Implementations of the ports.
//!
//! - `random` - RandomSource backed by `rand` (thread, seeded, scripted)
//! - `storage` - KeyValueStore on disk or in memory
//! - `notification` - DecisionNotifier via logs or a channel

pub mod notification;
pub mod random;
pub mod storage;

pub use notification::{ChannelNotifier, DecisionNotice, TracingNotifier};
pub use random::{FixedRandomSource, SeededRandomSource, ThreadRandomSource};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
