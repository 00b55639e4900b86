//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Uniform randomness for selection and cosmetic noise
//! - `KeyValueStore` - Local persisted key-value store backing the history
//! - `DecisionNotifier` - User feedback on finished decision cycles

mod decision_notifier;
mod key_value_store;
mod random_source;

pub use decision_notifier::DecisionNotifier;
pub use key_value_store::{validate_key, KeyValueStore, StorageError};
pub use random_source::RandomSource;
