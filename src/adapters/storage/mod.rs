//! Storage Adapters
//!
//! Implementations of the KeyValueStore port backing the decision history.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores each key as a JSON file on disk
//! - **InMemoryKeyValueStore** - Stores values in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Durable: file-based storage
//! let store = FileKeyValueStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
