//! In-Memory Key-Value Store Adapter
//!
//! Keeps values in a shared map. Useful for testing and development; can be
//! switched into an unavailable mode to exercise persistence failures.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, KeyValueStore, StorageError};

/// In-memory storage for serialized values
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryKeyValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(RwLock::new(values)),
            unavailable: Arc::default(),
        }
    }

    /// Make every subsequent call fail with `StorageError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing the availability switch
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable("in-memory store switched off".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        self.check_available()?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.check_available()?;
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_and_replaces_values() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "one").await.unwrap();
        store.set("k", "two").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seeded_value_is_readable() {
        let store = InMemoryKeyValueStore::with_value("k", "seed");
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("seed"));
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = InMemoryKeyValueStore::new();
        store.set("k", "v").await.unwrap();
        store.set_unavailable(true);

        assert!(matches!(store.get("k").await, Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("k", "w").await, Err(StorageError::Unavailable(_))));
        assert_eq!(store.peek("k").await.as_deref(), Some("v"));

        store.set_unavailable(false);
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store = InMemoryKeyValueStore::new();
        let other = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
