//! KeyValueStore Port - Interface for the local persisted key-value store.
//!
//! The decision history is written as one serialized value under one key,
//! so the port needs no transactional or multi-key semantics. Each `set`
//! replaces the whole value; clearing the history writes an empty array
//! rather than deleting the key.

use async_trait::async_trait;

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for reading and writing string values by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing has been stored under the key yet
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be read
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Rejects keys that could escape a storage namespace.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if bad {
        Err(StorageError::InvalidKey(key.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_messages() {
        let err = StorageError::Io("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
        let err = StorageError::InvalidKey("../etc".to_string());
        assert!(err.to_string().contains("../etc"));
    }

    #[test]
    fn validate_key_rejects_path_like_keys() {
        assert!(validate_key("fate_spinner_decisions").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("a\\b").is_err());
    }
}
