//! Decision history configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::validate_key;

/// Largest history capacity accepted
pub const MAX_CAPACITY: usize = 1000;

/// Decision history configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    /// Directory for the file-backed store
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    /// Key the serialized history is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Decisions kept before the oldest are dropped
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Delay every operation as if it were a remote call
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

/// Artificial delays applied when `simulate_latency` is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub read: Duration,
    pub write: Duration,
    pub delete: Duration,
    pub stats: Duration,
}

impl LatencyProfile {
    pub const SIMULATED: LatencyProfile = LatencyProfile {
        read: Duration::from_millis(200),
        write: Duration::from_millis(300),
        delete: Duration::from_millis(250),
        stats: Duration::from_millis(250),
    };

    pub const NONE: LatencyProfile = LatencyProfile {
        read: Duration::ZERO,
        write: Duration::ZERO,
        delete: Duration::ZERO,
        stats: Duration::ZERO,
    };
}

impl HistoryConfig {
    /// Config for tests: no latency, default key and capacity
    pub fn instant() -> Self {
        Self {
            simulate_latency: false,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> LatencyProfile {
        if self.simulate_latency {
            LatencyProfile::SIMULATED
        } else {
            LatencyProfile::NONE
        }
    }

    /// Validate history configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(ValidationError::InvalidCapacity {
                max: MAX_CAPACITY,
                actual: self.capacity,
            });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("history.storage_key"));
        }
        validate_key(&self.storage_key)
            .map_err(|_| ValidationError::InvalidStorageKey(self.storage_key.clone()))?;
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            capacity: default_capacity(),
            simulate_latency: default_simulate_latency(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_storage_key() -> String {
    "fate_spinner_decisions".to_string()
}

fn default_capacity() -> usize {
    crate::domain::history::DEFAULT_CAPACITY
}

fn default_simulate_latency() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_defaults() {
        let config = HistoryConfig::default();
        assert_eq!(config.storage_key, "fate_spinner_decisions");
        assert_eq!(config.capacity, 50);
        assert!(config.simulate_latency);
        assert_eq!(config.latency(), LatencyProfile::SIMULATED);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_instant_config_has_no_latency() {
        assert_eq!(HistoryConfig::instant().latency(), LatencyProfile::NONE);
    }

    #[test]
    fn test_capacity_bounds() {
        let mut config = HistoryConfig::default();
        config.capacity = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCapacity { actual: 0, .. })
        ));
        config.capacity = 1001;
        assert!(config.validate().is_err());
        config.capacity = 1000;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_key_rules() {
        let mut config = HistoryConfig::default();
        config.storage_key = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("history.storage_key"))
        );
        config.storage_key = "a/b".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidStorageKey("a/b".to_string()))
        );
    }
}
