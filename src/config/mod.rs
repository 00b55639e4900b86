//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FATE_SPINNER_` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use fate_spinner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("History kept in {}", config.history.storage_dir.display());
//! ```

mod animation;
mod error;
mod history;
mod telemetry;

pub use animation::AnimationConfig;
pub use error::{ConfigError, ValidationError};
pub use history::{HistoryConfig, LatencyProfile};
pub use telemetry::{LogFormat, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Decision history storage and capacity
    #[serde(default)]
    pub history: HistoryConfig,

    /// Animation tick source
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Log filter and output format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FATE_SPINNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FATE_SPINNER__HISTORY__CAPACITY=50` -> `history.capacity = 50`
    /// - `FATE_SPINNER__ANIMATION__TICK_INTERVAL_MS=16` -> `animation.tick_interval_ms = 16`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FATE_SPINNER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.history.validate()?;
        self.animation.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
