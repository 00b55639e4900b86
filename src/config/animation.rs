//! Animation timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Slowest tick interval accepted
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

/// Animation timing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnimationConfig {
    /// Interval between driver ticks (about 60 fps by default)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate animation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ValidationError::InvalidTickInterval {
                max: MAX_TICK_INTERVAL_MS,
                actual: self.tick_interval_ms,
            });
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    16
}
