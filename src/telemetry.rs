//! Tracing subscriber initialisation.
//!
//! The library only emits `tracing` events; a host calls [`init`] once at
//! start-up to get them on stderr. Calling it again is harmless.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, TelemetryConfig};

/// Installs a global fmt subscriber. Returns `false` if one was already set.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(config: &TelemetryConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Plain => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };
    if installed {
        tracing::debug!(filter = %config.filter, format = ?config.format, "Telemetry initialised");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let config = TelemetryConfig::default();
        init(&config);
        assert!(!init(&config));
    }
}
