//! Global `tracing` subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Installs the process-wide subscriber, filtered by `config.level`.
///
/// The level accepts any `EnvFilter` directive string, e.g. `"info"` or
/// `"isochron_temporal=trace,warn"`.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the level does not parse, and `LoggingError`
/// if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_new(config.level.as_str()).map_err(|e| {
        CoreError::InvalidConfiguration(format!("invalid log level '{}': {e}", config.level))
    })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %config.level, "Logging initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "isochron=loudest".to_string(),
        };

        let err = init_logging(&config).expect_err("level should not parse");
        assert!(matches!(err, CoreError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("isochron=loudest"));
    }
}
