//! Logging bootstrap
//!
//! Installs a global `tracing` subscriber exactly once per process.
//! Calling [`init_logging`] again with the same filter is a no-op; asking
//! for a different filter afterwards is rejected.

use anyhow::{Context, anyhow};
use once_cell::sync::OnceCell;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "PLANBOARD_LOG";

static LOGGING_STATE: OnceCell<String> = OnceCell::new();

/// Initialize logging from configuration
///
/// The `PLANBOARD_LOG` environment variable, when set, takes precedence
/// over `config.filter`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = resolve_filter(config);

    if let Some(active) = LOGGING_STATE.get() {
        return check_active(active, &filter);
    }

    let active = LOGGING_STATE.get_or_try_init(|| -> anyhow::Result<String> {
        let env_filter = EnvFilter::try_new(&filter)
            .with_context(|| format!("Invalid logging filter: {}", filter))?;

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .try_init()
            .map_err(|err| anyhow!("Failed to install tracing subscriber: {}", err))?;

        info!(filter = %filter, version = env!("CARGO_PKG_VERSION"), "Logging initialized");
        Ok(filter.clone())
    })?;

    check_active(active, &filter)
}

/// The active filter, or `None` before [`init_logging`] succeeded
pub fn logging_status() -> Option<String> {
    LOGGING_STATE.get().cloned()
}

fn resolve_filter(config: &LoggingConfig) -> String {
    match std::env::var(LOG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => config.filter.trim().to_string(),
    }
}

fn check_active(active: &str, requested: &str) -> anyhow::Result<()> {
    if active != requested {
        return Err(anyhow!(
            "Logging already initialized with filter `{}`; refusing to switch to `{}`",
            active,
            requested
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_active() {
        assert!(check_active("info", "info").is_ok());
        let err = check_active("info", "debug").unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
    }

    #[test]
    fn test_init_is_idempotent_for_same_filter() {
        let config = LoggingConfig {
            filter: logging_status().unwrap_or_else(|| resolve_filter(&LoggingConfig::default())),
        };

        // The subscriber is process-global; another test binary may own it.
        if init_logging(&config).is_ok() {
            assert!(init_logging(&config).is_ok());
            assert!(logging_status().is_some());
        }
    }
}
