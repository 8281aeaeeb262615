//! Installs a global `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence over the configured level, so
//! `RUST_LOG=lgm_methods=debug` narrows output without editing the config.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Install a formatted subscriber filtered at `level`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init(level: LogLevel) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error() {
        // another test may have installed one already
        let _ = init(LogLevel::Warn);
        assert!(init(LogLevel::Debug).is_err());
    }
}
