//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to the configured level.
///
/// An unparsable `trace_level` falls back to `info`.
#[must_use]
pub fn resolve_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid trace_level {level:?}: {e}; using {DEFAULT_LEVEL}");
        EnvFilter::new(DEFAULT_LEVEL)
    })
}

/// Initializes the tracing subscriber with a stderr formatter.
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use listings_client::observability::init_tracing;
/// use listings_client::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_is_used_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            trace_level: Some("listings_client=trace".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_filter(&config).to_string(), "listings_client=trace");
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            trace_level: Some("listings_client=loud".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_filter(&config).to_string(), "info");
    }
}
