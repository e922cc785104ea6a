use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the global tracing subscriber from logging settings.
///
/// Embedders call this once at startup; `RUST_LOG` overrides the configured
/// level. Returns quietly if a subscriber is already installed so tests can
/// call it repeatedly.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = if settings.format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.json().try_init()
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
