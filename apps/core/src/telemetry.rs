//! Tracing subscriber setup.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

pub const APP_NAME: &str = "healthchat";
pub const DEFAULT_FILTER: &str = "healthchat_core=info";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Logs go to stderr so stdout stays free
/// for replies. Returns `false` when a subscriber was already installed.
pub fn init(format: LogFormat) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter());

    let installed = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Bunyan => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr))
            .try_init(),
    };

    match installed {
        Ok(()) => {
            tracing::info!(format = %format, "Telemetry initialized");
            true
        }
        Err(_) => false,
    }
}
