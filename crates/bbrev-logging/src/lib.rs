//! Logging module.

use bbrev_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Logging error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not redirect log records,\n  caused by: {}", source)]
    LogTracerError { source: tracing_log::log::SetLoggerError },

    #[error("Could not set global subscriber,\n  caused by: {}", source)]
    SetGlobalDefaultError {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

const DEFAULT_ENV_CONFIG: &str = "info";

/// Configure the global tracing subscriber from configuration.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::LogTracerError { source: e })?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_ENV_CONFIG));

    if config.logging.use_bunyan {
        let formatting_layer = BunyanFormattingLayer::new("bbrev".into(), std::io::stdout);
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(formatting_layer);
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LoggingError::SetGlobalDefaultError { source: e })?;
    } else {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer());
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| LoggingError::SetGlobalDefaultError { source: e })?;
    }

    Ok(())
}
