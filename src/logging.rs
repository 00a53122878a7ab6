use crate::config::DEFAULT_LOG_FILTER;
use crate::errors::GonioError;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Installs the global subscriber, logging to stderr so that stdout only
/// carries conversion results. An invalid filter falls back to `warn`.
pub fn init_logging(filter: &str) -> Result<(), GonioError> {
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = fmt::layer().with_writer(io::stderr);
    let subscriber = Registry::default().with(env_filter).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GonioError::Logging(e.to_string()))
}
