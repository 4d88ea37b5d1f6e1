//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Build the application and its route table
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A missing `--config` means built-in defaults, not an error

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::app::{builtin_controllers, AppError, Application};
use crate::config::{load_config, AppConfig, ConfigError};
use crate::observability::metrics;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] AppError),

    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),
}

/// Load configuration from `path`, or use defaults.
pub fn load(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Build the application with the built-in controllers.
pub fn build_application(config: &AppConfig) -> Result<Application, StartupError> {
    Ok(Application::from_config(config, builtin_controllers())?)
}

/// Start the Prometheus endpoint if enabled.
pub fn start_metrics(config: &AppConfig) -> Result<(), StartupError> {
    if !config.observability.metrics_enabled {
        return Ok(());
    }

    let addr: SocketAddr = config
        .observability
        .metrics_address
        .parse()
        .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
    metrics::init_metrics(addr)?;
    Ok(())
}
