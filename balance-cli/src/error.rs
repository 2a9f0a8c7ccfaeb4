//! Errors surfaced by the command-line driver.

use balance_sim::SimError;
use thiserror::Error;

/// Anything that ends a CLI invocation with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad flags or an unusable configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Filesystem or stdout failure outside the simulation proper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for [`crate::SimConfig`].
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// The simulation itself failed.
    #[error(transparent)]
    Sim(#[from] SimError),
}
