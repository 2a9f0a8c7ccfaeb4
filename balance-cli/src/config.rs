//! Run configuration, loaded from `balance.json` or a path given with
//! `--config`.

use crate::error::CliError;
use balance_rules::DEFAULT_CAPACITY;
use balance_sim::DEFAULT_MAX_FIRINGS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file picked up from the working directory when no `--config`
/// is given.
pub const DEFAULT_CONFIG_FILE: &str = "balance.json";

/// Input file read when nothing else is configured.
pub const DEFAULT_INPUT: &str = "testdata";

/// How firings are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceFormat {
    /// `Bot <id> will give low: ...` lines.
    #[default]
    Text,
    /// One JSON object per firing.
    Json,
}

impl FromStr for TraceFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(TraceFormat::Text),
            "json" => Ok(TraceFormat::Json),
            other => Err(CliError::Config(format!(
                "unknown format: {other} (expected text or json)"
            ))),
        }
    }
}

/// Everything a run needs. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Rule file to read.
    pub input: PathBuf,
    /// Depth of each producer channel.
    pub channel_capacity: usize,
    /// Firings one diff may cause before the run is aborted.
    pub max_firings_per_diff: usize,
    /// Trace output format.
    pub format: TraceFormat,
    /// Print final bin contents after the trace.
    pub report: bool,
    /// Read and parse on producer tasks ahead of the simulation. When
    /// false, everything runs inline on one iterator.
    pub pipeline: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            channel_capacity: DEFAULT_CAPACITY,
            max_firings_per_diff: DEFAULT_MAX_FIRINGS,
            format: TraceFormat::Text,
            report: false,
            pipeline: true,
        }
    }
}

impl SimConfig {
    /// Load a config file.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: SimConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `balance.json` in `dir` if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, CliError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "using config file");
            Self::from_path(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings no run could use.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.channel_capacity == 0 {
            return Err(CliError::Config(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_firings_per_diff == 0 {
            return Err(CliError::Config(
                "max_firings_per_diff must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
