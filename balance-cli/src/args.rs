//! Command-line flags.

use crate::config::{SimConfig, TraceFormat};
use crate::error::CliError;
use std::path::PathBuf;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a simulation with these overrides on top of the config.
    Run(Overrides),
    /// Print usage and exit.
    Help,
}

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--config PATH`
    pub config: Option<PathBuf>,
    /// `--input PATH`
    pub input: Option<PathBuf>,
    /// `--format text|json`
    pub format: Option<TraceFormat>,
    /// `--capacity N`
    pub capacity: Option<usize>,
    /// `--max-firings N`
    pub max_firings: Option<usize>,
    /// `--report`
    pub report: bool,
    /// `--sync`
    pub sync: bool,
}

impl Overrides {
    /// Fold the flags into `config`.
    pub fn apply(&self, config: &mut SimConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(capacity) = self.capacity {
            config.channel_capacity = capacity;
        }
        if let Some(max) = self.max_firings {
            config.max_firings_per_diff = max;
        }
        if self.report {
            config.report = true;
        }
        if self.sync {
            config.pipeline = false;
        }
    }
}

/// Parse arguments, program name excluded.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut remaining: Vec<String> = args.into_iter().collect();
    if let Some(first) = remaining.first().cloned() {
        if first == "--help" || first == "-h" {
            return Ok(Command::Help);
        }
        if first == "run" {
            remaining.remove(0);
        } else if !first.starts_with('-') {
            return Err(CliError::Config(format!("unknown subcommand: {first}")));
        }
    }

    let mut overrides = Overrides::default();
    while !remaining.is_empty() {
        let flag = remaining.remove(0);
        match flag.as_str() {
            "--config" => {
                overrides.config = Some(PathBuf::from(take_arg("--config", &mut remaining)?))
            }
            "--input" => {
                overrides.input = Some(PathBuf::from(take_arg("--input", &mut remaining)?))
            }
            "--format" => overrides.format = Some(take_arg("--format", &mut remaining)?.parse()?),
            "--capacity" => {
                overrides.capacity = Some(take_number("--capacity", &mut remaining)?)
            }
            "--max-firings" => {
                overrides.max_firings = Some(take_number("--max-firings", &mut remaining)?)
            }
            "--report" => overrides.report = true,
            "--sync" => overrides.sync = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(CliError::Config(format!("unknown flag: {other}"))),
        }
    }
    Ok(Command::Run(overrides))
}

fn take_arg(flag: &str, remaining: &mut Vec<String>) -> Result<String, CliError> {
    if remaining.is_empty() {
        return Err(CliError::Config(format!("missing value for {flag}")));
    }
    Ok(remaining.remove(0))
}

fn take_number(flag: &str, remaining: &mut Vec<String>) -> Result<usize, CliError> {
    let raw = take_arg(flag, remaining)?;
    raw.parse()
        .map_err(|_| CliError::Config(format!("{flag} expects a number, got {raw}")))
}

/// One-line usage summary.
pub fn usage() -> &'static str {
    "balance [run] [--config balance.json] [--input PATH] [--format text|json] \
     [--capacity N] [--max-firings N] [--report] [--sync]"
}
