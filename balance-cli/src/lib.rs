#![deny(missing_docs)]
//! Command-line driver for balance bots.
//!
//! Reads a rule file (default `testdata`), runs it through a
//! [`balance_sim::Simulation`] and prints one trace line per firing.

pub mod args;
pub mod config;
pub mod error;
mod run;

pub use args::{Command, Overrides, parse_args, usage};
pub use config::{DEFAULT_CONFIG_FILE, DEFAULT_INPUT, SimConfig, TraceFormat};
pub use error::CliError;
pub use run::{build_simulation, run, write_report};
