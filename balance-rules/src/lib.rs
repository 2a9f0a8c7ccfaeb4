#![deny(missing_docs)]
//! Rule text in, diffs out.
//!
//! A [`LineSource`] yields trimmed lines; [`Rules`] turns them into
//! [`balance::Diff`]s lazily. For the channel-based variant, where reading
//! and parsing run as producer tasks ahead of the simulation, see
//! [`spawn_pipeline`].
//!
//! Parsing is all-or-nothing: the first line that matches neither grammar
//! yields a [`RuleError::Syntax`] and the sequence ends there.

pub mod error;
pub mod parser;
pub mod pipeline;
pub mod source;

pub use error::RuleError;
pub use parser::{Rules, parse_line, parse_str, target_kind};
pub use pipeline::{DEFAULT_CAPACITY, spawn_lines, spawn_pipeline, spawn_rules};
pub use source::{FileSource, LineSource, TextSource, TrimmedLines};
