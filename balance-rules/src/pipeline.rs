//! Producer side of the read → parse → apply pipeline.
//!
//! Reading and parsing each run on their own blocking task and hand their
//! output downstream through bounded channels. The consumer (the
//! simulation) pulls one diff at a time, so nothing downstream of the
//! channel ever sees concurrent access.

use crate::error::RuleError;
use crate::parser::Rules;
use crate::source::LineSource;
use balance::Diff;
use tokio::sync::mpsc;

/// Channel depth used when the caller has no preference.
pub const DEFAULT_CAPACITY: usize = 10;

/// Read `source` line by line on a blocking task.
///
/// Stops after the first read error (which is forwarded) or as soon as
/// the receiver is dropped. Must be called from within a tokio runtime.
pub fn spawn_lines<S>(source: S, capacity: usize) -> mpsc::Receiver<Result<String, RuleError>>
where
    S: LineSource + 'static,
{
    let (tx, rx) = mpsc::channel(capacity.max(1));
    tokio::task::spawn_blocking(move || {
        let lines = match source.lines() {
            Ok(lines) => lines,
            Err(e) => {
                let _ = tx.blocking_send(Err(e));
                return;
            }
        };
        for line in lines {
            let failed = line.is_err();
            if tx.blocking_send(line).is_err() {
                tracing::debug!("line receiver dropped, reader stopping");
                return;
            }
            if failed {
                return;
            }
        }
    });
    rx
}

/// Parse lines from `lines` on a blocking task.
///
/// Ends at the first empty line, at the end of the line stream, or after
/// forwarding the first error. Must be called from within a tokio runtime.
pub fn spawn_rules(
    mut lines: mpsc::Receiver<Result<String, RuleError>>,
    capacity: usize,
) -> mpsc::Receiver<Result<Diff, RuleError>> {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    tokio::task::spawn_blocking(move || {
        let rules = Rules::new(std::iter::from_fn(|| lines.blocking_recv()));
        for rule in rules {
            if tx.blocking_send(rule).is_err() {
                tracing::debug!("diff receiver dropped, parser stopping");
                return;
            }
        }
    });
    rx
}

/// Wire [`spawn_lines`] into [`spawn_rules`], both with `capacity`.
pub fn spawn_pipeline<S>(source: S, capacity: usize) -> mpsc::Receiver<Result<Diff, RuleError>>
where
    S: LineSource + 'static,
{
    spawn_rules(spawn_lines(source, capacity), capacity)
}
