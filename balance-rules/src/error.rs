//! Errors raised while reading or parsing rule text.

use thiserror::Error;

/// Reading or parsing failed. Both kinds end the run.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RuleError {
    /// The input could not be opened or read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A non-empty line matched neither rule grammar.
    #[error("line {line}: {reason}: {text:?}")]
    Syntax {
        /// 1-based line number.
        line: usize,
        /// The trimmed line as read.
        text: String,
        /// What did not match.
        reason: String,
    },
}

impl RuleError {
    pub(crate) fn syntax(line: usize, text: &str, reason: impl Into<String>) -> Self {
        RuleError::Syntax {
            line,
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
