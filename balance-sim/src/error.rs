//! Errors that end a simulation run.

use balance::BotId;
use balance_rules::RuleError;
use thiserror::Error;

/// Simulation errors. None of them are recoverable; the run stops at the
/// first one.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SimError {
    /// The rule stream failed to read or parse.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    /// One diff set off more firings than allowed. Happens when bots
    /// feed each other in a cycle.
    #[error("bot {bot} would exceed {limit} firings for a single diff; routing cycle?")]
    Runaway {
        /// The bot that was about to fire past the limit.
        bot: BotId,
        /// The configured limit.
        limit: usize,
    },
}
