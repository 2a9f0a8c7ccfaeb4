//! Change records produced by the rule parser.

use crate::Value;
use crate::bot::Bot;
use crate::id::BotId;
use crate::target::Target;
use serde::{Deserialize, Serialize};

/// One instruction against one bot. Diffs exist only between parsing
/// and application; nothing keeps them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Diff {
    /// Deliver a value to a bot.
    Value {
        /// The receiving bot.
        bot: BotId,
        /// The value delivered.
        value: Value,
    },
    /// Replace a bot's routing rule.
    Targets {
        /// The bot whose targets change.
        bot: BotId,
        /// Destination of the low value.
        low: Target,
        /// Destination of the high value.
        high: Target,
    },
}

impl Diff {
    /// The bot this diff applies to.
    pub fn bot(&self) -> BotId {
        match self {
            Diff::Value { bot, .. } | Diff::Targets { bot, .. } => *bot,
        }
    }

    /// Mutate `bot` according to this diff.
    pub fn apply(&self, bot: &mut Bot) {
        match *self {
            Diff::Value { value, .. } => bot.receive(value),
            Diff::Targets { low, high, .. } => bot.set_targets(low, high),
        }
    }
}
