//! Routing targets for a bot's low and high outputs.

use crate::id::{BinId, BotId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a routing destination is another bot or a terminal bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Another bot; receiving may make it fire.
    Bot,
    /// An output bin; values stop here.
    Bin,
}

impl TargetKind {
    /// The word used for this kind in trace output.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Bot => "bot",
            TargetKind::Bin => "bin",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved routing destination. Targets refer to entities by id only;
/// the entity itself may not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Target {
    /// Deliver to a bot.
    Bot(BotId),
    /// Deliver to a bin.
    Bin(BinId),
}

impl Target {
    /// Build a target from a kind and a raw id.
    pub fn new(kind: TargetKind, id: u32) -> Self {
        match kind {
            TargetKind::Bot => Target::Bot(BotId::new(id)),
            TargetKind::Bin => Target::Bin(BinId::new(id)),
        }
    }

    /// Kind of this target.
    pub fn kind(self) -> TargetKind {
        match self {
            Target::Bot(_) => TargetKind::Bot,
            Target::Bin(_) => TargetKind::Bin,
        }
    }

    /// Raw numeric id, without namespace.
    pub fn raw_id(self) -> u32 {
        match self {
            Target::Bot(id) => id.get(),
            Target::Bin(id) => id.get(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.raw_id())
    }
}
