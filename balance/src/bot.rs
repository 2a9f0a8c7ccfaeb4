//! The bot state machine and the terminal bin.

use crate::Value;
use crate::id::{BinId, BotId};
use crate::observer::Observer;
use crate::target::Target;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stateful actor that keeps the two largest values it has received
/// and hands them on once both of its routing targets are known.
///
/// Empty slots compare below every value (`None < Some(_)`), so a value
/// of 0 is routed like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    id: BotId,
    low: Option<Value>,
    high: Option<Value>,
    low_target: Option<Target>,
    high_target: Option<Target>,
}

impl Bot {
    /// Create an empty bot with no values and no targets.
    pub fn new(id: BotId) -> Self {
        Self {
            id,
            low: None,
            high: None,
            low_target: None,
            high_target: None,
        }
    }

    /// This bot's id.
    pub fn id(&self) -> BotId {
        self.id
    }

    /// The smaller of the two held values, if present.
    pub fn low(&self) -> Option<Value> {
        self.low
    }

    /// The larger of the two held values, if present.
    pub fn high(&self) -> Option<Value> {
        self.high
    }

    /// Where the low value goes when this bot fires.
    pub fn low_target(&self) -> Option<Target> {
        self.low_target
    }

    /// Where the high value goes when this bot fires.
    pub fn high_target(&self) -> Option<Target> {
        self.high_target
    }

    /// Accept a value, keeping only the two largest seen since the last clear.
    pub fn receive(&mut self, value: Value) {
        let incoming = Some(value);
        if incoming > self.high {
            self.low = self.high;
            self.high = incoming;
        } else if incoming > self.low {
            self.low = incoming;
        }
    }

    /// Overwrite the low routing target.
    pub fn set_low_target(&mut self, target: Target) {
        self.low_target = Some(target);
    }

    /// Overwrite the high routing target.
    pub fn set_high_target(&mut self, target: Target) {
        self.high_target = Some(target);
    }

    /// Overwrite both routing targets together.
    pub fn set_targets(&mut self, low: Target, high: Target) {
        self.low_target = Some(low);
        self.high_target = Some(high);
    }

    /// Both values held and both targets set.
    pub fn is_ready(&self) -> bool {
        self.firing().is_some()
    }

    /// Drop both held values. Targets are kept for the next wave.
    pub fn clear(&mut self) {
        self.low = None;
        self.high = None;
    }

    /// If ready, report the firing to `observer` and return it.
    ///
    /// Does not move any values; the caller delivers them and then
    /// calls [`Bot::clear`].
    pub fn try_fire(&self, observer: &dyn Observer) -> Option<Firing> {
        let firing = self.firing()?;
        observer.on_fire(&firing);
        Some(firing)
    }

    fn firing(&self) -> Option<Firing> {
        Some(Firing {
            bot: self.id,
            low: self.low?,
            low_target: self.low_target?,
            high: self.high?,
            high_target: self.high_target?,
        })
    }
}

/// A terminal sink. Each receipt overwrites the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    id: BinId,
    value: Option<Value>,
    received: u32,
}

impl Bin {
    /// Create an empty bin.
    pub fn new(id: BinId) -> Self {
        Self {
            id,
            value: None,
            received: 0,
        }
    }

    /// This bin's id.
    pub fn id(&self) -> BinId {
        self.id
    }

    /// The last value delivered, if any.
    pub fn value(&self) -> Option<Value> {
        self.value
    }

    /// How many values have been delivered over the whole run.
    pub fn received(&self) -> u32 {
        self.received
    }

    /// Store `value`, replacing whatever was there.
    pub fn receive(&mut self, value: Value) {
        self.value = Some(value);
        self.received = self.received.saturating_add(1);
    }
}

/// Record of one bot firing: what it held and where each value went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firing {
    /// The bot that fired.
    pub bot: BotId,
    /// Value sent to `low_target`.
    pub low: Value,
    /// Destination of the low value.
    pub low_target: Target,
    /// Value sent to `high_target`.
    pub high: Value,
    /// Destination of the high value.
    pub high_target: Target,
}

/// The trace line format, trailing space included.
impl fmt::Display for Firing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bot {} will give low: {} to {} high: {} to {} ",
            self.bot, self.low, self.low_target, self.high, self.high_target
        )
    }
}
