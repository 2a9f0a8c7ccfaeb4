//! Lazily populated bot and bin tables.

use balance::{Bin, BinId, Bot, BotId};
use std::collections::BTreeMap;

/// Owns every bot and bin of one simulation.
///
/// Entities are created on first reference with empty state and live as
/// long as the registry. Bots and bins are keyed separately, so a bot and
/// a bin may share a number. Ordered maps keep every iteration
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    bots: BTreeMap<BotId, Bot>,
    bins: BTreeMap<BinId, Bin>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bot with `id`, created empty if this is the first reference.
    pub fn bot_mut(&mut self, id: BotId) -> &mut Bot {
        self.bots.entry(id).or_insert_with(|| Bot::new(id))
    }

    /// The bin with `id`, created empty if this is the first reference.
    pub fn bin_mut(&mut self, id: BinId) -> &mut Bin {
        self.bins.entry(id).or_insert_with(|| Bin::new(id))
    }

    /// Look up a bot without creating it.
    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(&id)
    }

    /// Look up a bin without creating it.
    pub fn bin(&self, id: BinId) -> Option<&Bin> {
        self.bins.get(&id)
    }

    /// All bots, ordered by id.
    pub fn bots(&self) -> impl Iterator<Item = &Bot> {
        self.bots.values()
    }

    /// All bins, ordered by id.
    pub fn bins(&self) -> impl Iterator<Item = &Bin> {
        self.bins.values()
    }

    /// Number of bots referenced so far.
    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }

    /// Number of bins referenced so far.
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }
}
