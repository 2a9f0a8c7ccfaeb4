use crate::error::SimError;
use crate::registry::Registry;
use balance::{Bin, Bot, BotId, Diff, Firing, Observer, Target};
use balance_rules::RuleError;
use tokio::sync::mpsc;

/// Default bound on firings caused by one diff.
pub const DEFAULT_MAX_FIRINGS: usize = 100_000;

/// Counters for a run so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Diffs applied.
    pub diffs: usize,
    /// Bot firings.
    pub firings: usize,
    /// Values that came to rest in a bin.
    pub binned: usize,
}

/// One self-contained simulation: a registry, its observers, and the
/// propagation loop that moves values between them.
///
/// Diffs are applied strictly one at a time. Each [`Simulation::apply`]
/// returns only after every firing it caused has finished, so no two
/// diffs ever interleave.
pub struct Simulation {
    registry: Registry,
    observers: Vec<Box<dyn Observer>>,
    max_firings_per_diff: usize,
    stats: RunStats,
}

impl Simulation {
    /// Create a simulation with no entities and no observers.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            observers: vec![],
            max_firings_per_diff: DEFAULT_MAX_FIRINGS,
            stats: RunStats::default(),
        }
    }

    /// Add an observer. Observers see firings in registration order.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Add an observer to an existing simulation.
    pub fn add_observer(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Set a safety bound on the number of firings one diff may cause.
    pub fn with_max_firings(mut self, max_firings_per_diff: usize) -> Self {
        self.max_firings_per_diff = max_firings_per_diff;
        self
    }

    /// Read access to every bot and bin.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// All bots, ordered by id.
    pub fn bots(&self) -> impl Iterator<Item = &Bot> {
        self.registry.bots()
    }

    /// All bins, ordered by id.
    pub fn bins(&self) -> impl Iterator<Item = &Bin> {
        self.registry.bins()
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Apply one diff to its bot, then propagate from that bot.
    /// Returns the number of firings the diff caused.
    pub fn apply(&mut self, diff: Diff) -> Result<usize, SimError> {
        tracing::debug!(bot = %diff.bot(), ?diff, "applying diff");
        diff.apply(self.registry.bot_mut(diff.bot()));
        self.stats.diffs += 1;
        self.propagate(diff.bot())
    }

    /// Fire `start` if it is ready, deliver its values, and keep going
    /// through every bot that received one.
    ///
    /// Follow-ups run depth-first, low target before high target, which
    /// keeps the trace order stable for a given input.
    pub fn propagate(&mut self, start: BotId) -> Result<usize, SimError> {
        let mut pending = vec![start];
        let mut fired = 0usize;

        while let Some(id) = pending.pop() {
            let bot = self.registry.bot_mut(id);
            if !bot.is_ready() {
                continue;
            }
            if fired >= self.max_firings_per_diff {
                tracing::warn!(
                    bot = %id,
                    limit = self.max_firings_per_diff,
                    "firing limit reached"
                );
                self.stats.firings += fired;
                return Err(SimError::Runaway {
                    bot: id,
                    limit: self.max_firings_per_diff,
                });
            }
            let Some(firing) = bot.try_fire(&self.observers) else {
                continue;
            };
            fired += 1;

            let low = self.deliver(firing.low, firing.low_target);
            let high = self.deliver(firing.high, firing.high_target);
            self.registry.bot_mut(id).clear();
            trace_firing(&firing);

            // Stack: push high first so low is processed first.
            pending.extend(high);
            pending.extend(low);
        }

        self.stats.firings += fired;
        Ok(fired)
    }

    /// Apply every diff in order. Stops at the first error, whether it
    /// came from the diff source or from propagation.
    pub fn run<I, E>(&mut self, diffs: I) -> Result<RunStats, SimError>
    where
        I: IntoIterator<Item = Result<Diff, E>>,
        E: Into<SimError>,
    {
        for diff in diffs {
            let diff = diff.map_err(Into::<SimError>::into)?;
            self.apply(diff)?;
        }
        Ok(self.stats)
    }

    /// Consume diffs from a producer channel until it closes.
    ///
    /// This is the single consumer of the pipeline: a diff and all of its
    /// propagation finish before the next one is received.
    pub async fn run_channel(
        &mut self,
        mut diffs: mpsc::Receiver<Result<Diff, RuleError>>,
    ) -> Result<RunStats, SimError> {
        while let Some(diff) = diffs.recv().await {
            self.apply(diff?)?;
        }
        Ok(self.stats)
    }

    /// Hand `value` to `target`. Returns the bot that now needs checking.
    fn deliver(&mut self, value: balance::Value, target: Target) -> Option<BotId> {
        match target {
            Target::Bot(id) => {
                self.registry.bot_mut(id).receive(value);
                Some(id)
            }
            Target::Bin(id) => {
                self.registry.bin_mut(id).receive(value);
                self.stats.binned += 1;
                None
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

fn trace_firing(firing: &Firing) {
    tracing::trace!(
        bot = %firing.bot,
        low = firing.low,
        low_target = %firing.low_target,
        high = firing.high,
        high_target = %firing.high_target,
        "bot fired"
    );
}
