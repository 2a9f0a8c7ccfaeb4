//! Concrete [`Observer`]s for reporting firings.

use balance::{Firing, Observer};
use std::io::Write;
use std::sync::Mutex;

/// Writes the classic trace line for every firing:
///
/// ```text
/// Bot 2 will give low: 2 to bot 1 high: 5 to bot 0
/// ```
///
/// Write failures are logged and otherwise ignored; the simulation
/// carries on.
pub struct TextObserver<W> {
    out: Mutex<W>,
}

impl TextObserver<std::io::Stdout> {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TextObserver<W> {
    /// Write to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Observer for TextObserver<W> {
    fn on_fire(&self, firing: &Firing) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(out, "{firing}") {
            tracing::warn!(error = %e, "failed to write trace line");
        }
    }
}

/// Writes each firing as one JSON object per line.
pub struct JsonObserver<W> {
    out: Mutex<W>,
}

impl JsonObserver<std::io::Stdout> {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonObserver<W> {
    /// Write to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Take the writer back.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Observer for JsonObserver<W> {
    fn on_fire(&self, firing: &Firing) {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let written = serde_json::to_writer(&mut *out, firing)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write trace record");
        }
    }
}

/// Emits every firing as a structured `tracing` event at `INFO`.
///
/// Observes only; pair it with a text or JSON observer when the trace
/// itself is the product.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Create a new `TracingObserver`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Observer for TracingObserver {
    fn on_fire(&self, firing: &Firing) {
        tracing::info!(
            bot = %firing.bot,
            low = firing.low,
            low_target = %firing.low_target,
            high = firing.high,
            high_target = %firing.high_target,
            "balance.bot.fired"
        );
    }
}
