//! RecordingObserver — keeps every firing it sees.

use crate::bot::Firing;
use crate::observer::Observer;
use std::sync::Mutex;

/// An observer that records every firing in order.
/// Use `.firings()` or `.lines()` to inspect what was recorded.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    firings: Mutex<Vec<Firing>>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded firings.
    pub fn firings(&self) -> Vec<Firing> {
        self.firings.lock().unwrap().clone()
    }

    /// Recorded firings rendered as trace lines.
    pub fn lines(&self) -> Vec<String> {
        self.firings
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn on_fire(&self, firing: &Firing) {
        self.firings.lock().unwrap().push(*firing);
    }
}
