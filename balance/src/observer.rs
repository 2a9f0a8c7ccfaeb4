//! The Observer interface — the only place firings become visible.

use crate::bot::Firing;
use std::sync::Arc;

/// Watches bots fire.
///
/// Observers are called synchronously from the propagation loop, once per
/// firing, before the fired values are delivered. They observe only; they
/// cannot change what happens next.
///
/// Implementations:
/// - TextObserver: the classic trace line on stdout
/// - JsonObserver: one JSON object per line
/// - TracingObserver: structured `tracing` events
/// - RecordingObserver: in-memory capture for tests (`test-utils`)
pub trait Observer: Send + Sync {
    /// Called once for every firing, in firing order.
    fn on_fire(&self, firing: &Firing);
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn on_fire(&self, firing: &Firing) {
        (**self).on_fire(firing)
    }
}

impl<T: Observer + ?Sized> Observer for Box<T> {
    fn on_fire(&self, firing: &Firing) {
        (**self).on_fire(firing)
    }
}

/// Fans a firing out to several observers in registration order.
impl<T: Observer> Observer for [T] {
    fn on_fire(&self, firing: &Firing) {
        for observer in self {
            observer.on_fire(firing);
        }
    }
}

impl<T: Observer> Observer for Vec<T> {
    fn on_fire(&self, firing: &Firing) {
        self.as_slice().on_fire(firing)
    }
}

/// Ignores every firing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_fire(&self, _firing: &Firing) {}
}
