//! In-memory helpers for testing.
//!
//! Available behind the `test-utils` feature flag.

mod recording_observer;

pub use recording_observer::RecordingObserver;
