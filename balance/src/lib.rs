//! # balance — bots, bins and the diffs that drive them
//!
//! A bot holds up to two values and two routing targets. Once it has both
//! values and both targets it *fires*: the smaller value goes to its low
//! target, the larger to its high target, and the bot empties itself for
//! the next wave. Targets are other bots or terminal bins.
//!
//! | Type | What it is |
//! |------|------------|
//! | [`Bot`] | the two-slot state machine |
//! | [`Bin`] | a terminal, overwrite-on-receive sink |
//! | [`Diff`] | one parsed instruction against one bot |
//! | [`Firing`] | the observable record of a bot firing |
//! | [`Observer`] | the seam where firings are reported |
//!
//! This crate holds no registry and performs no propagation; see
//! `balance-sim` for that, and `balance-rules` for producing diffs from text.

#![deny(missing_docs)]

pub mod bot;
pub mod diff;
pub mod id;
pub mod observer;
pub mod target;

#[cfg(feature = "test-utils")]
pub mod test_utils;

/// Values carried between bots. Absence is modelled with `Option`,
/// never with a reserved number.
pub type Value = u32;

// Re-exports for convenience
pub use bot::{Bin, Bot, Firing};
pub use diff::Diff;
pub use id::{BinId, BotId};
pub use observer::{NoopObserver, Observer};
pub use target::{Target, TargetKind};
