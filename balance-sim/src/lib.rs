#![deny(missing_docs)]
//! Registry and propagation engine for balance bots.
//!
//! A [`Simulation`] owns a [`Registry`] of bots and bins. Each diff is
//! applied to its bot, after which every bot that becomes ready fires and
//! hands its values on, until nothing else is ready. Firings are reported
//! to the simulation's observers; see [`observers`] for the stock ones.
//!
//! ```
//! use balance_rules::parse_str;
//! use balance_sim::Simulation;
//!
//! let mut sim = Simulation::new();
//! sim.run(parse_str(
//!     "value 3 goes to bot 1\n\
//!      value 7 goes to bot 1\n\
//!      bot 1 gives low to output 0 and high to output 1",
//! ))
//! .unwrap();
//!
//! let bins: Vec<_> = sim.bins().map(|b| b.value()).collect();
//! assert_eq!(bins, vec![Some(3), Some(7)]);
//! ```

pub mod error;
pub mod observers;
pub mod registry;
mod simulation;

pub use error::SimError;
pub use observers::{JsonObserver, TextObserver, TracingObserver};
pub use registry::Registry;
pub use simulation::{DEFAULT_MAX_FIRINGS, RunStats, Simulation};
