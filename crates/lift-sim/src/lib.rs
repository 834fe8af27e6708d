//! `lift-sim`: tick loop orchestrator for the lift elevator simulator.
//!
//! # Tick order
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Decide      one round trip with the DirectiveSource; the controller
//!                 sees the state left behind by the previous tick.
//!   ② Apply       one Directive per carriage (ignored while recovering).
//!   ③ Carriages   each carriage runs its state machine, in index order.
//!   ④ Floors      waiting passengers are charged to unhappiness, then the
//!                 arrival generator runs.
//!   ⑤ Advance     the tick counter moves on.
//! ```
//!
//! Any controller error aborts the run; the score of an aborted run is
//! undefined.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_protocol::IdleDirectives;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), IdleDirectives).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("unhappiness: {}", summary.unhappiness);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunSummary, SimObserver, TickStats};
pub use sim::Sim;
