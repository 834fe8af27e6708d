//! `lift-core`: foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `FloorId`, `CarId`                         |
//! | [`time`]  | `Tick`, `SimConfig`, `FloorIndexing`       |
//! | [`rng`]   | `FloorRng` (per-floor passenger generator) |
//! | [`error`] | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{CarId, FloorId};
pub use rng::FloorRng;
pub use time::{FloorIndexing, SimConfig, Tick};
