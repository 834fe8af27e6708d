//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! synchronous round: controller exchange, carriage movement, floor arrivals.
//! Carriages move at most one floor per tick, so a tick is also the unit of
//! travel time.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult, FloorId};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FloorIndexing ─────────────────────────────────────────────────────────────

/// How a carriage's current floor is numbered on the controller wire.
///
/// Fixed for a whole session; the pressed-button mask is always positional
/// and unaffected.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorIndexing {
    /// Ground floor is written as `0`.
    #[default]
    ZeroBased,
    /// Ground floor is written as `1`.
    OneBased,
}

impl FloorIndexing {
    /// The number written on the wire for `floor`.
    #[inline]
    pub fn encode(self, floor: FloorId) -> u32 {
        match self {
            FloorIndexing::ZeroBased => floor.0,
            FloorIndexing::OneBased  => floor.0 + 1,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the binary from command-line flags (or deserialized with the
/// `serde` feature) and validated by the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors.  At least 2 so every passenger has somewhere to go.
    pub floors: usize,

    /// Number of carriages.
    pub carriages: usize,

    /// Maximum riders per carriage.
    pub capacity: usize,

    /// Total ticks in one graded run.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical arrivals.
    pub seed: u64,

    /// Conversion from popularity (arrivals per minute) to arrivals per tick.
    pub ticks_per_minute: f64,

    /// Popularity for every floor without an explicit override.
    pub default_popularity: f64,

    /// Per-floor popularity overrides.  Empty, or exactly one per floor.
    pub popularity: Vec<f64>,

    /// Bounded wait for one controller response line, in milliseconds.
    pub response_timeout_ms: u64,

    /// Wire numbering of the carriage floor line.
    pub floor_indexing: FloorIndexing,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                6,
            carriages:             5,
            capacity:              20,
            total_ticks:           600,
            seed:                  42,
            ticks_per_minute:      60.0,
            default_popularity:    1.0,
            popularity:            Vec::new(),
            response_timeout_ms:   5_000,
            floor_indexing:        FloorIndexing::ZeroBased,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Bounded wait for a controller response.
    #[inline]
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    /// Arrival-rate parameter for `floor`.
    pub fn popularity_of(&self, floor: FloorId) -> f64 {
        self.popularity
            .get(floor.index())
            .copied()
            .unwrap_or(self.default_popularity)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors < 2 {
            return Err(CoreError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floors
            )));
        }
        if self.floors > u32::MAX as usize {
            return Err(CoreError::Config(format!("too many floors: {}", self.floors)));
        }
        if self.carriages == 0 || self.carriages > u32::MAX as usize {
            return Err(CoreError::Config(format!(
                "carriage count must be between 1 and {}, got {}",
                u32::MAX,
                self.carriages
            )));
        }
        if self.capacity == 0 {
            return Err(CoreError::Config("carriage capacity must be positive".into()));
        }
        if self.response_timeout_ms == 0 {
            return Err(CoreError::Config("controller response timeout must be positive".into()));
        }
        if !(self.ticks_per_minute.is_finite() && self.ticks_per_minute > 0.0) {
            return Err(CoreError::Config(format!(
                "ticks_per_minute must be a positive number, got {}",
                self.ticks_per_minute
            )));
        }
        if !self.popularity.is_empty() && self.popularity.len() != self.floors {
            return Err(CoreError::Config(format!(
                "popularity has {} entries for {} floors",
                self.popularity.len(),
                self.floors
            )));
        }
        let rates = std::iter::once(&self.default_popularity).chain(&self.popularity);
        if let Some(bad) = rates.copied().find(|p| !(p.is_finite() && *p >= 0.0)) {
            return Err(CoreError::Config(format!(
                "popularity must be finite and non-negative, got {bad}"
            )));
        }
        Ok(())
    }
}
