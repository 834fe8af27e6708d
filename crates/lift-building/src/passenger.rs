//! A single passenger request.

use lift_core::{FloorId, Tick};

/// One person travelling from `origin` to `destination`.
///
/// Created waiting on `origin`'s queue; `boarded_at` is set when a carriage
/// picks it up.  `destination != origin` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub origin:      FloorId,
    pub destination: FloorId,
    pub spawned_at:  Tick,
    pub boarded_at:  Option<Tick>,
}

impl Passenger {
    #[inline]
    pub fn new(origin: FloorId, destination: FloorId, spawned_at: Tick) -> Self {
        Self { origin, destination, spawned_at, boarded_at: None }
    }

    #[inline]
    pub fn is_boarded(&self) -> bool {
        self.boarded_at.is_some()
    }

    /// `true` if the passenger is headed above `floor`.
    #[inline]
    pub fn goes_up_from(&self, floor: FloorId) -> bool {
        self.destination > floor
    }

    /// `true` if the passenger is headed below `floor`.
    #[inline]
    pub fn goes_down_from(&self, floor: FloorId) -> bool {
        self.destination < floor
    }
}
