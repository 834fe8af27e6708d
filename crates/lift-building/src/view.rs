//! Read-only access to building state for the controller codec, observers,
//! and renderers.

use lift_core::{CarId, FloorId, Tick};

use crate::{Carriage, Floor, Floors, MovementState, Passenger};

/// A borrowed, immutable view of the whole building at one tick.
///
/// Handed to the controller codec and to observers.  Holds only shared
/// references, so nothing reachable through it can be mutated while it is
/// alive.
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    pub tick:      Tick,
    pub floors:    &'a Floors,
    pub carriages: &'a [Carriage],
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn new(tick: Tick, floors: &'a Floors, carriages: &'a [Carriage]) -> Self {
        Self { tick, floors, carriages }
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn carriage_count(&self) -> usize {
        self.carriages.len()
    }

    pub fn floors(&self) -> impl Iterator<Item = &'a Floor> + 'a {
        self.floors.iter()
    }

    /// Sum of every floor's unhappiness.
    pub fn unhappiness(&self) -> u64 {
        self.floors.total_unhappiness()
    }

    /// Copy the current state out into an owned snapshot.
    pub fn snapshot(&self) -> BuildingSnapshot {
        BuildingSnapshot {
            tick: self.tick,
            floors: self
                .floors
                .iter()
                .map(|f| FloorSnapshot {
                    id:          f.id(),
                    waiting:     f.waiting().iter().copied().collect(),
                    unhappiness: f.unhappiness(),
                })
                .collect(),
            carriages: self
                .carriages
                .iter()
                .map(|c| CarriageSnapshot {
                    id:     c.id(),
                    floor:  c.floor(),
                    state:  c.state(),
                    riders: c.riders().iter().copied().collect(),
                })
                .collect(),
        }
    }
}

/// Owned copy of the building, e.g. to hand to a renderer on another thread.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingSnapshot {
    pub tick:      Tick,
    pub floors:    Vec<FloorSnapshot>,
    pub carriages: Vec<CarriageSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSnapshot {
    pub id:          FloorId,
    pub waiting:     Vec<Passenger>,
    pub unhappiness: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarriageSnapshot {
    pub id:     CarId,
    pub floor:  FloorId,
    pub state:  MovementState,
    pub riders: Vec<Passenger>,
}
