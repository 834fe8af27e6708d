use lift_core::{CarId, CoreError, FloorId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("{floor} is outside a building with {floors} floors")]
    FloorOutOfRange { floor: FloorId, floors: usize },

    #[error("passenger at {floor} cannot request its own floor")]
    SelfDestination { floor: FloorId },

    #[error("no carriage {0}")]
    UnknownCarriage(CarId),

    #[error("directive count {got} does not match carriage count {expected}")]
    DirectiveCountMismatch { expected: usize, got: usize },
}

pub type BuildingResult<T> = Result<T, BuildingError>;

/// An engine bug: one of the building's conservation or bound invariants no
/// longer holds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error(
        "passenger conservation broken: spawned {spawned} != waiting {waiting} + riding {riding} + delivered {delivered}"
    )]
    Conservation {
        spawned:   u64,
        waiting:   u64,
        riding:    u64,
        delivered: u64,
    },

    #[error("{car} carries {riders} riders over capacity {capacity}")]
    OverCapacity { car: CarId, riders: usize, capacity: usize },

    #[error("{car} is at {floor} in a building with {floors} floors")]
    FloorOutOfBounds { car: CarId, floor: FloorId, floors: usize },

    #[error("a passenger waiting at {floor} wants to go to {floor}")]
    SelfDestination { floor: FloorId },
}
