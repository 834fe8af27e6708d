//! The `World` container: every floor, every carriage, and the tick counter.

use lift_core::{CarId, FloorId, SimConfig, Tick};

use crate::{
    BuildingError, BuildingResult, BuildingSnapshot, Carriage, CarriageTick, Directive, FloorTick,
    Floors, InvariantViolation, WorldView,
};

/// The simulated building.
///
/// `World` does not decide tick order; the simulation loop calls
/// [`apply_directives`][Self::apply_directives],
/// [`step_carriages`][Self::step_carriages],
/// [`step_floors`][Self::step_floors] and
/// [`advance_tick`][Self::advance_tick] in that order.
pub struct World {
    floors:    Floors,
    carriages: Vec<Carriage>,
    tick:      Tick,
}

impl World {
    /// Validate `config` and build an empty building with every carriage
    /// idle on the ground floor.
    pub fn new(config: &SimConfig) -> BuildingResult<Self> {
        config.validate()?;
        let carriages = (0..config.carriages as u32)
            .map(|i| Carriage::new(CarId(i), config.capacity))
            .collect();
        Ok(Self {
            floors: Floors::from_config(config),
            carriages,
            tick: Tick::ZERO,
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The tick about to be processed (number of completed ticks).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn floors(&self) -> &Floors {
        &self.floors
    }

    #[inline]
    pub fn carriages(&self) -> &[Carriage] {
        &self.carriages
    }

    #[inline]
    pub fn carriage(&self, car: CarId) -> Option<&Carriage> {
        self.carriages.get(car.index())
    }

    #[inline]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(self.tick, &self.floors, &self.carriages)
    }

    pub fn snapshot(&self) -> BuildingSnapshot {
        self.view().snapshot()
    }

    /// Aggregate score: sum of every floor's unhappiness.
    pub fn unhappiness(&self) -> u64 {
        self.floors.total_unhappiness()
    }

    pub fn total_spawned(&self) -> u64 {
        self.floors.total_spawned()
    }

    pub fn total_delivered(&self) -> u64 {
        self.carriages.iter().map(Carriage::delivered).sum()
    }

    pub fn total_waiting(&self) -> u64 {
        self.floors.total_waiting()
    }

    pub fn total_riding(&self) -> u64 {
        self.carriages.iter().map(|c| c.rider_count() as u64).sum()
    }

    // ── Scenario setup ────────────────────────────────────────────────────

    /// Mutable access to the floors for seeding passengers by hand.
    #[inline]
    pub fn floors_mut(&mut self) -> &mut Floors {
        &mut self.floors
    }

    /// Teleport an empty or loaded carriage to `floor`.
    pub fn place_carriage(&mut self, car: CarId, floor: FloorId) -> BuildingResult<()> {
        if !self.floors.contains(floor) {
            return Err(BuildingError::FloorOutOfRange { floor, floors: self.floors.len() });
        }
        let carriage = self
            .carriages
            .get_mut(car.index())
            .ok_or(BuildingError::UnknownCarriage(car))?;
        carriage.place(floor);
        Ok(())
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Apply one directive per carriage, in carriage order.
    ///
    /// Returns how many were applied (carriages in forced recovery ignore
    /// theirs).
    pub fn apply_directives(&mut self, directives: &[Directive]) -> BuildingResult<usize> {
        if directives.len() != self.carriages.len() {
            return Err(BuildingError::DirectiveCountMismatch {
                expected: self.carriages.len(),
                got:      directives.len(),
            });
        }
        let mut applied = 0;
        for (car, &directive) in self.carriages.iter_mut().zip(directives) {
            if car.apply_directive(directive) {
                applied += 1;
            }
        }
        Ok(applied)
    }

    /// Run every carriage's state machine in index order.
    pub fn step_carriages(&mut self) -> CarriageTick {
        let now = self.tick;
        let floors = &mut self.floors;
        let mut total = CarriageTick::default();
        for carriage in &mut self.carriages {
            total += carriage.step(floors, now);
        }
        total
    }

    /// Charge unhappiness and generate arrivals on every floor.
    pub fn step_floors(&mut self) -> FloorTick {
        self.floors.tick(self.tick)
    }

    pub fn advance_tick(&mut self) {
        self.tick = self.tick.next();
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check passenger conservation, carriage capacity and bounds, and that
    /// nobody waits for their own floor.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let floors = self.floors.len();
        for car in &self.carriages {
            if car.rider_count() > car.capacity() {
                return Err(InvariantViolation::OverCapacity {
                    car:      car.id(),
                    riders:   car.rider_count(),
                    capacity: car.capacity(),
                });
            }
            if !self.floors.contains(car.floor()) {
                return Err(InvariantViolation::FloorOutOfBounds {
                    car: car.id(),
                    floor: car.floor(),
                    floors,
                });
            }
        }

        for floor in self.floors.iter() {
            if floor.waiting().iter().any(|p| p.destination == floor.id()) {
                return Err(InvariantViolation::SelfDestination { floor: floor.id() });
            }
        }

        let spawned = self.total_spawned();
        let waiting = self.total_waiting();
        let riding = self.total_riding();
        let delivered = self.total_delivered();
        if spawned != waiting + riding + delivered {
            return Err(InvariantViolation::Conservation { spawned, waiting, riding, delivered });
        }
        Ok(())
    }
}
