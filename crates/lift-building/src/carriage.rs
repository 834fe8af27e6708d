//! The carriage state machine.

use std::collections::VecDeque;

use lift_core::{CarId, FloorId, Tick};

use crate::{Directive, Floors, MovementState, Passenger};

/// What one carriage did during its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarriageTick {
    pub boarded:   u64,
    pub delivered: u64,
    /// Sum of spawn-to-arrival ticks over the passengers delivered.
    pub journey_ticks: u64,
}

impl std::ops::AddAssign for CarriageTick {
    fn add_assign(&mut self, rhs: Self) {
        self.boarded += rhs.boarded;
        self.delivered += rhs.delivered;
        self.journey_ticks += rhs.journey_ticks;
    }
}

/// An elevator car.
///
/// # Per-tick transition
///
/// Evaluated in order by [`step`][Self::step]:
///
/// 1. **Empty, not recovering**: move one floor in the current direction.
///    A move to below the ground floor or to floor `N` (or above) is clamped
///    back to the boundary and the carriage enters `ForcedRecovery`.
/// 2. **Empty, recovering**: head for the nearest floor with waiting
///    passengers (ties to the lower floor), board whoever is waiting here,
///    then move.  With nobody waiting anywhere, go `Idle` in place.
/// 3. **Occupied**: drop off riders for this floor, board from the front of
///    this floor's queue up to capacity, re-vote the direction over everyone
///    aboard (newly boarded riders included), then move.
pub struct Carriage {
    id:        CarId,
    floor:     FloorId,
    state:     MovementState,
    riders:    VecDeque<Passenger>,
    capacity:  usize,
    delivered: u64,
}

impl Carriage {
    /// An empty, idle carriage on the ground floor.
    pub fn new(id: CarId, capacity: usize) -> Self {
        Self::at(id, FloorId(0), capacity)
    }

    /// An empty, idle carriage on `floor`.
    pub fn at(id: CarId, floor: FloorId, capacity: usize) -> Self {
        Self {
            id,
            floor,
            state: MovementState::Idle,
            riders: VecDeque::with_capacity(capacity),
            capacity,
            delivered: 0,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn floor(&self) -> FloorId {
        self.floor
    }

    #[inline]
    pub fn state(&self) -> MovementState {
        self.state
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Boarded passengers in boarding order.
    #[inline]
    pub fn riders(&self) -> &VecDeque<Passenger> {
        &self.riders
    }

    #[inline]
    pub fn rider_count(&self) -> usize {
        self.riders.len()
    }

    #[inline]
    pub fn free_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.riders.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.riders.len() >= self.capacity
    }

    /// Empty and not recovering: the controller is steering this carriage.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.is_empty() && self.state != MovementState::ForcedRecovery
    }

    /// Passengers delivered over the carriage's lifetime.
    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Set the direction to attempt this tick.
    ///
    /// Ignored while in `ForcedRecovery`; returns whether it was applied.
    pub fn apply_directive(&mut self, directive: Directive) -> bool {
        if self.state == MovementState::ForcedRecovery {
            return false;
        }
        self.state = directive.into();
        true
    }

    pub(crate) fn place(&mut self, floor: FloorId) {
        self.floor = floor;
    }

    /// Run one tick of the state machine against the building's floors.
    pub fn step(&mut self, floors: &mut Floors, now: Tick) -> CarriageTick {
        let top = floors.top();
        match (self.riders.is_empty(), self.state) {
            (true, MovementState::ForcedRecovery) => self.recover(floors, now),
            (true, _) => {
                self.advance(top);
                CarriageTick::default()
            }
            (false, _) => self.serve(floors, now),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Distance to a waiting floor is taken from the carriage's own index,
    /// read as a floor number; the heading is taken from where it stands.
    fn recover(&mut self, floors: &mut Floors, now: Tick) -> CarriageTick {
        let Some(target) = floors.nearest_waiting(FloorId(self.id.0)) else {
            self.state = MovementState::Idle;
            return CarriageTick::default();
        };
        self.state = self.heading_to(target);
        let boarded = self.board(floors, now);
        self.advance(floors.top());
        CarriageTick { boarded, ..CarriageTick::default() }
    }

    fn serve(&mut self, floors: &mut Floors, now: Tick) -> CarriageTick {
        let (delivered, journey_ticks) = self.disembark(now);
        let boarded = self.board(floors, now);
        self.state = self.vote();
        self.advance(floors.top());
        CarriageTick { boarded, delivered, journey_ticks }
    }

    /// Move one floor in the current direction, clamping at the boundaries.
    fn advance(&mut self, top: FloorId) {
        let next = i64::from(self.floor.0) + self.state.delta();
        let top = i64::from(top.0);
        if next < 0 || next > top {
            self.floor = FloorId(next.clamp(0, top) as u32);
            self.state = MovementState::ForcedRecovery;
        } else {
            self.floor = FloorId(next as u32);
        }
    }

    /// Remove every rider whose destination is this floor.
    fn disembark(&mut self, now: Tick) -> (u64, u64) {
        let here = self.floor;
        let mut delivered = 0;
        let mut journey_ticks = 0;
        self.riders.retain(|p| {
            if p.destination != here {
                return true;
            }
            delivered += 1;
            journey_ticks += now.since(p.spawned_at);
            false
        });
        self.delivered += delivered;
        (delivered, journey_ticks)
    }

    /// Take passengers from the front of this floor's queue until the queue
    /// is empty or the carriage is full.
    fn board(&mut self, floors: &mut Floors, now: Tick) -> u64 {
        let before = self.riders.len();
        let boarding = floors.take_front(self.floor, self.free_capacity());
        self.riders.extend(boarding.map(|mut p| {
            p.boarded_at = Some(now);
            p
        }));
        (self.riders.len() - before) as u64
    }

    /// Inverse-distance vote over everyone aboard.  Ties go down.
    fn vote(&self) -> MovementState {
        let (up, down) = self.riders.iter().fold((0.0_f64, 0.0_f64), |(up, down), p| {
            let delta = p.destination.delta_from(self.floor);
            match delta.signum() {
                1  => (up + 1.0 / delta as f64, down),
                -1 => (up, down + 1.0 / -delta as f64),
                _  => (up, down),
            }
        });
        if up > down { MovementState::MovingUp } else { MovementState::MovingDown }
    }

    fn heading_to(&self, target: FloorId) -> MovementState {
        match target.cmp(&self.floor) {
            std::cmp::Ordering::Greater => MovementState::MovingUp,
            std::cmp::Ordering::Less    => MovementState::MovingDown,
            std::cmp::Ordering::Equal   => MovementState::Idle,
        }
    }
}
