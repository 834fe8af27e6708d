//! A building level: its waiting queue and stochastic arrival generator.

use std::collections::VecDeque;

use lift_core::{FloorId, FloorRng, Tick};

use crate::Passenger;

/// What one floor did during its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloorTick {
    /// Waiting passengers charged to unhappiness this tick.
    pub unhappiness_added: u64,
    /// New passengers enqueued by the generator.
    pub spawned: u64,
}

/// One floor of the building.
///
/// # Arrival model
///
/// Every tick the floor adds `unit() * popularity / ticks_per_minute` to a
/// fractional accumulator.  When the accumulator rounds to `n > 0`, it resets
/// to zero and `n` passengers are enqueued, each with a destination drawn
/// uniformly from the other floors.
pub struct Floor {
    id:          FloorId,
    waiting:     VecDeque<Passenger>,
    popularity:  f64,
    accumulator: f64,
    unhappiness: u64,
    spawned:     u64,
    rng:         FloorRng,
}

impl Floor {
    /// Create an empty floor.  `popularity` must be finite and `>= 0`.
    pub fn new(id: FloorId, popularity: f64, rng: FloorRng) -> Self {
        Self {
            id,
            waiting: VecDeque::new(),
            popularity,
            accumulator: 0.0,
            unhappiness: 0,
            spawned: 0,
            rng,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> FloorId {
        self.id
    }

    #[inline]
    pub fn popularity(&self) -> f64 {
        self.popularity
    }

    /// Cumulative waiting-passenger ticks on this floor.
    #[inline]
    pub fn unhappiness(&self) -> u64 {
        self.unhappiness
    }

    /// Passengers ever enqueued on this floor.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// The waiting queue, front first.
    #[inline]
    pub fn waiting(&self) -> &VecDeque<Passenger> {
        &self.waiting
    }

    #[inline]
    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    /// Waiting passengers headed up.
    pub fn count_up(&self) -> usize {
        self.waiting.iter().filter(|p| p.goes_up_from(self.id)).count()
    }

    /// Waiting passengers headed down.
    pub fn count_down(&self) -> usize {
        self.waiting.iter().filter(|p| p.goes_down_from(self.id)).count()
    }

    #[inline]
    pub fn has_up_request(&self) -> bool {
        self.waiting.iter().any(|p| p.goes_up_from(self.id))
    }

    #[inline]
    pub fn has_down_request(&self) -> bool {
        self.waiting.iter().any(|p| p.goes_down_from(self.id))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a passenger to the back of the queue.
    ///
    /// Callers validate the destination; see [`Floors::enqueue`][crate::Floors::enqueue].
    pub(crate) fn push_waiting(&mut self, passenger: Passenger) {
        self.waiting.push_back(passenger);
        self.spawned += 1;
    }

    /// Pop up to `max` passengers from the front of the queue, in FIFO order.
    pub(crate) fn take_front(&mut self, max: usize) -> impl Iterator<Item = Passenger> + '_ {
        let n = max.min(self.waiting.len());
        self.waiting.drain(..n)
    }

    /// Charge unhappiness for everyone currently waiting, then run the
    /// arrival generator.
    ///
    /// `floor_count` must be at least 2 or the destination draw cannot
    /// terminate.
    pub fn tick(&mut self, now: Tick, floor_count: usize, ticks_per_minute: f64) -> FloorTick {
        debug_assert!(floor_count >= 2, "destination draw needs another floor");

        let unhappiness_added = self.waiting.len() as u64;
        self.unhappiness += unhappiness_added;

        self.accumulator += self.rng.unit() * self.popularity / ticks_per_minute;
        let arrivals = self.accumulator.round() as u64;
        if arrivals > 0 {
            self.accumulator = 0.0;
            for _ in 0..arrivals {
                let destination = self.draw_destination(floor_count);
                self.push_waiting(Passenger::new(self.id, destination, now));
            }
        }

        FloorTick { unhappiness_added, spawned: arrivals }
    }

    /// Uniform over `0..floor_count`, redrawn until it differs from this floor.
    fn draw_destination(&mut self, floor_count: usize) -> FloorId {
        let top = floor_count as u32;
        loop {
            let candidate = FloorId(self.rng.gen_range(0..top));
            if candidate != self.id {
                return candidate;
            }
        }
    }
}
