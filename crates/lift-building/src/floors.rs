//! The ordered floor list.
//!
//! `Floors` is also the query handle a [`Carriage`][crate::Carriage] receives
//! during its tick: carriages can read every floor and take passengers from
//! the front of a queue, but cannot add or remove floors.

use lift_core::{FloorId, FloorRng, SimConfig, Tick};

use crate::{BuildingError, BuildingResult, Floor, FloorTick, Passenger};

pub struct Floors {
    floors:           Vec<Floor>,
    ticks_per_minute: f64,
}

impl Floors {
    /// Build `config.floors` empty floors, each with its own seeded RNG.
    ///
    /// `config` is assumed validated.
    pub fn from_config(config: &SimConfig) -> Self {
        let floors = (0..config.floors as u32)
            .map(FloorId)
            .map(|id| Floor::new(id, config.popularity_of(id), FloorRng::new(config.seed, id)))
            .collect();
        Self { floors, ticks_per_minute: config.ticks_per_minute }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[inline]
    pub fn contains(&self, floor: FloorId) -> bool {
        floor.index() < self.floors.len()
    }

    #[inline]
    pub fn get(&self, floor: FloorId) -> Option<&Floor> {
        self.floors.get(floor.index())
    }

    /// The topmost floor.
    #[inline]
    pub fn top(&self) -> FloorId {
        FloorId(self.floors.len().saturating_sub(1) as u32)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Floor> {
        self.floors.iter()
    }

    /// The floor with waiting passengers closest to `from`.
    ///
    /// Scans in ascending index order and keeps the first strict minimum, so
    /// ties go to the lower floor.
    pub fn nearest_waiting(&self, from: FloorId) -> Option<FloorId> {
        let mut best: Option<(u32, FloorId)> = None;
        for floor in self.floors.iter().filter(|f| f.waiting_len() > 0) {
            let distance = floor.id().distance(from);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, floor.id()));
            }
        }
        best.map(|(_, id)| id)
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    pub fn total_waiting(&self) -> u64 {
        self.floors.iter().map(|f| f.waiting_len() as u64).sum()
    }

    pub fn total_unhappiness(&self) -> u64 {
        self.floors.iter().map(Floor::unhappiness).sum()
    }

    pub fn total_spawned(&self) -> u64 {
        self.floors.iter().map(Floor::spawned).sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Enqueue a passenger by hand (scenario seeding, tests).
    pub fn enqueue(&mut self, origin: FloorId, destination: FloorId, now: Tick) -> BuildingResult<()> {
        for floor in [origin, destination] {
            if !self.contains(floor) {
                return Err(BuildingError::FloorOutOfRange { floor, floors: self.len() });
            }
        }
        if origin == destination {
            return Err(BuildingError::SelfDestination { floor: origin });
        }
        self.floors[origin.index()].push_waiting(Passenger::new(origin, destination, now));
        Ok(())
    }

    /// Pop up to `max` passengers from the front of `floor`'s queue.
    pub(crate) fn take_front(
        &mut self,
        floor: FloorId,
        max:   usize,
    ) -> impl Iterator<Item = Passenger> + '_ {
        self.floors[floor.index()].take_front(max)
    }

    /// Run every floor's tick in index order and sum the results.
    pub fn tick(&mut self, now: Tick) -> FloorTick {
        let count = self.floors.len();
        let tpm = self.ticks_per_minute;
        self.floors.iter_mut().fold(FloorTick::default(), |acc, floor| {
            let t = floor.tick(now, count, tpm);
            FloorTick {
                unhappiness_added: acc.unhappiness_added + t.unhappiness_added,
                spawned:           acc.spawned + t.spawned,
            }
        })
    }
}
