//! Plain data row types written by output backends.

use lift_building::Carriage;
use lift_core::Tick;
use lift_sim::TickStats;

/// One carriage's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarriageSnapshotRow {
    pub tick:       u64,
    pub carriage:   u32,
    pub floor:      u32,
    /// `idle`, `up`, `down` or `recovery`.
    pub state:      &'static str,
    pub riders:     u64,
    pub full:       bool,
}

impl CarriageSnapshotRow {
    pub fn new(tick: Tick, carriage: &Carriage) -> Self {
        Self {
            tick:     tick.0,
            carriage: carriage.id().0,
            floor:    carriage.floor().0,
            state:    carriage.state().as_str(),
            riders:   carriage.rider_count() as u64,
            full:     carriage.is_full(),
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub directives:        u64,
    pub spawned:           u64,
    pub boarded:           u64,
    pub delivered:         u64,
    pub journey_ticks:     u64,
    pub waiting:           u64,
    pub riding:            u64,
    pub unhappiness_added: u64,
    pub unhappiness:       u64,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(stats: &TickStats) -> Self {
        Self {
            tick:              stats.tick.0,
            directives:        stats.directives as u64,
            spawned:           stats.spawned,
            boarded:           stats.boarded,
            delivered:         stats.delivered,
            journey_ticks:     stats.journey_ticks,
            waiting:           stats.waiting,
            riding:            stats.riding,
            unhappiness_added: stats.unhappiness_added,
            unhappiness:       stats.unhappiness,
        }
    }
}
