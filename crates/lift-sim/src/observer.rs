//! Simulation observer trait for progress reporting and data collection.

use lift_building::WorldView;
use lift_core::Tick;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    pub tick: Tick,
    /// Directives the carriages accepted (recovering carriages ignore theirs).
    pub directives: usize,
    pub spawned:    u64,
    pub boarded:    u64,
    pub delivered:  u64,
    /// Spawn-to-delivery ticks summed over this tick's deliveries.
    pub journey_ticks: u64,
    /// Passengers on floors after the tick.
    pub waiting: u64,
    /// Passengers in carriages after the tick.
    pub riding: u64,
    pub unhappiness_added: u64,
    /// Cumulative building unhappiness after the tick.
    pub unhappiness: u64,
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks:       u64,
    pub spawned:     u64,
    pub delivered:   u64,
    /// The score: total unhappiness summed over every floor.
    pub unhappiness: u64,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: unhappiness {}", stats.tick, stats.unhappiness);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once, after the decision source opened its session.
    fn on_session_open(&mut self) {}

    /// Called at the very start of each tick, before the controller round trip.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, before the tick counter advances.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// The view is read-only and reflects the state at the end of `tick`.
    fn on_snapshot(&mut self, _tick: Tick, _view: WorldView<'_>) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _summary: &RunSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
