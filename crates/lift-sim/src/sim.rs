//! The `Sim` struct and its tick loop.

use lift_building::World;
use lift_core::{SimConfig, Tick};
use lift_protocol::DirectiveSource;
use tracing::{debug, info, warn};

use crate::{RunSummary, SimObserver, SimResult, TickStats};

/// The main simulation runner.
///
/// `Sim<D>` owns the building and the decision source and drives the
/// five-phase tick loop described in the crate docs.  Phases never overlap:
/// the controller round trip completes before any carriage moves.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: DirectiveSource> {
    /// Global configuration (floors, carriages, total ticks, seed, …).
    pub config: SimConfig,

    /// Floors, carriages, passengers and the tick counter.
    pub world: World,

    /// Where each tick's directives come from.
    pub source: D,

    pub(crate) opened: bool,
}

impl<D: DirectiveSource> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Returns the run totals; the unhappiness total is the score.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        self.open(observer)?;
        loop {
            let now = self.world.tick();
            if now >= self.config.end_tick() {
                break;
            }
            self.step(now, observer)?;
        }

        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            spawned = summary.spawned,
            delivered = summary.delivered,
            unhappiness = summary.unhappiness,
            "run complete"
        );
        observer.on_sim_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.open(observer)?;
        for _ in 0..n {
            let now = self.world.tick();
            self.step(now, observer)?;
        }
        Ok(())
    }

    /// Totals as of the current tick.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks:       self.world.tick().0,
            spawned:     self.world.total_spawned(),
            delivered:   self.world.total_delivered(),
            unhappiness: self.world.unhappiness(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn open<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.opened {
            return Ok(());
        }
        if let Err(e) = self.source.open(&self.world.view()) {
            warn!(error = %e, "controller failed to open session");
            return Err(e.into());
        }
        self.opened = true;
        observer.on_session_open();
        Ok(())
    }

    fn step<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);
        let stats = self.process_tick(now).inspect_err(|e| {
            warn!(tick = now.0, error = %e, "run aborted");
        })?;
        observer.on_tick_end(&stats);

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, self.world.view());
        }

        self.world.advance_tick();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickStats> {
        // ── Phase 1: controller round trip ────────────────────────────────
        //
        // The view still holds the previous tick's end state.
        let directives = self.source.decide(&self.world.view())?;

        // ── Phase 2: apply directives ─────────────────────────────────────
        let applied = self.world.apply_directives(&directives)?;

        // ── Phase 3: carriages, in index order ────────────────────────────
        let carriages = self.world.step_carriages();

        // ── Phase 4: floors (unhappiness, then arrivals) ──────────────────
        let floors = self.world.step_floors();

        #[cfg(debug_assertions)]
        self.world.check_invariants()?;

        let stats = TickStats {
            tick:              now,
            directives:        applied,
            spawned:           floors.spawned,
            boarded:           carriages.boarded,
            delivered:         carriages.delivered,
            journey_ticks:     carriages.journey_ticks,
            waiting:           self.world.total_waiting(),
            riding:            self.world.total_riding(),
            unhappiness_added: floors.unhappiness_added,
            unhappiness:       self.world.unhappiness(),
        };
        debug!(
            tick = now.0,
            directives = applied,
            spawned = stats.spawned,
            delivered = stats.delivered,
            unhappiness = stats.unhappiness,
            "tick complete"
        );
        Ok(stats)
    }
}
