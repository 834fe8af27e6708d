//! Integration tests for lift-sim.

use std::time::Duration;

use lift_building::{Directive, MovementState, World, WorldView};
use lift_core::{CarId, FloorId, FloorIndexing, SimConfig, Tick};
use lift_protocol::{
    ChannelError, ChannelResult, Controller, DirectiveSource, IdleDirectives, ProcessError,
    ProtocolError, ScriptedChannel,
};

use crate::{NoopObserver, RunSummary, SimBuilder, SimError, SimObserver, TickStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        floors: 4,
        carriages: 2,
        total_ticks,
        ..SimConfig::default()
    }
}

/// Only the ground floor generates passengers.
fn lobby_config(total_ticks: u64, floors: usize, rate: f64) -> SimConfig {
    let mut popularity = vec![0.0; floors];
    popularity[0] = rate;
    SimConfig {
        floors,
        carriages: 1,
        total_ticks,
        popularity,
        ..SimConfig::default()
    }
}

fn scripted(channel: ScriptedChannel) -> Controller<ScriptedChannel> {
    Controller::new(channel, FloorIndexing::ZeroBased, Duration::from_millis(50))
}

/// Observer that records every hook.
#[derive(Default)]
struct Recorder {
    opens:     usize,
    starts:    Vec<Tick>,
    stats:     Vec<TickStats>,
    snapshots: Vec<Tick>,
    summary:   Option<RunSummary>,
}

impl SimObserver for Recorder {
    fn on_session_open(&mut self) { self.opens += 1; }
    fn on_tick_start(&mut self, tick: Tick) { self.starts.push(tick); }
    fn on_tick_end(&mut self, stats: &TickStats) { self.stats.push(*stats); }
    fn on_snapshot(&mut self, tick: Tick, view: WorldView<'_>) {
        assert_eq!(view.tick, tick);
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, summary: &RunSummary) { self.summary = Some(*summary); }
}

/// Sends every carriage down, every tick.
struct AlwaysDown;

impl DirectiveSource for AlwaysDown {
    fn decide(&mut self, view: &WorldView<'_>) -> ChannelResult<Vec<Directive>> {
        Ok(vec![Directive::Down; view.carriage_count()])
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(SimConfig::default(), IdleDirectives).build().unwrap();
        assert_eq!(sim.world.floors().len(), 6);
        assert_eq!(sim.world.carriages().len(), 5);
        assert_eq!(sim.world.tick(), Tick::ZERO);
    }

    #[test]
    fn invalid_config_errors() {
        let config = SimConfig { floors: 1, ..SimConfig::default() };
        let result = SimBuilder::new(config, IdleDirectives).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn prepared_world_shape_must_match() {
        let world = World::new(&test_config(10)).unwrap();
        let result = SimBuilder::new(SimConfig::default(), IdleDirectives)
            .world(world)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn prepared_world_is_kept() {
        let config = test_config(10);
        let mut world = World::new(&config).unwrap();
        world.floors_mut().enqueue(FloorId(2), FloorId(0), Tick::ZERO).unwrap();
        world.place_carriage(CarId(1), FloorId(3)).unwrap();

        let sim = SimBuilder::new(config, IdleDirectives).world(world).build().unwrap();
        assert_eq!(sim.world.total_waiting(), 1);
        assert_eq!(sim.world.carriages()[1].floor(), FloorId(3));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn idle_runs_to_end_tick() {
        let mut sim = SimBuilder::new(test_config(10), IdleDirectives).build().unwrap();
        let summary = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.world.tick(), Tick(10));
        assert_eq!(summary.ticks, 10);
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100), IdleDirectives).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.tick(), Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.world.tick(), Tick(8));
    }

    #[test]
    fn observer_called_correct_number_of_times() {
        let config = SimConfig { output_interval_ticks: 3, ..test_config(10) };
        let mut sim = SimBuilder::new(config, IdleDirectives).build().unwrap();
        let mut obs = Recorder::default();
        let summary = sim.run(&mut obs).unwrap();

        assert_eq!(obs.opens, 1);
        assert_eq!(obs.starts.len(), 10);
        assert_eq!(obs.stats.len(), 10);
        assert_eq!(obs.snapshots, [Tick(0), Tick(3), Tick(6), Tick(9)]);
        assert_eq!(obs.summary, Some(summary));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = SimConfig { output_interval_ticks: 0, ..test_config(5) };
        let mut sim = SimBuilder::new(config, IdleDirectives).build().unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn session_opens_once_across_run_ticks() {
        let mut sim = SimBuilder::new(test_config(100), IdleDirectives).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_ticks(2, &mut obs).unwrap();
        sim.run_ticks(2, &mut obs).unwrap();
        assert_eq!(obs.opens, 1);
    }

    #[test]
    fn staying_controller_keeps_carriages_idle() {
        let config = SimConfig { carriages: 5, ..SimConfig::default() };
        let controller = scripted(ScriptedChannel::repeating("S S S S S"));
        let mut sim = SimBuilder::new(config, controller).build().unwrap();
        sim.run_ticks(50, &mut NoopObserver).unwrap();

        for car in sim.world.carriages() {
            assert_eq!(car.floor(), FloorId(0));
            assert_eq!(car.state(), MovementState::Idle);
            assert!(car.is_empty());
        }
        assert_eq!(sim.world.total_delivered(), 0);
        assert_eq!(sim.source.exchanges(), 50);
    }
}

// ── Scoring and accounting ────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use super::*;

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut sim = SimBuilder::new(test_config(200), AlwaysDown).build().unwrap();
            let mut obs = Recorder::default();
            sim.run(&mut obs).unwrap();
            (obs.stats, sim.world.snapshot())
        };
        let (a_stats, a_snap) = run();
        let (b_stats, b_snap) = run();
        assert_eq!(a_stats, b_stats);
        assert_eq!(a_snap, b_snap);
    }

    #[test]
    fn unhappiness_charges_waiting_before_arrivals() {
        let config = SimConfig { default_popularity: 20.0, ..test_config(100) };
        let mut sim = SimBuilder::new(config, IdleDirectives).build().unwrap();
        let mut obs = Recorder::default();
        let summary = sim.run(&mut obs).unwrap();

        let mut running = 0;
        for stats in &obs.stats {
            // Idle carriages never board, so nobody leaves a floor.
            assert_eq!(stats.unhappiness_added, stats.waiting - stats.spawned);
            running += stats.unhappiness_added;
            assert_eq!(stats.unhappiness, running);
        }
        assert_eq!(summary.unhappiness, running);
        assert!(summary.unhappiness > 0);
    }

    #[test]
    fn unhappiness_never_decreases() {
        let config = SimConfig { default_popularity: 15.0, ..test_config(300) };
        let mut sim = SimBuilder::new(config, AlwaysDown).build().unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.stats.windows(2).all(|w| w[0].unhappiness <= w[1].unhappiness));
    }

    #[test]
    fn lobby_traffic_is_delivered() {
        let mut sim = SimBuilder::new(lobby_config(300, 5, 30.0), AlwaysDown).build().unwrap();
        let mut obs = Recorder::default();
        let summary = sim.run(&mut obs).unwrap();

        assert!(summary.delivered > 0);
        assert!(summary.delivered <= summary.spawned);
        sim.world.check_invariants().unwrap();

        let (mut spawned, mut delivered, mut journeys) = (0, 0, 0);
        for stats in &obs.stats {
            spawned += stats.spawned;
            delivered += stats.delivered;
            journeys += stats.journey_ticks;
            assert_eq!(spawned, stats.waiting + stats.riding + delivered, "{}", stats.tick);
        }
        // Nobody arrives in the tick they appeared.
        assert!(journeys >= delivered);
        let car = &sim.world.carriages()[0];
        assert!(car.rider_count() <= car.capacity());
    }
}

// ── Controller round trip ─────────────────────────────────────────────────────

#[cfg(test)]
mod controller_tests {
    use super::*;

    #[test]
    fn controller_sees_previous_tick_state() {
        let config = lobby_config(10, 3, 60.0);
        let controller = scripted(ScriptedChannel::repeating("S"));
        let mut sim = SimBuilder::new(config, controller).build().unwrap();
        let mut obs = Recorder::default();
        sim.run_ticks(2, &mut obs).unwrap();

        let written = sim.source.channel().written();
        let frame = 3 * 3 + 4;
        assert_eq!(written.len(), 1 + frame + 1 + frame);

        // Tick 0 frame: an empty building.
        assert_eq!(&written[1..4], ["00", "0", "0"]);

        // Tick 1 frame: ground floor shows what tick 0 generated.
        let spawned = obs.stats[0].spawned;
        let ground = 1 + frame + 1;
        assert_eq!(written[ground], format!("{}0", u8::from(spawned > 0)));
        assert_eq!(written[ground + 1], spawned.to_string());
        assert_eq!(written[ground + 2], "0");
    }

    #[test]
    fn timeout_aborts_the_run() {
        let controller = scripted(ScriptedChannel::new().respond("S S").then_timeout());
        let mut sim = SimBuilder::new(test_config(10), controller).build().unwrap();
        let mut obs = Recorder::default();
        let err = sim.run(&mut obs).unwrap_err();

        assert!(matches!(
            err,
            SimError::Controller(ChannelError::Process(ProcessError::Timeout { .. }))
        ));
        assert_eq!(sim.world.tick(), Tick(1));
        assert_eq!(obs.stats.len(), 1);
        assert!(obs.summary.is_none());
    }

    #[test]
    fn malformed_response_aborts_the_run() {
        let controller = scripted(ScriptedChannel::repeating("S"));
        let mut sim = SimBuilder::new(test_config(10), controller).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::Controller(ChannelError::Protocol(ProtocolError::WrongTokenCount {
                expected: 2,
                got: 1,
                ..
            }))
        ));
        assert_eq!(sim.world.tick(), Tick::ZERO);
    }

    #[test]
    fn closed_channel_aborts_the_run() {
        let controller = scripted(ScriptedChannel::new().then_close());
        let mut sim = SimBuilder::new(test_config(10), controller).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::Controller(ChannelError::Protocol(ProtocolError::ChannelClosed))
        ));
    }

    #[test]
    fn wrong_directive_count_from_source() {
        struct OneShort;
        impl DirectiveSource for OneShort {
            fn decide(&mut self, view: &WorldView<'_>) -> ChannelResult<Vec<Directive>> {
                Ok(vec![Directive::Stay; view.carriage_count() - 1])
            }
        }
        let mut sim = SimBuilder::new(test_config(10), OneShort).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Building(_)));
    }

    #[test]
    fn failed_open_runs_no_ticks() {
        struct Refuses;
        impl DirectiveSource for Refuses {
            fn open(&mut self, _view: &WorldView<'_>) -> ChannelResult<()> {
                Err(ProtocolError::ChannelClosed.into())
            }
            fn decide(&mut self, _view: &WorldView<'_>) -> ChannelResult<Vec<Directive>> {
                unreachable!("decide after failed open")
            }
        }
        let mut sim = SimBuilder::new(test_config(10), Refuses).build().unwrap();
        let mut obs = Recorder::default();
        assert!(sim.run(&mut obs).is_err());
        assert_eq!(obs.opens, 0);
        assert!(obs.starts.is_empty());
        assert_eq!(sim.world.tick(), Tick::ZERO);
    }
}
