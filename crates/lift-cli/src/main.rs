//! lift: grade an external elevator controller.
//!
//! Launches the controller as a child process, runs one full session of
//! the simulation against it, and prints the total unhappiness on stdout.
//! Any protocol or process failure ends the run with a non-zero exit code
//! after the controller has been reaped.
//!
//! ```text
//! lift ./my-controller --ticks 1000 --output out/
//! lift --idle --floors 10 --carriages 3
//! RUST_LOG=debug lift ./my-controller -- --verbose
//! ```

mod cli;

#[cfg(test)]
mod tests;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lift_core::SimConfig;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_protocol::{Controller, DirectiveSource, IdleDirectives, ProcessChannel};
use lift_sim::{NoopObserver, RunSummary, SimBuilder};

use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    info!(
        floors = config.floors,
        carriages = config.carriages,
        capacity = config.capacity,
        ticks = config.total_ticks,
        seed = config.seed,
        "configuration loaded"
    );

    let summary = match &cli.controller {
        Some(program) => {
            let channel = ProcessChannel::spawn(program, &cli.controller_args)
                .with_context(|| format!("launching controller {}", program.display()))?;
            let controller =
                Controller::new(channel, config.floor_indexing, config.response_timeout());
            simulate(&cli, config, controller)?
        }
        None => simulate(&cli, config, IdleDirectives)?,
    };

    println!("{}", summary.unhappiness);
    Ok(())
}

/// Build and run one session, writing CSV output if requested.
///
/// The decision source is dropped (and a controller process reaped) before
/// this returns, on success and on error alike.
fn simulate<D: DirectiveSource>(cli: &Cli, config: SimConfig, source: D) -> Result<RunSummary> {
    let mut sim = SimBuilder::new(config, source)
        .build()
        .context("building simulation")?;

    let t0 = Instant::now();
    let summary = match &cli.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output directory {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(writer);
            let result = sim.run(&mut obs);
            if result.is_err() {
                // Keep whatever was written before the failure.
                if let Err(e) = obs.finish() {
                    warn!(error = %e, "failed to flush output");
                }
            }
            if let Some(e) = obs.take_error() {
                warn!(error = %e, "output error");
            }
            result
        }
        None => sim.run(&mut NoopObserver),
    }
    .context("simulation aborted")?;

    info!(
        elapsed_ms = t0.elapsed().as_millis() as u64,
        delivered = summary.delivered,
        spawned = summary.spawned,
        unhappiness = summary.unhappiness,
        "session finished"
    );
    Ok(summary)
}
