//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use lift_core::{FloorIndexing, SimConfig};

#[derive(Parser, Debug)]
#[command(
    name = "lift",
    version,
    about = "Grade an elevator controller against a simulated building",
    long_about = "Runs one session of the elevator simulation, driving the carriages\n\
                  with the directives an external controller writes on its stdout,\n\
                  and prints the total unhappiness (lower is better)."
)]
pub struct Cli {
    /// Controller executable (speaks the line protocol on stdin/stdout)
    #[arg(required_unless_present = "idle")]
    pub controller: Option<PathBuf>,

    /// Extra arguments passed to the controller (after `--`)
    #[arg(last = true)]
    pub controller_args: Vec<String>,

    /// Run without a controller: every carriage is told to stay
    #[arg(long, conflicts_with = "controller")]
    pub idle: bool,

    /// Number of floors
    #[arg(long, env = "LIFT_FLOORS", default_value_t = 6)]
    pub floors: usize,

    /// Number of carriages
    #[arg(long, env = "LIFT_CARRIAGES", default_value_t = 5)]
    pub carriages: usize,

    /// Riders per carriage
    #[arg(long, default_value_t = 20)]
    pub capacity: usize,

    /// Ticks in the session
    #[arg(long, env = "LIFT_TICKS", default_value_t = 600)]
    pub ticks: u64,

    /// Master RNG seed
    #[arg(long, env = "LIFT_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Popularity conversion factor (arrivals per minute to per tick)
    #[arg(long, default_value_t = 60.0)]
    pub ticks_per_minute: f64,

    /// Arrival rate for floors without an override
    #[arg(long, default_value_t = 1.0)]
    pub popularity: f64,

    /// Per-floor arrival rates, comma-separated, one per floor
    #[arg(long, value_delimiter = ',')]
    pub floor_popularity: Vec<f64>,

    /// Milliseconds to wait for each controller response
    #[arg(long, env = "LIFT_TIMEOUT_MS", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// How carriage floors are numbered on the wire
    #[arg(long, value_enum, default_value_t = Indexing::Zero)]
    pub floor_indexing: Indexing,

    /// Directory for tick_summaries.csv and carriage_snapshots.csv
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Carriage snapshot cadence in ticks (0 disables snapshots)
    #[arg(long, default_value_t = 1)]
    pub output_interval: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Indexing {
    /// Ground floor is 0
    Zero,
    /// Ground floor is 1
    One,
}

impl From<Indexing> for FloorIndexing {
    fn from(indexing: Indexing) -> Self {
        match indexing {
            Indexing::Zero => FloorIndexing::ZeroBased,
            Indexing::One  => FloorIndexing::OneBased,
        }
    }
}

impl Cli {
    pub fn config(&self) -> SimConfig {
        SimConfig {
            floors:                self.floors,
            carriages:             self.carriages,
            capacity:              self.capacity,
            total_ticks:           self.ticks,
            seed:                  self.seed,
            ticks_per_minute:      self.ticks_per_minute,
            default_popularity:    self.popularity,
            popularity:            self.floor_popularity.clone(),
            response_timeout_ms:   self.timeout_ms,
            floor_indexing:        self.floor_indexing.into(),
            output_interval_ticks: self.output_interval,
        }
    }
}
