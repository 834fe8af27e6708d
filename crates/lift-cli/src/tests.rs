//! Argument parsing tests for the `lift` binary.

use clap::Parser;
use lift_core::{FloorIndexing, SimConfig};

use crate::cli::Cli;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("lift").chain(args.iter().copied()))
}

#[cfg(test)]
mod args {
    use super::*;

    #[test]
    fn defaults_match_sim_config() {
        let cli = parse(&["--idle"]).unwrap();
        assert_eq!(cli.config(), SimConfig::default());
    }

    #[test]
    fn controller_is_required_without_idle() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn idle_and_controller_conflict() {
        assert!(parse(&["--idle", "./ctl"]).is_err());
    }

    #[test]
    fn controller_and_trailing_args() {
        let cli = parse(&["./ctl", "--ticks", "10", "--", "--fast", "x"]).unwrap();
        assert_eq!(cli.controller.as_deref(), Some(std::path::Path::new("./ctl")));
        assert_eq!(cli.controller_args, ["--fast", "x"]);
        assert_eq!(cli.config().total_ticks, 10);
    }

    #[test]
    fn floor_popularity_list() {
        let cli = parse(&["--idle", "--floors", "3", "--floor-popularity", "2.5,0,1"]).unwrap();
        let config = cli.config();
        assert_eq!(config.floors, 3);
        assert_eq!(config.popularity, [2.5, 0.0, 1.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn one_based_indexing() {
        let cli = parse(&["--idle", "--floor-indexing", "one"]).unwrap();
        assert_eq!(cli.config().floor_indexing, FloorIndexing::OneBased);
    }

    #[test]
    fn timeout_flag() {
        let cli = parse(&["./ctl", "--timeout-ms", "250"]).unwrap();
        assert_eq!(cli.config().response_timeout_ms, 250);
    }
}
