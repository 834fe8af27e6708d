//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `carriage_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarriageSnapshotRow, OutputResult, TickSummaryRow};

pub const TICK_SUMMARIES: &str = "tick_summaries.csv";
pub const CARRIAGE_SNAPSHOTS: &str = "carriage_snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join(TICK_SUMMARIES))?;
        summaries.write_record([
            "tick",
            "directives",
            "spawned",
            "boarded",
            "delivered",
            "journey_ticks",
            "waiting",
            "riding",
            "unhappiness_added",
            "unhappiness",
        ])?;

        let mut snapshots = Writer::from_path(dir.join(CARRIAGE_SNAPSHOTS))?;
        snapshots.write_record(["tick", "carriage", "floor", "state", "riders", "full"])?;

        Ok(Self {
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarriageSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.carriage.to_string(),
                row.floor.to_string(),
                row.state.to_owned(),
                row.riders.to_string(),
                u8::from(row.full).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.directives.to_string(),
            row.spawned.to_string(),
            row.boarded.to_string(),
            row.delivered.to_string(),
            row.journey_ticks.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
            row.unhappiness_added.to_string(),
            row.unhappiness.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
