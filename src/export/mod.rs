//! Flat-file export of generated datasets
//!
//! CSV is the only wire format. Column order follows record field order and
//! is stable: `year,job_category,worker_count` for employment and
//! `year,age_band,population` for population.

pub mod chart;

// Re-export commonly used items
pub use chart::{ChartPoint, ChartSeries, JsonSink, SeriesSink};

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::error::Result;
use crate::models::{EmploymentRecord, EmploymentTable, PopulationRecord, PopulationTable};
use crate::utils::logging::{log_export_complete, log_export_start};

/// Serialize employment records as CSV to any writer
pub fn write_employment_csv<W: Write>(records: &[EmploymentRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize population records as CSV to any writer
pub fn write_population_csv<W: Write>(records: &[PopulationRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write an employment table to a CSV file
pub fn export_employment(table: &EmploymentTable, path: &Path) -> Result<()> {
    log_export_start("Writing employment CSV to", path);
    let start = Instant::now();

    let file = File::create(path)?;
    write_employment_csv(table.records(), file)?;

    log_export_complete("wrote", path, table.len(), Some(start.elapsed()));
    Ok(())
}

/// Write a population table to a CSV file
pub fn export_population(table: &PopulationTable, path: &Path) -> Result<()> {
    log_export_start("Writing population CSV to", path);
    let start = Instant::now();

    let file = File::create(path)?;
    write_population_csv(table.records(), file)?;

    log_export_complete("wrote", path, table.len(), Some(start.elapsed()));
    Ok(())
}

/// File name for a processed dataset, e.g. `processed_employment.csv`
#[must_use]
pub fn processed_filename(name: &str) -> String {
    format!("processed_{name}.csv")
}
