//! Configuration for panel data generation
//!
//! All knobs live in an explicit config struct passed into generator calls;
//! there is no process-wide state. The random seed is part of the config so
//! a run is reproducible from its configuration alone.

use std::fmt;

use crate::error::{PanelError, Result};
use crate::models::{AgeBand, JobBaseline};

/// Linear yearly growth applied to employment baselines
pub const EMPLOYMENT_TREND_RATE: f64 = 0.07;

/// Configuration for generating one synthetic panel
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// First year of the inclusive range
    pub start_year: i32,
    /// Last year of the inclusive range
    pub end_year: i32,
    /// Job categories with their start-year worker counts
    pub jobs: JobBaseline,
    /// Age band labels, e.g. `"20-24"`
    pub age_bands: Vec<String>,
    /// Seed for the per-run random source
    pub seed: u64,
    /// Multiplicative jitter bounds for employment records
    pub employment_jitter: (f64, f64),
    /// Multiplicative jitter bounds for population records
    pub population_jitter: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_year: 2015,
            end_year: 2024,
            jobs: JobBaseline::default(),
            age_bands: vec![
                "15-19".to_string(),
                "20-24".to_string(),
                "25-29".to_string(),
                "30-34".to_string(),
            ],
            seed: 42,
            employment_jitter: (0.95, 1.05),
            population_jitter: (0.98, 1.02),
        }
    }
}

impl GeneratorConfig {
    /// Number of years in the inclusive range
    #[must_use]
    pub fn year_count(&self) -> usize {
        if self.end_year < self.start_year {
            0
        } else {
            (self.end_year - self.start_year + 1) as usize
        }
    }

    /// The inclusive year range as an iterator
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    /// Validate the year range and age band labels
    ///
    /// Baseline counts are intentionally not validated; a misconfigured
    /// baseline produces a misconfigured dataset, not an error.
    pub fn validate(&self) -> Result<()> {
        if self.end_year < self.start_year {
            return Err(PanelError::InvalidRange {
                start: self.start_year,
                end: self.end_year,
            });
        }

        for label in &self.age_bands {
            AgeBand::parse(label)?;
        }

        Ok(())
    }

    /// Parse all configured age band labels
    pub fn parsed_bands(&self) -> Result<Vec<AgeBand>> {
        self.age_bands
            .iter()
            .map(|label| AgeBand::parse(label))
            .collect()
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generator Configuration:")?;
        writeln!(f, "  Years: {}..={}", self.start_year, self.end_year)?;
        writeln!(f, "  Job Categories: {}", self.jobs.len())?;
        writeln!(f, "  Age Bands: {}", self.age_bands.len())?;
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(
            f,
            "  Employment Jitter: [{}, {})",
            self.employment_jitter.0, self.employment_jitter.1
        )?;
        writeln!(
            f,
            "  Population Jitter: [{}, {})",
            self.population_jitter.0, self.population_jitter.1
        )?;
        Ok(())
    }
}
