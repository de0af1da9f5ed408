//! Synthetic panel data generation
//!
//! This module produces the two panel datasets from closed-form trend
//! formulas plus bounded multiplicative jitter. Generation is deterministic:
//! the random source is a `StdRng` seeded from the configuration, and draw
//! order is fixed as row-major over the (year x key) cross product with the
//! year as the outer loop, employment before population. One uniform value
//! is drawn per record and nowhere else, so the same seed and configuration
//! reproduce the datasets exactly.

mod employment;
mod population;

use rand::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{EmploymentTable, PopulationTable};

/// The pair of datasets produced by one generator run
#[derive(Debug, Clone, PartialEq)]
pub struct PanelDataset {
    /// Employment counts by (year, job category)
    pub employment: EmploymentTable,
    /// Population counts by (year, age band)
    pub population: PopulationTable,
}

/// Generator for the synthetic employment/population panel
///
/// Each call to [`PanelGenerator::generate`] seeds a fresh random source
/// from the configuration, so independent invocations never share mutable
/// state and can run concurrently.
#[derive(Debug, Clone)]
pub struct PanelGenerator {
    config: GeneratorConfig,
}

impl PanelGenerator {
    /// Create a generator for the given configuration
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate both datasets from one seeded random source
    ///
    /// All employment draws precede all population draws, so the employment
    /// table equals the one produced by [`generate_employment`] with the
    /// same configuration.
    pub fn generate(&self) -> Result<PanelDataset> {
        self.config.validate()?;

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let employment = employment::generate_with_rng(&self.config, &mut rng)?;
        let population = population::generate_with_rng(&self.config, &mut rng)?;

        log::info!(
            "Generated {} employment and {} population records for {}..={}",
            employment.len(),
            population.len(),
            self.config.start_year,
            self.config.end_year
        );

        Ok(PanelDataset {
            employment,
            population,
        })
    }
}

/// Generate only the employment dataset, seeding a fresh random source
pub fn generate_employment(config: &GeneratorConfig) -> Result<EmploymentTable> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    employment::generate_with_rng(config, &mut rng)
}

/// Generate only the population dataset, seeding a fresh random source
pub fn generate_population(config: &GeneratorConfig) -> Result<PopulationTable> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    population::generate_with_rng(config, &mut rng)
}
