//! Population dataset generation
//!
//! Each record projects an age-band baseline forward with the band's trend
//! rate and one multiplicative jitter draw. The baseline and trend depend
//! only on the band's numeric lower bound.

use rand::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::models::{PopulationRecord, PopulationTable};

/// Generate the population table, drawing jitter from `rng`
///
/// Draw order: years ascending (outer), bands in configured order (inner),
/// one uniform draw per record.
pub(crate) fn generate_with_rng(config: &GeneratorConfig, rng: &mut StdRng) -> Result<PopulationTable> {
    config.validate()?;

    let bands = config.parsed_bands()?;
    let (jitter_low, jitter_high) = config.population_jitter;
    let mut records = Vec::with_capacity(config.year_count() * bands.len());

    for year in config.years() {
        for band in &bands {
            let baseline = band.baseline();
            let change_factor =
                1.0 + f64::from(year - config.start_year) * baseline.trend_rate;
            let jitter = rng.random_range(jitter_low..jitter_high);
            // Long ranges can drive a shrinking band below zero; counts floor at 0
            let population = (baseline.base_population * change_factor * jitter)
                .max(0.0)
                .floor() as u64;

            records.push(PopulationRecord::new(year, band.label.clone(), population));
        }
    }

    Ok(PopulationTable::from_records(records))
}
