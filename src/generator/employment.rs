//! Employment dataset generation
//!
//! Each record projects a category baseline forward with a linear yearly
//! trend and one multiplicative jitter draw.

use rand::prelude::*;

use crate::config::{EMPLOYMENT_TREND_RATE, GeneratorConfig};
use crate::error::Result;
use crate::models::{EmploymentRecord, EmploymentTable};

/// Generate the employment table, drawing jitter from `rng`
///
/// Draw order: years ascending (outer), categories in baseline insertion
/// order (inner), one uniform draw per record.
pub(crate) fn generate_with_rng(config: &GeneratorConfig, rng: &mut StdRng) -> Result<EmploymentTable> {
    config.validate()?;

    let (jitter_low, jitter_high) = config.employment_jitter;
    let mut records = Vec::with_capacity(config.year_count() * config.jobs.len());

    for year in config.years() {
        let growth_factor = 1.0 + f64::from(year - config.start_year) * EMPLOYMENT_TREND_RATE;

        for (category, base_count) in config.jobs.iter() {
            let jitter = rng.random_range(jitter_low..jitter_high);
            let worker_count = (base_count as f64 * growth_factor * jitter).max(0.0).floor() as u64;

            records.push(EmploymentRecord::new(year, category.to_string(), worker_count));
        }
    }

    Ok(EmploymentTable::from_records(records))
}
