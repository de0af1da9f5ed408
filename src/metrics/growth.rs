//! Two-point growth rates

use crate::error::{PanelError, Result};
use crate::metrics::aggregate::total_by_year;
use crate::models::PanelTable;

/// Growth rate for one key between two named years
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthEntry {
    /// Category or age-band label
    pub key: String,
    /// Two-point growth rate, in percent
    pub rate: f64,
}

/// Two-point growth rate in percent
///
/// A zero start value is a `DivisionByZero` error; the calculator never
/// substitutes NaN or infinity for undefined arithmetic.
pub fn growth_rate(start_value: f64, end_value: f64) -> Result<f64> {
    if start_value == 0.0 {
        return Err(PanelError::DivisionByZero(
            "growth rate with zero start value".to_string(),
        ));
    }

    Ok((end_value - start_value) / start_value * 100.0)
}

/// Per-key two-point growth between `start_year` and `end_year`, ranked
/// descending by rate
///
/// Ties keep the keys' first-seen order (the sort is stable). A key missing
/// either endpoint year is a `NotFound` error.
pub fn category_growth<T: PanelTable>(
    table: &T,
    start_year: i32,
    end_year: i32,
) -> Result<Vec<GrowthEntry>> {
    let mut entries = Vec::with_capacity(table.keys().len());

    for key in table.keys() {
        let start_value = table.value(start_year, key)?;
        let end_value = table.value(end_year, key)?;
        let rate = growth_rate(start_value as f64, end_value as f64).map_err(|_| {
            PanelError::DivisionByZero(format!(
                "growth rate for '{key}' with zero value in {start_year}"
            ))
        })?;

        entries.push(GrowthEntry {
            key: key.clone(),
            rate,
        });
    }

    entries.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    Ok(entries)
}

/// Two-point growth of the per-year totals between `start_year` and `end_year`
pub fn total_growth<T: PanelTable>(table: &T, start_year: i32, end_year: i32) -> Result<f64> {
    let start_total = total_by_year(table, start_year)?;
    let end_total = total_by_year(table, end_year)?;
    growth_rate(start_total as f64, end_total as f64)
}
