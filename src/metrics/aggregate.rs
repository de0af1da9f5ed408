//! Grouped aggregation over panel tables

use crate::error::{PanelError, Result};
use crate::models::PanelTable;

/// Mean value for one key across all years of a table
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMean {
    /// Category or age-band label
    pub key: String,
    /// Arithmetic mean across the table's years
    pub mean: f64,
}

/// Per-key arithmetic means, ranked descending
///
/// Ties keep the keys' first-seen order (the sort is stable).
pub fn category_means<T: PanelTable>(table: &T) -> Result<Vec<CategoryMean>> {
    let years = table.years();
    let mut means = Vec::with_capacity(table.keys().len());

    for key in table.keys() {
        let mut sum = 0u64;
        for &year in &years {
            sum += table.value(year, key)?;
        }
        means.push(CategoryMean {
            key: key.clone(),
            mean: sum as f64 / years.len() as f64,
        });
    }

    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    Ok(means)
}

/// Sum across all keys for one year
///
/// A year with no rows, or an empty table, is a `NotFound` error rather
/// than a zero total.
pub fn total_by_year<T: PanelTable>(table: &T, year: i32) -> Result<u64> {
    if table.keys().is_empty() {
        return Err(PanelError::NotFound {
            year,
            key: "*".to_string(),
        });
    }

    table.keys().iter().map(|key| table.value(year, key)).sum()
}
