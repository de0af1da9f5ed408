//! Series transforms: index normalization and year-over-year change

use crate::error::{PanelError, Result};

/// Rescale a series so its first value is 100
///
/// Pure function of the input: `index[i] = value[i] / value[0] * 100`.
/// An empty input yields an empty output; a zero first value is a
/// `DivisionByZero` error.
pub fn index_series(values: &[f64]) -> Result<Vec<f64>> {
    let Some(&base) = values.first() else {
        return Ok(Vec::new());
    };

    if base == 0.0 {
        return Err(PanelError::DivisionByZero(
            "index series with zero base value".to_string(),
        ));
    }

    Ok(values.iter().map(|value| value / base * 100.0).collect())
}

/// Percentage change from the previous element, aligned to the input
///
/// The first element has no previous value and maps to `None`. A zero
/// previous value is a `DivisionByZero` error.
pub fn year_over_year(values: &[f64]) -> Result<Vec<Option<f64>>> {
    let mut changes = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        if i == 0 {
            changes.push(None);
            continue;
        }

        let previous = values[i - 1];
        if previous == 0.0 {
            return Err(PanelError::DivisionByZero(format!(
                "year-over-year change from zero at position {i}"
            )));
        }

        changes.push(Some((value - previous) / previous * 100.0));
    }

    Ok(changes)
}
