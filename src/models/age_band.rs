//! Age band model
//!
//! Age bands are labelled five-year groups such as `"20-24"`. Only the
//! numeric lower bound is semantic: it selects the baseline population and
//! the yearly trend applied when projecting the band forward. Open-ended
//! labels like `"65+"` parse by their leading integer.

use crate::error::{PanelError, Result};

/// Baseline population for bands with a lower bound under 30
pub const YOUNG_BASE_POPULATION: f64 = 3_200_000.0;
/// Baseline population for bands with a lower bound of 30 or above
pub const OLDER_BASE_POPULATION: f64 = 3_800_000.0;
/// Yearly trend for bands with a lower bound under 30 (shrinking)
pub const YOUNG_TREND_RATE: f64 = -0.02;
/// Yearly trend for bands with a lower bound of 30 or above (growing)
pub const OLDER_TREND_RATE: f64 = 0.01;

/// Age threshold separating the two baseline regimes
const TREND_SPLIT_AGE: u32 = 30;

/// A parsed age band with its label and numeric lower bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBand {
    /// Original band label, e.g. `"20-24"`
    pub label: String,
    /// Numeric lower bound parsed from the label
    pub lower_bound: u32,
}

/// Baseline parameters derived from an age band's lower bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBandBaseline {
    /// Population in the start year before trend and jitter
    pub base_population: f64,
    /// Linear yearly trend applied from the start year
    pub trend_rate: f64,
}

impl AgeBand {
    /// Parse an age band label into its numeric lower bound
    ///
    /// The lower bound is the first run of ASCII digits in the label, so
    /// `"20-24"`, `"20~24"` and `"65+"` all parse. A label with no digits
    /// fails with `MalformedAgeBand`.
    pub fn parse(label: &str) -> Result<Self> {
        let digits: String = label
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();

        let lower_bound = digits
            .parse::<u32>()
            .map_err(|_| PanelError::MalformedAgeBand(label.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            lower_bound,
        })
    }

    /// Baseline population and trend rate for this band
    #[must_use]
    pub fn baseline(&self) -> AgeBandBaseline {
        if self.lower_bound < TREND_SPLIT_AGE {
            AgeBandBaseline {
                base_population: YOUNG_BASE_POPULATION,
                trend_rate: YOUNG_TREND_RATE,
            }
        } else {
            AgeBandBaseline {
                base_population: OLDER_BASE_POPULATION,
                trend_rate: OLDER_TREND_RATE,
            }
        }
    }
}
