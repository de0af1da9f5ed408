//! Derived metrics over generated panel tables
//!
//! All functions here are pure: outputs depend only on the input tables,
//! with no hidden state. Lookups of absent (year, key) pairs fail with
//! `NotFound`, and undefined arithmetic fails with `DivisionByZero` rather
//! than producing NaN or infinity.

pub mod aggregate;
pub mod growth;
pub mod series;
pub mod statistics;

// Re-export commonly used items
pub use aggregate::{CategoryMean, category_means, total_by_year};
pub use growth::{GrowthEntry, category_growth, growth_rate, total_growth};
pub use series::{index_series, year_over_year};
pub use statistics::{PanelStatistics, PanelStats};
