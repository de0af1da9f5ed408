//! A Rust library for generating deterministic synthetic employment and
//! population panel data, with derived statistics, CSV export, and
//! chart-series emission.

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::GeneratorConfig;
pub use error::{PanelError, Result};
pub use generator::{PanelDataset, PanelGenerator, generate_employment, generate_population};
pub use models::{
    AgeBand, EmploymentRecord, EmploymentTable, JobBaseline, PanelTable, PopulationRecord,
    PopulationTable,
};

// Derived metrics
pub use metrics::{
    PanelStatistics, PanelStats, category_growth, category_means, growth_rate, index_series,
    total_by_year, total_growth, year_over_year,
};

// Export capabilities
pub use export::{
    ChartPoint, ChartSeries, JsonSink, SeriesSink, export_employment, export_population,
};
