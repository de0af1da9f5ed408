//! Error handling for the panel generator and metrics calculator.

/// Specialized error type for panel generation and derived metrics
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Year range is empty or inverted
    #[error("Invalid year range: {start}..={end}")]
    InvalidRange {
        /// First year of the requested range
        start: i32,
        /// Last year of the requested range
        end: i32,
    },

    /// Lookup key absent from a baseline mapping
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No record generated for a (year, key) pair
    #[error("No record for year {year} and key '{key}'")]
    NotFound {
        /// Year of the failed lookup
        year: i32,
        /// Category or age-band label of the failed lookup
        key: String,
    },

    /// Growth or index computation with a zero base value
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Age-band label without a parseable numeric lower bound
    #[error("Malformed age band: '{0}'")]
    MalformedAgeBand(String),

    /// Error writing an export file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing CSV output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing chart-series output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
