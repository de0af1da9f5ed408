//! Logging utilities for output and progress reporting
//!
//! This module provides utilities for logging and console output.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{print_employment_preview, print_population_preview};
pub use log::{log_export_complete, log_export_start, log_warning};
