//! Logging utilities
//!
//! This module provides standardized logging functions for export operations.

use std::path::Path;

/// Log an export start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being written
pub fn log_export_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an export completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was written
/// * `records` - Number of records written
/// * `elapsed` - Optional elapsed time
pub fn log_export_complete(
    operation: &str,
    path: &Path,
    records: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {} {} records to {} in {:?}",
            operation,
            records,
            path.display(),
            duration
        );
    } else {
        log::info!(
            "Successfully {} {} records to {}",
            operation,
            records,
            path.display()
        );
    }
}

/// Log a warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `path` - Optional path related to the warning
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}
