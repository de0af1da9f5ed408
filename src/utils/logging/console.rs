//! Console output utilities
//!
//! This module provides utilities for formatted console output of generated
//! datasets.

use crate::models::{EmploymentTable, PopulationTable};
use crate::utils::format::format_count;

/// Print the first rows of an employment table and its shape
pub fn print_employment_preview(table: &EmploymentTable, num_rows: usize) {
    println!("First {num_rows} employment rows:");
    for record in table.records().iter().take(num_rows) {
        println!(
            "  {} | {} | {}",
            record.year,
            record.job_category,
            format_count(record.worker_count)
        );
    }
    println!("Shape: ({}, 3)", table.len());
}

/// Print the first rows of a population table and its shape
pub fn print_population_preview(table: &PopulationTable, num_rows: usize) {
    println!("First {num_rows} population rows:");
    for record in table.records().iter().take(num_rows) {
        println!(
            "  {} | {} | {}",
            record.year,
            record.age_band,
            format_count(record.population)
        );
    }
    println!("Shape: ({}, 3)", table.len());
}
