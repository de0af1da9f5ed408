//! Employment panel model
//!
//! This module contains the employment record type, the fixed baseline
//! table of job categories, and the keyed table that owns a generated
//! employment dataset. Worker counts are modelled per (year, job category)
//! pair; the pair is unique within a table.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::models::PanelTable;

/// One employment observation for a job category in a specific year
///
/// Field order is the CSV column order: `year, job_category, worker_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmploymentRecord {
    /// Observation year
    pub year: i32,
    /// Job category label
    pub job_category: String,
    /// Number of employed workers
    pub worker_count: u64,
}

impl EmploymentRecord {
    /// Create a new employment record
    #[must_use]
    pub fn new(year: i32, job_category: String, worker_count: u64) -> Self {
        Self {
            year,
            job_category,
            worker_count,
        }
    }
}

/// Ordered mapping from job category to its start-year worker count
///
/// Insertion order is semantic: generation iterates categories in this
/// order, and ranked metrics break ties by it.
#[derive(Debug, Clone)]
pub struct JobBaseline {
    entries: Vec<(String, u64)>,
}

impl Default for JobBaseline {
    /// The default table of five IT occupations
    fn default() -> Self {
        Self::new()
            .with_job("Software Developer", 145_000)
            .with_job("Data Analyst", 52_000)
            .with_job("Information Security Specialist", 18_000)
            .with_job("Network Administrator", 31_000)
            .with_job("Systems Engineer", 64_000)
    }
}

impl JobBaseline {
    /// Create an empty baseline table
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a job category with its baseline count, preserving insertion order
    ///
    /// Re-adding an existing category overwrites its count in place.
    #[must_use]
    pub fn with_job(mut self, category: &str, base_count: u64) -> Self {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some(entry) => entry.1 = base_count,
            None => self.entries.push((category.to_string(), base_count)),
        }
        self
    }

    /// Look up the baseline count for a category
    pub fn base_count(&self, category: &str) -> Result<u64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, base)| *base)
            .ok_or_else(|| PanelError::UnknownCategory(category.to_string()))
    }

    /// Iterate (category, base_count) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(c, base)| (c.as_str(), *base))
    }

    /// Category labels in insertion order
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.entries.iter().map(|(c, _)| c.clone()).collect()
    }

    /// Number of categories in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A generated employment dataset, keyed by (year, job category)
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentTable {
    /// Records in generation order
    records: Vec<EmploymentRecord>,
    /// Worker count indexed by (year, category)
    by_key: FxHashMap<(i32, String), u64>,
    /// Category labels in first-seen order
    categories: Vec<String>,
}

impl EmploymentTable {
    /// Build a table from records in their generation order
    #[must_use]
    pub fn from_records(records: Vec<EmploymentRecord>) -> Self {
        let mut by_key = FxHashMap::default();
        let mut categories: Vec<String> = Vec::new();

        for record in &records {
            by_key.insert(
                (record.year, record.job_category.clone()),
                record.worker_count,
            );
            if !categories.contains(&record.job_category) {
                categories.push(record.job_category.clone());
            }
        }

        Self {
            records,
            by_key,
            categories,
        }
    }

    /// Records in generation order
    #[must_use]
    pub fn records(&self) -> &[EmploymentRecord] {
        &self.records
    }

    /// Worker count for a (year, category) pair
    pub fn count_for(&self, year: i32, category: &str) -> Result<u64> {
        self.by_key
            .get(&(year, category.to_string()))
            .copied()
            .ok_or_else(|| PanelError::NotFound {
                year,
                key: category.to_string(),
            })
    }

    /// The (year, worker_count) series for one category, ascending by year
    pub fn series_for(&self, category: &str) -> Result<Vec<(i32, u64)>> {
        if !self.categories.iter().any(|c| c == category) {
            return Err(PanelError::UnknownCategory(category.to_string()));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.job_category == category)
            .map(|r| (r.year, r.worker_count))
            .sorted_by_key(|(year, _)| *year)
            .collect())
    }

    /// Number of records in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PanelTable for EmploymentTable {
    fn keys(&self) -> &[String] {
        &self.categories
    }

    fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .sorted()
            .dedup()
            .collect()
    }

    fn value(&self, year: i32, key: &str) -> Result<u64> {
        self.count_for(year, key)
    }
}
