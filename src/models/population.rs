//! Population panel model
//!
//! Population counts are modelled per (year, age band) pair, mirroring the
//! employment side of the panel. The pair is unique within a table.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{PanelError, Result};
use crate::models::PanelTable;

/// One population observation for an age band in a specific year
///
/// Field order is the CSV column order: `year, age_band, population`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRecord {
    /// Observation year
    pub year: i32,
    /// Age band label, e.g. `"20-24"`
    pub age_band: String,
    /// Population count
    pub population: u64,
}

impl PopulationRecord {
    /// Create a new population record
    #[must_use]
    pub fn new(year: i32, age_band: String, population: u64) -> Self {
        Self {
            year,
            age_band,
            population,
        }
    }
}

/// A generated population dataset, keyed by (year, age band)
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationTable {
    /// Records in generation order
    records: Vec<PopulationRecord>,
    /// Population indexed by (year, band)
    by_key: FxHashMap<(i32, String), u64>,
    /// Band labels in first-seen order
    bands: Vec<String>,
}

impl PopulationTable {
    /// Build a table from records in their generation order
    #[must_use]
    pub fn from_records(records: Vec<PopulationRecord>) -> Self {
        let mut by_key = FxHashMap::default();
        let mut bands: Vec<String> = Vec::new();

        for record in &records {
            by_key.insert((record.year, record.age_band.clone()), record.population);
            if !bands.contains(&record.age_band) {
                bands.push(record.age_band.clone());
            }
        }

        Self {
            records,
            by_key,
            bands,
        }
    }

    /// Records in generation order
    #[must_use]
    pub fn records(&self) -> &[PopulationRecord] {
        &self.records
    }

    /// Population for a (year, band) pair
    pub fn population_for(&self, year: i32, band: &str) -> Result<u64> {
        self.by_key
            .get(&(year, band.to_string()))
            .copied()
            .ok_or_else(|| PanelError::NotFound {
                year,
                key: band.to_string(),
            })
    }

    /// The (year, population) series for one band, ascending by year
    pub fn series_for(&self, band: &str) -> Result<Vec<(i32, u64)>> {
        if !self.bands.iter().any(|b| b == band) {
            return Err(PanelError::UnknownCategory(band.to_string()));
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.age_band == band)
            .map(|r| (r.year, r.population))
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

impl PanelTable for PopulationTable {
    fn keys(&self) -> &[String] {
        &self.bands
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
        self.population_for(year, key)
    }
}
