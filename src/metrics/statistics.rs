//! Dataset-level statistics and summary reporting

use itertools::Itertools;

use crate::error::Result;
use crate::generator::PanelDataset;
use crate::metrics::aggregate::{category_means, total_by_year};
use crate::metrics::growth::category_growth;
use crate::models::PanelTable;
use crate::utils::format::{format_count, format_decimal, format_rate};

/// Functions for panel statistics and summaries
pub struct PanelStatistics;

impl PanelStatistics {
    /// Calculate basic statistics for a generated dataset
    pub fn calculate_basic_stats(dataset: &PanelDataset) -> Result<PanelStats> {
        let employment_years = dataset.employment.years();
        let population_years = dataset.population.years();
        let years: Vec<i32> = employment_years
            .iter()
            .chain(population_years.iter())
            .copied()
            .sorted()
            .dedup()
            .collect();

        let latest_employment_total = employment_years
            .last()
            .map(|&year| total_by_year(&dataset.employment, year))
            .transpose()?;
        let latest_population_total = population_years
            .last()
            .map(|&year| total_by_year(&dataset.population, year))
            .transpose()?;

        let top_category = category_means(&dataset.employment)?
            .into_iter()
            .next()
            .map(|m| (m.key, m.mean));

        let (strongest_growth, weakest_growth) =
            match (employment_years.first(), employment_years.last()) {
                (Some(&start), Some(&end)) => {
                    let ranked = category_growth(&dataset.employment, start, end)?;
                    let strongest = ranked.first().map(|e| (e.key.clone(), e.rate));
                    let weakest = ranked.last().map(|e| (e.key.clone(), e.rate));
                    (strongest, weakest)
                }
                _ => (None, None),
            };

        Ok(PanelStats {
            employment_record_count: dataset.employment.len(),
            population_record_count: dataset.population.len(),
            start_year: years.first().copied(),
            end_year: years.last().copied(),
            latest_employment_total,
            latest_population_total,
            top_category,
            strongest_growth,
            weakest_growth,
        })
    }

    /// Generate a detailed dataset summary
    #[must_use]
    pub fn generate_summary(stats: &PanelStats) -> String {
        let mut summary = String::new();
        summary.push_str("Panel Dataset Summary:\n");

        if let (Some(start), Some(end)) = (stats.start_year, stats.end_year) {
            summary.push_str(&format!("  Years: {start}..={end}\n"));
        }
        summary.push_str(&format!(
            "  Employment Records: {}\n",
            stats.employment_record_count
        ));
        summary.push_str(&format!(
            "  Population Records: {}\n",
            stats.population_record_count
        ));

        if let Some(total) = stats.latest_employment_total {
            summary.push_str(&format!(
                "  Latest Employment Total: {}\n",
                format_count(total)
            ));
        }
        if let Some(total) = stats.latest_population_total {
            summary.push_str(&format!(
                "  Latest Population Total: {}\n",
                format_count(total)
            ));
        }

        if let Some((category, mean)) = &stats.top_category {
            summary.push_str(&format!(
                "  Top Category by Mean: {category} ({})\n",
                format_decimal(*mean)
            ));
        }
        if let Some((category, rate)) = &stats.strongest_growth {
            summary.push_str(&format!(
                "  Strongest Growth: {category} ({})\n",
                format_rate(*rate)
            ));
        }
        if let Some((category, rate)) = &stats.weakest_growth {
            summary.push_str(&format!(
                "  Weakest Growth: {category} ({})\n",
                format_rate(*rate)
            ));
        }

        summary
    }
}

/// Structure containing basic statistics for a generated panel dataset
#[derive(Debug, Clone)]
pub struct PanelStats {
    /// Number of employment records
    pub employment_record_count: usize,
    /// Number of population records
    pub population_record_count: usize,
    /// First year present in either dataset
    pub start_year: Option<i32>,
    /// Last year present in either dataset
    pub end_year: Option<i32>,
    /// Employment total for the latest year
    pub latest_employment_total: Option<u64>,
    /// Population total for the latest year
    pub latest_population_total: Option<u64>,
    /// Category with the highest mean worker count
    pub top_category: Option<(String, f64)>,
    /// Category with the highest two-point growth over the span
    pub strongest_growth: Option<(String, f64)>,
    /// Category with the lowest two-point growth over the span
    pub weakest_growth: Option<(String, f64)>,
}
