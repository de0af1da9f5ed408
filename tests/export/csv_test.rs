//! CSV and chart-series export of a generated dataset

use panel_synth::export::{ChartSeries, JsonSink, SeriesSink, write_employment_csv, write_population_csv};
use panel_synth::{GeneratorConfig, PanelGenerator};

#[test]
fn test_csv_headers_and_row_counts() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config).generate().unwrap();

    let mut employment_buffer = Vec::new();
    write_employment_csv(dataset.employment.records(), &mut employment_buffer).unwrap();
    let employment_text = String::from_utf8(employment_buffer).unwrap();
    assert!(employment_text.starts_with("year,job_category,worker_count\n"));
    assert_eq!(
        employment_text.lines().count(),
        dataset.employment.len() + 1
    );

    let mut population_buffer = Vec::new();
    write_population_csv(dataset.population.records(), &mut population_buffer).unwrap();
    let population_text = String::from_utf8(population_buffer).unwrap();
    assert!(population_text.starts_with("year,age_band,population\n"));
    assert_eq!(
        population_text.lines().count(),
        dataset.population.len() + 1
    );
}

#[test]
fn test_first_csv_row_matches_first_record() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config).generate().unwrap();
    let first = &dataset.employment.records()[0];

    let mut buffer = Vec::new();
    write_employment_csv(dataset.employment.records(), &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let expected = format!(
        "{},{},{}",
        first.year, first.job_category, first.worker_count
    );
    assert_eq!(text.lines().nth(1), Some(expected.as_str()));
}

#[test]
fn test_chart_payload_has_one_series_per_category() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    let series = ChartSeries::from_table(&dataset.employment).unwrap();
    assert_eq!(series.len(), config.jobs.len());
    assert!(series.iter().all(|s| s.points.len() == config.year_count()));

    let mut buffer = Vec::new();
    JsonSink::new(&mut buffer).write_series(&series).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), config.jobs.len());
}
