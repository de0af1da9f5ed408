//! Index normalization and year-over-year change on generated series

use panel_synth::{GeneratorConfig, generate_population, index_series, year_over_year};

#[test]
fn test_index_series_on_generated_band() {
    let config = GeneratorConfig::default();
    let table = generate_population(&config).unwrap();

    let values: Vec<f64> = table
        .series_for("20-24")
        .unwrap()
        .into_iter()
        .map(|(_, population)| population as f64)
        .collect();

    let index = index_series(&values).unwrap();
    assert_eq!(index.len(), values.len());
    assert_eq!(index[0], 100.0);

    // Scale invariance: a constant factor leaves the index unchanged
    let scaled: Vec<f64> = values.iter().map(|v| v * 1000.0).collect();
    let scaled_index = index_series(&scaled).unwrap();
    for (a, b) in index.iter().zip(&scaled_index) {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_year_over_year_on_generated_band() {
    let config = GeneratorConfig::default();
    let table = generate_population(&config).unwrap();

    let values: Vec<f64> = table
        .series_for("30-34")
        .unwrap()
        .into_iter()
        .map(|(_, population)| population as f64)
        .collect();

    let changes = year_over_year(&values).unwrap();
    assert_eq!(changes.len(), values.len());
    assert_eq!(changes[0], None);
    assert!(changes[1..].iter().all(Option::is_some));
}
