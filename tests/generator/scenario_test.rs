//! The concrete single-category scenario, checked end to end

use panel_synth::{
    GeneratorConfig, JobBaseline, category_growth, generate_employment,
};

fn scenario_config() -> GeneratorConfig {
    GeneratorConfig {
        start_year: 2015,
        end_year: 2017,
        jobs: JobBaseline::new().with_job("A", 1000),
        seed: 42,
        ..GeneratorConfig::default()
    }
}

#[test]
fn test_single_category_three_year_run() {
    let table = generate_employment(&scenario_config()).unwrap();

    // Exactly one record per year for category "A"
    assert_eq!(table.len(), 3);
    let years: Vec<i32> = table.records().iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2015, 2016, 2017]);
    assert!(table.records().iter().all(|r| r.job_category == "A"));

    // Bounds: lowest possible 2015 draw to highest possible 2017 draw
    for record in table.records() {
        let count = record.worker_count as f64;
        assert!(count >= (1000.0_f64 * 0.95).floor());
        assert!(count <= (1000.0_f64 * 1.05 * (1.0 + 2.0 * 0.07)).floor());
    }
}

#[test]
fn test_growth_matches_manual_two_point_computation() {
    let table = generate_employment(&scenario_config()).unwrap();

    let start_value = table.count_for(2015, "A").unwrap() as f64;
    let end_value = table.count_for(2017, "A").unwrap() as f64;
    let expected = (end_value - start_value) / start_value * 100.0;

    let ranked = category_growth(&table, 2015, 2017).unwrap();
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].key, "A");
    assert!((ranked[0].rate - expected).abs() < 1e-12);
}

#[test]
fn test_growth_over_identical_endpoints_is_zero() {
    let table = generate_employment(&scenario_config()).unwrap();

    let ranked = category_growth(&table, 2016, 2016).unwrap();
    assert_eq!(ranked[0].rate, 0.0);
}
