//! Growth and aggregate metrics over a generated dataset

use panel_synth::{
    GeneratorConfig, PanelError, PanelGenerator, category_growth, category_means, total_by_year,
    total_growth,
};

#[test]
fn test_category_growth_is_ranked_and_complete() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    let ranked = category_growth(&dataset.employment, config.start_year, config.end_year).unwrap();
    assert_eq!(ranked.len(), config.jobs.len());
    assert!(ranked.windows(2).all(|pair| pair[0].rate >= pair[1].rate));

    // Every rate matches the two-point formula on the table's own values
    for entry in &ranked {
        let start = dataset
            .employment
            .count_for(config.start_year, &entry.key)
            .unwrap() as f64;
        let end = dataset
            .employment
            .count_for(config.end_year, &entry.key)
            .unwrap() as f64;
        assert!((entry.rate - (end - start) / start * 100.0).abs() < 1e-12);
    }
}

#[test]
fn test_missing_endpoint_year_is_not_found() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    let err = category_growth(&dataset.employment, config.start_year, 2030).unwrap_err();
    assert!(matches!(err, PanelError::NotFound { year: 2030, .. }));
}

#[test]
fn test_total_by_year_sums_all_categories() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    let expected: u64 = dataset
        .employment
        .records()
        .iter()
        .filter(|r| r.year == 2020)
        .map(|r| r.worker_count)
        .sum();
    assert_eq!(total_by_year(&dataset.employment, 2020).unwrap(), expected);
}

#[test]
fn test_total_growth_follows_the_trend() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    // Nine years of 7%/year linear growth dwarfs the 5% jitter band
    let rate = total_growth(&dataset.employment, config.start_year, config.end_year).unwrap();
    assert!(rate > 0.0);
}

#[test]
fn test_category_means_cover_all_categories() {
    let config = GeneratorConfig::default();
    let dataset = PanelGenerator::new(config.clone()).generate().unwrap();

    let means = category_means(&dataset.employment).unwrap();
    assert_eq!(means.len(), config.jobs.len());
    assert!(means.windows(2).all(|pair| pair[0].mean >= pair[1].mean));

    // The largest baseline stays on top across the default span
    assert_eq!(means[0].key, "Software Developer");
}
