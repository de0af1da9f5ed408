use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;

use panel_synth::export::{self, ChartSeries, JsonSink, SeriesSink};
use panel_synth::utils::logging::{print_employment_preview, print_population_preview};
use panel_synth::{GeneratorConfig, PanelGenerator, PanelStatistics};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Output directory is the only argument
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let out_dir = Path::new(&out_dir);

    let config = GeneratorConfig::default();
    print!("{config}");

    let start = Instant::now();
    let dataset = PanelGenerator::new(config).generate()?;
    info!("Generation finished in {:?}", start.elapsed());

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    export::export_employment(
        &dataset.employment,
        &out_dir.join(export::processed_filename("employment")),
    )?;
    export::export_population(
        &dataset.population,
        &out_dir.join(export::processed_filename("population")),
    )?;

    // Chart payload for an external renderer
    let series = ChartSeries::from_table(&dataset.employment)?;
    let chart_path = out_dir.join("employment_series.json");
    let chart_file = fs::File::create(&chart_path)
        .with_context(|| format!("Failed to create {}", chart_path.display()))?;
    JsonSink::new(chart_file).write_series(&series)?;
    info!("Wrote {} chart series to {}", series.len(), chart_path.display());

    let stats = PanelStatistics::calculate_basic_stats(&dataset)?;
    println!("{}", PanelStatistics::generate_summary(&stats));

    print_employment_preview(&dataset.employment, 5);
    print_population_preview(&dataset.population, 5);

    Ok(())
}
