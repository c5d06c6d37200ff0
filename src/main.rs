use anyhow::Context;
use ct_match::{Matcher, RunConfig, load_dataset};
use log::info;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ct-match.json".to_string());
    let config = RunConfig::from_file(Path::new(&config_path))
        .with_context(|| format!("loading run configuration from {config_path}"))?;

    if config.dataset_path.as_os_str().is_empty() {
        anyhow::bail!("run configuration sets no dataset_path");
    }

    let (control, treatment) = load_dataset(&config.dataset_path, &config.dataset)
        .with_context(|| format!("loading dataset from {}", config.dataset_path.display()))?;

    info!(
        "Dataset split: {} control samples, {} treatment samples",
        control.nrows(),
        treatment.nrows()
    );

    let matcher = Matcher::new(config.matching.clone());
    let result = matcher.match_samples(&control, &treatment)?;

    info!(
        "Selected {} control samples for {} treatment samples in {:.2?}",
        result.selected_indices.len(),
        result.treatment_count,
        result.matching_time
    );

    // Show the first few matched pairs
    for (i, pair) in result.pairs(&control, &treatment).take(5).enumerate() {
        info!(
            "treatment sample {i} {:?} matched control indices {:?}",
            pair.treatment,
            result.selected_per_treatment.row(i)
        );
    }

    Ok(())
}
