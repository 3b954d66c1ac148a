use anyhow::{Context, Result};
use log::{info, warn};
use rougescore::dataset::{
    check_dataset_file, create_data_directory, read_dataset, write_json, EvalConfig,
};
use rougescore::score::{expand_pairs, get_results_from_batch};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EvalConfig::from_args(std::env::args().skip(1));
    create_data_directory(&config).context("Failed to create data directory")?;
    check_dataset_file(&config)?;

    info!("Reading dataset...");
    let entries = read_dataset(config.dataset_path()).with_context(|| {
        format!("Failed to read dataset {}", config.dataset_path().display())
    })?;
    let expanded = expand_pairs(&entries);
    info!(
        "Loaded {} entries, {} candidate/reference pairs",
        entries.len(),
        expanded.pairs.len()
    );

    info!("Calculating ROUGE scores...");
    let outcome = get_results_from_batch(expanded.pairs).await;
    if outcome.failures > 0 || expanded.skipped_entries > 0 {
        warn!(
            "Skipped {} pairs and {} dataset entries",
            outcome.failures, expanded.skipped_entries
        );
    }

    info!("Saving ROUGE scores...");
    let scores_path = config.scores_path();
    write_json(&scores_path, &outcome.records, config.indent)
        .with_context(|| format!("Failed to write {}", scores_path.display()))?;
    info!("ROUGE scores saved to {}", scores_path.display());

    Ok(())
}
