//! caseharvest CLI.
//!
//! Usage: caseharvest [HUB_URL] [OUTPUT_DIR]
//!
//! Exit code 0 on any completed run, even when some categories yielded
//! zero records; non-zero only on an unrecoverable top-level failure
//! (browser launch, hub navigation, or zero categories discovered).

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use caseharvest::{HarvestConfig, harvest};
use caseharvest::utils::{DEFAULT_HUB_URL, DEFAULT_OUTPUT_DIR};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("caseharvest=info,chromiumoxide=warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let hub_url = args.get(1).map_or(DEFAULT_HUB_URL, String::as_str);
    let output_dir = args.get(2).map_or(DEFAULT_OUTPUT_DIR, String::as_str);

    let config = match HarvestConfig::builder()
        .storage_dir(output_dir)
        .hub_url(hub_url)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e:#}");
            std::process::exit(2);
        }
    };

    info!("Harvesting {hub_url} into {output_dir}");

    match harvest(config).await {
        Ok(outcome) => {
            for stats in &outcome.category_stats {
                info!(
                    "  {}: {} records ({} clicks)",
                    stats.title, stats.extracted, stats.clicks
                );
            }
            info!(
                "Done: {} categories, {} deduplicated records",
                outcome.categories.len(),
                outcome.records.len()
            );
        }
        Err(e) => {
            error!("Harvest failed: {e}");
            std::process::exit(1);
        }
    }
}
