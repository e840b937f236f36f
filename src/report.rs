//! Run artifact writing.
//!
//! Three artifacts per completed run: the ordered category list, the
//! deduplicated record set (both pretty-printed JSON arrays), and the
//! sorted distinct-URL index as plain text. Nothing is written until
//! deduplication has finished; an aborted run leaves no output behind.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::harvester::HarvestOutcome;
use crate::utils::{CATEGORY_LIST_FILE, RECORD_SET_FILE, URL_INDEX_FILE};

/// Write all run artifacts into `dir`, creating it as needed.
pub async fn write_artifacts(outcome: &HarvestOutcome, dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let categories_path = dir.join(CATEGORY_LIST_FILE);
    let categories_json = serde_json::to_string_pretty(&outcome.categories)
        .context("failed to serialize category list")?;
    tokio::fs::write(&categories_path, categories_json)
        .await
        .with_context(|| format!("failed to write {}", categories_path.display()))?;

    let records_path = dir.join(RECORD_SET_FILE);
    let records_json = serde_json::to_string_pretty(&outcome.records)
        .context("failed to serialize record set")?;
    tokio::fs::write(&records_path, records_json)
        .await
        .with_context(|| format!("failed to write {}", records_path.display()))?;

    let urls_path = dir.join(URL_INDEX_FILE);
    let mut url_index = outcome.distinct_urls().join("\n");
    url_index.push('\n');
    tokio::fs::write(&urls_path, url_index)
        .await
        .with_context(|| format!("failed to write {}", urls_path.display()))?;

    info!(
        "Wrote {} categories and {} records to {}",
        outcome.categories.len(),
        outcome.records.len(),
        dir.display()
    );

    Ok(())
}
