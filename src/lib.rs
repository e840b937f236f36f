//! caseharvest: headless-browser harvester for load-more paginated case
//! study libraries.
//!
//! The pipeline is discovery → per-category pagination to full expansion
//! → record extraction → cross-category dedup. Extraction and discovery
//! are pure functions over HTML snapshots; only the pagination driver
//! and the orchestrator touch a live browser.

pub mod browser_setup;
pub mod config;
pub mod discovery;
pub mod extractor;
pub mod harvester;
pub mod pagination;
pub mod report;
pub mod utils;

pub use browser_setup::{BrowserHandle, launch_browser};
pub use config::HarvestConfig;
pub use discovery::discover_categories;
pub use extractor::extract_records;
pub use extractor::schema::{CaseRecord, CategoryTarget};
pub use harvester::{
    CategoryStats, HarvestError, HarvestObserver, HarvestOutcome, HarvestResult, LogObserver,
    NoOpObserver, dedup_records,
};
pub use pagination::{
    Completion, ControlState, ExpansionReport, LoadMoreListing, PaginationTuning, expand_fully,
    wait_for_growth,
};

/// Run a full harvest and write the run artifacts.
///
/// Convenience entry point for the common case; embedders wanting custom
/// progress reporting or their own artifact handling should use
/// [`harvester::run`] and [`report::write_artifacts`] directly.
pub async fn harvest(config: HarvestConfig) -> HarvestResult<HarvestOutcome> {
    let outcome = harvester::run(&config, &LogObserver).await?;
    report::write_artifacts(&outcome, config.storage_dir()).await?;
    Ok(outcome)
}
