//! Progress reporting at key run lifecycle events.
//!
//! Keeps progress output out of the data path: the orchestrator is
//! generic over an observer, so the same run logic serves silent library
//! use and the chatty CLI.

use tracing::{info, warn};

use crate::extractor::schema::CategoryTarget;
use crate::pagination::ExpansionReport;

/// Observer for harvest lifecycle events
pub trait HarvestObserver: Send + Sync {
    /// The browser is up and the hub page is about to load
    fn browser_launched(&self);

    /// Discovery finished with this many category targets
    fn categories_discovered(&self, count: usize);

    /// Work on one category page is starting
    fn category_started(&self, target: &CategoryTarget);

    /// One category page reached full expansion
    fn category_expanded(&self, target: &CategoryTarget, report: &ExpansionReport);

    /// One category yielded this many raw records
    fn category_finished(&self, target: &CategoryTarget, extracted: usize);

    /// One category failed and contributes zero records
    fn category_failed(&self, target: &CategoryTarget, error: &anyhow::Error);

    /// The whole run finished
    fn completed(&self, raw_records: usize, deduplicated: usize);
}

/// Observer that does nothing; for embedding the harvester silently.
#[derive(Debug, Clone, Copy)]
pub struct NoOpObserver;

impl HarvestObserver for NoOpObserver {
    #[inline(always)]
    fn browser_launched(&self) {}

    #[inline(always)]
    fn categories_discovered(&self, _count: usize) {}

    #[inline(always)]
    fn category_started(&self, _target: &CategoryTarget) {}

    #[inline(always)]
    fn category_expanded(&self, _target: &CategoryTarget, _report: &ExpansionReport) {}

    #[inline(always)]
    fn category_finished(&self, _target: &CategoryTarget, _extracted: usize) {}

    #[inline(always)]
    fn category_failed(&self, _target: &CategoryTarget, _error: &anyhow::Error) {}

    #[inline(always)]
    fn completed(&self, _raw_records: usize, _deduplicated: usize) {}
}

/// Observer that narrates the run through `tracing`.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver;

impl HarvestObserver for LogObserver {
    fn browser_launched(&self) {
        info!("Browser launched");
    }

    fn categories_discovered(&self, count: usize) {
        info!("Discovered {count} category pages");
    }

    fn category_started(&self, target: &CategoryTarget) {
        info!("Harvesting category '{}' ({})", target.title, target.url);
    }

    fn category_expanded(&self, target: &CategoryTarget, report: &ExpansionReport) {
        info!(
            "Expanded '{}' with {} load-more clicks to {} items",
            target.title, report.clicks, report.final_count
        );
    }

    fn category_finished(&self, target: &CategoryTarget, extracted: usize) {
        info!("Extracted {extracted} records from '{}'", target.title);
    }

    fn category_failed(&self, target: &CategoryTarget, error: &anyhow::Error) {
        warn!(
            "Category '{}' ({}) failed and contributes no records: {error:#}",
            target.title, target.url
        );
    }

    fn completed(&self, raw_records: usize, deduplicated: usize) {
        info!("Harvest complete: {raw_records} raw records, {deduplicated} after dedup");
    }
}
