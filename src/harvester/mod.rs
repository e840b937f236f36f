//! Harvest orchestration.
//!
//! Sequences the full run: hub snapshot, category discovery, strictly
//! sequential per-category expansion and extraction, then cross-category
//! dedup. Categories never run concurrently; the count-based completion
//! oracle is only unambiguous while one page at a time is mutating. Each
//! category's page is a scoped resource, closed on every exit path
//! before the next category begins. The accumulating record collection
//! is touched only between category runs.

pub mod dedup;
pub mod observer;
pub mod types;

pub use dedup::dedup_records;
pub use observer::{HarvestObserver, LogObserver, NoOpObserver};
pub use types::{CategoryStats, HarvestError, HarvestOutcome, HarvestResult};

use anyhow::{Context, Result};
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::browser_setup::{BrowserHandle, launch_browser};
use crate::config::HarvestConfig;
use crate::discovery::discover_categories;
use crate::extractor::extract_records;
use crate::extractor::schema::{CaseRecord, CategoryTarget};
use crate::pagination::{ExpansionReport, cdp::CdpListing, expand_fully};

/// Wrap an async page operation with an explicit timeout.
///
/// Prevents indefinite hangs on page operations; the error message
/// distinguishes a timeout from an operation failure.
async fn with_page_timeout<F, T>(operation: F, timeout_secs: u64, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!(
            "{operation_name} timeout after {timeout_secs} seconds"
        )),
    }
}

/// Run a full harvest: launch the browser, process every category, shut
/// the browser down on every exit path, and return the merged outcome.
pub async fn run<O: HarvestObserver>(
    config: &HarvestConfig,
    observer: &O,
) -> HarvestResult<HarvestOutcome> {
    let (browser, handler, user_data_dir) =
        launch_browser(config.headless(), config.chrome_data_dir().cloned())
            .await
            .map_err(|e| HarvestError::Browser(format!("{e:#}")))?;
    let mut handle = BrowserHandle::new(browser, handler, user_data_dir);
    observer.browser_launched();

    let result = run_with_browser(handle.browser(), config, observer).await;
    handle.shutdown().await;
    result
}

async fn run_with_browser<O: HarvestObserver>(
    browser: &Browser,
    config: &HarvestConfig,
    observer: &O,
) -> HarvestResult<HarvestOutcome> {
    // Hub navigation failure is unrecoverable; it propagates to the
    // process boundary, unlike per-category failures below.
    let hub_html = snapshot_page(browser, config.hub_url(), config)
        .await
        .map_err(|e| HarvestError::Navigation(format!("{e:#}")))?;

    let categories =
        discover_categories(&hub_html, config.hub_url()).map_err(HarvestError::from)?;
    if categories.is_empty() {
        return Err(HarvestError::NoCategories);
    }
    observer.categories_discovered(categories.len());

    let process_count = config.limit().unwrap_or(categories.len());
    let mut all_records = Vec::new();
    let mut category_stats = Vec::new();

    for (index, target) in categories.iter().take(process_count).enumerate() {
        if index > 0 {
            tokio::time::sleep(config.category_delay()).await;
        }
        observer.category_started(target);

        match harvest_category(browser, target, config).await {
            Ok((records, report)) => {
                observer.category_expanded(target, &report);
                observer.category_finished(target, records.len());
                category_stats.push(CategoryStats {
                    title: target.title.clone(),
                    url: target.url.clone(),
                    extracted: records.len(),
                    clicks: report.clicks,
                    completion: Some(report.completion),
                });
                all_records.extend(records);
            }
            Err(error) => {
                // Recovered locally: this category contributes zero
                // records and the run continues.
                observer.category_failed(target, &error);
                category_stats.push(CategoryStats {
                    title: target.title.clone(),
                    url: target.url.clone(),
                    extracted: 0,
                    clicks: 0,
                    completion: None,
                });
            }
        }
    }

    let raw_count = all_records.len();
    let records = dedup_records(all_records);
    observer.completed(raw_count, records.len());

    Ok(HarvestOutcome {
        categories,
        records,
        category_stats,
    })
}

/// Expand and extract one category page.
///
/// The page is closed before returning, whatever happened inside.
async fn harvest_category(
    browser: &Browser,
    target: &CategoryTarget,
    config: &HarvestConfig,
) -> Result<(Vec<CaseRecord>, ExpansionReport)> {
    let page = browser
        .new_page(target.url.as_str())
        .await
        .with_context(|| format!("failed to open category page {}", target.url))?;

    let outcome = expand_and_snapshot(&page, config).await;
    if let Err(e) = page.close().await {
        warn!("Failed to close page for {}: {e:#}", target.url);
    }
    let (html, report) = outcome?;

    let records = extract_records(&html, config.origin())
        .into_iter()
        .map(|record| record.tagged(target))
        .collect();
    Ok((records, report))
}

async fn expand_and_snapshot(
    page: &Page,
    config: &HarvestConfig,
) -> Result<(String, ExpansionReport)> {
    with_page_timeout(
        async {
            page.wait_for_navigation()
                .await
                .map(|_| ())
                .context("waiting for category page load")
        },
        config.navigation_timeout_secs(),
        "category navigation",
    )
    .await?;
    tokio::time::sleep(config.settle_delay()).await;

    let listing = CdpListing::new(page);
    let report = expand_fully(&listing, &config.pagination_tuning()).await?;

    let html = page
        .content()
        .await
        .context("failed to capture expanded page content")?;
    Ok((html, report))
}

/// Navigate to a URL in a fresh page and return its rendered HTML.
async fn snapshot_page(browser: &Browser, url: &str, config: &HarvestConfig) -> Result<String> {
    let page = browser
        .new_page(url)
        .await
        .with_context(|| format!("failed to open page {url}"))?;

    let outcome = async {
        with_page_timeout(
            async {
                page.wait_for_navigation()
                    .await
                    .map(|_| ())
                    .context("waiting for page load")
            },
            config.navigation_timeout_secs(),
            "navigation",
        )
        .await?;
        tokio::time::sleep(config.settle_delay()).await;
        page.content().await.context("failed to capture page content")
    }
    .await;

    if let Err(e) = page.close().await {
        warn!("Failed to close page for {url}: {e:#}");
    }
    outcome
}
