//! Core types for harvest runs: the error taxonomy and the run outcome.

use anyhow::Result;
use std::fmt;

use crate::extractor::schema::{CaseRecord, CategoryTarget};
use crate::pagination::Completion;

/// Custom error type for harvest operations
#[derive(Debug, Clone)]
pub enum HarvestError {
    /// Configuration error
    Config(String),
    /// Browser launch or lifecycle error
    Browser(String),
    /// Hub navigation error
    Navigation(String),
    /// Discovery found no category pages; the run aborts with no output
    NoCategories,
    /// Other errors
    Other(String),
}

impl fmt::Display for HarvestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Browser(msg) => write!(f, "Browser error: {msg}"),
            Self::Navigation(msg) => write!(f, "Navigation error: {msg}"),
            Self::NoCategories => write!(f, "No categories found on the hub page"),
            Self::Other(msg) => write!(f, "Harvest error: {msg}"),
        }
    }
}

impl std::error::Error for HarvestError {}

impl From<anyhow::Error> for HarvestError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

/// Convenience alias for Result with `HarvestError`
pub type HarvestResult<T> = Result<T, HarvestError>;

/// Per-category diagnostics for one run.
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub title: String,
    pub url: String,
    /// Raw records extracted before cross-category dedup
    pub extracted: usize,
    /// Load-more clicks performed while expanding the page
    pub clicks: usize,
    /// How expansion ended; `None` when the category failed outright
    pub completion: Option<Completion>,
}

/// Final result of a harvest run.
#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    /// Categories in discovery order
    pub categories: Vec<CategoryTarget>,
    /// Deduplicated records, first occurrence winning on a shared URL
    pub records: Vec<CaseRecord>,
    /// Per-category extraction counts for diagnostics
    pub category_stats: Vec<CategoryStats>,
}

impl HarvestOutcome {
    /// The distinct record URLs, lexicographically sorted.
    ///
    /// First-wins dedup means record URLs are already distinct; this
    /// only imposes the output ordering.
    #[must_use]
    pub fn distinct_urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.records.iter().map(|r| r.url.clone()).collect();
        urls.sort();
        urls
    }
}
