//! Core configuration type for harvest runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::pagination::PaginationTuning;

/// Configuration for one harvest run.
///
/// Built via [`HarvestConfig::builder`]; `storage_dir` and `hub_url` are
/// required, everything else has conservative defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Directory the run artifacts are written into
    pub(crate) storage_dir: PathBuf,

    /// Hub page from which categories are discovered
    pub(crate) hub_url: String,

    /// Origin derived from `hub_url`, used to normalize relative hrefs
    pub(crate) origin: String,

    pub(crate) headless: bool,

    /// Cap on the number of categories processed; `None` = all
    pub(crate) limit: Option<usize>,

    pub(crate) probe_delay_ms: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) growth_timeout_secs: u64,
    pub(crate) growth_poll_ms: u64,
    pub(crate) category_delay_ms: u64,
    pub(crate) navigation_timeout_secs: u64,

    /// Optional fixed browser profile directory; `None` uses a per-process
    /// temp directory removed at shutdown
    pub(crate) chrome_data_dir: Option<PathBuf>,
}

impl HarvestConfig {
    #[must_use]
    pub fn builder() -> super::builder::HarvestConfigBuilder<()> {
        super::builder::HarvestConfigBuilder::default()
    }

    #[must_use]
    pub fn storage_dir(&self) -> &PathBuf {
        &self.storage_dir
    }

    #[must_use]
    pub fn hub_url(&self) -> &str {
        &self.hub_url
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub fn category_delay(&self) -> Duration {
        Duration::from_millis(self.category_delay_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    #[must_use]
    pub fn navigation_timeout_secs(&self) -> u64 {
        self.navigation_timeout_secs
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    /// Timing knobs for the pagination driver.
    #[must_use]
    pub fn pagination_tuning(&self) -> PaginationTuning {
        PaginationTuning {
            probe_delay: Duration::from_millis(self.probe_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            growth_timeout: Duration::from_secs(self.growth_timeout_secs),
            growth_poll: Duration::from_millis(self.growth_poll_ms),
        }
    }
}
