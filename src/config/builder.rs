//! Type-safe builder for `HarvestConfig` using the typestate pattern
//!
//! The two required fields advance the builder through marker states so
//! `build()` only exists once both are set; optional knobs are available
//! in every state.

use anyhow::{Context, Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::HarvestConfig;
use crate::utils::{
    DEFAULT_CATEGORY_DELAY_MS, DEFAULT_GROWTH_POLL_MS, DEFAULT_GROWTH_TIMEOUT_SECS,
    DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_PROBE_DELAY_MS, DEFAULT_SETTLE_DELAY_MS,
};

// Type states for the builder
pub struct WithStorageDir;
pub struct WithHubUrl;

pub struct HarvestConfigBuilder<State = ()> {
    pub(crate) storage_dir: Option<PathBuf>,
    pub(crate) hub_url: Option<String>,
    pub(crate) headless: bool,
    pub(crate) limit: Option<usize>,
    pub(crate) probe_delay_ms: u64,
    pub(crate) settle_delay_ms: u64,
    pub(crate) growth_timeout_secs: u64,
    pub(crate) growth_poll_ms: u64,
    pub(crate) category_delay_ms: u64,
    pub(crate) navigation_timeout_secs: u64,
    pub(crate) chrome_data_dir: Option<PathBuf>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for HarvestConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storage_dir: None,
            hub_url: None,
            headless: true,
            limit: None,
            probe_delay_ms: DEFAULT_PROBE_DELAY_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            growth_timeout_secs: DEFAULT_GROWTH_TIMEOUT_SECS,
            growth_poll_ms: DEFAULT_GROWTH_POLL_MS,
            category_delay_ms: DEFAULT_CATEGORY_DELAY_MS,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            chrome_data_dir: None,
            _phantom: PhantomData,
        }
    }
}

impl<State> HarvestConfigBuilder<State> {
    fn transition<Next>(self) -> HarvestConfigBuilder<Next> {
        HarvestConfigBuilder {
            storage_dir: self.storage_dir,
            hub_url: self.hub_url,
            headless: self.headless,
            limit: self.limit,
            probe_delay_ms: self.probe_delay_ms,
            settle_delay_ms: self.settle_delay_ms,
            growth_timeout_secs: self.growth_timeout_secs,
            growth_poll_ms: self.growth_poll_ms,
            category_delay_ms: self.category_delay_ms,
            navigation_timeout_secs: self.navigation_timeout_secs,
            chrome_data_dir: self.chrome_data_dir,
            _phantom: PhantomData,
        }
    }

    /// Set browser headless mode. Headed mode is useful for watching the
    /// pagination loop during development; headless is the default.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Cap the number of categories processed in this run.
    #[must_use]
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn probe_delay_ms(mut self, ms: u64) -> Self {
        self.probe_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn growth_timeout_secs(mut self, secs: u64) -> Self {
        self.growth_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn growth_poll_ms(mut self, ms: u64) -> Self {
        self.growth_poll_ms = ms;
        self
    }

    #[must_use]
    pub fn category_delay_ms(mut self, ms: u64) -> Self {
        self.category_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn navigation_timeout_secs(mut self, secs: u64) -> Self {
        self.navigation_timeout_secs = secs;
        self
    }

    pub fn chrome_data_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.chrome_data_dir = dir.map(Into::into);
        self
    }
}

impl HarvestConfigBuilder<()> {
    #[must_use]
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> HarvestConfigBuilder<WithStorageDir> {
        self.storage_dir = Some(dir.into());
        self.transition()
    }
}

impl HarvestConfigBuilder<WithStorageDir> {
    #[must_use]
    pub fn hub_url(mut self, url: impl Into<String>) -> HarvestConfigBuilder<WithHubUrl> {
        self.hub_url = Some(url.into());
        self.transition()
    }
}

impl HarvestConfigBuilder<WithHubUrl> {
    /// Validate and assemble the configuration.
    ///
    /// The hub URL must be a well-formed http(s) URL; its origin becomes
    /// the prefix for normalizing origin-relative item links.
    pub fn build(self) -> Result<HarvestConfig> {
        let storage_dir = self
            .storage_dir
            .ok_or_else(|| anyhow!("storage_dir is required"))?;
        let hub_url = self.hub_url.ok_or_else(|| anyhow!("hub_url is required"))?;

        let parsed =
            Url::parse(&hub_url).with_context(|| format!("invalid hub URL: {hub_url}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(anyhow!("hub URL must be http(s): {hub_url}"));
        }
        let origin = parsed.origin().ascii_serialization();

        if self.growth_timeout_secs == 0 {
            return Err(anyhow!("growth_timeout_secs must be non-zero"));
        }

        Ok(HarvestConfig {
            storage_dir,
            hub_url,
            origin,
            headless: self.headless,
            limit: self.limit,
            probe_delay_ms: self.probe_delay_ms,
            settle_delay_ms: self.settle_delay_ms,
            growth_timeout_secs: self.growth_timeout_secs,
            growth_poll_ms: self.growth_poll_ms,
            category_delay_ms: self.category_delay_ms,
            navigation_timeout_secs: self.navigation_timeout_secs,
            chrome_data_dir: self.chrome_data_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_derives_origin_from_hub_url() {
        let config = HarvestConfig::builder()
            .storage_dir("./out")
            .hub_url("https://mitsloan.mit.edu/teaching-resources-library/case-studies")
            .build()
            .expect("build");

        assert_eq!(config.origin(), "https://mitsloan.mit.edu");
        assert!(config.headless());
        assert_eq!(config.limit(), None);
    }

    #[test]
    fn build_rejects_malformed_hub_url() {
        let result = HarvestConfig::builder()
            .storage_dir("./out")
            .hub_url("not a url")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_non_http_scheme() {
        let result = HarvestConfig::builder()
            .storage_dir("./out")
            .hub_url("ftp://example.com/listing")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_zero_growth_timeout() {
        let result = HarvestConfig::builder()
            .storage_dir("./out")
            .hub_url("https://example.com/cases")
            .growth_timeout_secs(0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn tuning_reflects_overrides() {
        let config = HarvestConfig::builder()
            .storage_dir("./out")
            .hub_url("https://example.com/cases")
            .probe_delay_ms(10)
            .settle_delay_ms(5)
            .growth_timeout_secs(2)
            .build()
            .expect("build");

        let tuning = config.pagination_tuning();
        assert_eq!(tuning.probe_delay.as_millis(), 10);
        assert_eq!(tuning.settle_delay.as_millis(), 5);
        assert_eq!(tuning.growth_timeout.as_secs(), 2);
    }
}
