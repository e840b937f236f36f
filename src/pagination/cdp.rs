//! CDP-backed [`LoadMoreListing`] implementation.
//!
//! All observations and interactions run as injected JavaScript against
//! the live page. The candidate-count script mirrors the extractor's
//! selection predicate (heading link under the library prefix, all-cases
//! index excluded); the control lookup matches on trimmed text because
//! CSS selectors cannot express "element whose label is Load More".

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use tracing::debug;

use super::{ControlState, LoadMoreListing};
use crate::utils::{ALL_CASES_INDEX_PATH, LIBRARY_PATH_PREFIX, LOAD_MORE_LABEL};

/// Count candidate items: headings whose first link resolves under the
/// library prefix and is not the excluded index page.
const COUNT_SCRIPT: &str = r#"
    (() => {
        const prefix = "__PREFIX__";
        const excluded = "__EXCLUDED__";
        let count = 0;
        for (const heading of document.querySelectorAll('h2, h3')) {
            const link = heading.querySelector('a[href]');
            if (!link) continue;
            let path;
            try {
                path = new URL(link.getAttribute('href'), window.location.origin).pathname;
            } catch (e) {
                continue;
            }
            if (path.startsWith(prefix) && path !== excluded) {
                count += 1;
            }
        }
        return count;
    })()
"#;

/// Locate the load-more control and report its computed state.
const CONTROL_STATE_SCRIPT: &str = r#"
    (() => {
        const label = "__LABEL__".toLowerCase();
        const control = Array.from(document.querySelectorAll('a, button'))
            .find((el) => (el.textContent || '').trim().toLowerCase() === label);
        if (!control) return 'absent';
        const style = window.getComputedStyle(control);
        if (style.display === 'none'
            || style.visibility === 'hidden'
            || Number(style.opacity) === 0) {
            return 'hidden';
        }
        return 'visible';
    })()
"#;

/// Scroll the control into view; returns whether it was found.
const REVEAL_SCRIPT: &str = r#"
    (() => {
        const label = "__LABEL__".toLowerCase();
        const control = Array.from(document.querySelectorAll('a, button'))
            .find((el) => (el.textContent || '').trim().toLowerCase() === label);
        if (!control) return false;
        control.scrollIntoView({ block: 'center' });
        return true;
    })()
"#;

/// Click the control; returns whether it was found.
const CLICK_SCRIPT: &str = r#"
    (() => {
        const label = "__LABEL__".toLowerCase();
        const control = Array.from(document.querySelectorAll('a, button'))
            .find((el) => (el.textContent || '').trim().toLowerCase() === label);
        if (!control) return false;
        control.click();
        return true;
    })()
"#;

/// A live category page driven over CDP.
pub struct CdpListing<'a> {
    page: &'a Page,
}

impl<'a> CdpListing<'a> {
    #[must_use]
    pub fn new(page: &'a Page) -> Self {
        Self { page }
    }

    async fn eval<T: serde::de::DeserializeOwned>(&self, script: String, what: &str) -> Result<T> {
        self.page
            .evaluate(script)
            .await
            .with_context(|| format!("failed to evaluate {what} script"))?
            .into_value()
            .with_context(|| format!("unexpected {what} script result"))
    }
}

impl LoadMoreListing for CdpListing<'_> {
    async fn item_count(&self) -> Result<usize> {
        let script = COUNT_SCRIPT
            .replace("__PREFIX__", LIBRARY_PATH_PREFIX)
            .replace("__EXCLUDED__", ALL_CASES_INDEX_PATH);
        let count: u64 = self.eval(script, "candidate count").await?;
        Ok(count as usize)
    }

    async fn control_state(&self) -> Result<ControlState> {
        let script = CONTROL_STATE_SCRIPT.replace("__LABEL__", LOAD_MORE_LABEL);
        let state: String = self.eval(script, "control state").await?;
        match state.as_str() {
            "absent" => Ok(ControlState::Absent),
            "hidden" => Ok(ControlState::Hidden),
            _ => Ok(ControlState::Visible),
        }
    }

    async fn reveal_control(&self) -> Result<()> {
        let script = REVEAL_SCRIPT.replace("__LABEL__", LOAD_MORE_LABEL);
        let found: bool = self.eval(script, "scroll-into-view").await?;
        if !found {
            // The control can vanish between the state probe and this call
            // when the last batch lands mid-cycle; the growth wait will
            // then time out and complete the listing.
            debug!("load-more control vanished before scroll-into-view");
        }
        Ok(())
    }

    async fn click_control(&self) -> Result<()> {
        let script = CLICK_SCRIPT.replace("__LABEL__", LOAD_MORE_LABEL);
        let found: bool = self.eval(script, "click").await?;
        if !found {
            debug!("load-more control vanished before click");
        }
        Ok(())
    }
}
