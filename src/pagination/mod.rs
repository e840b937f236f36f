//! Load-more pagination driver.
//!
//! Drives a dynamic listing page to full expansion without prior
//! knowledge of the total item count. The driver is generic over
//! [`LoadMoreListing`] so the control loop, completion oracle, and
//! growth wait are all testable against deterministic fakes; the
//! CDP-backed implementation lives in [`cdp`].

pub mod cdp;

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, warn};

use crate::utils::{
    DEFAULT_GROWTH_POLL_MS, DEFAULT_GROWTH_TIMEOUT_SECS, DEFAULT_PROBE_DELAY_MS,
    DEFAULT_SETTLE_DELAY_MS,
};

/// Observed state of the load-more control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Not present in the tree
    Absent,
    /// Present but computed-invisible (`display:none`, `visibility:hidden`,
    /// or zero opacity). An inert control means "no more pages", not an error.
    Hidden,
    /// Present and interactable
    Visible,
}

/// Why the driver declared the page fully expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The control left the tree
    ControlAbsent,
    /// The control went computed-invisible
    ControlHidden,
    /// A click produced no growth within the timeout; degraded completion
    GrowthTimeout,
}

/// Summary of one expansion run.
#[derive(Debug, Clone)]
pub struct ExpansionReport {
    /// Number of load-more clicks performed
    pub clicks: usize,
    /// Candidate item count at completion
    pub final_count: usize,
    pub completion: Completion,
}

/// Timing knobs for the expansion loop.
#[derive(Debug, Clone)]
pub struct PaginationTuning {
    /// Politeness pause before each count probe
    pub probe_delay: Duration,
    /// Pause after scroll-into-view and after each click
    pub settle_delay: Duration,
    /// Bound on the post-click growth wait
    pub growth_timeout: Duration,
    /// Poll interval inside the growth wait
    pub growth_poll: Duration,
}

impl Default for PaginationTuning {
    fn default() -> Self {
        Self {
            probe_delay: Duration::from_millis(DEFAULT_PROBE_DELAY_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            growth_timeout: Duration::from_secs(DEFAULT_GROWTH_TIMEOUT_SECS),
            growth_poll: Duration::from_millis(DEFAULT_GROWTH_POLL_MS),
        }
    }
}

/// A listing page with a load-more affordance.
///
/// `item_count` uses the same selection predicate as record extraction,
/// minus the field parsing; it is the completion oracle's only input
/// besides the control state.
#[allow(async_fn_in_trait)]
pub trait LoadMoreListing {
    /// Count candidate items currently in the tree.
    async fn item_count(&self) -> Result<usize>;

    /// Observe the load-more control.
    async fn control_state(&self) -> Result<ControlState>;

    /// Scroll the control into view. Clicking an off-screen control is
    /// unreliable, so this always precedes a click.
    async fn reveal_control(&self) -> Result<()>;

    /// Trigger the load-more action.
    async fn click_control(&self) -> Result<()>;
}

/// Expand a listing until the completion oracle fires.
///
/// Each cycle: politeness pause, count probe, control check. A visible
/// control is scrolled into view and clicked, then the driver blocks
/// until the count strictly exceeds the pre-click count or the timeout
/// lapses. Timeout is degraded completion, logged as a warning; the run
/// keeps whatever was loaded. A non-growing click is never retried.
pub async fn expand_fully<L: LoadMoreListing>(
    listing: &L,
    tuning: &PaginationTuning,
) -> Result<ExpansionReport> {
    let mut clicks = 0;

    loop {
        tokio::time::sleep(tuning.probe_delay).await;
        let count = listing.item_count().await?;

        match listing.control_state().await? {
            ControlState::Absent => {
                debug!(count, clicks, "load-more control absent; listing fully expanded");
                return Ok(ExpansionReport {
                    clicks,
                    final_count: count,
                    completion: Completion::ControlAbsent,
                });
            }
            ControlState::Hidden => {
                debug!(count, clicks, "load-more control hidden; listing fully expanded");
                return Ok(ExpansionReport {
                    clicks,
                    final_count: count,
                    completion: Completion::ControlHidden,
                });
            }
            ControlState::Visible => {
                listing.reveal_control().await?;
                tokio::time::sleep(tuning.settle_delay).await;
                listing.click_control().await?;
                clicks += 1;
                tokio::time::sleep(tuning.settle_delay).await;

                if !wait_for_growth(listing, count, tuning.growth_timeout, tuning.growth_poll)
                    .await?
                {
                    warn!(
                        count,
                        clicks,
                        timeout_ms = tuning.growth_timeout.as_millis() as u64,
                        "item count did not grow after click; treating pagination as complete"
                    );
                    let final_count = listing.item_count().await?;
                    return Ok(ExpansionReport {
                        clicks,
                        final_count,
                        completion: Completion::GrowthTimeout,
                    });
                }
            }
        }
    }
}

/// Block until the candidate count strictly exceeds `baseline`, bounded
/// by `timeout`. Returns `false` on timeout. This is the only suspension
/// point in the driver that depends on an external condition, and it is
/// always time-bounded.
pub async fn wait_for_growth<L: LoadMoreListing>(
    listing: &L,
    baseline: usize,
    timeout: Duration,
    poll: Duration,
) -> Result<bool> {
    let start = Instant::now();

    loop {
        let count = listing.item_count().await?;
        if count > baseline {
            debug!(
                baseline,
                count,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "item count grew"
            );
            return Ok(true);
        }
        if start.elapsed() >= timeout {
            return Ok(false);
        }
        tokio::time::sleep(poll).await;
    }
}
