//! Shared configuration constants for caseharvest
//!
//! Default values and site-shape constants used throughout the codebase
//! to ensure consistency and avoid magic numbers.

/// Default hub page: the top-level case studies listing from which
/// category pages are discovered.
pub const DEFAULT_HUB_URL: &str =
    "https://mitsloan.mit.edu/teaching-resources-library/case-studies";

/// Path prefix shared by every item in the teaching resources library.
///
/// Candidate item links are identified by this prefix; anything outside
/// it (navigation, footer links) is never an item.
pub const LIBRARY_PATH_PREFIX: &str = "/teaching-resources-library/";

/// Path segment used to recognize library links during category discovery.
pub const LIBRARY_PATH_SEGMENT: &str = "teaching-resources-library";

/// The all-cases index page. It links into the library the same way an
/// item does, so candidate selection must exclude it explicitly or the
/// container page shows up as a record of itself.
pub const ALL_CASES_INDEX_PATH: &str =
    "/teaching-resources-library/mit-sloan-case-studies-0";

/// Keyword that category links carry somewhere in their href
/// (matched case-insensitively during discovery).
pub const CATEGORY_LINK_KEYWORD: &str = "case";

/// Visible label of the pagination control.
///
/// The control is located by its trimmed text content, compared
/// case-insensitively. CSS selectors cannot match on text, so the lookup
/// happens in injected JavaScript.
pub const LOAD_MORE_LABEL: &str = "Load More";

/// Politeness delay before each candidate-count probe: 1 second
///
/// Keeps the probe loop from hammering the remote host and gives layout
/// a moment to settle after DOM mutations.
pub const DEFAULT_PROBE_DELAY_MS: u64 = 1_000;

/// Settle delay after scrolling the control into view and after each
/// click: 500ms. Lets scroll animation and click handlers run before the
/// next interaction.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Upper bound on waiting for the item count to grow after a click: 5 seconds
///
/// A click that produces no growth within this window is treated as
/// end-of-pagination, not as an error. The backend almost always has no
/// more pages to serve at that point.
pub const DEFAULT_GROWTH_TIMEOUT_SECS: u64 = 5;

/// Poll interval while waiting for post-click growth: 200ms
pub const DEFAULT_GROWTH_POLL_MS: u64 = 200;

/// Delay between category pages: 1 second
///
/// Categories are processed strictly sequentially; this gap lowers the
/// chance of rate-limiting across the run.
pub const DEFAULT_CATEGORY_DELAY_MS: u64 = 1_000;

/// Timeout for `page.wait_for_navigation()` on hub and category pages: 30 seconds
///
/// Prevents hangs on slow DNS, unresponsive servers, or streaming content.
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

/// Default output directory for run artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "harvest_output";

/// Artifact: ordered category list as a JSON array.
pub const CATEGORY_LIST_FILE: &str = "case_study_subgroups.json";

/// Artifact: deduplicated record set as a JSON array.
pub const RECORD_SET_FILE: &str = "case_studies.json";

/// Artifact: distinct record URLs, sorted, newline-joined plain text.
pub const URL_INDEX_FILE: &str = "case_urls.txt";

/// Chrome user agent string for the launched browser
///
/// Chrome releases new stable versions ~every 4 weeks; update this
/// occasionally to stay within a reasonable version window.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
