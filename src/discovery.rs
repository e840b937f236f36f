//! Category discovery from the hub page.
//!
//! The hub links to one listing page per category. Discovery runs once
//! per harvest, against a plain HTML snapshot, and yields the ordered,
//! deduplicated set of category targets to paginate.

use std::collections::HashSet;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::extractor::schema::CategoryTarget;
use crate::utils::{CATEGORY_LINK_KEYWORD, LIBRARY_PATH_SEGMENT, is_http_url};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Collect the distinct category targets reachable from a hub snapshot.
///
/// A link qualifies when its href contains the library path segment and
/// the category keyword (case-insensitive) and carries non-empty visible
/// text. Hrefs are resolved against the hub URL; the hub itself, and any
/// URL ending in the hub's own path, are excluded so the run can never
/// recurse into its own entry point. First-appearance order is kept.
pub fn discover_categories(html: &str, hub_url: &str) -> Result<Vec<CategoryTarget>> {
    let hub = Url::parse(hub_url).with_context(|| format!("invalid hub URL: {hub_url}"))?;
    let hub_path = hub.path();

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for link in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.contains(LIBRARY_PATH_SEGMENT)
            || !href.to_lowercase().contains(CATEGORY_LINK_KEYWORD)
        {
            continue;
        }

        let Ok(resolved) = hub.join(href) else {
            continue;
        };
        let url = resolved.to_string();
        if !is_http_url(&url) {
            continue;
        }
        if url == hub.as_str() || url.ends_with(hub_path) {
            continue;
        }

        let title = link
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ");
        if title.is_empty() {
            continue;
        }

        if seen.insert(url.clone()) {
            targets.push(CategoryTarget { title, url });
        }
    }

    Ok(targets)
}
