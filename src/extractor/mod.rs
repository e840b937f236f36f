//! Record extraction from an expanded listing snapshot.
//!
//! Operates on a plain HTML snapshot of the fully-expanded page, so the
//! heuristics here run without a browser. Candidate items are heading
//! elements whose first link points into the resources library; each
//! candidate's enclosing container scopes the secondary-field extraction
//! so adjacent items never contaminate each other.

pub mod fields;
pub mod schema;

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::utils::{ALL_CASES_INDEX_PATH, LIBRARY_PATH_PREFIX, absolutize, href_path};
use fields::ParagraphFields;
use schema::CaseRecord;

static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2, h3").expect("heading selector is valid"));

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector is valid"));

/// Extract every candidate item record from a listing snapshot.
///
/// Origin-relative item links are normalized against `origin`. Records
/// come back untagged; the caller fills in the source category.
#[must_use]
pub fn extract_records(html: &str, origin: &str) -> Vec<CaseRecord> {
    let document = Html::parse_document(html);
    let mut records = Vec::new();

    for heading in document.select(&HEADING_SELECTOR) {
        let Some(link) = heading.select(&ANCHOR_SELECTOR).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(url) = candidate_url(href, origin) else {
            continue;
        };

        let title = squeeze_text(link);
        if title.is_empty() {
            continue;
        }

        let container = container_of(heading);

        let paragraphs = container
            .select(&PARAGRAPH_SELECTOR)
            .map(squeeze_text);
        let fields = ParagraphFields::collect(paragraphs);

        records.push(CaseRecord {
            url,
            title,
            categories: category_label(container, heading),
            authors: fields.authors,
            description: fields.description,
            date: fields.date,
            category_page: String::new(),
            category_url: String::new(),
        });
    }

    records
}

/// Normalize a candidate item href, or reject it.
///
/// Accepts hrefs whose path sits under the library prefix and is not the
/// all-cases index page; the dual filter keeps the container page itself
/// from being picked up as an item.
#[must_use]
pub fn candidate_url(href: &str, origin: &str) -> Option<String> {
    let path = href_path(href)?;
    if !path.starts_with(LIBRARY_PATH_PREFIX) || path == ALL_CASES_INDEX_PATH {
        return None;
    }
    Some(absolutize(href, origin))
}

/// Find the item's enclosing container: the nearest ancestor that holds
/// more than the heading itself. Climbing past bare wrapper elements
/// keeps the secondary fields in scope when the heading is nested one
/// level down inside the card; the walk stops at `body` so a heading
/// with no real container scopes only itself.
fn container_of(heading: ElementRef<'_>) -> ElementRef<'_> {
    let mut scope = heading;
    while let Some(parent) = scope.parent().and_then(ElementRef::wrap) {
        if matches!(parent.value().name(), "body" | "html") {
            break;
        }
        let scope_id = scope.id();
        let bare_wrapper = parent
            .children()
            .filter_map(ElementRef::wrap)
            .all(|child| child.id() == scope_id);
        scope = parent;
        if !bare_wrapper {
            break;
        }
    }
    scope
}

/// Find the category label for an item: the first `div` child of the
/// container whose subtree does not hold the candidate heading.
fn category_label(container: ElementRef<'_>, heading: ElementRef<'_>) -> Option<String> {
    let heading_id = heading.id();
    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "div")
        .find(|child| !child.descendants().any(|node| node.id() == heading_id))
        .map(squeeze_text)
        .filter(|label| !label.is_empty())
}

/// Concatenate an element's text nodes with whitespace collapsed.
fn squeeze_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
