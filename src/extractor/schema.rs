//! Serialized shapes for harvested data.

use serde::{Deserialize, Serialize};

/// A category listing page discovered from the hub.
///
/// Produced once by discovery and never mutated; identity is the
/// normalized absolute `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTarget {
    /// Visible link text on the hub page
    pub title: String,

    /// Absolute, origin-qualified URL of the category page
    pub url: String,
}

/// One case study extracted from an expanded category listing.
///
/// `url` is the deduplication key; every other field is best-effort and
/// may be empty. Records are never mutated after extraction, except for
/// the source-category tag the orchestrator fills in via [`CaseRecord::tagged`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Absolute canonical URL; the record identity key
    pub url: String,

    /// Trimmed text of the heading link
    pub title: String,

    /// Raw category label text, stored verbatim (not split)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    /// Author names in page order; empty when the listing shows none
    pub authors: Vec<String>,

    /// Longest prose paragraph in the item container
    pub description: String,

    /// Free-text publication date as matched on the page
    pub date: String,

    /// Title of the category page this record came from
    #[serde(default)]
    pub category_page: String,

    /// URL of the category page this record came from
    #[serde(default)]
    pub category_url: String,
}

impl CaseRecord {
    /// Tag this record with the category page it was extracted from.
    #[must_use]
    pub fn tagged(mut self, source: &CategoryTarget) -> Self {
        self.category_page = source.title.clone();
        self.category_url = source.url.clone();
        self
    }
}
