//! Cross-category record deduplication.
//!
//! Records are merged by canonical URL with first-occurrence-wins
//! semantics: the earliest category in enumeration order owns a shared
//! item. The merge is pure and idempotent, so running it over an
//! already-deduplicated list is a no-op.

use std::collections::HashSet;

use crate::extractor::schema::CaseRecord;

/// Deduplicate records by URL, keeping the first occurrence and the
/// original ordering of the survivors.
#[must_use]
pub fn dedup_records(records: Vec<CaseRecord>) -> Vec<CaseRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.url.clone()))
        .collect()
}
