//! Artifact writing: file names, formats, and ordering.

use caseharvest::harvester::{CategoryStats, HarvestOutcome};
use caseharvest::report::write_artifacts;
use caseharvest::utils::{CATEGORY_LIST_FILE, RECORD_SET_FILE, URL_INDEX_FILE};
use caseharvest::{CaseRecord, CategoryTarget};

fn sample_outcome() -> HarvestOutcome {
    let target = CategoryTarget {
        title: "Operations".to_string(),
        url: "https://mitsloan.mit.edu/teaching-resources-library/ops-case-studies".to_string(),
    };
    let record = |slug: &str| {
        CaseRecord {
            url: format!("https://mitsloan.mit.edu/teaching-resources-library/{slug}"),
            title: slug.to_string(),
            categories: Some("Operations Management".to_string()),
            authors: vec!["Jane Doe".to_string()],
            description: "A blurb.".to_string(),
            date: "May 2, 2023".to_string(),
            category_page: String::new(),
            category_url: String::new(),
        }
        .tagged(&target)
    };

    HarvestOutcome {
        categories: vec![target.clone()],
        // Deliberately unsorted so the URL index has to sort
        records: vec![record("zeta"), record("alpha"), record("mid")],
        category_stats: vec![CategoryStats {
            title: target.title,
            url: target.url,
            extracted: 3,
            clicks: 2,
            completion: None,
        }],
    }
}

#[tokio::test]
async fn writes_all_three_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = sample_outcome();

    write_artifacts(&outcome, dir.path()).await.expect("write");

    assert!(dir.path().join(CATEGORY_LIST_FILE).exists());
    assert!(dir.path().join(RECORD_SET_FILE).exists());
    assert!(dir.path().join(URL_INDEX_FILE).exists());
}

#[tokio::test]
async fn category_list_is_a_json_array_of_title_and_url() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_artifacts(&sample_outcome(), dir.path())
        .await
        .expect("write");

    let raw = std::fs::read_to_string(dir.path().join(CATEGORY_LIST_FILE)).expect("read");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("parse");
    let list = parsed.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "Operations");
    assert_eq!(
        list[0]["url"],
        "https://mitsloan.mit.edu/teaching-resources-library/ops-case-studies"
    );
}

#[tokio::test]
async fn record_set_round_trips_with_category_tags() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_artifacts(&sample_outcome(), dir.path())
        .await
        .expect("write");

    let raw = std::fs::read_to_string(dir.path().join(RECORD_SET_FILE)).expect("read");
    let records: Vec<CaseRecord> = serde_json::from_str(&raw).expect("parse");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].category_page, "Operations");
    assert_eq!(
        records[0].category_url,
        "https://mitsloan.mit.edu/teaching-resources-library/ops-case-studies"
    );
    // Record order is the dedup order, not sorted
    assert_eq!(records[0].title, "zeta");
}

#[tokio::test]
async fn url_index_is_sorted_newline_joined_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_artifacts(&sample_outcome(), dir.path())
        .await
        .expect("write");

    let raw = std::fs::read_to_string(dir.path().join(URL_INDEX_FILE)).expect("read");
    assert!(raw.ends_with('\n'));
    let lines: Vec<&str> = raw.trim_end().lines().collect();
    assert_eq!(lines.len(), 3);
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted, "URL index must be lexicographically sorted");
    assert!(lines[0].ends_with("/alpha"));
}

#[tokio::test]
async fn rewriting_into_the_same_directory_overwrites_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outcome = sample_outcome();
    write_artifacts(&outcome, dir.path()).await.expect("first");
    write_artifacts(&outcome, dir.path()).await.expect("second");

    let raw = std::fs::read_to_string(dir.path().join(URL_INDEX_FILE)).expect("read");
    assert_eq!(raw.trim_end().lines().count(), 3);
}
