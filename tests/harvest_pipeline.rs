//! End-to-end pipeline scenario without a browser: scripted load-more
//! listings drive the pagination driver, the real extractor runs over
//! synthetic listing HTML, and the merged result lands on disk.
//!
//! Scenario: the hub yields two categories. Category A takes three
//! load-more cycles (12, 18, then 22 items) before the control
//! disappears; category B is a single short page with 5 items and no
//! pagination. One item URL is shared between A and B.

use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use caseharvest::harvester::{CategoryStats, HarvestOutcome};
use caseharvest::report::write_artifacts;
use caseharvest::utils::URL_INDEX_FILE;
use caseharvest::{
    Completion, ControlState, LoadMoreListing, PaginationTuning, dedup_records,
    discover_categories, expand_fully, extract_records,
};

const ORIGIN: &str = "https://mitsloan.mit.edu";
const HUB: &str = "https://mitsloan.mit.edu/teaching-resources-library/case-studies";

/// Listing whose count advances through a fixed script on each click and
/// whose control leaves the tree once the script is exhausted.
struct ScriptedListing {
    counts: Vec<usize>,
    stage: Mutex<usize>,
    clicks: Mutex<usize>,
}

impl ScriptedListing {
    fn new(counts: Vec<usize>) -> Self {
        Self {
            counts,
            stage: Mutex::new(0),
            clicks: Mutex::new(0),
        }
    }

    fn clicks(&self) -> usize {
        *self.clicks.lock().expect("lock")
    }
}

impl LoadMoreListing for ScriptedListing {
    async fn item_count(&self) -> Result<usize> {
        Ok(self.counts[*self.stage.lock().expect("lock")])
    }

    async fn control_state(&self) -> Result<ControlState> {
        if *self.stage.lock().expect("lock") + 1 >= self.counts.len() {
            Ok(ControlState::Absent)
        } else {
            Ok(ControlState::Visible)
        }
    }

    async fn reveal_control(&self) -> Result<()> {
        Ok(())
    }

    async fn click_control(&self) -> Result<()> {
        *self.clicks.lock().expect("lock") += 1;
        let mut stage = self.stage.lock().expect("lock");
        if *stage + 1 < self.counts.len() {
            *stage += 1;
        }
        Ok(())
    }
}

fn fast_tuning() -> PaginationTuning {
    PaginationTuning {
        probe_delay: Duration::from_millis(1),
        settle_delay: Duration::from_millis(1),
        growth_timeout: Duration::from_millis(100),
        growth_poll: Duration::from_millis(5),
    }
}

/// Render a listing page holding the given item slugs.
fn listing_html(slugs: &[String]) -> String {
    let cards: String = slugs
        .iter()
        .map(|slug| {
            format!(
                r#"<article>
                     <div class="topics">Case Studies</div>
                     <h3><a href="/teaching-resources-library/{slug}">Case {slug}</a></h3>
                     <p>By Jane Doe</p>
                     <p>May 2, 2023</p>
                     <p>A short description of {slug}.</p>
                   </article>"#
            )
        })
        .collect();
    format!("<html><body>{cards}</body></html>")
}

#[tokio::test]
async fn two_category_run_expands_extracts_and_dedups() {
    // Hub: two category links.
    let hub_html = r#"
        <a href="/teaching-resources-library/operations-case-studies">Operations</a>
        <a href="/teaching-resources-library/strategy-case-studies">Strategy</a>
    "#;
    let categories = discover_categories(hub_html, HUB).expect("discovery");
    assert_eq!(categories.len(), 2);

    // Category A: 6 items initially, three clicks grow it 12 -> 18 -> 22.
    let listing_a = ScriptedListing::new(vec![6, 12, 18, 22]);
    let report_a = expand_fully(&listing_a, &fast_tuning()).await.expect("expand A");
    assert_eq!(report_a.clicks, 3);
    assert_eq!(listing_a.clicks(), 3);
    assert_eq!(report_a.final_count, 22);
    assert_eq!(report_a.completion, Completion::ControlAbsent);

    // Category B: one page of 5, no pagination at all.
    let listing_b = ScriptedListing::new(vec![5]);
    let report_b = expand_fully(&listing_b, &fast_tuning()).await.expect("expand B");
    assert_eq!(report_b.clicks, 0);
    assert_eq!(report_b.final_count, 5);

    // Snapshots of the expanded pages; one slug appears in both.
    let slugs_a: Vec<String> = (1..=21)
        .map(|i| format!("ops-case-{i:02}"))
        .chain(std::iter::once("shared-case".to_string()))
        .collect();
    let slugs_b: Vec<String> = (1..=4)
        .map(|i| format!("strategy-case-{i}"))
        .chain(std::iter::once("shared-case".to_string()))
        .collect();

    let records_a: Vec<_> = extract_records(&listing_html(&slugs_a), ORIGIN)
        .into_iter()
        .map(|r| r.tagged(&categories[0]))
        .collect();
    let records_b: Vec<_> = extract_records(&listing_html(&slugs_b), ORIGIN)
        .into_iter()
        .map(|r| r.tagged(&categories[1]))
        .collect();
    assert_eq!(records_a.len(), 22);
    assert_eq!(records_b.len(), 5);

    // Merge: 27 raw records deduplicate to 26; A owns the shared item.
    let mut all = records_a;
    all.extend(records_b);
    assert_eq!(all.len(), 27);

    let records = dedup_records(all);
    assert_eq!(records.len(), 26);
    let shared = records
        .iter()
        .find(|r| r.url.ends_with("/shared-case"))
        .expect("shared record survives");
    assert_eq!(shared.category_page, "Operations");

    // Artifacts: the URL index holds 26 sorted lines.
    let outcome = HarvestOutcome {
        categories: categories.clone(),
        records,
        category_stats: vec![
            CategoryStats {
                title: categories[0].title.clone(),
                url: categories[0].url.clone(),
                extracted: 22,
                clicks: report_a.clicks,
                completion: Some(report_a.completion),
            },
            CategoryStats {
                title: categories[1].title.clone(),
                url: categories[1].url.clone(),
                extracted: 5,
                clicks: report_b.clicks,
                completion: Some(report_b.completion),
            },
        ],
    };

    let dir = tempfile::tempdir().expect("tempdir");
    write_artifacts(&outcome, dir.path()).await.expect("write");

    let raw = std::fs::read_to_string(dir.path().join(URL_INDEX_FILE)).expect("read");
    let lines: Vec<&str> = raw.trim_end().lines().collect();
    assert_eq!(lines.len(), 26);
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}
