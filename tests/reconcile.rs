// tests/reconcile.rs
//
// Pagination and diffing, driven by canned pages instead of the network.
//
use std::collections::BTreeSet;

use cv_imprints::catalog::{CellAnchorExtractor, PageSource};
use cv_imprints::config::options::ReconcileOptions;
use cv_imprints::core::net::FetchError;
use cv_imprints::imprints::PublisherTables;
use cv_imprints::progress::{NullProgress, Progress};
use cv_imprints::reconcile::{self, FindingKind, Report};

/// Canned pages, 1-based. `None` = transport failure. Past the end = empty page.
struct Scripted {
    pages: Vec<Option<String>>,
    calls: Vec<u32>,
}

impl Scripted {
    fn new(pages: Vec<Option<String>>) -> Self {
        Self { pages, calls: Vec::new() }
    }
}

impl PageSource for Scripted {
    fn fetch_page(&mut self, page: u32) -> Result<String, FetchError> {
        self.calls.push(page);
        match self.pages.get(page as usize - 1) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(FetchError::Transport { page, message: "connection reset".into() }),
            None => Ok(String::new()),
        }
    }
}

#[derive(Default)]
struct Recorder {
    done: Vec<(u32, usize, usize)>,
    failed: Vec<u32>,
    finished: Option<usize>,
}

impl Progress for Recorder {
    fn page_done(&mut self, page: u32, found: usize, total: usize) {
        self.done.push((page, found, total));
    }
    fn page_failed(&mut self, page: u32, _err: &FetchError) {
        self.failed.push(page);
    }
    fn finish(&mut self, total: usize) {
        self.finished = Some(total);
    }
}

fn listing(names: &[&str]) -> Option<String> {
    let mut html = String::from("<table>\n");
    for name in names {
        html.push_str(&format!("<tr><td class=\"name\"><a href=\"/p/\">{name}</a></td><td>1</td></tr>\n"));
    }
    html.push_str("</table>");
    Some(html)
}

fn opts() -> ReconcileOptions {
    ReconcileOptions { pause_ms: 0, ..ReconcileOptions::default() }
}

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn repeated_page_stops_after_one_extra_fetch() {
    let mut src = Scripted::new(vec![listing(&["A", "B"]), listing(&["A", "B"])]);
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts(), None);

    assert_eq!(got.names, set(&["A", "B"]));
    assert_eq!(src.calls, vec![1, 2]);
    assert_eq!(got.pages_requested, 2);
    assert_eq!(got.failed_page, None);
    assert!(!got.capped);
}

#[test]
fn keeps_going_while_pages_add_names() {
    let mut src = Scripted::new(vec![
        listing(&["A", "B"]),
        listing(&["B", "C"]), // partly repeated, still new
        listing(&["D"]),
        listing(&["C", "D"]), // wrapped around
    ]);
    let mut rec = Recorder::default();
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts(), Some(&mut rec));

    assert_eq!(got.names, set(&["A", "B", "C", "D"]));
    assert_eq!(src.calls, vec![1, 2, 3, 4]);
    assert_eq!(rec.done, vec![(1, 2, 2), (2, 2, 3), (3, 1, 4)]);
    assert_eq!(rec.finished, Some(4));
}

#[test]
fn empty_page_ends_the_walk() {
    let mut src = Scripted::new(vec![listing(&["A"])]);
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts(), None);
    assert_eq!(got.names, set(&["A"]));
    assert_eq!(src.calls, vec![1, 2]);
}

#[test]
fn fetch_failure_stops_and_is_recorded() {
    let mut src = Scripted::new(vec![listing(&["A"]), None, listing(&["B"])]);
    let mut rec = Recorder::default();
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts(), Some(&mut rec));

    // page 3 is never asked for
    assert_eq!(src.calls, vec![1, 2]);
    assert_eq!(got.names, set(&["A"]));
    assert_eq!(got.failed_page, Some(2));
    assert_eq!(rec.failed, vec![2]);
}

#[test]
fn failure_on_first_page_yields_nothing() {
    let mut src = Scripted::new(vec![None]);
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts(), None);
    assert!(got.names.is_empty());
    assert_eq!(got.failed_page, Some(1));
    assert_eq!(src.calls, vec![1]);
}

#[test]
fn page_cap_stops_early() {
    let mut src = Scripted::new(vec![listing(&["A"]), listing(&["B"]), listing(&["C"])]);
    let o = ReconcileOptions { max_pages: Some(2), ..opts() };
    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &o, None);

    assert_eq!(src.calls, vec![1, 2]);
    assert_eq!(got.names, set(&["A", "B"]));
    assert!(got.capped);
}

#[test]
fn imprint_missing_from_catalog_is_flagged() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y"]);
    let report = reconcile::diff(&tables, &set(&["Y"]));

    assert_eq!(report.missing_imprints, vec!["X".to_string()]);
    assert!(report.missing_publishers.is_empty());
    assert!(report.untriaged.is_empty());
    assert_eq!(report.lines(), vec!["Not in ComicVine: X".to_string()]);
}

#[test]
fn publisher_missing_from_catalog_is_flagged() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y", "W"]);
    let report = reconcile::diff(&tables, &set(&["X", "Y"]));
    assert_eq!(report.missing_publishers, vec!["W".to_string()]);
    assert_eq!(report.lines(), vec!["Not in ComicVine: W".to_string()]);
}

#[test]
fn unknown_catalog_name_needs_triage() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y"]);
    let report = reconcile::diff(&tables, &set(&["X", "Y", "Z", "Aardvark"]));

    assert_eq!(report.untriaged, vec!["Aardvark".to_string(), "Z".to_string()]);
    assert_eq!(
        report.lines(),
        vec!["Not in module: Aardvark".to_string(), "Not in module: Z".to_string()]
    );
    let kinds: Vec<FindingKind> = report.findings().iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec![FindingKind::Untriaged, FindingKind::Untriaged]);
}

#[test]
fn in_sync_tables_report_nothing() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y"]);
    let report = reconcile::diff(&tables, &set(&["X", "Y"]));
    assert!(report.is_clear());
    assert_eq!(report, Report::default());
    assert_eq!(report.lines(), vec!["Nothing to update!".to_string()]);
}

#[test]
fn findings_come_in_report_order() {
    let tables = PublisherTables::new(&[("Gone Imprint", "Root")], &["Root", "Gone Root"]);
    let report = reconcile::diff(&tables, &set(&["Root", "Fresh"]));
    assert_eq!(
        report.lines(),
        vec![
            "Not in ComicVine: Gone Imprint".to_string(),
            "Not in ComicVine: Gone Root".to_string(),
            "Not in module: Fresh".to_string(),
        ]
    );
    assert_eq!(report.len(), 3);
}

#[test]
fn run_with_warns_when_walk_ended_on_failure() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y"]);
    let mut src = Scripted::new(vec![listing(&["X", "Y"]), None]);
    let outcome = reconcile::run_with(&mut src, &CellAnchorExtractor, &tables, &opts(), None);

    assert!(outcome.report.is_clear());
    assert_eq!(
        outcome.lines(),
        vec![
            "Warning: fetching page 2 failed; the publisher list may be incomplete.".to_string(),
            "Nothing to update!".to_string(),
        ]
    );
}

#[test]
fn run_with_notes_the_page_cap() {
    let tables = PublisherTables::new(&[("X", "Y")], &["Y"]);
    // Both names are already in by page 2; the cap still stops the walk
    // before the repeat on page 3 could confirm it.
    let mut src = Scripted::new(vec![listing(&["X"]), listing(&["Y"]), listing(&["Y"])]);
    let o = ReconcileOptions { max_pages: Some(2), ..opts() };
    let outcome = reconcile::run_with(&mut src, &CellAnchorExtractor, &tables, &o, None);

    assert!(outcome.gathered.capped);
    assert_eq!(
        outcome.lines(),
        vec![
            "Note: page cap reached after 2 page(s); later pages were not checked.".to_string(),
            "Nothing to update!".to_string(),
        ]
    );
}

#[test]
fn null_progress_walks_like_no_progress() {
    let pages = || vec![listing(&["A", "B"]), listing(&["C"]), listing(&["A"])];

    let mut quiet = Scripted::new(pages());
    let mut null = Scripted::new(pages());
    let a = reconcile::gather(&mut quiet, &CellAnchorExtractor, &opts(), None);
    let b = reconcile::gather(&mut null, &CellAnchorExtractor, &opts(), Some(&mut NullProgress));

    assert_eq!(a, b);
    assert_eq!(null.calls, vec![1, 2, 3]);
    assert_eq!(b.names, set(&["A", "B", "C"]));
}
