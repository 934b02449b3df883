// src/reconcile.rs
//! Compare the imprint tables against the live ComicVine publisher listing.
//!
//! Run this periodically and use the report to update `imprints::tables`:
//! names we list that ComicVine no longer has, and names ComicVine has that
//! we don't list yet.

use std::collections::BTreeSet;
use std::thread;

use crate::{
    catalog::{CellAnchorExtractor, HttpCatalog, NameExtractor, PageSource},
    config::{consts::FIRST_PAGE, options::ReconcileOptions},
    imprints::{self, PublisherTables},
    progress::Progress,
};

/// Names collected from the listing, plus how the walk ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gathered {
    pub names: BTreeSet<String>,
    /// Pages requested, including the last one (which added nothing).
    pub pages_requested: u32,
    /// Set when a fetch failure ended the walk.
    pub failed_page: Option<u32>,
    /// Set when `max_pages` ended the walk while pages were still adding
    /// names. Pages past the cap were never checked, so the list may or may
    /// not be complete.
    pub capped: bool,
}

/// Walk the listing page by page until a page brings no new names.
///
/// A failed fetch counts as an empty page. An empty page is trivially
/// contained in what we already have, so a failure ends the walk; the
/// page number is kept in `failed_page` so the caller can flag it.
pub fn gather(
    source: &mut dyn PageSource,
    extractor: &dyn NameExtractor,
    opts: &ReconcileOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Gathered {
    let mut out = Gathered::default();

    with_progress!(progress, begin());
    with_progress!(progress, log("Gathering publishers from ComicVine..."));

    let mut page = FIRST_PAGE;
    loop {
        if opts.past_cap(page) {
            logf!("Reconcile: page cap {:?} reached", opts.max_pages);
            out.capped = true;
            break;
        }
        if page > FIRST_PAGE && opts.pause_ms > 0 {
            thread::sleep(opts.pause());
        }

        out.pages_requested += 1;
        let text = match source.fetch_page(page) {
            Ok(text) => text,
            Err(e) => {
                loge!("Reconcile: {e}");
                with_progress!(progress, page_failed(page, &e));
                out.failed_page = Some(page);
                String::new()
            }
        };

        let found = extractor.extract(&text);
        if found.is_subset(&out.names) {
            // repeating results (or nothing at all): done
            logd!("Reconcile: page {page} added nothing, stopping");
            break;
        }

        let n = found.len();
        out.names.extend(found);
        logf!("Reconcile: page {page}: {n} names, {} total", out.names.len());
        with_progress!(progress, page_done(page, n, out.names.len()));
        page += 1;
    }

    with_progress!(progress, finish(out.names.len()));
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FindingKind {
    /// An imprint key ComicVine no longer lists.
    MissingImprint,
    /// A root publisher ComicVine no longer lists.
    MissingPublisher,
    /// A ComicVine publisher in neither table.
    Untriaged,
}

impl FindingKind {
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::MissingImprint => "Imprint not in ComicVine",
            FindingKind::MissingPublisher => "Publisher not in ComicVine",
            FindingKind::Untriaged => "New publisher",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            FindingKind::MissingImprint | FindingKind::MissingPublisher => "Not in ComicVine: ",
            FindingKind::Untriaged => "Not in module: ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    pub name: String,
}

/// Differences between the tables and one set of scraped names.
/// Every list is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub missing_imprints: Vec<String>,
    pub missing_publishers: Vec<String>,
    pub untriaged: Vec<String>,
}

impl Report {
    /// No drift at all.
    pub fn is_clear(&self) -> bool {
        self.missing_imprints.is_empty()
            && self.missing_publishers.is_empty()
            && self.untriaged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.missing_imprints.len() + self.missing_publishers.len() + self.untriaged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clear()
    }

    /// Flattened, in report order.
    pub fn findings(&self) -> Vec<Finding> {
        let tag = |kind: FindingKind, names: &[String]| {
            names
                .iter()
                .map(|name| Finding { kind, name: name.clone() })
                .collect::<Vec<_>>()
        };
        let mut out = tag(FindingKind::MissingImprint, &self.missing_imprints);
        out.extend(tag(FindingKind::MissingPublisher, &self.missing_publishers));
        out.extend(tag(FindingKind::Untriaged, &self.untriaged));
        out
    }

    /// Console text: one line per finding, or a single all-clear line.
    pub fn lines(&self) -> Vec<String> {
        if self.is_clear() {
            return vec![s!("Nothing to update!")];
        }
        self.findings()
            .into_iter()
            .map(|f| join!(f.kind.prefix(), &f.name))
            .collect()
    }
}

/// Diff the tables against `scraped`.
pub fn diff(tables: &PublisherTables, scraped: &BTreeSet<String>) -> Report {
    let missing_imprints = tables
        .imprints()
        .into_iter()
        .map(|(imprint, _)| imprint)
        .filter(|name| !scraped.contains(*name))
        .map(String::from)
        .collect();

    let missing_publishers = tables
        .roots()
        .into_iter()
        .filter(|name| !scraped.contains(*name))
        .map(String::from)
        .collect();

    let untriaged = scraped
        .iter()
        .filter(|name| !tables.is_known(name))
        .cloned()
        .collect();

    Report { missing_imprints, missing_publishers, untriaged }
}

/// A finished run: what was scraped and how it compares.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub gathered: Gathered,
    pub report: Report,
}

impl Outcome {
    /// Report lines, preceded by a warning when the walk ended on a fetch
    /// failure and a note when it ended at the page cap.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(page) = self.gathered.failed_page {
            out.push(format!(
                "Warning: fetching page {page} failed; the publisher list may be incomplete."
            ));
        }
        if self.gathered.capped {
            out.push(format!(
                "Note: page cap reached after {} page(s); later pages were not checked.",
                self.gathered.pages_requested
            ));
        }
        out.extend(self.report.lines());
        out
    }
}

/// Gather from `source` and diff against `tables`.
pub fn run_with(
    source: &mut dyn PageSource,
    extractor: &dyn NameExtractor,
    tables: &PublisherTables,
    opts: &ReconcileOptions,
    progress: Option<&mut dyn Progress>,
) -> Outcome {
    let gathered = gather(source, extractor, opts, progress);
    let report = diff(tables, &gathered.names);
    logf!(
        "Reconcile: {} scraped, {} finding(s){}",
        gathered.names.len(),
        report.len(),
        if gathered.failed_page.is_some() { " (ended on fetch failure)" } else { "" }
    );
    Outcome { gathered, report }
}

/// Live run against ComicVine with the builtin tables.
pub fn run(opts: &ReconcileOptions, progress: Option<&mut dyn Progress>) -> Outcome {
    let mut source = HttpCatalog::new(opts);
    logf!("Reconcile: begin {}", source.base_url());
    run_with(&mut source, &CellAnchorExtractor, imprints::builtin(), opts, progress)
}
