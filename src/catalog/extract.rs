// src/catalog/extract.rs
//
// Publisher names sit in the listing as
//   <td ...> <a href="/publisher-name/4010-31/">Marvel</a> </td>
// One regex over the whole (entity-decoded) page picks them out. If the
// markup changes, swap the extractor; pagination and diffing don't care.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::decode_entities;

/// Raw page text in, set of publisher names out.
pub trait NameExtractor {
    fn extract(&self, page: &str) -> BTreeSet<String>;
}

static CELL_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)<td[^>]*>\s*<a[^>]*>([^<]*)</a>\s*</td>")
        .expect("valid cell-anchor pattern")
});

/// Names from anchors that are the sole content of a table cell.
/// Entities are decoded before matching; names are trimmed and empty ones
/// dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellAnchorExtractor;

impl NameExtractor for CellAnchorExtractor {
    fn extract(&self, page: &str) -> BTreeSet<String> {
        let decoded = decode_entities(page);
        CELL_ANCHOR
            .captures_iter(&decoded)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}
