// src/imprints/mod.rs
//! Imprint → parent publisher resolution.
//!
//! ComicVine doesn't store imprint information, so we keep our own tables of
//! known imprints and their publishers (see `tables.rs`). Names on both sides
//! must match ComicVine *exactly*: no case folding, no punctuation cleanup.
//! The only normalization is trimming surrounding whitespace.
//!
//! The builtin tables are initialized once on first use and never mutated,
//! so `find_parent_publisher` can be called from any thread.

pub mod tables;

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

static BUILTIN: LazyLock<PublisherTables<'static>> =
    LazyLock::new(|| PublisherTables::new(tables::IMPRINT_PARENTS, tables::ROOT_PUBLISHERS));

/// Return the parent publisher of `imprint`, or `imprint` itself (trimmed)
/// when it isn't a known imprint.
///
/// ```
/// use cv_imprints::imprints::find_parent_publisher;
/// assert_eq!(find_parent_publisher("  Vertigo  "), "DC Comics");
/// assert_eq!(find_parent_publisher("Marvel"), "Marvel");
/// ```
pub fn find_parent_publisher(imprint: &str) -> &str {
    builtin().resolve(imprint)
}

/// The tables compiled into this crate.
pub fn builtin() -> &'static PublisherTables<'static> {
    &BUILTIN
}

/// Check the builtin tables against their documented invariants.
pub fn audit() -> Audit {
    builtin().audit()
}

/// The two publisher tables: imprint keys with their parents, and the flat
/// set of publishers that have no parent.
#[derive(Debug, Clone)]
pub struct PublisherTables<'a> {
    parents: HashMap<&'a str, &'a str>,
    roots: HashSet<&'a str>,
}

impl<'a> PublisherTables<'a> {
    pub fn new(imprints: &[(&'a str, &'a str)], roots: &[&'a str]) -> Self {
        Self {
            parents: imprints.iter().copied().collect(),
            roots: roots.iter().copied().collect(),
        }
    }

    /// Same contract as `find_parent_publisher`, against these tables.
    pub fn resolve<'s>(&self, name: &'s str) -> &'s str
    where
        'a: 's,
    {
        let name = name.trim();
        match self.parents.get(name) {
            Some(parent) => *parent,
            None => name,
        }
    }

    pub fn is_imprint(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.roots.contains(name)
    }

    /// Known to either table.
    pub fn is_known(&self, name: &str) -> bool {
        self.is_imprint(name) || self.is_root(name)
    }

    /// All (imprint, parent) pairs, sorted by imprint.
    pub fn imprints(&self) -> Vec<(&'a str, &'a str)> {
        let mut v: Vec<_> = self.parents.iter().map(|(k, v)| (*k, *v)).collect();
        v.sort_unstable();
        v
    }

    /// All parentless publishers, sorted.
    pub fn roots(&self) -> Vec<&'a str> {
        let mut v: Vec<_> = self.roots.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Imprints owned by `parent`, sorted. Empty when `parent` owns none.
    pub fn imprints_of(&self, parent: &str) -> Vec<&'a str> {
        let parent = parent.trim();
        let mut v: Vec<_> = self
            .parents
            .iter()
            .filter(|(_, p)| **p == parent)
            .map(|(k, _)| *k)
            .collect();
        v.sort_unstable();
        v
    }

    pub fn imprint_count(&self) -> usize {
        self.parents.len()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Nothing checks the invariants at lookup time; this does, on demand.
    pub fn audit(&self) -> Audit {
        let orphan_parents = self
            .parents
            .values()
            .filter(|p| !self.roots.contains(*p))
            .map(|p| s!(*p))
            .collect();
        let overlapping = self
            .parents
            .keys()
            .filter(|k| self.roots.contains(*k))
            .map(|k| s!(*k))
            .collect();
        Audit { orphan_parents, overlapping }
    }
}

/// Result of `PublisherTables::audit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audit {
    /// Parents that aren't listed as root publishers.
    pub orphan_parents: BTreeSet<String>,
    /// Names listed both as an imprint and as a root publisher.
    pub overlapping: BTreeSet<String>,
}

impl Audit {
    pub fn is_clean(&self) -> bool {
        self.orphan_parents.is_empty() && self.overlapping.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for p in &self.orphan_parents {
            out.push(format!("Parent not listed as a publisher: {p}"));
        }
        for name in &self.overlapping {
            out.push(format!("Listed as both imprint and publisher: {name}"));
        }
        if out.is_empty() {
            out.push(s!("Tables are consistent."));
        }
        out
    }
}
