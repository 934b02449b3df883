// src/catalog/mod.rs
//! # Catalog access
//!
//! Everything that knows about ComicVine's publisher listing lives here:
//! where the pages are (`source`) and where the names sit in the markup
//! (`extract`).
//!
//! ## What lives here
//! - **Page fetching** behind `PageSource`, so pagination can be driven by
//!   the live site or by canned pages.
//! - **Name extraction** behind `NameExtractor`: raw page text in, set of
//!   publisher names out.
//!
//! ## What does **not** live here
//! - Pagination and the stop rule, diffing, reporting: see `reconcile`.
//! - The imprint tables: see `imprints`.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → reconcile::run → reconcile::gather → PageSource::fetch_page
//!                                              ↘  NameExtractor::extract
//!                            → reconcile::diff(tables, scraped)
//! ```
pub mod extract;
pub mod source;

pub use extract::{CellAnchorExtractor, NameExtractor};
pub use source::{HttpCatalog, PageSource};
