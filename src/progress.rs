// src/progress.rs
use crate::core::net::FetchError;

/// Lightweight progress reporting for a reconciliation run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once before the first page is requested.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page brought new names. `found` is the page's own count,
    /// `total` the running count across pages.
    fn page_done(&mut self, _page: u32, _found: usize, _total: usize) {}

    /// A page fetch failed. The run stops after this page.
    fn page_failed(&mut self, _page: u32, _err: &FetchError) {}

    /// Called at the end with the final number of scraped names.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
