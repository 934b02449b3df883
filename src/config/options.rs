// src/config/options.rs
use std::time::Duration;
use super::consts::*;

/// Knobs for one reconciliation run. CLI flags override the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Listing endpoint; `page` and `sort` are appended as query params.
    pub base_url: String,
    pub sort: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    /// Pause between page fetches.
    pub pause_ms: u64,
    /// Manual cap on pages fetched. `None` = stop only at the fixed point.
    pub max_pages: Option<u32>,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            base_url: s!(CATALOG_URL),
            sort: s!(SORT_ORDER),
            user_agent: s!(USER_AGENT),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(READ_TIMEOUT_SECS),
            pause_ms: REQUEST_PAUSE_MS,
            max_pages: None,
        }
    }
}

impl ReconcileOptions {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// True once `page` is past the manual cap (if any).
    pub fn past_cap(&self, page: u32) -> bool {
        self.max_pages.is_some_and(|max| page > max)
    }
}
