// src/config/consts.rs

// Net config
pub const CATALOG_URL: &str = "http://www.comicvine.com/publishers/";
pub const SORT_ORDER: &str = "alphabetical";
pub const USER_AGENT: &str = concat!("cv_imprints/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 15;
pub const READ_TIMEOUT_SECS: u64 = 15;

// Reconcile
pub const FIRST_PAGE: u32 = 1;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
