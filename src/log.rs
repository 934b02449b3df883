// src/log.rs
//
// Append-only debug log under `.store/`. Lines look like
//   [00:01:02.345][INFO] Reconcile: page 3: 50 names, 150 total
// with time measured from the first log call. DEBUG lines are dropped
// unless CV_IMPRINTS_DEBUG is set to something other than "0".

use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub const DEBUG_ENV: &str = "CV_IMPRINTS_DEBUG";

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static DEBUG: OnceLock<bool> = OnceLock::new();

fn log_path() -> &'static PathBuf {
    LOG_PATH.get_or_init(|| {
        let _ = fs::create_dir_all(STORE_DIR);
        PathBuf::from(STORE_DIR).join(LOG_FILE)
    })
}

pub fn debug_enabled() -> bool {
    *DEBUG.get_or_init(|| env::var(DEBUG_ENV).is_ok_and(|v| !v.is_empty() && v != "0"))
}

/// `hh:mm:ss.mmm`
pub fn fmt_elapsed(ms: u128) -> String {
    let ms = ms as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms % 3_600_000 / 60_000,
        ms % 60_000 / 1_000,
        ms % 1_000
    )
}

pub fn write_log(level: &str, msg: &str) {
    let start = *START.get_or_init(Instant::now);
    let line = format!("[{}][{level}] {msg}\n", fmt_elapsed(start.elapsed().as_millis()));

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path()) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        if $crate::log::debug_enabled() {
            $crate::log::write_log("DEBUG", &format!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
