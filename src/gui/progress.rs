// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{core::net::FetchError, progress::Progress};

/// Writes reconcile progress into the shared status line.
/// Lives on the worker thread; the UI thread only reads `status`.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    pages: u32,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, pages: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page_done(&mut self, page: u32, found: usize, total: usize) {
        self.pages = page;
        self.set_status(format!("Page {page}: {found} publishers ({total} so far)"));
    }
    fn page_failed(&mut self, page: u32, err: &FetchError) {
        self.set_status(format!("Page {page} failed: {err}"));
    }
    fn finish(&mut self, total: usize) {
        self.set_status(format!("Fetch complete: {total} publishers over {} page(s)", self.pages));
    }
}
