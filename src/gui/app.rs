// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::options::ReconcileOptions,
    reconcile::{self, FindingKind, Outcome},
};

use super::{
    components,
    progress::GuiProgress,
    worker::{Poll, Worker},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "ComicVine Imprints",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(ReconcileOptions::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub options: ReconcileOptions,

    // resolver panel
    pub resolve_input: String,

    // last finished reconcile
    pub outcome: Option<Outcome>,
    pub show_missing_imprints: bool,
    pub show_missing_publishers: bool,
    pub show_untriaged: bool,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    worker: Worker<Outcome>,
}

impl App {
    pub fn new(options: ReconcileOptions) -> Self {
        let tables = crate::imprints::builtin();
        logf!(
            "Init: {} imprints, {} publishers",
            tables.imprint_count(),
            tables.root_count()
        );
        Self {
            options,
            resolve_input: s!(),
            outcome: None,
            show_missing_imprints: true,
            show_missing_publishers: true,
            show_untriaged: true,
            status: Arc::new(Mutex::new(s!("Idle"))),
            worker: Worker::new(),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn shows(&self, kind: FindingKind) -> bool {
        match kind {
            FindingKind::MissingImprint => self.show_missing_imprints,
            FindingKind::MissingPublisher => self.show_missing_publishers,
            FindingKind::Untriaged => self.show_untriaged,
        }
    }

    pub fn running(&self) -> bool {
        self.worker.is_running()
    }

    /// Kick off a reconcile on a worker thread. No-op while one is running.
    pub fn start_reconcile(&mut self, ctx: &egui::Context) {
        if self.running() {
            return;
        }
        self.status("Gathering publishers from ComicVine...");
        logf!("UI: Reconcile start url={} max_pages={:?}", self.options.base_url, self.options.max_pages);

        let opts = self.options.clone();
        let status = self.status.clone();
        let ctx2 = ctx.clone();

        self.worker.spawn(move || {
            let mut prog = GuiProgress::new(status, ctx2.clone());
            let outcome = reconcile::run(&opts, Some(&mut prog));
            ctx2.request_repaint();
            outcome
        });
    }

    /// Pick up a finished run from the worker, if any.
    fn poll_worker(&mut self) {
        let outcome = match self.worker.poll() {
            Poll::Idle | Poll::Running => return,
            Poll::Died(msg) => {
                loge!("UI: Reconcile worker panicked: {msg}");
                self.status(format!("Reconcile failed: {msg}"));
                return;
            }
            Poll::Done(outcome) => outcome,
        };

        let summary = if outcome.report.is_clear() {
            s!("Nothing to update!")
        } else {
            format!("{} finding(s)", outcome.report.len())
        };
        let summary = match outcome.gathered.failed_page {
            Some(page) => format!("{summary} (page {page} failed; list may be incomplete)"),
            None => summary,
        };
        logf!("UI: Reconcile done: {summary}");
        self.status(summary);
        self.outcome = Some(outcome);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::SidePanel::left("resolver")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                components::resolver_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);
            ui.separator();
            components::report_table::draw(ui, self);
        });
    }
}
