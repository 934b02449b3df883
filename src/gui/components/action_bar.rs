// src/gui/components/action_bar.rs
//
// Reconcile controls: endpoint, pacing, page cap, the Run button, status.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Reconcile with ComicVine");

    ui.add_enabled_ui(!app.running(), |ui| {
        ui.horizontal(|ui| {
            ui.label("Listing URL:");
            ui.add(egui::TextEdit::singleline(&mut app.options.base_url).desired_width(320.0));
        });

        ui.horizontal(|ui| {
            ui.label("Pause (ms):");
            ui.add(egui::DragValue::new(&mut app.options.pause_ms).range(0..=5_000));

            let mut capped = app.options.max_pages.is_some();
            if ui.checkbox(&mut capped, "Page cap").changed() {
                app.options.max_pages = if capped { Some(10) } else { None };
                logf!("UI: max_pages → {:?}", app.options.max_pages);
            }
            if let Some(max) = app.options.max_pages.as_mut() {
                ui.add(egui::DragValue::new(max).range(1..=10_000));
            }
        });
    });

    ui.horizontal(|ui| {
        let clicked = ui
            .add_enabled(!app.running(), egui::Button::new("Reconcile"))
            .clicked();
        if clicked {
            app.start_reconcile(ui.ctx());
        }

        let has_report = app.outcome.is_some();
        if ui.add_enabled(has_report && !app.running(), egui::Button::new("Copy report")).clicked() {
            if let Some(outcome) = &app.outcome {
                ui.ctx().copy_text(outcome.lines().join("\n"));
                app.status("Report copied to clipboard.");
            }
        }

        if app.running() {
            ui.add(Spinner::new());
        }
        ui.label(format!("Status: {}", app.status_text()));
    });
}
