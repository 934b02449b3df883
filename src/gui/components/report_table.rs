// src/gui/components/report_table.rs
//
// Findings of the last reconcile, one row per publisher name.
// Purely a view over `app.outcome`.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{
    gui::app::App,
    reconcile::{Finding, FindingKind},
};

fn kind_color(kind: FindingKind) -> Color32 {
    match kind {
        FindingKind::MissingImprint => Color32::from_rgb(0xDC, 0x61, 0x49),
        FindingKind::MissingPublisher => Color32::from_rgb(0xF0, 0xD2, 0x3C),
        FindingKind::Untriaged => Color32::from_rgb(0x64, 0xB4, 0xFF),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(outcome) = &app.outcome else {
        ui.label("No reconcile run yet.");
        return;
    };

    let gathered = &outcome.gathered;
    ui.label(format!(
        "{} publishers scraped over {} page(s).",
        gathered.names.len(),
        gathered.pages_requested
    ));
    if let Some(page) = gathered.failed_page {
        ui.colored_label(
            kind_color(FindingKind::MissingImprint),
            format!("Fetching page {page} failed; the list may be incomplete."),
        );
    }

    if outcome.report.is_clear() {
        ui.label(RichText::new("Nothing to update!").strong());
        return;
    }

    let findings = outcome.report.findings();
    ui.horizontal(|ui| {
        let count = |kind| findings.iter().filter(|f| f.kind == kind).count();
        ui.checkbox(
            &mut app.show_missing_imprints,
            format!("Imprints gone ({})", count(FindingKind::MissingImprint)),
        );
        ui.checkbox(
            &mut app.show_missing_publishers,
            format!("Publishers gone ({})", count(FindingKind::MissingPublisher)),
        );
        ui.checkbox(
            &mut app.show_untriaged,
            format!("New ({})", count(FindingKind::Untriaged)),
        );
    });
    ui.separator();

    let visible: Vec<&Finding> = findings.iter().filter(|f| app.shows(f.kind)).collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(200.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Finding"); });
            header.col(|ui| { ui.strong("Publisher"); });
        })
        .body(|body| {
            body.rows(20.0, visible.len(), |mut row| {
                let Some(f) = visible.get(row.index()) else { return };
                row.col(|ui| {
                    ui.label(RichText::new(f.kind.label()).color(kind_color(f.kind)));
                });
                row.col(|ui| {
                    ui.label(&f.name);
                });
            });
        });
}
