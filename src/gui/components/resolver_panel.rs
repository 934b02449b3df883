// src/gui/components/resolver_panel.rs
//
// Left panel: type a publisher name, see what it resolves to.
// Lookup is live on every frame; the tables are static so this is cheap.

use eframe::egui::{self, RichText};
use crate::{gui::app::App, imprints};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Resolve");
    ui.label("Publisher or imprint, exactly as ComicVine spells it:");

    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.resolve_input)
            .hint_text("e.g. Vertigo")
            .desired_width(f32::INFINITY),
    );
    if resp.lost_focus() && !app.resolve_input.trim().is_empty() {
        logd!("UI: Resolve {:?}", app.resolve_input.trim());
    }

    ui.separator();

    let tables = imprints::builtin();
    let name = app.resolve_input.trim();
    if name.is_empty() {
        ui.label(format!(
            "{} imprints, {} publishers known.",
            tables.imprint_count(),
            tables.root_count()
        ));
        return;
    }

    let parent = tables.resolve(name);
    ui.horizontal(|ui| {
        ui.label("Parent:");
        ui.label(RichText::new(parent).strong());
    });

    if tables.is_imprint(name) {
        ui.label(format!("Imprint of {parent}."));
    } else if tables.is_root(name) {
        ui.label("Publisher with no parent.");
        let owned = tables.imprints_of(name);
        if !owned.is_empty() {
            ui.separator();
            ui.label(RichText::new(format!("Imprints ({})", owned.len())).strong());
            egui::ScrollArea::vertical().id_salt("imprints_of").show(ui, |ui| {
                for imprint in owned {
                    if ui.link(imprint).clicked() {
                        app.resolve_input = s!(imprint);
                    }
                }
            });
        }
    } else {
        ui.label(RichText::new("Not in the tables; passed through unchanged.").weak());
    }
}
