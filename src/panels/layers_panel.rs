use eframe::egui;

use crate::app::DesignApp;
use crate::document::LayerDirection;
use crate::element::{ElementId, ElementKind};

struct LayerRow {
    id: ElementId,
    name: String,
    kind: ElementKind,
    width: f32,
    height: f32,
}

pub fn layers_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::SidePanel::left("layers_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Layers");
            ui.separator();

            // Copy the rows out first; the buttons below mutate the stack.
            // Front-most element on top, the reverse of paint order.
            let rows: Vec<LayerRow> = app
                .editor
                .document
                .elements()
                .iter()
                .rev()
                .map(|el| LayerRow {
                    id: el.id,
                    name: el.name.clone(),
                    kind: el.kind,
                    width: el.width,
                    height: el.height,
                })
                .collect();

            if rows.is_empty() {
                ui.weak("No elements yet");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in &rows {
                    layer_row(app, ui, ctx, row);
                }
            });
        });
}

fn layer_row(app: &mut DesignApp, ui: &mut egui::Ui, ctx: &egui::Context, row: &LayerRow) {
    ui.horizontal(|ui| {
        let icon = match row.kind {
            ElementKind::Rectangle => "▭",
            ElementKind::Text => "T",
        };
        ui.label(icon);

        if app.renaming == Some(row.id) {
            let response = ui.text_edit_singleline(&mut app.rename_buffer);
            if app.rename_focus {
                response.request_focus();
                app.rename_focus = false;
            }
            let cancelled = ctx.input(|i| i.key_pressed(egui::Key::Escape));
            if cancelled {
                app.renaming = None;
            } else if response.lost_focus() {
                let name = app.rename_buffer.clone();
                app.editor.rename(row.id, &name);
                app.renaming = None;
            }
        } else {
            let selected = app.editor.document.selected_id() == Some(row.id);
            let response = ui.selectable_label(selected, &row.name);
            if response.double_clicked() {
                app.renaming = Some(row.id);
                app.rename_buffer = row.name.clone();
                app.rename_focus = true;
            } else if response.clicked() {
                app.editor.document.select(row.id);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("▼").clicked() {
                app.editor.move_layer(row.id, LayerDirection::Down);
            }
            if ui.small_button("▲").clicked() {
                app.editor.move_layer(row.id, LayerDirection::Up);
            }
            ui.weak(format!("{:.0}×{:.0}", row.width, row.height));
        });
    });
}
