use eframe::egui;

use crate::app::DesignApp;
use crate::element::ElementKind;

pub fn toolbar(app: &mut DesignApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Add Rectangle").clicked() {
                app.editor.add_element(ElementKind::Rectangle);
            }
            if ui.button("Add Text").clicked() {
                app.editor.add_element(ElementKind::Text);
            }
            let has_selection = app.editor.document.selected_id().is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("Duplicate"))
                .clicked()
            {
                app.editor.duplicate_selected();
            }

            ui.separator();

            if ui
                .add_enabled(app.editor.history.can_undo(), egui::Button::new("Undo"))
                .clicked()
            {
                app.editor.undo();
            }
            if ui
                .add_enabled(app.editor.history.can_redo(), egui::Button::new("Redo"))
                .clicked()
            {
                app.editor.redo();
            }

            ui.separator();

            if ui
                .selectable_label(app.editor.document.grid_enabled, "Grid")
                .clicked()
            {
                app.editor.document.toggle_grid();
            }

            ui.separator();

            if ui.button("Save").clicked() {
                app.save_requested = true;
            }
            if ui.button("Export JSON").clicked() {
                app.export_json();
            }
            if ui.button("Export HTML").clicked() {
                app.export_html();
            }
            if ui.button("Clear").clicked() {
                app.show_clear_confirm = true;
            }

            if let Some(status) = &app.status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(status);
                });
            }
        });
    });
}
