use eframe::egui;

use crate::app::DesignApp;
use crate::element::ElementKind;
use crate::geometry::Alignment;

pub fn properties_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            let Some(element) = app.editor.document.selected_element() else {
                ui.weak("Select an element to edit properties");
                return;
            };

            // Widgets edit local copies; every change goes through an editor
            // setter so it clamps and commits history.
            let kind = element.kind;
            let mut x = element.x;
            let mut y = element.y;
            let mut width = element.width;
            let mut height = element.height;
            let mut rotation = element.rotation;
            let mut background = element.background_color;
            let mut color = element.color;
            let mut text = element.text.clone();

            ui.label("Alignment");
            ui.horizontal(|ui| {
                for (label, alignment) in [
                    ("⬅", Alignment::Left),
                    ("↔", Alignment::CenterHorizontal),
                    ("➡", Alignment::Right),
                    ("⬆", Alignment::Top),
                    ("↕", Alignment::CenterVertical),
                    ("⬇", Alignment::Bottom),
                ] {
                    if ui.small_button(label).clicked() {
                        app.editor.align_selected(alignment);
                    }
                }
            });

            ui.separator();
            ui.label("Position");
            ui.horizontal(|ui| {
                ui.label("X");
                if ui.add(egui::DragValue::new(&mut x).speed(1.0)).changed() {
                    app.editor.set_selected_x(x);
                }
                ui.label("Y");
                if ui.add(egui::DragValue::new(&mut y).speed(1.0)).changed() {
                    app.editor.set_selected_y(y);
                }
            });

            ui.label("Dimensions");
            ui.horizontal(|ui| {
                ui.label("W");
                if ui.add(egui::DragValue::new(&mut width).speed(1.0)).changed() {
                    app.editor.set_selected_width(width);
                }
                ui.label("H");
                if ui.add(egui::DragValue::new(&mut height).speed(1.0)).changed() {
                    app.editor.set_selected_height(height);
                }
            });

            ui.separator();
            ui.label("Rotation");
            ui.horizontal(|ui| {
                if ui
                    .add(egui::DragValue::new(&mut rotation).speed(1.0).suffix("°"))
                    .changed()
                {
                    app.editor.set_selected_rotation(rotation);
                }
                if ui.small_button("Rotate 90°").clicked() {
                    app.editor.rotate_selected_quarter();
                }
                if ui.small_button("Flip H").clicked() {
                    app.editor.flip_selected_horizontal();
                }
                if ui.small_button("Flip V").clicked() {
                    app.editor.flip_selected_vertical();
                }
            });

            ui.separator();
            ui.label("Background Color");
            if ui.color_edit_button_srgba(&mut background).changed() {
                app.editor.set_selected_background(background);
            }

            if kind == ElementKind::Text {
                ui.separator();
                ui.label("Text Content");
                if ui.text_edit_multiline(&mut text).changed() {
                    app.editor.set_selected_text(&text);
                }
                ui.label("Text Color");
                if ui.color_edit_button_srgba(&mut color).changed() {
                    app.editor.set_selected_color(color);
                }
            }

            ui.separator();
            if ui.button("Delete Element").clicked() {
                app.editor.delete_selected();
            }
        });
}
