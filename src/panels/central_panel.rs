use eframe::egui;

use crate::app::DesignApp;
use crate::geometry;

/// The canvas itself: a single interactive region; presses are dispatched to
/// the editor by coordinate lookup rather than per-element widgets.
pub fn central_panel(app: &mut DesignApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas = response.rect;
            app.editor.set_canvas_size(canvas.size());

            let to_canvas = |pos: egui::Pos2| pos - canvas.min.to_vec2();

            // A click without drag still selects/deselects: run the full
            // press-release pair through the editor.
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.editor.pointer_down(to_canvas(pos));
                    app.editor.pointer_up();
                }
            }

            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.editor.pointer_down(to_canvas(pos));
                }
            } else if response.dragged() {
                if let Some(pos) = response.interact_pointer_pos() {
                    app.editor.pointer_moved(to_canvas(pos));
                }
            }
            if response.drag_stopped() {
                app.editor.pointer_up();
            }

            if let Some(corner) = app.editor.state().active_corner() {
                ctx.set_cursor_icon(corner.cursor_icon());
            } else if let (Some(hover), Some(selected)) =
                (response.hover_pos(), app.editor.document.selected_element())
            {
                let rect = selected.rect().translate(canvas.min.to_vec2());
                if let Some(corner) = geometry::handle_at(rect, hover) {
                    ctx.set_cursor_icon(corner.cursor_icon());
                }
            }

            app.renderer.render(&painter, canvas, &app.editor.document);
        });
}
