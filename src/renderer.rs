use egui::{pos2, Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::document::Document;
use crate::element::{Element, ElementKind};
use crate::geometry::{self, Corner};

/// Canvas background, matching the exported document's page color.
const CANVAS_COLOR: Color32 = Color32::from_rgb(0x1e, 0x1e, 0x1e);
const GRID_COLOR: Color32 = Color32::from_gray(0x33);
const SELECTION_COLOR: Color32 = Color32::from_rgb(30, 120, 255);

/// Paints the document onto the canvas panel: background, grid, elements in
/// stack order, and the selection outline with its corner handles.
pub struct Renderer {
    handle_size: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { handle_size: 9.0 }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, painter: &Painter, canvas: Rect, document: &Document) {
        painter.rect_filled(canvas, 0.0, CANVAS_COLOR);

        if document.grid_enabled {
            self.paint_grid(painter, canvas, document.grid_size);
        }

        // Stack order is paint order, so z-order falls out of iteration.
        for element in document.elements() {
            self.paint_element(painter, canvas, element);
        }

        if let Some(selected) = document.selected_element() {
            self.paint_selection(painter, canvas, selected);
        }
    }

    fn paint_grid(&self, painter: &Painter, canvas: Rect, grid_size: f32) {
        if grid_size <= 0.0 {
            return;
        }
        let stroke = Stroke::new(1.0, GRID_COLOR);
        let mut x = grid_size;
        while x < canvas.width() {
            painter.line_segment(
                [
                    pos2(canvas.min.x + x, canvas.min.y),
                    pos2(canvas.min.x + x, canvas.max.y),
                ],
                stroke,
            );
            x += grid_size;
        }
        let mut y = grid_size;
        while y < canvas.height() {
            painter.line_segment(
                [
                    pos2(canvas.min.x, canvas.min.y + y),
                    pos2(canvas.max.x, canvas.min.y + y),
                ],
                stroke,
            );
            y += grid_size;
        }
    }

    fn paint_element(&self, painter: &Painter, canvas: Rect, element: &Element) {
        let rect = element.rect().translate(canvas.min.to_vec2());
        let corners =
            geometry::rotated_corners(rect, element.rotation, element.scale_x, element.scale_y);
        let mut points = corners.to_vec();
        // A single flip reverses the winding; the tessellator expects it
        // consistent.
        if element.scale_x * element.scale_y < 0.0 {
            points.reverse();
        }
        painter.add(Shape::convex_polygon(
            points,
            element.background_color,
            Stroke::NONE,
        ));

        if element.kind == ElementKind::Text {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &element.text,
                FontId::proportional(16.0),
                element.color,
            );
        }
    }

    fn paint_selection(&self, painter: &Painter, canvas: Rect, selected: &Element) {
        let rect = selected.rect().translate(canvas.min.to_vec2());
        painter.rect_stroke(rect, 0.0, Stroke::new(1.5, SELECTION_COLOR));
        for corner in Corner::ALL {
            self.paint_handle(painter, corner.pos_on(rect));
        }
    }

    fn paint_handle(&self, painter: &Painter, center: Pos2) {
        let rect = Rect::from_center_size(center, Vec2::splat(self.handle_size));
        painter.rect_filled(rect, 2.0, SELECTION_COLOR);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::WHITE));
    }
}
