use eframe_designer::element::{Element, ElementId, ElementKind};
use eframe_designer::geometry::{
    aligned_position, clamp_to_canvas, drag_position, element_at, handle_at, resize_rect,
    rotated_corners, Alignment, Corner,
};
use egui::{pos2, vec2, Rect};

const CANVAS: egui::Vec2 = egui::Vec2::new(400.0, 300.0);

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_min_size(pos2(x, y), vec2(w, h))
}

#[test]
fn test_drag_clamps_to_right_edge() {
    // Canvas 400 wide, element 150 wide at x=50, dragged 300 right.
    let pos = drag_position(pos2(50.0, 50.0), vec2(150.0, 100.0), vec2(300.0, 0.0), CANVAS);
    assert_eq!(pos, pos2(250.0, 50.0));
}

#[test]
fn test_drag_clamps_to_origin() {
    let pos = drag_position(
        pos2(50.0, 50.0),
        vec2(150.0, 100.0),
        vec2(-500.0, -500.0),
        CANVAS,
    );
    assert_eq!(pos, pos2(0.0, 0.0));
}

#[test]
fn test_drag_unclamped_in_the_middle() {
    let pos = drag_position(pos2(50.0, 50.0), vec2(150.0, 100.0), vec2(40.0, 30.0), CANVAS);
    assert_eq!(pos, pos2(90.0, 80.0));
}

#[test]
fn test_clamp_with_oversized_element_pins_to_origin() {
    // An element wider than the canvas clamps to 0, not a negative bound.
    let pos = clamp_to_canvas(pos2(50.0, 10.0), vec2(500.0, 100.0), CANVAS);
    assert_eq!(pos.x, 0.0);
}

#[test]
fn test_resize_bottom_right_grows_in_place() {
    let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), Corner::BottomRight, vec2(30.0, 20.0));
    assert_eq!(out, rect(100.0, 100.0, 230.0, 120.0));
}

#[test]
fn test_resize_bottom_left_anchors_right_edge() {
    let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), Corner::BottomLeft, vec2(50.0, 20.0));
    // Width shrinks by 50, x shifts by the same amount; the right edge stays.
    assert_eq!(out, rect(150.0, 100.0, 150.0, 120.0));
    assert_eq!(out.max.x, 300.0);
}

#[test]
fn test_resize_top_right_anchors_bottom_edge() {
    let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), Corner::TopRight, vec2(10.0, 30.0));
    assert_eq!(out, rect(100.0, 130.0, 210.0, 70.0));
    assert_eq!(out.max.y, 200.0);
}

#[test]
fn test_resize_top_left_anchors_both_opposite_edges() {
    let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), Corner::TopLeft, vec2(-20.0, -10.0));
    assert_eq!(out, rect(80.0, 90.0, 220.0, 110.0));
    assert_eq!(out.max, pos2(300.0, 200.0));
}

#[test]
fn test_resize_floors_at_minimum_size() {
    for corner in Corner::ALL {
        let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), corner, vec2(1000.0, -1000.0));
        assert!(out.width() >= 30.0, "{corner:?} width {}", out.width());
        assert!(out.height() >= 30.0, "{corner:?} height {}", out.height());
    }
}

#[test]
fn test_resize_minimum_keeps_anchored_edge() {
    // Collapsing from the left: width floors at 30 and x lands so the right
    // edge never moves.
    let out = resize_rect(rect(100.0, 100.0, 200.0, 100.0), Corner::BottomLeft, vec2(500.0, 0.0));
    assert_eq!(out.width(), 30.0);
    assert_eq!(out.min.x, 270.0);
    assert_eq!(out.max.x, 300.0);
}

#[test]
fn test_resize_is_not_clamped_to_canvas() {
    // Known asymmetry with drag: a resize may push the element past the
    // canvas edge.
    let out = resize_rect(rect(350.0, 50.0, 40.0, 40.0), Corner::BottomRight, vec2(100.0, 0.0));
    assert!(out.max.x > CANVAS.x);
}

#[test]
fn test_aligned_positions() {
    let current = pos2(17.0, 23.0);
    let size = vec2(100.0, 50.0);
    assert_eq!(aligned_position(current, size, CANVAS, Alignment::Left), pos2(0.0, 23.0));
    assert_eq!(
        aligned_position(current, size, CANVAS, Alignment::CenterHorizontal),
        pos2(150.0, 23.0)
    );
    assert_eq!(aligned_position(current, size, CANVAS, Alignment::Right), pos2(300.0, 23.0));
    assert_eq!(aligned_position(current, size, CANVAS, Alignment::Top), pos2(17.0, 0.0));
    assert_eq!(
        aligned_position(current, size, CANVAS, Alignment::CenterVertical),
        pos2(17.0, 125.0)
    );
    assert_eq!(aligned_position(current, size, CANVAS, Alignment::Bottom), pos2(17.0, 250.0));
}

#[test]
fn test_handle_at_finds_corners() {
    let r = rect(100.0, 100.0, 200.0, 100.0);
    assert_eq!(handle_at(r, pos2(100.0, 100.0)), Some(Corner::TopLeft));
    assert_eq!(handle_at(r, pos2(305.0, 102.0)), Some(Corner::TopRight));
    assert_eq!(handle_at(r, pos2(100.0, 200.0)), Some(Corner::BottomLeft));
    assert_eq!(handle_at(r, pos2(300.0, 200.0)), Some(Corner::BottomRight));
    // Element center is nowhere near a handle.
    assert_eq!(handle_at(r, r.center()), None);
}

#[test]
fn test_element_at_prefers_topmost() {
    let mut back = Element::new(ElementId::new(1), ElementKind::Rectangle, 0);
    back.set_position(pos2(0.0, 0.0));
    back.width = 100.0;
    back.height = 100.0;
    let mut front = Element::new(ElementId::new(2), ElementKind::Rectangle, 1);
    front.set_position(pos2(50.0, 50.0));
    front.width = 100.0;
    front.height = 100.0;
    let elements = vec![back, front];

    assert_eq!(element_at(&elements, pos2(60.0, 60.0)), Some(ElementId::new(2)));
    assert_eq!(element_at(&elements, pos2(10.0, 10.0)), Some(ElementId::new(1)));
    assert_eq!(element_at(&elements, pos2(300.0, 300.0)), None);
}

#[test]
fn test_rotated_corners_identity() {
    let r = rect(0.0, 0.0, 100.0, 50.0);
    let corners = rotated_corners(r, 0.0, 1.0, 1.0);
    assert_eq!(corners[0], r.left_top());
    assert_eq!(corners[1], r.right_top());
    assert_eq!(corners[2], r.right_bottom());
    assert_eq!(corners[3], r.left_bottom());
}

#[test]
fn test_rotated_corners_quarter_turn() {
    let r = rect(0.0, 0.0, 100.0, 50.0);
    let corners = rotated_corners(r, 90.0, 1.0, 1.0);
    // Center is (50, 25); the top-left corner swings to (75, -25).
    assert!((corners[0].x - 75.0).abs() < 1e-3);
    assert!((corners[0].y + 25.0).abs() < 1e-3);
}
