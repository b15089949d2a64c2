use egui::{pos2, vec2, CursorIcon, Pos2, Rect, Vec2};

use crate::element::{Element, ElementId, MIN_ELEMENT_SIZE};

/// Radius around a corner in which a pointer press grabs the resize handle.
pub const RESIZE_HANDLE_RADIUS: f32 = 8.0;

/// Represents a corner resize handle of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "nw",
            Corner::TopRight => "ne",
            Corner::BottomLeft => "sw",
            Corner::BottomRight => "se",
        }
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            Corner::TopLeft => CursorIcon::ResizeNwSe,
            Corner::TopRight => CursorIcon::ResizeNeSw,
            Corner::BottomLeft => CursorIcon::ResizeNeSw,
            Corner::BottomRight => CursorIcon::ResizeNwSe,
        }
    }

    /// Position of this corner on `rect`.
    pub fn pos_on(&self, rect: Rect) -> Pos2 {
        match self {
            Corner::TopLeft => rect.left_top(),
            Corner::TopRight => rect.right_top(),
            Corner::BottomLeft => rect.left_bottom(),
            Corner::BottomRight => rect.right_bottom(),
        }
    }
}

/// Clamps a top-left corner so an element of `size` stays inside the canvas.
///
/// When the element is larger than the canvas the upper bound collapses to 0,
/// pinning the element to the origin rather than inverting the clamp range.
pub fn clamp_to_canvas(pos: Pos2, size: Vec2, canvas: Vec2) -> Pos2 {
    pos2(
        pos.x.clamp(0.0, (canvas.x - size.x).max(0.0)),
        pos.y.clamp(0.0, (canvas.y - size.y).max(0.0)),
    )
}

/// New top-left position for a drag gesture.
///
/// `origin` is the element's position at gesture start and `delta` the
/// pointer travel since then. The result always lies in
/// `[0, canvas - size]` per axis.
pub fn drag_position(origin: Pos2, size: Vec2, delta: Vec2, canvas: Vec2) -> Pos2 {
    clamp_to_canvas(origin + delta, size, canvas)
}

/// New bounding rectangle for a resize gesture.
///
/// The edges opposite the grabbed corner stay fixed; width and height are
/// floored at [`MIN_ELEMENT_SIZE`]. Unlike drag, the result is not clamped to
/// the canvas, so a resize can push an element past the canvas edge.
pub fn resize_rect(start: Rect, corner: Corner, delta: Vec2) -> Rect {
    let start_w = start.width();
    let start_h = start.height();
    let mut x = start.min.x;
    let mut y = start.min.y;

    let (width, height) = match corner {
        Corner::BottomRight => (
            (start_w + delta.x).max(MIN_ELEMENT_SIZE),
            (start_h + delta.y).max(MIN_ELEMENT_SIZE),
        ),
        Corner::BottomLeft => {
            let width = (start_w - delta.x).max(MIN_ELEMENT_SIZE);
            x += start_w - width;
            (width, (start_h + delta.y).max(MIN_ELEMENT_SIZE))
        }
        Corner::TopRight => {
            let height = (start_h - delta.y).max(MIN_ELEMENT_SIZE);
            y += start_h - height;
            ((start_w + delta.x).max(MIN_ELEMENT_SIZE), height)
        }
        Corner::TopLeft => {
            let width = (start_w - delta.x).max(MIN_ELEMENT_SIZE);
            let height = (start_h - delta.y).max(MIN_ELEMENT_SIZE);
            x += start_w - width;
            y += start_h - height;
            (width, height)
        }
    };

    Rect::from_min_size(pos2(x, y), vec2(width, height))
}

/// Alignment targets relative to the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    CenterHorizontal,
    Right,
    Top,
    CenterVertical,
    Bottom,
}

/// Top-left position that aligns an element of `size` within `canvas`,
/// keeping the unaffected axis at `current`.
pub fn aligned_position(current: Pos2, size: Vec2, canvas: Vec2, alignment: Alignment) -> Pos2 {
    match alignment {
        Alignment::Left => pos2(0.0, current.y),
        Alignment::CenterHorizontal => pos2((canvas.x - size.x) / 2.0, current.y),
        Alignment::Right => pos2(canvas.x - size.x, current.y),
        Alignment::Top => pos2(current.x, 0.0),
        Alignment::CenterVertical => pos2(current.x, (canvas.y - size.y) / 2.0),
        Alignment::Bottom => pos2(current.x, canvas.y - size.y),
    }
}

/// Finds the resize handle under `pos` on `rect`, if any.
pub fn handle_at(rect: Rect, pos: Pos2) -> Option<Corner> {
    Corner::ALL
        .iter()
        .copied()
        .find(|corner| corner.pos_on(rect).distance(pos) <= RESIZE_HANDLE_RADIUS)
}

/// Topmost element whose bounding rect contains `pos`.
///
/// `elements` is in paint order (back to front), so the scan runs in reverse
/// to resolve overlaps to the element painted last.
pub fn element_at(elements: &[Element], pos: Pos2) -> Option<ElementId> {
    elements
        .iter()
        .rev()
        .find(|el| el.rect().contains(pos))
        .map(|el| el.id)
}

/// The element's corner points with rotation and flips applied, in paint
/// order, for rendering as a convex polygon.
///
/// Rotation is about the rect center; flips mirror the local offsets across
/// the center axes.
pub fn rotated_corners(rect: Rect, rotation_degrees: f32, scale_x: f32, scale_y: f32) -> [Pos2; 4] {
    let center = rect.center();
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    let transform = |corner: Pos2| {
        let local = vec2(
            (corner.x - center.x) * scale_x.signum(),
            (corner.y - center.y) * scale_y.signum(),
        );
        pos2(
            center.x + local.x * cos - local.y * sin,
            center.y + local.x * sin + local.y * cos,
        )
    };
    [
        transform(rect.left_top()),
        transform(rect.right_top()),
        transform(rect.right_bottom()),
        transform(rect.left_bottom()),
    ]
}
