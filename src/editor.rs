use egui::{vec2, Color32, Pos2, Rect, Vec2};

use crate::document::{Document, LayerDirection};
use crate::element::{Element, ElementId, ElementKind, MIN_ELEMENT_SIZE};
use crate::geometry::{self, Alignment, Corner};
use crate::history::History;

/// An in-flight drag gesture: the grabbed element plus the pointer position
/// and element position captured at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub id: ElementId,
    pub pointer_start: Pos2,
    pub origin: Pos2,
}

/// An in-flight resize gesture, tagged with the grabbed corner handle and
/// the element's pre-gesture rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub id: ElementId,
    pub corner: Corner,
    pub pointer_start: Pos2,
    pub start_rect: Rect,
}

/// The gesture states of the interaction controller.
///
/// At most one session is active at a time; a session lives from
/// pointer-down to pointer-up and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorState {
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, EditorState::Resizing(_))
    }

    /// The corner being dragged, if a resize session is active.
    pub fn active_corner(&self) -> Option<Corner> {
        match self {
            EditorState::Resizing(session) => Some(session.corner),
            _ => None,
        }
    }
}

/// The interaction controller: owns the design state and its history, turns
/// pointer and keyboard input into geometry updates, and commits a history
/// snapshot after every discrete mutation.
pub struct Editor {
    pub document: Document,
    pub history: History,
    state: EditorState,
    canvas_size: Vec2,
    clipboard: Option<String>,
    gesture_changed: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            document: Document::new(),
            history: History::new(),
            state: EditorState::Idle,
            canvas_size: vec2(800.0, 600.0),
            clipboard: None,
            gesture_changed: false,
        }
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Updates the clamping bounds used by drag, nudge, and alignment.
    /// Called once per frame with the canvas panel's current size.
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
    }

    fn commit(&mut self) {
        self.history.commit(self.document.elements());
    }

    /// Runs `f` on the selected element and commits a snapshot; does nothing
    /// when no element is selected.
    fn edit_selected(&mut self, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.document.selected_element_mut() {
            f(element);
            self.commit();
        }
    }

    // ---- element lifecycle -------------------------------------------------

    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = self.document.add(kind);
        self.commit();
        id
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        let id = self.document.selected_id()?;
        let copy = self.document.duplicate(id)?;
        self.commit();
        Some(copy)
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.document.selected_id() {
            self.document.remove(id);
            self.commit();
        }
    }

    /// Moves `id` one step within the layer stack. Like the panel buttons
    /// driving it, this reorders without touching element geometry.
    pub fn move_layer(&mut self, id: ElementId, direction: LayerDirection) -> bool {
        self.document.move_layer(id, direction)
    }

    /// Renames `id`, keeping the old name when `name` is empty.
    pub fn rename(&mut self, id: ElementId, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(element) = self.document.element_mut(id) {
            element.name = name.to_owned();
        }
    }

    /// Empties the document and forgets all history. The caller is expected
    /// to have confirmed this with the user first.
    pub fn clear(&mut self) {
        self.document.clear();
        self.history.clear();
        self.state = EditorState::Idle;
        self.gesture_changed = false;
    }

    // ---- pointer gestures --------------------------------------------------

    /// Pointer pressed at `pos` (canvas-local). A press on the selected
    /// element's handle starts a resize; a press on an element body selects
    /// it and starts a drag; a press on empty canvas deselects.
    pub fn pointer_down(&mut self, pos: Pos2) {
        if let Some(selected) = self.document.selected_element() {
            if let Some(corner) = geometry::handle_at(selected.rect(), pos) {
                self.state = EditorState::Resizing(ResizeSession {
                    id: selected.id,
                    corner,
                    pointer_start: pos,
                    start_rect: selected.rect(),
                });
                self.gesture_changed = false;
                return;
            }
        }

        match geometry::element_at(self.document.elements(), pos) {
            Some(id) => {
                self.document.select(id);
                if let Some(element) = self.document.element(id) {
                    self.state = EditorState::Dragging(DragSession {
                        id,
                        pointer_start: pos,
                        origin: element.position(),
                    });
                    self.gesture_changed = false;
                }
            }
            None => {
                self.document.deselect();
                self.state = EditorState::Idle;
            }
        }
    }

    /// Pointer moved to `pos`; applies the active session's geometry update
    /// immediately. No-op while idle.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        let canvas = self.canvas_size;
        match self.state {
            EditorState::Dragging(session) => {
                let delta = pos - session.pointer_start;
                if let Some(element) = self.document.element_mut(session.id) {
                    let new_pos =
                        geometry::drag_position(session.origin, element.size(), delta, canvas);
                    if element.position() != new_pos {
                        element.set_position(new_pos);
                        self.gesture_changed = true;
                    }
                }
            }
            EditorState::Resizing(session) => {
                let delta = pos - session.pointer_start;
                let rect = geometry::resize_rect(session.start_rect, session.corner, delta);
                if let Some(element) = self.document.element_mut(session.id) {
                    if element.rect() != rect {
                        element.set_rect(rect);
                        self.gesture_changed = true;
                    }
                }
            }
            EditorState::Idle => {}
        }
    }

    /// Pointer released: ends the session, committing one snapshot if the
    /// gesture changed any geometry.
    pub fn pointer_up(&mut self) {
        if !self.state.is_idle() {
            if self.gesture_changed {
                self.commit();
            }
            self.state = EditorState::Idle;
            self.gesture_changed = false;
        }
    }

    // ---- keyboard and panel commands --------------------------------------

    /// Nudges the selected element by `delta`, clamped to the canvas, and
    /// commits.
    pub fn nudge(&mut self, delta: Vec2) {
        let canvas = self.canvas_size;
        self.edit_selected(|el| {
            let pos = geometry::clamp_to_canvas(el.position() + delta, el.size(), canvas);
            el.set_position(pos);
        });
    }

    /// Repositions the selected element against the canvas bounds.
    pub fn align_selected(&mut self, alignment: Alignment) {
        let canvas = self.canvas_size;
        self.edit_selected(|el| {
            let pos = geometry::aligned_position(el.position(), el.size(), canvas, alignment);
            el.set_position(pos);
        });
    }

    pub fn set_selected_x(&mut self, x: f32) {
        self.edit_selected(|el| el.x = x);
    }

    pub fn set_selected_y(&mut self, y: f32) {
        self.edit_selected(|el| el.y = y);
    }

    pub fn set_selected_width(&mut self, width: f32) {
        self.edit_selected(|el| el.width = width.max(MIN_ELEMENT_SIZE));
    }

    pub fn set_selected_height(&mut self, height: f32) {
        self.edit_selected(|el| el.height = height.max(MIN_ELEMENT_SIZE));
    }

    pub fn set_selected_rotation(&mut self, degrees: f32) {
        self.edit_selected(|el| el.set_rotation(degrees));
    }

    pub fn rotate_selected_quarter(&mut self) {
        self.edit_selected(|el| el.rotate_quarter());
    }

    pub fn flip_selected_horizontal(&mut self) {
        self.edit_selected(|el| el.flip_horizontal());
    }

    pub fn flip_selected_vertical(&mut self) {
        self.edit_selected(|el| el.flip_vertical());
    }

    pub fn set_selected_background(&mut self, color: Color32) {
        self.edit_selected(|el| el.background_color = color);
    }

    pub fn set_selected_color(&mut self, color: Color32) {
        self.edit_selected(|el| el.color = color);
    }

    pub fn set_selected_text(&mut self, text: &str) {
        self.edit_selected(|el| el.text = text.to_owned());
    }

    // ---- clipboard ---------------------------------------------------------

    /// Serializes the selected element into the clipboard side channel. The
    /// channel is independent of the saved design and holds one element.
    pub fn copy_selected(&mut self) {
        let Some(element) = self.document.selected_element() else {
            return;
        };
        match serde_json::to_string(element) {
            Ok(json) => self.clipboard = Some(json),
            Err(err) => log::error!("failed to serialize element for clipboard: {err}"),
        }
    }

    /// Paste duplicates the current selection, matching the copy/paste
    /// surface of the original editor.
    pub fn paste(&mut self) -> Option<ElementId> {
        self.duplicate_selected()
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn set_clipboard(&mut self, json: Option<String>) {
        self.clipboard = json;
    }

    // ---- history -----------------------------------------------------------

    /// Restores the previous history snapshot. Returns whether anything
    /// changed.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        let elements = snapshot.to_vec();
        self.document.restore(elements);
        true
    }

    /// Restores the next history snapshot after an undo. Returns whether
    /// anything changed.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        let elements = snapshot.to_vec();
        self.document.restore(elements);
        true
    }
}
