use crate::element::{Element, ElementId, ElementKind};

/// Direction to move an element within the layer stack.
///
/// `Up` moves towards the front (painted later), `Down` towards the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    Up,
    Down,
}

impl LayerDirection {
    fn offset(&self) -> isize {
        match self {
            LayerDirection::Up => 1,
            LayerDirection::Down => -1,
        }
    }
}

/// The design state: the ordered element stack plus selection, the id
/// counter, and grid settings.
///
/// Element order is paint order, back to front. After every stack mutation
/// each element's `z_index` equals its position, dense `0..N-1`. Operations
/// referencing an unknown id are silent no-ops.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    next_id: u64,
    pub grid_enabled: bool,
    pub grid_size: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            next_id: 1,
            grid_enabled: false,
            grid_size: 20.0,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element stack in paint order, back to front.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The value the next created element's id will take; never reused, even
    /// after deletion.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.element(id))
    }

    pub fn selected_element_mut(&mut self) -> Option<&mut Element> {
        match self.selected {
            Some(id) => self.element_mut(id),
            None => None,
        }
    }

    /// Selects `id` if it names a live element.
    pub fn select(&mut self, id: ElementId) {
        if self.element(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Creates a new element of `kind`, appends it to the front of the stack,
    /// and selects it.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        let element = Element::new(id, kind, self.elements.len());
        log::debug!("add {} element {}", kind.as_str(), id);
        self.elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Clones `id` with a fresh id, a +20/+20 offset, and a `" copy"` name
    /// suffix, appends the clone to the front, and selects it.
    pub fn duplicate(&mut self, id: ElementId) -> Option<ElementId> {
        let original = self.element(id)?;
        let copy_id = ElementId::new(self.next_id);
        let copy = original.duplicated(copy_id, self.elements.len());
        self.next_id += 1;
        log::debug!("duplicate element {} as {}", id, copy_id);
        self.elements.push(copy);
        self.selected = Some(copy_id);
        Some(copy_id)
    }

    /// Removes `id` from the stack, clearing the selection if it pointed at
    /// the removed element.
    pub fn remove(&mut self, id: ElementId) {
        if let Some(index) = self.index_of(id) {
            log::debug!("remove element {}", id);
            self.elements.remove(index);
            if self.selected == Some(id) {
                self.selected = None;
            }
            self.renumber();
        }
    }

    /// Swaps `id` with its stack neighbor in `direction`. Returns whether a
    /// swap happened; hitting the stack boundary is a no-op.
    pub fn move_layer(&mut self, id: ElementId, direction: LayerDirection) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let new_index = index as isize + direction.offset();
        if new_index < 0 || new_index as usize >= self.elements.len() {
            return false;
        }
        self.elements.swap(index, new_index as usize);
        self.renumber();
        true
    }

    /// Drops every element, clears the selection, and resets the id counter.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.selected = None;
        self.next_id = 1;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_enabled = !self.grid_enabled;
    }

    /// Replaces the element stack, used when restoring a history snapshot.
    /// The selection is kept only if its element survives.
    pub fn restore(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        if let Some(id) = self.selected {
            if self.element(id).is_none() {
                self.selected = None;
            }
        }
    }

    /// Replaces the whole design, used when loading a saved document.
    pub fn load(&mut self, elements: Vec<Element>, next_id: u64) {
        self.elements = elements;
        self.next_id = next_id.max(1);
        self.selected = None;
    }

    // Reassign every z-index to its positional index.
    fn renumber(&mut self) {
        for (index, element) in self.elements.iter_mut().enumerate() {
            element.z_index = index;
        }
    }
}
