use crate::element::Element;

/// Linear, single-branch undo buffer of full-state snapshots.
///
/// Every committed mutation deep-copies the element stack into a new entry.
/// Committing while undone truncates the forward entries first, so there is
/// no redo across a newer commit.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Vec<Element>>,
    /// Number of snapshots up to and including the current one.
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a deep copy of `elements` as the new current entry,
    /// discarding any entries ahead of the cursor.
    pub fn commit(&mut self, elements: &[Element]) {
        self.snapshots.truncate(self.cursor);
        self.snapshots.push(elements.to_vec());
        self.cursor = self.snapshots.len();
    }

    /// Steps back one entry and returns the snapshot to restore, or `None`
    /// when there is nothing earlier to return to.
    pub fn undo(&mut self) -> Option<&[Element]> {
        if self.cursor > 1 {
            self.cursor -= 1;
            Some(&self.snapshots[self.cursor - 1])
        } else {
            None
        }
    }

    /// Steps forward one entry and returns the snapshot to restore, or
    /// `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&[Element]> {
        if self.cursor < self.snapshots.len() {
            self.cursor += 1;
            Some(&self.snapshots[self.cursor - 1])
        } else {
            None
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 1
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len()
    }

    /// Total number of entries, including any undone tail.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the current entry, or `None` before the first commit.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = 0;
    }
}
