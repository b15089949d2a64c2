use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::Document;
use crate::element::Element;

/// Storage slot holding the saved design.
pub const DESIGN_KEY: &str = "visual_editor";

/// Storage slot holding the clipboard side channel (one serialized element,
/// independent of the saved design).
pub const CLIPBOARD_KEY: &str = "element_clipboard";

/// Errors that can occur while saving a design.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize design: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The persisted design record: `{ "elements": [...], "nextId": n }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    pub elements: Vec<Element>,
    pub next_id: u64,
}

impl SavedDesign {
    pub fn from_document(document: &Document) -> Self {
        Self {
            elements: document.elements().to_vec(),
            next_id: document.next_id(),
        }
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces `document`'s element stack and id counter with this record.
    pub fn apply_to(self, document: &mut Document) {
        document.load(self.elements, self.next_id);
    }
}

/// Writes the design into the storage collaborator.
pub fn save_design(
    storage: &mut dyn eframe::Storage,
    document: &Document,
) -> Result<(), PersistenceError> {
    let json = SavedDesign::from_document(document).to_json()?;
    storage.set_string(DESIGN_KEY, json);
    Ok(())
}

/// Reads the saved design back. Returns `None` when nothing was saved or
/// the record does not parse; an unreadable record is logged and treated as
/// an empty canvas rather than an error.
pub fn load_design(storage: &dyn eframe::Storage) -> Option<SavedDesign> {
    let json = storage.get_string(DESIGN_KEY)?;
    match SavedDesign::from_json(&json) {
        Ok(design) => Some(design),
        Err(err) => {
            log::warn!("ignoring unreadable saved design: {err}");
            None
        }
    }
}

pub fn save_clipboard(storage: &mut dyn eframe::Storage, clipboard: Option<&str>) {
    if let Some(json) = clipboard {
        storage.set_string(CLIPBOARD_KEY, json.to_owned());
    }
}

pub fn load_clipboard(storage: &dyn eframe::Storage) -> Option<String> {
    storage.get_string(CLIPBOARD_KEY)
}
