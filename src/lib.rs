#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod editor;
pub mod element;
pub mod export;
pub mod geometry;
pub mod history;
pub mod panels;
pub mod persistence;
pub mod renderer;

pub use app::DesignApp;
pub use document::{Document, LayerDirection};
pub use editor::{Editor, EditorState};
pub use element::{Element, ElementId, ElementKind, MIN_ELEMENT_SIZE};
pub use geometry::{Alignment, Corner};
pub use history::History;
pub use persistence::SavedDesign;
pub use renderer::Renderer;
