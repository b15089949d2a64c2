use eframe::egui::{self, vec2, Align2, Key};

use crate::editor::Editor;
use crate::element::ElementId;
use crate::panels;
use crate::persistence;
use crate::renderer::Renderer;

#[cfg(not(target_arch = "wasm32"))]
use crate::export;

/// The visual design canvas application: wires the panels and the keyboard
/// to the editor, and owns the transient UI state (rename-in-progress,
/// confirmation modal, status line).
pub struct DesignApp {
    pub(crate) editor: Editor,
    pub(crate) renderer: Renderer,
    pub(crate) renaming: Option<ElementId>,
    pub(crate) rename_buffer: String,
    pub(crate) rename_focus: bool,
    pub(crate) show_clear_confirm: bool,
    pub(crate) save_requested: bool,
    pub(crate) status: Option<String>,
}

impl DesignApp {
    /// Called once before the first frame; restores the saved design and the
    /// clipboard side channel from storage.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut editor = Editor::new();
        if let Some(storage) = cc.storage {
            if let Some(saved) = persistence::load_design(storage) {
                log::info!("loaded design with {} elements", saved.elements.len());
                saved.apply_to(&mut editor.document);
            }
            editor.set_clipboard(persistence::load_clipboard(storage));
        }
        Self {
            editor,
            renderer: Renderer::new(),
            renaming: None,
            rename_buffer: String::new(),
            rename_focus: false,
            show_clear_confirm: false,
            save_requested: false,
            status: None,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn export_json(&mut self) {
        let result = export::design_json(self.editor.document.elements()).and_then(|json| {
            export::write_export(std::path::Path::new(export::JSON_EXPORT_FILE), &json)
        });
        self.status = Some(match result {
            Ok(()) => format!("Exported {}", export::JSON_EXPORT_FILE),
            Err(err) => {
                log::error!("JSON export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn export_html(&mut self) {
        let html = export::design_html(self.editor.document.elements());
        let result = export::write_export(std::path::Path::new(export::HTML_EXPORT_FILE), &html);
        self.status = Some(match result {
            Ok(()) => format!("Exported {}", export::HTML_EXPORT_FILE),
            Err(err) => {
                log::error!("HTML export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn export_json(&mut self) {
        self.status = Some("Export is only available in the native build".to_owned());
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn export_html(&mut self) {
        self.status = Some("Export is only available in the native build".to_owned());
    }

    /// Selection-scoped shortcuts: copy, paste, delete, arrow nudges.
    /// Callers must ensure no text widget has keyboard focus.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if self.editor.document.selected_id().is_none() {
            return;
        }

        let (copy, paste, delete, shift, left, right, up, down) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(Key::C),
                i.modifiers.command && i.key_pressed(Key::V),
                i.key_pressed(Key::Delete),
                i.modifiers.shift,
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::ArrowDown),
            )
        });

        if copy {
            self.editor.copy_selected();
            return;
        }
        if paste {
            self.editor.paste();
            return;
        }
        if delete {
            self.editor.delete_selected();
            return;
        }

        let step = if shift { 10.0 } else { 5.0 };
        if left {
            self.editor.nudge(vec2(-step, 0.0));
        }
        if right {
            self.editor.nudge(vec2(step, 0.0));
        }
        if up {
            self.editor.nudge(vec2(0.0, -step));
        }
        if down {
            self.editor.nudge(vec2(0.0, step));
        }
    }

    fn clear_confirm_modal(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let mut confirmed = false;
        egui::Window::new("Clear canvas?")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("This removes every element and cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        confirmed = true;
                        self.show_clear_confirm = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_clear_confirm = false;
                    }
                });
            });

        if confirmed {
            self.editor.clear();
            // Drop the stored design too, like the original clear action.
            if let Some(storage) = frame.storage_mut() {
                if let Err(err) = persistence::save_design(storage, &self.editor.document) {
                    log::error!("failed to clear stored design: {err}");
                }
                storage.flush();
            }
            self.status = Some("Canvas cleared".to_owned());
        }
    }
}

impl eframe::App for DesignApp {
    /// Called by the framework to persist state before shutdown (and on its
    /// auto-save interval).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Err(err) = persistence::save_design(storage, &self.editor.document) {
            log::error!("failed to save design: {err}");
        }
        persistence::save_clipboard(storage, self.editor.clipboard());
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::layers_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::central_panel(self, ctx);

        if !ctx.wants_keyboard_input() {
            self.handle_keyboard(ctx);
        }

        if self.show_clear_confirm {
            self.clear_confirm_modal(ctx, frame);
        }

        if self.save_requested {
            self.save_requested = false;
            if let Some(storage) = frame.storage_mut() {
                match persistence::save_design(storage, &self.editor.document) {
                    Ok(()) => {
                        persistence::save_clipboard(storage, self.editor.clipboard());
                        storage.flush();
                        self.status = Some("Design saved".to_owned());
                    }
                    Err(err) => {
                        log::error!("failed to save design: {err}");
                        self.status = Some(format!("Save failed: {err}"));
                    }
                }
            } else {
                self.status = Some("No storage available".to_owned());
            }
        }
    }
}
