use std::fmt::Write as _;

use thiserror::Error;

use crate::element::{hex_color, Element, ElementKind};

/// Default file name for the JSON export.
pub const JSON_EXPORT_FILE: &str = "design.json";

/// Default file name for the static HTML export.
pub const HTML_EXPORT_FILE: &str = "design.html";

/// Errors that can occur while exporting a design.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize design: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Pretty-printed JSON array of the element stack, field-for-field the
/// saved wire format.
pub fn design_json(elements: &[Element]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(elements)?)
}

/// Minimal static HTML document with one absolutely positioned box per
/// element, styled inline with position, size, colors, rotation transform,
/// and z-index. Rectangles render empty; text elements emit their content.
pub fn design_html(elements: &[Element]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Exported Design</title>\n\
         <style>\n\
         body, html { margin: 0; padding: 0; background: #1e1e1e; }\n\
         .design-element { position: absolute; box-sizing: border-box; user-select: none; }\n\
         </style>\n\
         </head>\n\
         <body>\n",
    );

    for element in elements {
        let content = match element.kind {
            ElementKind::Text => escape_html(&element.text),
            ElementKind::Rectangle => String::new(),
        };
        let _ = writeln!(
            html,
            "<div class=\"design-element\" style=\"left: {x}px; top: {y}px; \
             width: {w}px; height: {h}px; background-color: {bg}; color: {color}; \
             transform: rotate({rot}deg); z-index: {z};\">{content}</div>",
            x = element.x,
            y = element.y,
            w = element.width,
            h = element.height,
            bg = hex_color::to_hex(element.background_color),
            color = hex_color::to_hex(element.color),
            rot = element.rotation,
            z = element.z_index,
        );
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Writes an export document to disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_export(path: &std::path::Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents)?;
    log::info!("exported design to {}", path.display());
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
