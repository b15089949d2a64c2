use egui::{pos2, vec2, Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minimum width/height of any element, in canvas units.
pub const MIN_ELEMENT_SIZE: f32 = 30.0;

/// Offset applied to a duplicated element so it does not cover the original.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// A unique, stable identifier for an element.
///
/// Ids come from the document's monotonic counter and are never reused, even
/// after the element is deleted. The serialized form is `"el-<n>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Gets the underlying counter value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// Error returned when parsing an element id from its serialized form.
#[derive(Debug, Error)]
#[error("invalid element id: {0:?}")]
pub struct ParseElementIdError(String);

impl FromStr for ElementId {
    type Err = ParseElementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("el-")
            .and_then(|n| n.parse().ok())
            .map(ElementId)
            .ok_or_else(|| ParseElementIdError(s.to_owned()))
    }
}

impl Serialize for ElementId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The kind of a design element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Text,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Text => "text",
        }
    }

    /// Label used for default element names and the layers panel.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Text => "Text",
        }
    }

    fn default_size(&self) -> Vec2 {
        match self {
            ElementKind::Rectangle => vec2(150.0, 100.0),
            ElementKind::Text => vec2(200.0, 60.0),
        }
    }

    fn default_background(&self) -> Color32 {
        match self {
            ElementKind::Rectangle => Color32::from_rgb(0xd9, 0xd9, 0xd9),
            ElementKind::Text => Color32::from_rgb(0x00, 0x00, 0x00),
        }
    }
}

/// A positioned, styled design object on the canvas.
///
/// Serialized field names match the saved-design wire format (camelCase, with
/// `kind` stored as `type` and colors as `"#rrggbb"` strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Display label, user-editable from the layers panel.
    pub name: String,
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Top-left corner, canvas-local.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees, kept in `[0, 360)`.
    pub rotation: f32,
    /// Horizontal flip flag, `1.0` or `-1.0`.
    pub scale_x: f32,
    /// Vertical flip flag, `1.0` or `-1.0`.
    pub scale_y: f32,
    #[serde(with = "hex_color")]
    pub background_color: Color32,
    #[serde(with = "hex_color")]
    pub color: Color32,
    /// Text content; meaningful for text elements, empty for rectangles.
    pub text: String,
    /// Position in the layer stack; the document keeps this dense `0..N-1`.
    pub z_index: usize,
}

impl Element {
    /// Creates an element with the default geometry and styling for `kind`.
    pub fn new(id: ElementId, kind: ElementKind, z_index: usize) -> Self {
        let size = kind.default_size();
        Self {
            name: format!("{} {}", kind.display_name(), id.value()),
            id,
            kind,
            x: 50.0,
            y: 50.0,
            width: size.x,
            height: size.y,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            background_color: kind.default_background(),
            color: Color32::from_rgb(0xd9, 0xd9, 0xd9),
            text: match kind {
                ElementKind::Text => "Text".to_owned(),
                ElementKind::Rectangle => String::new(),
            },
            z_index,
        }
    }

    pub fn position(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    /// The element's axis-aligned bounding rectangle (ignores rotation).
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    pub fn set_position(&mut self, pos: Pos2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.min.x;
        self.y = rect.min.y;
        self.width = rect.width();
        self.height = rect.height();
    }

    /// Sets the rotation, wrapping into `[0, 360)`.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = normalize_rotation(degrees);
    }

    /// Rotates by -90 degrees, wrapping into `[0, 360)`.
    pub fn rotate_quarter(&mut self) {
        self.rotation = normalize_rotation(self.rotation - 90.0);
    }

    pub fn flip_horizontal(&mut self) {
        self.scale_x = -self.scale_x;
    }

    pub fn flip_vertical(&mut self) {
        self.scale_y = -self.scale_y;
    }

    /// Builds the duplicate of this element: fresh id, offset position,
    /// `" copy"` name suffix. The original is left untouched.
    pub fn duplicated(&self, id: ElementId, z_index: usize) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.name = format!("{} copy", self.name);
        copy.z_index = z_index;
        copy
    }
}

/// Wraps a rotation in degrees into `[0, 360)`, so 370 becomes 10 and -30
/// becomes 330.
pub fn normalize_rotation(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Serde bridge between [`Color32`] and the `"#rrggbb"` strings of the saved
/// wire format.
pub(crate) mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn to_hex(color: Color32) -> String {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    }

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color32::from_hex(&hex)
            .map_err(|_| serde::de::Error::custom(format!("invalid color: {hex:?}")))
    }
}
