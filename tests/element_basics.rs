use eframe_designer::element::{normalize_rotation, Element, ElementId, ElementKind};

fn rectangle(id: u64) -> Element {
    Element::new(ElementId::new(id), ElementKind::Rectangle, 0)
}

#[test]
fn test_rectangle_defaults() {
    let el = rectangle(1);
    assert_eq!(el.name, "Rectangle 1");
    assert_eq!(el.kind, ElementKind::Rectangle);
    assert_eq!((el.x, el.y), (50.0, 50.0));
    assert_eq!((el.width, el.height), (150.0, 100.0));
    assert_eq!(el.rotation, 0.0);
    assert_eq!((el.scale_x, el.scale_y), (1.0, 1.0));
    assert_eq!(el.text, "");
    assert_eq!(el.z_index, 0);
}

#[test]
fn test_text_defaults() {
    let el = Element::new(ElementId::new(4), ElementKind::Text, 2);
    assert_eq!(el.name, "Text 4");
    assert_eq!((el.width, el.height), (200.0, 60.0));
    assert_eq!(el.text, "Text");
    assert_eq!(el.z_index, 2);
}

#[test]
fn test_rotation_normalization() {
    assert_eq!(normalize_rotation(370.0), 10.0);
    assert_eq!(normalize_rotation(-30.0), 330.0);
    assert_eq!(normalize_rotation(360.0), 0.0);
    assert_eq!(normalize_rotation(0.0), 0.0);
    assert_eq!(normalize_rotation(720.0 + 45.0), 45.0);
}

#[test]
fn test_set_rotation_wraps() {
    let mut el = rectangle(1);
    el.set_rotation(370.0);
    assert_eq!(el.rotation, 10.0);
    el.set_rotation(-30.0);
    assert_eq!(el.rotation, 330.0);
}

#[test]
fn test_rotate_quarter_steps_backwards() {
    let mut el = rectangle(1);
    el.set_rotation(45.0);
    el.rotate_quarter();
    el.rotate_quarter();
    // Two quarter turns are original - 180, wrapped into [0, 360).
    assert_eq!(el.rotation, 225.0);
}

#[test]
fn test_flips_toggle_scale_signs() {
    let mut el = rectangle(1);
    el.flip_horizontal();
    assert_eq!(el.scale_x, -1.0);
    el.flip_horizontal();
    assert_eq!(el.scale_x, 1.0);
    el.flip_vertical();
    assert_eq!(el.scale_y, -1.0);
}

#[test]
fn test_duplicated_offsets_and_renames() {
    let original = rectangle(1);
    let copy = original.duplicated(ElementId::new(2), 1);
    assert_eq!(copy.id, ElementId::new(2));
    assert_eq!(copy.x, original.x + 20.0);
    assert_eq!(copy.y, original.y + 20.0);
    assert_eq!(copy.name, "Rectangle 1 copy");
    assert_eq!(copy.z_index, 1);
    // The original keeps its own id, position, and name.
    assert_eq!(original.id, ElementId::new(1));
    assert_eq!((original.x, original.y), (50.0, 50.0));
    assert_eq!(original.name, "Rectangle 1");
}

#[test]
fn test_element_id_display_and_parse() {
    let id = ElementId::new(7);
    assert_eq!(id.to_string(), "el-7");
    assert_eq!("el-7".parse::<ElementId>().unwrap(), id);
    assert!("7".parse::<ElementId>().is_err());
    assert!("el-x".parse::<ElementId>().is_err());
}

#[test]
fn test_serialized_wire_format() {
    let el = rectangle(1);
    let value: serde_json::Value = serde_json::to_value(&el).unwrap();
    assert_eq!(value["id"], "el-1");
    assert_eq!(value["type"], "rectangle");
    assert_eq!(value["backgroundColor"], "#d9d9d9");
    assert_eq!(value["color"], "#d9d9d9");
    assert_eq!(value["scaleX"], 1.0);
    assert_eq!(value["zIndex"], 0);
    assert_eq!(value["x"], 50.0);
}

#[test]
fn test_serde_round_trip() {
    let mut el = Element::new(ElementId::new(3), ElementKind::Text, 1);
    el.set_rotation(90.0);
    el.flip_horizontal();
    el.text = "hello".to_owned();

    let json = serde_json::to_string(&el).unwrap();
    let back: Element = serde_json::from_str(&json).unwrap();
    assert_eq!(back, el);
}
