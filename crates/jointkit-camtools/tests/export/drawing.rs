//! End-to-end drawing output

use jointkit_camtools::{
    faces_to_json, layout_faces, BoxDesign, BoxDrawing, BoxParameters, SimpleBox, TopStyle,
};
use tempfile::TempDir;

fn simple_box() -> SimpleBox {
    let edges = BoxParameters::default().edges().unwrap();
    SimpleBox::from_edges(
        edges.length,
        edges.width,
        edges.height,
        edges.thickness,
        edges.kerf,
        Vec::new(),
        TopStyle::Straight,
    )
}

#[test]
fn test_save_svg() {
    let faces = simple_box().build().unwrap();
    let mut drawing = BoxDrawing::default();
    for (name, path) in layout_faces(&faces, 10.0) {
        drawing.add(path, name);
    }
    assert_eq!(drawing.len(), 6);

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("box.svg");
    drawing.save(&file).unwrap();

    let svg = std::fs::read_to_string(&file).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<path ").count(), 6);
    assert!(svg.contains(r#"id="bottom_top1""#));
    assert!(svg.contains(r#"id="sides_left_right2""#));
    // the sketch offset of the front/back panel is a pen-up move
    assert!(svg.contains(" M "));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_write_to_buffer_matches_save() {
    let faces = simple_box().build().unwrap();
    let mut drawing = BoxDrawing::new(5.0);
    for (name, path) in layout_faces(&faces, 10.0) {
        drawing.add(path, name);
    }
    let mut buf = Vec::new();
    drawing.write_to(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), drawing.to_svg().unwrap());
}

#[test]
fn test_json_dump() {
    let b = simple_box();
    let faces = b.build().unwrap();
    let json = faces_to_json(&faces, b.user_parameters()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["faces"].as_array().map(|a| a.len()), Some(3));
    assert_eq!(value["faces"][1]["plane"], "XZ");
}
