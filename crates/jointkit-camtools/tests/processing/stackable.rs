//! Stackable box walls

use jointkit_camtools::{BoxDesign, BoxParameters, StackableBox};

fn stackable() -> StackableBox {
    let edges = BoxParameters {
        length: 120.0,
        width: 90.0,
        height: 70.0,
        ..Default::default()
    }
    .edges()
    .unwrap();
    StackableBox::create(&edges.length, &edges.width, &edges.height).unwrap()
}

#[test]
fn test_walls_carry_holes_for_the_bottom() {
    let b = stackable();
    let faces = b.build().unwrap();
    let front = &faces[0];
    assert_eq!(front.name, "Front");

    // the bridge into the holes row and the moves between holes
    let construction = front.path.lines().iter().filter(|l| l.is_construction()).count();
    assert!(construction > 1);

    // holes sit inside the wall outline
    let (min, max) = front.path.bounding_box().unwrap();
    let hole_top = front
        .path
        .lines()
        .iter()
        .skip_while(|l| l.is_real())
        .map(|l| l.end.y)
        .fold(f64::MIN, f64::max);
    assert!(hole_top > min.y && hole_top < max.y);
}

#[test]
fn test_bottom_panel_is_closed() {
    let b = stackable();
    let bottom = b.build_face(b.bottom_face()).unwrap();
    assert!(bottom.is_closed());
    assert!(bottom.constraints().is_empty());
}

#[test]
fn test_rim_repeats_feet() {
    let b = stackable();
    let path = b.build_face(b.side_face()).unwrap();
    // two diagonals on the bottom feet, two on the rim
    let diagonals = path
        .lines()
        .iter()
        .filter(|l| !l.is_horizontal() && !l.is_vertical())
        .count();
    assert_eq!(diagonals, 4);
}
