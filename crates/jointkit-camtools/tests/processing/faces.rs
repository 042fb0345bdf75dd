//! Face assembly and box designs

use jointkit_camtools::{
    BoxDesign, BoxParameters, EdgePathBuilder, EdgeShape, Face, FacePathBuilder, FingerJointEdge, SimpleBox,
    StraightLineEdge, TopStyle,
};
use jointkit_core::{Dim, JointError};
use jointkit_geometry::{Plane, Point};
use proptest::prelude::*;

fn edge(f: f64, fc: f64, n: f64, t: f64, height: bool) -> FingerJointEdge {
    let args = (
        Dim::mm(f, "f"),
        Dim::count(fc, "fc"),
        Dim::mm(n, "n"),
        Dim::count(fc - 1.0, "nc"),
        Dim::mm(t, "t"),
        None,
    );
    if height {
        FingerJointEdge::as_height(args.0, args.1, args.2, args.3, args.4, args.5).unwrap()
    } else {
        FingerJointEdge::as_length(args.0, args.1, args.2, args.3, args.4, args.5).unwrap()
    }
}

#[test]
fn test_unplaced_edges_do_not_stitch() {
    let fb = FacePathBuilder::from_builders(vec![
        EdgePathBuilder::new(StraightLineEdge::new(10.0)),
        EdgePathBuilder::new(StraightLineEdge::new(10.0)),
    ]);
    let err = fb.build().unwrap_err();
    assert!(matches!(err, JointError::PathMismatch { .. }));
}

#[test]
fn test_connecting_line_when_allowed() {
    let fb = FacePathBuilder::from_builders(vec![
        EdgePathBuilder::new(StraightLineEdge::new(10.0)),
        EdgePathBuilder::new(StraightLineEdge::new(10.0)).allowing_concat(),
    ]);
    let path = fb.build().unwrap();
    assert_eq!(path.line_count(), 3);
    assert!(path.lines()[1].is_construction());
    assert_eq!(path.lines()[1].end, Point::origin());
}

#[test]
fn test_simple_box_from_parameters() {
    let edges = BoxParameters::default().edges().unwrap();
    let simple = SimpleBox::from_edges(
        edges.length,
        edges.width,
        edges.height,
        edges.thickness,
        edges.kerf,
        Vec::new(),
        TopStyle::Joined,
    );
    let faces = simple.build().unwrap();
    let names: Vec<_> = faces.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["bottom_top", "front_back", "sides_left_right"]);
    assert_eq!(faces[0].plane, Plane::XY);
    assert_eq!(faces[1].plane, Plane::XZ);
    assert_eq!(faces[2].plane, Plane::YZ);

    for face in &faces {
        let kinds: Vec<_> = face.path.constraints().iter().map(|c| c.name()).collect();
        assert!(kinds.contains(&"perpendicular"), "{}", face.name);
        assert!(kinds.contains(&"equal"), "{}", face.name);
        assert!(kinds.contains(&"origin_lock"), "{}", face.name);
        assert!(
            matches!(kinds.last(), Some(&"horizontal") | Some(&"vertical")),
            "{}",
            face.name
        );
    }
}

#[test]
fn test_equality_grouping_leaves_one_quantity_per_group() {
    let simple = SimpleBox::equal_from_finger_count(
        &Dim::count(4.0, "length_finger_count"),
        &Dim::count(3.0, "width_finger_count"),
        &Dim::count(3.0, "height_finger_count"),
        8.0,
        Dim::mm(3.0, "thickness"),
        Some(Dim::mm(0.1, "kerf")),
        TopStyle::Straight,
    )
    .unwrap();
    let path = simple.build_face(simple.bottom_top()).unwrap();
    let mut keys = Vec::new();
    for line in path.real_lines() {
        if let Some(dim) = &line.dim {
            let key = dim.abs_key();
            assert!(!keys.contains(&key), "duplicate quantity {}", dim);
            keys.push(key);
        }
    }
}

#[test]
fn test_constraints_match_exported_segments() {
    let edges = BoxParameters::default().edges().unwrap();
    let simple = SimpleBox::from_edges(
        edges.length,
        edges.width,
        edges.height,
        edges.thickness,
        edges.kerf,
        Vec::new(),
        TopStyle::Joined,
    );
    for face in simple.build().unwrap() {
        for c in face.path.constraints() {
            for l in c.lines() {
                assert!(
                    face.path.lines().contains(l),
                    "{}: {} refers to {}",
                    face.name,
                    c,
                    l
                );
            }
        }
    }
}

#[test]
fn test_kerfed_full_joint_faces_close() {
    let params = BoxParameters {
        kerf: Some(0.2),
        ..BoxParameters::default()
    };
    let edges = params.edges().unwrap();
    let faces = [
        Face::full_joint_face(
            "sides",
            Plane::YZ,
            edges.width.as_negative(),
            edges.height.as_positive(),
        ),
        Face::full_joint_face(
            "front",
            Plane::XZ,
            edges.length.as_negative(),
            edges.height.as_negative(),
        ),
    ];
    for face in &faces {
        let path = face.build_path().unwrap();
        assert!(path.is_closed(), "{} is open", face.name());
    }
    // full-length II- edge keeps the nominal width
    assert!((edges.width.as_negative().length() - 80.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn full_joint_faces_close(
        fc1 in 2u32..7,
        fc2 in 2u32..7,
        f1 in 4u32..15,
        n1 in 4u32..15,
        f2 in 4u32..15,
        n2 in 4u32..15,
        flip in any::<bool>(),
    ) {
        let e1 = edge(f1 as f64, fc1 as f64, n1 as f64, 3.0, false);
        let e2 = edge(f2 as f64, fc2 as f64, n2 as f64, 3.0, true);
        let (e1, e2) = if flip { (e1.as_negative(), e2.as_negative()) } else { (e1, e2) };
        let path = Face::full_joint_face("panel", Plane::XY, e1, e2).build_path().unwrap();
        prop_assert!(path.is_closed());
        prop_assert!(path.lines().iter().all(|l| l.is_horizontal() || l.is_vertical()));
    }
}
