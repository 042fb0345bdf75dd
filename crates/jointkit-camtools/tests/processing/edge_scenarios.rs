//! Worked finger-joint examples

use jointkit_camtools::{EdgeShape, EdgeSizing, FingerJointEdge};
use jointkit_core::Dim;
use jointkit_geometry::Transform;
use proptest::prelude::*;

fn points(path: &jointkit_geometry::Path) -> Vec<(f64, f64)> {
    path.points().iter().map(|p| (p.x, p.y)).collect()
}

fn length_edge() -> FingerJointEdge {
    FingerJointEdge::as_length(
        Dim::mm(10.0, "finger"),
        Dim::count(2.0, "finger_count"),
        Dim::mm(5.0, "notch"),
        Dim::count(1.0, "notch_count"),
        Dim::mm(3.0, "thickness"),
        None,
    )
    .unwrap()
}

fn width_edge() -> FingerJointEdge {
    FingerJointEdge::as_width(
        Dim::mm(10.0, "finger"),
        Dim::count(2.0, "finger_count"),
        Dim::mm(5.0, "notch"),
        Dim::count(1.0, "notch_count"),
        Dim::mm(3.0, "thickness"),
        None,
    )
    .unwrap()
}

#[test]
fn test_profile_points() {
    let path = length_edge().make_path().unwrap();
    assert_eq!(
        points(&path),
        vec![
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 3.0),
            (15.0, 3.0),
            (15.0, 0.0),
            (25.0, 0.0)
        ]
    );
}

#[test]
fn test_profile_rotated_and_shifted() {
    let edge = length_edge();
    let path = edge.make_path().unwrap();

    let rotated = path.transform(&Transform::rotate_90());
    assert_eq!(
        points(&rotated),
        vec![
            (0.0, 0.0),
            (0.0, 10.0),
            (-3.0, 10.0),
            (-3.0, 15.0),
            (0.0, 15.0),
            (0.0, 25.0)
        ]
    );

    let placed = path.transform(&Transform::compose(&[
        Transform::shift_x(edge.length()),
        Transform::rotate_90(),
    ]));
    assert_eq!(
        points(&placed),
        vec![
            (25.0, 0.0),
            (25.0, 10.0),
            (22.0, 10.0),
            (22.0, 15.0),
            (25.0, 15.0),
            (25.0, 25.0)
        ]
    );
}

#[test]
fn test_complement_lengths_per_orientation() {
    let l = length_edge();
    assert_eq!(l.as_positive().length(), 25.0);
    assert_eq!(l.as_negative().length(), 19.0);
    assert_eq!(l.as_positive().length() - l.as_negative().length(), 6.0);

    let w = width_edge();
    assert_eq!(w.as_positive().length(), w.as_negative().length());
}

#[test]
fn test_sized_from_target_length() {
    let solution = FingerJointEdge::create_i(
        &Dim::mm(42.0, "length"),
        2,
        &Dim::mm(3.0, "t"),
        EdgeSizing::Count(3),
        None,
    )
    .unwrap();
    let edge = solution.edge;
    assert!(solution.rounding.is_none());
    assert_eq!(edge.full_length(), 42.0);
    assert_eq!(edge.length(), 42.0);
    assert_eq!(edge.as_negative().length(), 36.0);
}

#[test]
fn test_invalid_counts_rejected() {
    let make = |fc: f64, nc: f64| {
        FingerJointEdge::new(
            Dim::mm(5.0, "f"),
            Dim::count(fc, "fc"),
            Dim::mm(5.0, "n"),
            Dim::count(nc, "nc"),
            Dim::mm(3.0, "t"),
            None,
        )
    };
    assert!(make(3.0, 3.0).is_err());
    assert!(make(5.0, 3.0).is_err());
    assert!(make(3.0, 2.0).is_ok());
    assert!(make(2.0, 3.0).is_ok());
}

#[test]
fn test_holes_leave_only_rectangles() {
    let edge = FingerJointEdge::create_i(
        &Dim::mm(60.0, "length"),
        2,
        &Dim::mm(3.0, "t"),
        EdgeSizing::Count(4),
        None,
    )
    .unwrap()
    .edge;
    let holes = edge.as_holes_edge();
    let path = holes.make_path().unwrap();

    // every hole is four cut segments closing on themselves
    let real: Vec<_> = path.real_lines().collect();
    assert_eq!(real.len(), 4 * holes.hole_count());
    for rect in real.chunks(4) {
        assert!((rect[0].start.x - rect[3].end.x).abs() < 1e-9);
        assert_eq!(rect[0].start.y, rect[3].end.y);
    }
}

proptest! {
    #[test]
    fn switch_type_is_an_involution(fc in 1u32..12, more in any::<bool>(), f in 4u32..20, n in 4u32..20) {
        let nc = if more { fc + 1 } else { fc - 1 };
        let edge = FingerJointEdge::new(
            Dim::mm(f as f64, "f"),
            Dim::count(fc as f64, "fc"),
            Dim::mm(n as f64, "n"),
            Dim::count(nc as f64, "nc"),
            Dim::mm(3.0, "t"),
            Some(Dim::mm(0.1, "kerf")),
        ).unwrap();
        prop_assert_eq!(edge.switch_type().switch_type(), edge.clone());
        prop_assert_eq!(edge.as_positive().is_positive_edge(), true);
        prop_assert_eq!(edge.as_negative().is_positive_edge(), false);
    }
}
