use jointkit_geometry::{Constraint, Path, Point, Transform};
use proptest::prelude::*;

fn tab_profile() -> Path {
    let mut p = Path::zero();
    p.h(10.0).unwrap().v(3.0).unwrap().h(5.0).unwrap().v(-3.0).unwrap().h(10.0).unwrap();
    p
}

fn coords(p: &Path) -> Vec<(f64, f64)> {
    p.points().iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn quarter_turn_of_tab_profile() {
    let p = tab_profile();
    let turned = p.transform(&Transform::rotate_90());
    assert_eq!(
        coords(&turned),
        vec![(0.0, 0.0), (0.0, 10.0), (-3.0, 10.0), (-3.0, 15.0), (0.0, 15.0), (0.0, 25.0)]
    );

    let shifted = p.transform(&Transform::compose(&[
        Transform::shift_x(25.0),
        Transform::rotate_90(),
    ]));
    assert_eq!(
        coords(&shifted),
        vec![(25.0, 0.0), (25.0, 10.0), (22.0, 10.0), (22.0, 15.0), (25.0, 15.0), (25.0, 25.0)]
    );
}

#[test]
fn transform_carries_constraints() {
    let mut p = tab_profile();
    let first = p.lines()[0].clone();
    p.append_constraint(Constraint::horizontal(&first));
    let turned = p.transform(&Transform::rotate_90());
    match &turned.constraints()[0] {
        Constraint::Horizontal { lines } => assert_eq!(lines[0], turned.lines()[0]),
        other => panic!("unexpected {}", other),
    }
}

proptest! {
    #[test]
    fn compose_matches_sequential_application(
        dx in -100i32..100,
        dy in -100i32..100,
        x in -50i32..50,
        y in -50i32..50,
    ) {
        let shift = Transform::shift(dx as f64, dy as f64);
        let composed = Transform::compose(&[shift, Transform::rotate_90(), Transform::reflect_x()]);
        let p = Point::new(x as f64, y as f64);
        let step = shift.apply_point(
            Transform::rotate_90().apply_point(Transform::reflect_x().apply_point(p)),
        );
        prop_assert_eq!(composed.apply_point(p), step);
    }
}
