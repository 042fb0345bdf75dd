use jointkit_core::Dim;
use jointkit_geometry::{Constraint, Path, Point};
use proptest::prelude::*;

/// Axis-aligned staircase from `start` built from non-zero steps
fn staircase(start: Point, steps: &[(i32, i32)]) -> Path {
    let mut p = Path::starting_at(start);
    for (i, (dx, dy)) in steps.iter().enumerate() {
        p.h_dim(Dim::mm(*dx as f64, format!("dx{}", i))).unwrap();
        p.v(*dy as f64).unwrap();
    }
    p
}

fn step() -> impl Strategy<Value = (i32, i32)> {
    let non_zero = (-20i32..20).prop_filter("non-zero", |v| *v != 0);
    (non_zero.clone(), non_zero)
}

proptest! {
    #[test]
    fn reverse_is_an_involution(steps in prop::collection::vec(step(), 1..8)) {
        let mut p = staircase(Point::origin(), &steps);
        if let Some(first) = p.lines().first().cloned() {
            p.append_constraint(Constraint::origin_lock(&first));
        }
        prop_assert_eq!(p.reverse().reverse(), p.clone());

        let mut q = p.clone();
        q.reverse_in_place();
        q.reverse_in_place();
        prop_assert_eq!(q, p);
    }

    #[test]
    fn concat_is_associative(
        a in prop::collection::vec(step(), 1..5),
        b in prop::collection::vec(step(), 1..5),
        c in prop::collection::vec(step(), 1..5),
    ) {
        let pa = staircase(Point::origin(), &a);
        let pb = staircase(pa.location().unwrap(), &b);
        let pc = staircase(pb.location().unwrap(), &c);

        let left = pa.concat(&pb, false).unwrap().concat(&pc, false).unwrap();
        let right = pa.concat(&pb.concat(&pc, false).unwrap(), false).unwrap();
        prop_assert_eq!(left.points(), right.points());
        prop_assert_eq!(left.lines(), right.lines());
        prop_assert_eq!(left.line_count() + 1, left.len());
    }

    #[test]
    fn reverse_keeps_quantities(steps in prop::collection::vec(step(), 1..8)) {
        let p = staircase(Point::origin(), &steps);
        let r = p.reverse();
        let forward: Vec<_> = p.lines().iter().map(|l| l.dim.clone()).collect();
        let mut backward: Vec<_> = r.lines().iter().map(|l| l.dim.clone()).collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}

#[test]
fn concat_does_not_touch_inputs() {
    let mut a = Path::zero();
    a.h(4.0).unwrap();
    let mut b = Path::starting_at(Point::new(4.0, 0.0));
    b.v(2.0).unwrap();
    let joined = a.concat(&b, false).unwrap();
    assert_eq!(joined.len(), 3);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);
}
