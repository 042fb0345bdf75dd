use jointkit_core::{Dim, DimOp, JointError};
use proptest::prelude::*;

#[test]
fn chained_names_group_left_to_right() {
    let l = Dim::mm(100.0, "l");
    let t = Dim::mm(3.0, "t");
    let k = Dim::count(2.0, "k");

    let inner = l.sub_dim(&t).unwrap().sub_dim(&t).unwrap();
    assert_eq!(inner.name, "(l - t) - t");
    assert_eq!(inner.value, 94.0);

    let finger = k.mul_dim(&Dim::count(3.0, "t")).unwrap();
    assert_eq!(finger.name, "k * t");
    assert_eq!(finger.unit, "");
}

#[test]
fn result_keeps_left_unit() {
    let a = Dim::new(2.0, "a", "in");
    let b = Dim::new(3.0, "b", "in");
    let sum = a.add_dim(&b).unwrap();
    assert_eq!(sum.unit, "in");
}

#[test]
fn mismatch_is_reported_with_both_units() {
    let a = Dim::mm(1.0, "a");
    let n = Dim::count(3.0, "n");
    match a.combine(DimOp::Mul, &n) {
        Err(JointError::UnitMismatch { op, lhs, rhs }) => {
            assert_eq!(op, "*");
            assert_eq!(lhs, "mm");
            assert_eq!(rhs, "");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

proptest! {
    #[test]
    fn scalar_ops_match_plain_arithmetic(v in -1.0e6f64..1.0e6, s in -1.0e3f64..1.0e3) {
        let d = Dim::mm(v, "x");
        prop_assert_eq!((&d + s).value, v + s);
        prop_assert_eq!((&d - s).value, v - s);
        prop_assert_eq!((&d * s).value, v * s);
        prop_assert_eq!((s * &d).name, "x");
    }

    #[test]
    fn abs_equal_ignores_sign(v in -1.0e6f64..1.0e6) {
        let a = Dim::mm(v, "n");
        let b = Dim::mm(-v, "n");
        prop_assert!(a.abs_equal(&b));
        prop_assert_eq!(a.abs_key(), b.abs_key());
    }
}
