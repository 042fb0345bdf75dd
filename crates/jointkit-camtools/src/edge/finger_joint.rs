//! Finger-joint edge
//!
//! A finger-joint edge alternates fingers (tabs standing out by the material
//! thickness) and notches. A positive edge has one finger more than notches
//! and starts with a finger; its complement, obtained with
//! [`FingerJointEdge::switch_type`], starts with a notch.
//!
//! Shortened orientations (see [`EdgeType::full_length`]) trim the first and
//! last element by the thickness of the perpendicular wall. Kerf compensation
//! only applies to negative edges: fingers shrink by the kerf, interior
//! notches grow by it and the end notches grow by half of it.

use jointkit_core::{Dim, JointError, Result};
use jointkit_geometry::Path;
use tracing::{debug, warn};

use super::holes::FingerJointHolesEdge;
use super::sizing::{count_n_a, ratio_b_a};
use super::types::{CountRounding, EdgeSizing, EdgeType};
use super::EdgeShape;

/// Solved counts closer than this to an integer are not reported as rounded
const COUNT_EPSILON: f64 = 1e-9;

/// Kind of a horizontal run along the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Finger,
    Notch,
}

/// One horizontal element of the tab profile
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub kind: RunKind,
    pub dim: Dim,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FingerJointEdge {
    finger: Dim,
    finger_count: Dim,
    notch: Dim,
    notch_count: Dim,
    thickness: Dim,
    kerf: Option<Dim>,
    edge_type: EdgeType,
}

/// Result of sizing an edge from its target length
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSolution {
    pub edge: FingerJointEdge,
    /// Set when the finger count had to be rounded
    pub rounding: Option<CountRounding>,
}

impl FingerJointEdge {
    /// Edge with the generic `Other` orientation.
    ///
    /// Finger and notch counts must differ by exactly one.
    pub fn new(
        finger: Dim,
        finger_count: Dim,
        notch: Dim,
        notch_count: Dim,
        thickness: Dim,
        kerf: Option<Dim>,
    ) -> Result<Self> {
        let fc = finger_count.int_value();
        let nc = notch_count.int_value();
        let invalid = |reason: &str| JointError::InvalidEdgeConfiguration {
            finger_count: fc,
            notch_count: nc,
            reason: reason.to_string(),
        };
        if fc == nc {
            return Err(invalid("finger and notch count cannot be equal"));
        }
        if (fc - nc).abs() > 1 {
            return Err(invalid(
                "finger and notch count must be off by one in either direction",
            ));
        }
        if fc < 0 || nc < 0 {
            return Err(invalid("counts cannot be negative"));
        }
        for other in std::iter::once(&notch)
            .chain(std::iter::once(&thickness))
            .chain(kerf.as_ref())
        {
            if !finger.same_unit(other) {
                return Err(JointError::UnitMismatch {
                    op: "edge".to_string(),
                    lhs: finger.unit.clone(),
                    rhs: other.unit.clone(),
                });
            }
        }
        let edge_type = if fc > nc {
            EdgeType::OtherPositive
        } else {
            EdgeType::OtherNegative
        };
        Ok(Self {
            finger,
            finger_count,
            notch,
            notch_count,
            thickness,
            kerf,
            edge_type,
        })
    }

    fn with_orientation(
        finger: Dim,
        finger_count: Dim,
        notch: Dim,
        notch_count: Dim,
        thickness: Dim,
        kerf: Option<Dim>,
        positive: EdgeType,
    ) -> Result<Self> {
        let mut edge = Self::new(finger, finger_count, notch, notch_count, thickness, kerf)?;
        edge.edge_type = positive.with_sign(edge.is_positive_edge());
        Ok(edge)
    }

    /// Edge along the box length (I+ / I-)
    pub fn as_length(
        finger: Dim,
        finger_count: Dim,
        notch: Dim,
        notch_count: Dim,
        thickness: Dim,
        kerf: Option<Dim>,
    ) -> Result<Self> {
        Self::with_orientation(
            finger,
            finger_count,
            notch,
            notch_count,
            thickness,
            kerf,
            EdgeType::IPositive,
        )
    }

    /// Edge along the box width (II+ / II-)
    pub fn as_width(
        finger: Dim,
        finger_count: Dim,
        notch: Dim,
        notch_count: Dim,
        thickness: Dim,
        kerf: Option<Dim>,
    ) -> Result<Self> {
        Self::with_orientation(
            finger,
            finger_count,
            notch,
            notch_count,
            thickness,
            kerf,
            EdgeType::IIPositive,
        )
    }

    /// Edge along the box height (III+ / III-)
    pub fn as_height(
        finger: Dim,
        finger_count: Dim,
        notch: Dim,
        notch_count: Dim,
        thickness: Dim,
        kerf: Option<Dim>,
    ) -> Result<Self> {
        Self::with_orientation(
            finger,
            finger_count,
            notch,
            notch_count,
            thickness,
            kerf,
            EdgeType::IIIPositive,
        )
    }

    /// Edge with equal finger and notch size and `finger_count` fingers.
    ///
    /// The counts are named after `length` (`N_<name>` and `N_<name> -1`).
    /// A negative `e_type` yields the complement of the positive edge.
    pub fn create_by_length(
        e_type: EdgeType,
        length: &Dim,
        finger_notch_size: &Dim,
        finger_count: u32,
        thickness: &Dim,
        kerf: Option<Dim>,
    ) -> Result<Self> {
        let count = length.new_with_name_prefix_unit(finger_count as f64, "N", "");
        let notch_count = notch_count_for(&count);
        let edge = Self::new(
            finger_notch_size.clone(),
            count,
            finger_notch_size.clone(),
            notch_count,
            thickness.clone(),
            kerf,
        )?;
        edge.oriented(e_type)
    }

    /// Edge sized from its target `length` with finger length `k_factor * t`.
    ///
    /// With [`EdgeSizing::Count`] the notch length is solved exactly. With
    /// [`EdgeSizing::Ratio`] the solved finger count is rounded; the deviation
    /// is logged and returned in [`EdgeSolution::rounding`].
    pub fn create_by_length_relative(
        e_type: EdgeType,
        length: &Dim,
        k_factor: u32,
        thickness: &Dim,
        sizing: EdgeSizing,
        kerf: Option<Dim>,
    ) -> Result<EdgeSolution> {
        let (finger_count, ratio, exact) = match sizing {
            EdgeSizing::Count(n) => (n, ratio_b_a(length.value, n, k_factor, thickness.value)?, None),
            EdgeSizing::Ratio(r) => {
                let exact = count_n_a(length.value, r, k_factor, thickness.value)?;
                let rounded = exact.round();
                if rounded < 2.0 {
                    return Err(JointError::unsolvable(format!(
                        "solved finger count {:.3} is below 2 for length {}",
                        exact, length.value
                    )));
                }
                (rounded as u32, r, Some(exact))
            }
        };

        let a = k_factor as f64 * thickness.value;
        let finger = length.new_with_name_prefix(a, "a");
        let count = length.new_with_name_prefix_unit(finger_count as f64, "N", "");
        let notch = length.new_with_name_prefix(ratio * a, "b");
        let notch_count = notch_count_for(&count);

        let edge = Self::new(finger, count, notch, notch_count, thickness.clone(), kerf)?
            .oriented(e_type)?;
        debug!(
            "sized {} edge '{}': {} fingers of {:.3}, notch {:.3}",
            edge.edge_type, length.name, finger_count, a, ratio * a
        );

        let rounding = exact
            .filter(|exact| (exact - finger_count as f64).abs() > COUNT_EPSILON)
            .map(|exact| CountRounding {
                target_length: length.value,
                exact_count: exact,
                rounded_count: finger_count,
                realized_length: edge.full_length(),
            });
        if let Some(r) = &rounding {
            warn!("{}", r);
        }

        Ok(EdgeSolution { edge, rounding })
    }

    /// Positive I edge sized from its target length
    pub fn create_i(
        length: &Dim,
        k_factor: u32,
        thickness: &Dim,
        sizing: EdgeSizing,
        kerf: Option<Dim>,
    ) -> Result<EdgeSolution> {
        Self::create_by_length_relative(EdgeType::IPositive, length, k_factor, thickness, sizing, kerf)
    }

    /// Positive II edge sized from its target length
    pub fn create_ii(
        length: &Dim,
        k_factor: u32,
        thickness: &Dim,
        sizing: EdgeSizing,
        kerf: Option<Dim>,
    ) -> Result<EdgeSolution> {
        Self::create_by_length_relative(EdgeType::IIPositive, length, k_factor, thickness, sizing, kerf)
    }

    /// Positive III edge sized from its target length
    pub fn create_iii(
        length: &Dim,
        k_factor: u32,
        thickness: &Dim,
        sizing: EdgeSizing,
        kerf: Option<Dim>,
    ) -> Result<EdgeSolution> {
        Self::create_by_length_relative(EdgeType::IIIPositive, length, k_factor, thickness, sizing, kerf)
    }

    /// Apply `e_type` to a freshly built positive edge
    fn oriented(mut self, e_type: EdgeType) -> Result<Self> {
        if e_type.is_positive() {
            self.set_edge_type(e_type)?;
            Ok(self)
        } else {
            self.set_edge_type(e_type.negated())?;
            Ok(self.switch_type())
        }
    }

    /// Replace the orientation tag; its sign must match the edge
    pub fn set_edge_type(&mut self, e_type: EdgeType) -> Result<()> {
        if e_type.is_positive() != self.is_positive_edge() {
            return Err(JointError::EdgeTypeMismatch {
                requested: e_type.to_string(),
                actual: self.edge_type.to_string(),
            });
        }
        self.edge_type = e_type;
        Ok(())
    }

    pub fn finger(&self) -> &Dim {
        &self.finger
    }

    pub fn finger_count(&self) -> &Dim {
        &self.finger_count
    }

    pub fn notch(&self) -> &Dim {
        &self.notch
    }

    pub fn notch_count(&self) -> &Dim {
        &self.notch_count
    }

    pub fn thickness(&self) -> &Dim {
        &self.thickness
    }

    pub fn kerf(&self) -> Option<&Dim> {
        self.kerf.as_ref()
    }

    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    /// More fingers than notches
    pub fn is_positive_edge(&self) -> bool {
        self.finger_count.int_value() > self.notch_count.int_value()
    }

    /// Complement: fingers and notches swap roles and the tag is negated
    pub fn switch_type(&self) -> FingerJointEdge {
        FingerJointEdge {
            finger: self.notch.clone(),
            finger_count: self.notch_count.clone(),
            notch: self.finger.clone(),
            notch_count: self.finger_count.clone(),
            thickness: self.thickness.clone(),
            kerf: self.kerf.clone(),
            edge_type: self.edge_type.negated(),
        }
    }

    pub fn as_positive(&self) -> FingerJointEdge {
        if self.is_positive_edge() {
            self.clone()
        } else {
            self.switch_type()
        }
    }

    pub fn as_negative(&self) -> FingerJointEdge {
        if self.is_positive_edge() {
            self.switch_type()
        } else {
            self.clone()
        }
    }

    pub fn as_holes_edge(&self) -> FingerJointHolesEdge {
        FingerJointHolesEdge::from_finger_joint_edge(self)
    }

    /// Negative edges with a kerf get kerf compensation
    fn kerf_compensated(&self) -> Option<&Dim> {
        if self.is_positive_edge() {
            None
        } else {
            self.kerf.as_ref()
        }
    }

    /// Finger length, for an end element when `first_last` is set
    pub fn get_finger(&self, first_last: bool) -> Result<Dim> {
        match self.kerf_compensated() {
            Some(kerf) => self.finger.sub_dim(kerf),
            None if first_last && !self.edge_type.full_length() => {
                self.finger.sub_dim(&self.thickness)
            }
            None => Ok(self.finger.clone()),
        }
    }

    /// Notch length, for an end element when `first_last` is set
    pub fn get_notch(&self, first_last: bool) -> Result<Dim> {
        let full = self.edge_type.full_length();
        match self.kerf_compensated() {
            Some(kerf) if first_last && !full => self
                .notch
                .sub_dim(&self.thickness)?
                .add_dim(&kerf.div_by(2.0)),
            Some(kerf) if first_last => self.notch.add_dim(&kerf.div_by(2.0)),
            Some(kerf) => self.notch.add_dim(kerf),
            None if first_last && !full => self.notch.sub_dim(&self.thickness),
            None => Ok(self.notch.clone()),
        }
    }

    /// Number of finger/notch repetitions before the closing run
    pub fn rep_count(&self) -> i64 {
        if self.is_positive_edge() {
            self.finger_count.int_value() - 1
        } else {
            self.finger_count.int_value()
        }
    }

    /// Horizontal runs from start to end.
    ///
    /// An edge with a single outer element gets the end correction applied
    /// at both of its ends.
    pub fn runs(&self) -> Result<Vec<Run>> {
        let positive = self.is_positive_edge();
        let (outer_kind, inner_kind) = if positive {
            (RunKind::Finger, RunKind::Notch)
        } else {
            (RunKind::Notch, RunKind::Finger)
        };
        let outer = |first_last| {
            if positive {
                self.get_finger(first_last)
            } else {
                self.get_notch(first_last)
            }
        };
        let inner = if positive {
            self.get_notch(false)?
        } else {
            self.get_finger(false)?
        };

        let reps = self.rep_count();
        if reps == 0 {
            return Ok(vec![Run {
                kind: outer_kind,
                dim: self.single_outer(outer(true)?)?,
            }]);
        }

        let mut runs = Vec::with_capacity(2 * reps as usize + 1);
        for i in 0..reps {
            runs.push(Run {
                kind: outer_kind,
                dim: outer(i == 0)?,
            });
            runs.push(Run {
                kind: inner_kind,
                dim: inner.clone(),
            });
        }
        runs.push(Run {
            kind: outer_kind,
            dim: outer(true)?,
        });
        Ok(runs)
    }

    /// Second end correction for an edge made of one outer element
    fn single_outer(&self, end: Dim) -> Result<Dim> {
        let mut dim = end;
        if !self.edge_type.full_length() {
            dim = dim.sub_dim(&self.thickness)?;
        }
        if let Some(kerf) = self.kerf_compensated() {
            dim = dim.add_dim(&kerf.div_by(2.0))?;
        }
        Ok(dim)
    }

    /// Corrected run lengths from start to end, without the quantity names.
    ///
    /// Uses the same arithmetic as [`FingerJointEdge::runs`], so the values
    /// are bit-identical to the drawn runs. Units were checked at
    /// construction and cannot change afterwards.
    pub fn run_lengths(&self) -> Vec<f64> {
        let positive = self.is_positive_edge();
        let full = self.edge_type.full_length();
        let t = self.thickness.value;
        let kerf = self.kerf_compensated().map(|k| k.value);

        let finger = |first_last: bool| match kerf {
            Some(k) => self.finger.value - k,
            None if first_last && !full => self.finger.value - t,
            None => self.finger.value,
        };
        let notch = |first_last: bool| match kerf {
            Some(k) if first_last && !full => (self.notch.value - t) + k / 2.0,
            Some(k) if first_last => self.notch.value + k / 2.0,
            Some(k) => self.notch.value + k,
            None if first_last && !full => self.notch.value - t,
            None => self.notch.value,
        };
        let outer = |first_last| {
            if positive {
                finger(first_last)
            } else {
                notch(first_last)
            }
        };
        let inner = if positive { notch(false) } else { finger(false) };

        let reps = self.rep_count();
        if reps == 0 {
            let mut single = outer(true);
            if !full {
                single -= t;
            }
            if let Some(k) = kerf {
                single += k / 2.0;
            }
            return vec![single];
        }

        let mut lengths = Vec::with_capacity(2 * reps as usize + 1);
        for i in 0..reps {
            lengths.push(outer(i == 0));
            lengths.push(inner);
        }
        lengths.push(outer(true));
        lengths
    }
}

fn notch_count_for(count: &Dim) -> Dim {
    Dim::count(count.value - 1.0, format!("{} -1", count.name))
}

impl EdgeShape for FingerJointEdge {
    /// Outside measurement: sum of all corrected runs
    fn length(&self) -> f64 {
        self.run_lengths().iter().sum()
    }

    /// Nominal length without thickness or kerf correction
    fn full_length(&self) -> f64 {
        self.finger_count.value * self.finger.value + self.notch_count.value * self.notch.value
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        let (up, down) = if self.is_positive_edge() {
            (self.thickness.clone(), -&self.thickness)
        } else {
            (-&self.thickness, self.thickness.clone())
        };
        let runs = self.runs()?;
        let last = runs.len() - 1;
        for (i, run) in runs.iter().enumerate() {
            path.h_dim(&run.dim)?;
            if i == last {
                break;
            }
            if i % 2 == 0 {
                path.v_dim(&up)?;
            } else {
                path.v_dim(&down)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(finger: f64, fc: f64, notch: f64, nc: f64, t: f64) -> (Dim, Dim, Dim, Dim, Dim) {
        (
            Dim::mm(finger, "finger"),
            Dim::count(fc, "finger_c"),
            Dim::mm(notch, "notch"),
            Dim::count(nc, "notch_c"),
            Dim::mm(t, "thickness"),
        )
    }

    fn length_edge(finger: f64, fc: f64, notch: f64, nc: f64, t: f64) -> FingerJointEdge {
        let (f, fcd, n, ncd, td) = dims(finger, fc, notch, nc, t);
        FingerJointEdge::as_length(f, fcd, n, ncd, td, None).unwrap()
    }

    #[test]
    fn test_default_type_follows_sign() {
        let (f, fc, n, nc, t) = dims(4.0, 10.0, 3.0, 9.0, 3.0);
        let e = FingerJointEdge::new(f, fc, n, nc, t, None).unwrap();
        assert_eq!(e.edge_type(), EdgeType::OtherPositive);
        assert!(e.is_positive_edge());
    }

    #[test]
    fn test_invalid_counts() {
        let (f, fc, n, _, t) = dims(10.0, 10.0, 10.0, 10.0, 3.0);
        let err = FingerJointEdge::new(f.clone(), fc.clone(), n.clone(), fc.clone(), t.clone(), None)
            .unwrap_err();
        assert!(matches!(err, JointError::InvalidEdgeConfiguration { .. }));

        let err =
            FingerJointEdge::new(f, fc, n, Dim::count(12.0, "nc"), t, None).unwrap_err();
        assert!(err.to_string().contains("off by one"));
    }

    #[test]
    fn test_orientation_constructors() {
        let (f, fc, n, nc, t) = dims(10.0, 6.0, 10.0, 5.0, 3.0);
        let p = FingerJointEdge::as_width(f.clone(), fc.clone(), n.clone(), nc.clone(), t.clone(), None)
            .unwrap();
        assert_eq!(p.edge_type(), EdgeType::IIPositive);
        let neg = FingerJointEdge::as_width(n, nc, f, fc, t, None).unwrap();
        assert_eq!(neg.edge_type(), EdgeType::IINegative);
        assert_eq!(p.as_negative(), neg);
        assert_eq!(neg.as_positive(), p);
    }

    #[test]
    fn test_tab_profile_points() {
        let e = length_edge(10.0, 2.0, 5.0, 1.0, 3.0);
        let p = e.make_path().unwrap();
        let pts: Vec<(f64, f64)> = p.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            pts,
            vec![(0.0, 0.0), (10.0, 0.0), (10.0, 3.0), (15.0, 3.0), (15.0, 0.0), (25.0, 0.0)]
        );
        assert_eq!(e.length(), 25.0);
    }

    #[test]
    fn test_negative_profile_goes_down() {
        let e = length_edge(10.0, 2.0, 5.0, 1.0, 3.0).as_negative();
        let p = e.make_path().unwrap();
        let ys: Vec<f64> = p.points().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 0.0, -3.0, -3.0, 0.0, 0.0]);
        // 10 - 3 at both ends around one 5 finger
        assert_eq!(e.length(), 19.0);
        assert_eq!(p.location().map(|p| p.x), Some(19.0));
    }

    #[test]
    fn test_kerf_names_and_values() {
        let (f, fc, n, nc, t) = dims(10.0, 3.0, 5.0, 2.0, 2.0);
        let e = FingerJointEdge::as_length(f, fc, n, nc, t, Some(Dim::mm(0.1, "kerf"))).unwrap();
        assert!(e.is_positive_edge());
        assert_eq!(e.get_finger(true).unwrap(), Dim::mm(10.0, "finger"));
        assert_eq!(e.get_finger(false).unwrap(), Dim::mm(10.0, "finger"));
        assert_eq!(e.get_notch(true).unwrap(), Dim::mm(5.0, "notch"));

        let e2 = e.as_negative();
        assert!(!e2.is_positive_edge());
        assert_eq!(
            e2.get_notch(true).unwrap(),
            Dim::mm(10.0 - 2.0 + 0.05, "(finger - thickness) + kerf/2")
        );
        assert_eq!(e2.get_notch(false).unwrap(), Dim::mm(10.0 + 0.1, "finger + kerf"));
        assert_eq!(e2.get_finger(true).unwrap(), Dim::mm(5.0 - 0.1, "notch - kerf"));
        assert_eq!(e2.get_finger(false).unwrap(), Dim::mm(5.0 - 0.1, "notch - kerf"));

        assert!((e.length() - (e2.length() + 4.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_finger_corrected_at_both_ends() {
        let (f, fc, n, nc, t) = dims(20.0, 1.0, 5.0, 0.0, 3.0);
        let e = FingerJointEdge::as_height(f, fc, n, nc, t, None).unwrap();
        assert_eq!(e.length(), 14.0);
        let p = e.make_path().unwrap();
        assert_eq!(p.line_count(), 1);
        assert_eq!(p.location().map(|p| p.x), Some(14.0));
    }

    #[test]
    fn test_create_i_lengths() {
        let s = FingerJointEdge::create_i(
            &Dim::mm(42.0, "l"),
            2,
            &Dim::mm(3.0, "t"),
            EdgeSizing::Count(3),
            None,
        )
        .unwrap();
        assert!(s.rounding.is_none());
        let e = s.edge;
        assert_eq!(e.edge_type(), EdgeType::IPositive);
        assert!((e.full_length() - 42.0).abs() < 1e-9);
        assert!((e.length() - 42.0).abs() < 1e-9);
        assert_eq!(e.finger().name, "a_l");
        assert_eq!(e.notch().name, "b_l");
        assert_eq!(e.finger_count().name, "N_l");
        assert_eq!(e.notch_count().name, "N_l -1");
        assert_eq!(e.notch_count().unit, "");

        let n = e.as_negative();
        assert!((n.full_length() - 42.0).abs() < 1e-9);
        assert!((n.length() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_create_ii_and_iii_lengths() {
        let l = Dim::mm(42.0, "l");
        let t = Dim::mm(3.0, "t");
        let ii = FingerJointEdge::create_ii(&l, 2, &t, EdgeSizing::Count(3), None)
            .unwrap()
            .edge;
        assert!((ii.length() - 42.0).abs() < 1e-9);
        assert!((ii.as_negative().length() - 42.0).abs() < 1e-9);

        let iii = FingerJointEdge::create_iii(&l, 2, &t, EdgeSizing::Count(3), None)
            .unwrap()
            .edge;
        assert!((iii.full_length() - 42.0).abs() < 1e-9);
        assert!((iii.length() - 36.0).abs() < 1e-9);
        assert!((iii.as_negative().length() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_sizing_reports_rounding() {
        let l = Dim::mm(45.0, "l");
        let t = Dim::mm(3.0, "t");
        let s = FingerJointEdge::create_i(&l, 2, &t, EdgeSizing::Ratio(2.0), None).unwrap();
        let r = s.rounding.expect("45 is not reachable with ratio 2");
        assert_eq!(r.rounded_count, 3);
        assert!((r.realized_length - 42.0).abs() < 1e-9);
        assert!((r.length_deviation() + 3.0).abs() < 1e-9);

        let exact = FingerJointEdge::create_i(&Dim::mm(42.0, "l"), 2, &t, EdgeSizing::Ratio(2.0), None)
            .unwrap();
        assert!(exact.rounding.is_none());
    }

    #[test]
    fn test_negative_request_yields_complement() {
        let e = FingerJointEdge::create_by_length(
            EdgeType::IINegative,
            &Dim::mm(50.0, "w"),
            &Dim::mm(10.0, "size"),
            3,
            &Dim::mm(3.0, "t"),
            None,
        )
        .unwrap();
        assert_eq!(e.edge_type(), EdgeType::IINegative);
        assert!(!e.is_positive_edge());
        assert_eq!(e.finger_count().value, 2.0);
    }

    #[test]
    fn test_set_edge_type_checks_sign() {
        let mut e = length_edge(10.0, 2.0, 5.0, 1.0, 3.0);
        let err = e.set_edge_type(EdgeType::IIINegative).unwrap_err();
        assert!(matches!(err, JointError::EdgeTypeMismatch { .. }));
        e.set_edge_type(EdgeType::IIIPositive).unwrap();
        assert_eq!(e.edge_type(), EdgeType::IIIPositive);
    }

    #[test]
    fn test_kerf_in_other_unit_is_rejected() {
        let (f, fc, n, nc, t) = dims(10.0, 3.0, 5.0, 2.0, 2.0);
        let err = FingerJointEdge::as_length(n, nc, f, fc, t, Some(Dim::new(0.1, "kerf", "m")))
            .unwrap_err();
        assert!(matches!(err, JointError::UnitMismatch { .. }));
    }

    #[test]
    fn test_full_length_negative_end_with_kerf() {
        let kerf = Dim::mm(0.2, "kerf");
        let ii = FingerJointEdge::create_ii(
            &Dim::mm(42.0, "w"),
            2,
            &Dim::mm(3.0, "t"),
            EdgeSizing::Count(3),
            Some(kerf.clone()),
        )
        .unwrap()
        .edge;
        let neg = ii.as_negative();
        assert_eq!(neg.edge_type(), EdgeType::IINegative);

        let end = neg.get_notch(true).unwrap();
        assert_eq!(end.value, neg.notch().value + 0.1);
        assert!((neg.length() - ii.full_length()).abs() < 1e-9);

        // not full length: the thickness comes off the kerfed end as well
        let iii = FingerJointEdge::create_iii(
            &Dim::mm(42.0, "h"),
            2,
            &Dim::mm(3.0, "t"),
            EdgeSizing::Count(3),
            Some(kerf),
        )
        .unwrap()
        .edge
        .as_negative();
        let end = iii.get_notch(true).unwrap();
        assert_eq!(end.value, (iii.notch().value - 3.0) + 0.1);
        assert!((iii.length() - (iii.full_length() - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_length_is_drawn_end_for_every_orientation() {
        let kerfs = [None, Some(Dim::mm(0.15, "kerf"))];
        for kerf in kerfs {
            for count in [2u32, 3] {
                let sizing = EdgeSizing::Count(count);
                let l = Dim::mm(37.0, "l");
                let t = Dim::mm(3.0, "t");
                let edges = [
                    FingerJointEdge::create_i(&l, 2, &t, sizing, kerf.clone()).unwrap().edge,
                    FingerJointEdge::create_ii(&l, 2, &t, sizing, kerf.clone()).unwrap().edge,
                    FingerJointEdge::create_iii(&l, 2, &t, sizing, kerf.clone()).unwrap().edge,
                ];
                for e in edges.iter().flat_map(|e| [e.clone(), e.switch_type()]) {
                    let drawn: Vec<f64> = e.runs().unwrap().iter().map(|r| r.dim.value).collect();
                    assert_eq!(e.run_lengths(), drawn, "{}", e.edge_type());
                    let end = e.make_path().unwrap().location().map(|p| p.x);
                    assert_eq!(end, Some(e.length()), "{}", e.edge_type());
                }
            }
        }
    }
}
