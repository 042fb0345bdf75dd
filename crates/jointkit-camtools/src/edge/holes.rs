use jointkit_core::{Dim, Result};
use jointkit_geometry::Path;

use super::finger_joint::{FingerJointEdge, RunKind};
use super::EdgeShape;

/// Row of mortise holes matching a finger-joint edge.
///
/// Every notch of the wrapped edge becomes a closed `notch x thickness`
/// rectangle. The fingers in between turn into construction moves, so the
/// only cut segments are the holes themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct FingerJointHolesEdge {
    edge: FingerJointEdge,
}

impl FingerJointHolesEdge {
    pub fn from_finger_joint_edge(edge: &FingerJointEdge) -> Self {
        Self { edge: edge.clone() }
    }

    pub fn edge(&self) -> &FingerJointEdge {
        &self.edge
    }

    pub fn thickness(&self) -> &Dim {
        self.edge.thickness()
    }

    pub fn switch_type(&self) -> Self {
        Self {
            edge: self.edge.switch_type(),
        }
    }

    /// Number of holes the row produces.
    ///
    /// One hole per notch of the wrapped edge: the holes sit where the mating
    /// panel's fingers go, and on the wrapped positive edge those are the gaps
    /// between its fingers. For a positive edge of `N` fingers that is `N - 1`.
    pub fn hole_count(&self) -> usize {
        let n = self.edge.notch_count().int_value();
        n.max(0) as usize
    }

    fn hole(&self, path: &mut Path) -> Result<()> {
        let notch = self.edge.get_notch(false)?;
        let thickness = self.edge.thickness();
        path.h_dim(&notch)?
            .v_dim(thickness)?
            .h_dim(-&notch)?
            .v_dim(-thickness)?
            .h_dim(&notch)?
            .mark_last_as_construction()?;
        Ok(())
    }
}

impl EdgeShape for FingerJointHolesEdge {
    fn length(&self) -> f64 {
        self.edge.length()
    }

    fn full_length(&self) -> f64 {
        self.edge.full_length()
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        for run in self.edge.runs()? {
            match run.kind {
                RunKind::Notch => self.hole(path)?,
                RunKind::Finger => {
                    path.h_dim(&run.dim)?.mark_last_as_construction()?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeSizing;

    #[test]
    fn test_holes_of_positive_edge() {
        let edge = FingerJointEdge::create_i(
            &Dim::mm(42.0, "l"),
            2,
            &Dim::mm(3.0, "t"),
            EdgeSizing::Count(3),
            None,
        )
        .unwrap()
        .edge;
        let holes = edge.as_holes_edge();
        assert_eq!(holes.hole_count(), 2);
        assert_eq!(holes.hole_count() as i64, edge.notch_count().int_value());
        let p = holes.make_path().unwrap();
        // 3 construction fingers + 2 holes of 5 segments each
        assert_eq!(p.line_count(), 13);
        assert_eq!(p.real_lines().count(), 8);
        assert_eq!(p.location().map(|p| p.x), Some(42.0));
    }
}
