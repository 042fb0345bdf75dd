//! # Edge generators
//!
//! An edge parameterizes one side of a face and draws its profile along the
//! positive x axis starting at the origin. Faces place the four sides with
//! transforms (see [`crate::edge_path`]).
//!
//! [`Edge`] is the closed set of variants used by the box catalog; every
//! variant implements [`EdgeShape`].

pub mod finger_joint;
pub mod holes;
pub mod sizing;
pub mod stackable;
pub mod straight;
pub mod types;

use jointkit_core::Result;
use jointkit_geometry::Path;

pub use finger_joint::{EdgeSolution, FingerJointEdge, Run, RunKind};
pub use holes::FingerJointHolesEdge;
pub use sizing::{count_n_a, ratio_b_a};
pub use stackable::{StackableBottomTopEdge, StackableSideEdge};
pub use straight::StraightLineEdge;
pub use types::{CountRounding, EdgeSizing, EdgeType};

pub trait EdgeShape {
    /// Outside measurement of the edge
    fn length(&self) -> f64;

    /// Nominal length before corner corrections
    fn full_length(&self) -> f64 {
        self.length()
    }

    /// Append the edge profile to `path`
    fn build_path(&self, path: &mut Path) -> Result<()>;

    /// Profile as a new path starting at the origin
    fn make_path(&self) -> Result<Path> {
        let mut path = Path::zero();
        self.build_path(&mut path)?;
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Edge {
    Straight(StraightLineEdge),
    FingerJoint(FingerJointEdge),
    Holes(FingerJointHolesEdge),
    StackableBottomTop(StackableBottomTopEdge),
    StackableSide(StackableSideEdge),
}

impl EdgeShape for Edge {
    fn length(&self) -> f64 {
        match self {
            Edge::Straight(e) => e.length(),
            Edge::FingerJoint(e) => e.length(),
            Edge::Holes(e) => e.length(),
            Edge::StackableBottomTop(e) => e.length(),
            Edge::StackableSide(e) => e.length(),
        }
    }

    fn full_length(&self) -> f64 {
        match self {
            Edge::Straight(e) => e.full_length(),
            Edge::FingerJoint(e) => e.full_length(),
            Edge::Holes(e) => e.full_length(),
            Edge::StackableBottomTop(e) => e.full_length(),
            Edge::StackableSide(e) => e.full_length(),
        }
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        match self {
            Edge::Straight(e) => e.build_path(path),
            Edge::FingerJoint(e) => e.build_path(path),
            Edge::Holes(e) => e.build_path(path),
            Edge::StackableBottomTop(e) => e.build_path(path),
            Edge::StackableSide(e) => e.build_path(path),
        }
    }
}

impl From<StraightLineEdge> for Edge {
    fn from(e: StraightLineEdge) -> Self {
        Edge::Straight(e)
    }
}

impl From<FingerJointEdge> for Edge {
    fn from(e: FingerJointEdge) -> Self {
        Edge::FingerJoint(e)
    }
}

impl From<FingerJointHolesEdge> for Edge {
    fn from(e: FingerJointHolesEdge) -> Self {
        Edge::Holes(e)
    }
}

impl From<StackableBottomTopEdge> for Edge {
    fn from(e: StackableBottomTopEdge) -> Self {
        Edge::StackableBottomTop(e)
    }
}

impl From<StackableSideEdge> for Edge {
    fn from(e: StackableSideEdge) -> Self {
        Edge::StackableSide(e)
    }
}
