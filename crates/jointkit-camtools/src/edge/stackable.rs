//! Edges of the stackable box
//!
//! The bottom and top of a stackable wall carry feet: the middle of the edge is
//! raised by `stand_h` between two feet of length `stand_l`, with 45 degree
//! chamfers. The side walls start with a straight run of `stand_h + t` that
//! lifts the finger joint above the feet.

use jointkit_core::{Dim, JointError, Result};
use jointkit_geometry::Path;

use super::finger_joint::FingerJointEdge;
use super::EdgeShape;

#[derive(Debug, Clone, PartialEq)]
pub struct StackableBottomTopEdge {
    pub stand_l: Dim,
    pub stand_h: Dim,
    pub edge_length: Dim,
}

impl StackableBottomTopEdge {
    pub fn new(stand_l: Dim, stand_h: Dim, edge_length: Dim) -> Self {
        Self {
            stand_l,
            stand_h,
            edge_length,
        }
    }

    /// Length of the raised middle section
    pub fn stand_notch(&self) -> Result<Dim> {
        let notch = self
            .edge_length
            .sub_dim(&(2.0 * &self.stand_l))?
            .sub_dim(&self.stand_h)?;
        if notch.value <= 0.0 {
            return Err(JointError::unsolvable(format!(
                "feet of {} and {} leave no room on an edge of {}",
                self.stand_l.value, self.stand_h.value, self.edge_length.value
            )));
        }
        Ok(notch)
    }
}

impl EdgeShape for StackableBottomTopEdge {
    /// End of the drawn profile, summed in drawing order
    fn length(&self) -> f64 {
        let l = self.stand_l.value;
        let half = self.stand_h.value / 2.0;
        let notch = self.edge_length.value - 2.0 * l - self.stand_h.value;
        l + half + notch + half + l
    }

    fn full_length(&self) -> f64 {
        self.edge_length.value
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        let half = self.stand_h.value / 2.0;
        let notch = self.stand_notch()?;
        path.h_dim(&self.stand_l)?
            .v(half)?
            .line_to_rel(half, half)?
            .h_dim(&notch)?
            .line_to_rel(half, -half)?
            .v(-half)?
            .h_dim(&self.stand_l)?;
        Ok(())
    }
}

/// Finger-joint edge lifted by a stand-off run at its start
#[derive(Debug, Clone, PartialEq)]
pub struct StackableSideEdge {
    edge: FingerJointEdge,
    stand_h: Dim,
}

impl StackableSideEdge {
    pub fn from_edge(edge: &FingerJointEdge, stand_h: &Dim) -> Self {
        Self {
            edge: edge.clone(),
            stand_h: stand_h.clone(),
        }
    }

    pub fn edge(&self) -> &FingerJointEdge {
        &self.edge
    }

    fn stand_off(&self) -> Result<Dim> {
        self.stand_h.add_dim(self.edge.thickness())
    }

    fn stand_off_value(&self) -> f64 {
        self.stand_h.value + self.edge.thickness().value
    }
}

impl EdgeShape for StackableSideEdge {
    fn length(&self) -> f64 {
        // same summation order as build_path so faces close exactly
        self.edge
            .run_lengths()
            .iter()
            .fold(self.stand_off_value(), |x, run| x + run)
    }

    fn full_length(&self) -> f64 {
        self.edge.full_length() + self.stand_off_value()
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        path.h_dim(self.stand_off()?)?;
        self.edge.build_path(path)
    }
}
