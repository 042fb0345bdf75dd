//! Stackable box
//!
//! Open box whose walls stand on feet and carry the same feet profile on
//! their top rim, so a second box sits in the first one's rim. The bottom
//! panel is recessed: it slots into a row of mortise holes cut into the
//! front and side walls just above the feet.

use jointkit_core::{Dim, Result};
use jointkit_geometry::{Plane, Transform};
use tracing::debug;

use crate::edge::{EdgeShape, FingerJointEdge, StackableBottomTopEdge, StackableSideEdge};
use crate::edge_path::EdgePathBuilder;
use crate::face::{Face, FacePathBuilder};

use super::BoxDesign;

/// Foot length as a share of the box length
const STAND_LENGTH_FACTOR: f64 = 0.15;
/// Foot height as a share of the box length
const STAND_HEIGHT_FACTOR: f64 = 0.075;

#[derive(Debug, Clone, PartialEq)]
pub struct StackableBox {
    front_face: Face,
    side_face: Face,
    bottom_face: Face,
}

impl StackableBox {
    pub fn create(
        length: &FingerJointEdge,
        width: &FingerJointEdge,
        height: &FingerJointEdge,
    ) -> Result<Self> {
        // both walls use the foot height of the long side so the rims line up
        let stand_h = Dim::mm(STAND_HEIGHT_FACTOR * length.full_length(), "stand_h");
        let front_rim = rim_edge(length, &stand_h);
        let side_rim = rim_edge(width, &stand_h);
        front_rim.stand_notch()?;
        side_rim.stand_notch()?;
        debug!(
            "stackable box: stand height {:.3}, front feet {:.3}, side feet {:.3}",
            stand_h.value, front_rim.stand_l.value, side_rim.stand_l.value
        );

        let bottom_face = Face::full_joint_face(
            "Bottom",
            Plane::XY,
            length.as_negative(),
            width.as_negative(),
        );
        let front_face = wall_face(
            "Front",
            front_rim,
            StackableSideEdge::from_edge(&height.as_positive(), &stand_h),
            length,
        )?;
        let side_face = wall_face(
            "Side",
            side_rim,
            StackableSideEdge::from_edge(&height.as_negative(), &stand_h),
            width,
        )?;

        Ok(Self {
            front_face,
            side_face,
            bottom_face,
        })
    }

    pub fn front_face(&self) -> &Face {
        &self.front_face
    }

    pub fn side_face(&self) -> &Face {
        &self.side_face
    }

    pub fn bottom_face(&self) -> &Face {
        &self.bottom_face
    }
}

fn rim_edge(edge: &FingerJointEdge, stand_h: &Dim) -> StackableBottomTopEdge {
    let full = edge.full_length();
    StackableBottomTopEdge::new(
        Dim::mm(STAND_LENGTH_FACTOR * full, "stand_l"),
        stand_h.clone(),
        Dim::mm(full, "edge_length"),
    )
}

/// Feet at the bottom, lifted finger joints at the sides, the same feet
/// profile on the rim and the mortise row for the bottom panel
fn wall_face(
    name: &str,
    rim: StackableBottomTopEdge,
    side: StackableSideEdge,
    bottom_edge: &FingerJointEdge,
) -> Result<Face> {
    let side_length = side.length();
    let holes = bottom_edge.as_holes_edge();
    let holes_lift = rim.stand_h.value + holes.thickness().value;

    let mut fb = FacePathBuilder::new();
    fb.add(EdgePathBuilder::new(rim.clone()));
    fb.add(EdgePathBuilder::new(side.clone())).left_side_transform()?;
    // not mirrored: the rim repeats the feet so boxes stack
    fb.add(
        EdgePathBuilder::new(rim)
            .with_transform(&[Transform::shift_y(side_length)])
            .reversed(),
    );
    fb.add(EdgePathBuilder::new(side)).right_side_transform()?;
    fb.add(
        EdgePathBuilder::new(holes)
            .allowing_concat()
            .with_transform(&[Transform::shift_y(holes_lift)]),
    );
    Ok(Face::new(name, Plane::XZ, fb))
}

impl BoxDesign for StackableBox {
    fn faces(&self) -> Vec<&Face> {
        vec![&self.front_face, &self.side_face, &self.bottom_face]
    }

    fn copies(&self, face: &Face) -> u32 {
        if face.name() == self.bottom_face.name() {
            1
        } else {
            2
        }
    }
}
