//! Simple box
//!
//! Six panels in three pairs. Bottom and top carry the positive length and
//! width edges, so the fingers of the walls sit inside them. Front and back
//! are drawn in the XZ plane and mirrored, with the sketch origin offset by
//! the thickness so their joints line up with the bottom. The sides are
//! turned upright and walked the other way.

use jointkit_core::{Dim, Result};
use jointkit_geometry::{Constraint, Plane, Transform};
use serde::{Deserialize, Serialize};

use crate::edge::FingerJointEdge;
use crate::face::{ConstraintProvider, Face};

use super::BoxDesign;

/// Shape of the front, back and side tops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopStyle {
    /// Finger joints all around
    #[default]
    Joined,
    /// Plain top edge for an open box
    Straight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBox {
    length: FingerJointEdge,
    width: FingerJointEdge,
    height: FingerJointEdge,
    thickness: Dim,
    kerf: Option<Dim>,
    bottom_top: Face,
    front_back: Face,
    left_right: Face,
    user_parameters: Vec<Constraint>,
}

impl SimpleBox {
    /// Box with one finger size everywhere and `N - 1` notches per edge.
    ///
    /// The finger and notch quantities become user parameters named
    /// `l_finger`, `l_notch`, `w_finger`, ... so a CAD consumer can drive them.
    pub fn equal_from_finger_count(
        length_finger_count: &Dim,
        width_finger_count: &Dim,
        height_finger_count: &Dim,
        finger_size: f64,
        thickness: Dim,
        kerf: Option<Dim>,
        top: TopStyle,
    ) -> Result<Self> {
        let sizes = |prefix: &str| {
            (
                Dim::mm(finger_size, format!("{}_finger", prefix)),
                Dim::mm(finger_size, format!("{}_notch", prefix)),
            )
        };
        let (l_finger, l_notch) = sizes("l");
        let (w_finger, w_notch) = sizes("w");
        let (h_finger, h_notch) = sizes("h");

        let mut user_parameters: Vec<Constraint> = [
            &l_finger, &l_notch, &w_finger, &w_notch, &h_finger, &h_notch, &thickness,
        ]
        .into_iter()
        .map(Constraint::user_parameter)
        .collect();
        user_parameters.extend(kerf.iter().map(Constraint::user_parameter));

        let length = FingerJointEdge::as_length(
            l_finger,
            length_finger_count.clone(),
            l_notch,
            length_finger_count.new_relative(-1.0, "length_finger_count - 1"),
            thickness.clone(),
            kerf.clone(),
        )?;
        let width = FingerJointEdge::as_width(
            w_finger,
            width_finger_count.clone(),
            w_notch,
            width_finger_count.new_relative(-1.0, "width_finger_count - 1"),
            thickness.clone(),
            kerf.clone(),
        )?;
        let height = FingerJointEdge::as_height(
            h_finger,
            height_finger_count.clone(),
            h_notch,
            height_finger_count.new_relative(-1.0, "height_finger_count - 1"),
            thickness.clone(),
            kerf.clone(),
        )?;

        Ok(Self::from_edges(
            length,
            width,
            height,
            thickness,
            kerf,
            user_parameters,
            top,
        ))
    }

    pub fn from_edges(
        length: FingerJointEdge,
        width: FingerJointEdge,
        height: FingerJointEdge,
        thickness: Dim,
        kerf: Option<Dim>,
        user_parameters: Vec<Constraint>,
        top: TopStyle,
    ) -> Self {
        let bottom_top = Face::full_joint_face(
            "bottom_top",
            Plane::XY,
            length.as_positive(),
            width.as_positive(),
        )
        .with_providers(ConstraintProvider::standard(None));

        let mut front_back = wall(
            top,
            "front_back",
            Plane::XZ,
            length.as_negative(),
            height.as_negative(),
        )
        .with_providers(ConstraintProvider::standard(Some(thickness.clone())));
        // mirrored into the CAD frame, joints aligned with the bottom
        front_back.add_post_transform(&[
            Transform::shift_x(thickness.value),
            Transform::reflect_x(),
        ]);

        let mut left_right = wall(
            top,
            "sides_left_right",
            Plane::YZ,
            width.as_negative(),
            height.as_positive(),
        )
        .with_providers(ConstraintProvider::standard(None));
        left_right
            .add_post_transform(&[Transform::rotate_90()])
            .add_post_reverse();

        Self {
            length,
            width,
            height,
            thickness,
            kerf,
            bottom_top,
            front_back,
            left_right,
            user_parameters,
        }
    }

    pub fn length(&self) -> &FingerJointEdge {
        &self.length
    }

    pub fn width(&self) -> &FingerJointEdge {
        &self.width
    }

    pub fn height(&self) -> &FingerJointEdge {
        &self.height
    }

    pub fn thickness(&self) -> &Dim {
        &self.thickness
    }

    pub fn kerf(&self) -> Option<&Dim> {
        self.kerf.as_ref()
    }

    pub fn bottom_top(&self) -> &Face {
        &self.bottom_top
    }

    pub fn front_back(&self) -> &Face {
        &self.front_back
    }

    pub fn left_right(&self) -> &Face {
        &self.left_right
    }
}

fn wall(top: TopStyle, name: &str, plane: Plane, e1: FingerJointEdge, e2: FingerJointEdge) -> Face {
    match top {
        TopStyle::Joined => Face::full_joint_face(name, plane, e1, e2),
        TopStyle::Straight => Face::straight_top_face(name, plane, e1, e2),
    }
}

impl BoxDesign for SimpleBox {
    fn faces(&self) -> Vec<&Face> {
        vec![&self.bottom_top, &self.front_back, &self.left_right]
    }

    fn user_parameters(&self) -> &[Constraint] {
        &self.user_parameters
    }
}
