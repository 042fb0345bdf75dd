//! # Box designs
//!
//! A box design wires finger-joint edges into named faces. Building a design
//! runs every face through its outline, post steps and constraint providers
//! and hands the resulting [`FacePath`]s to the exporters.

pub mod params;
pub mod simple_box;
pub mod stackable_box;

use jointkit_core::Result;
use jointkit_geometry::{Constraint, Path, Plane};
use serde::Serialize;
use tracing::debug;

use crate::face::Face;

pub use params::{BoxEdges, BoxParameters};
pub use simple_box::{SimpleBox, TopStyle};
pub use stackable_box::StackableBox;

/// Finished outline of one face
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacePath {
    pub name: String,
    pub plane: Plane,
    /// Number of identical panels to cut
    pub copies: u32,
    pub path: Path,
}

pub trait BoxDesign {
    /// Faces in build order
    fn faces(&self) -> Vec<&Face>;

    /// Panels to cut per face, aligned with [`BoxDesign::faces`]
    fn copies(&self, _face: &Face) -> u32 {
        2
    }

    /// Named free parameters of the design
    fn user_parameters(&self) -> &[Constraint] {
        &[]
    }

    fn build_face(&self, face: &Face) -> Result<Path> {
        face.build_path()
    }

    fn build(&self) -> Result<Vec<FacePath>> {
        self.faces()
            .into_iter()
            .map(|face| {
                let path = self.build_face(face)?;
                debug!(
                    "face '{}': {} points, {} constraints",
                    face.name(),
                    path.len(),
                    path.constraints().len()
                );
                Ok(FacePath {
                    name: face.name().to_string(),
                    plane: face.plane(),
                    copies: self.copies(face),
                    path,
                })
            })
            .collect()
    }
}
