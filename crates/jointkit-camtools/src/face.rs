//! # Faces
//!
//! A face is one panel of a box. Its outline is assembled from four placed
//! edges (bottom, right, top, left, walked counterclockwise from the origin),
//! then moved into its final position by post-path steps and annotated by the
//! constraint providers.
//!
//! ```text
//!            top (p3, reversed)
//!        +-----------------------+
//!   left |                       | right
//!   (p4) |                       | (p2)
//!        +-----------------------+
//!      origin    bottom (p1)
//! ```

pub mod providers;

use jointkit_core::{JointError, Result};
use jointkit_geometry::{Path, Plane, Transform};
use tracing::debug;

use crate::edge::{Edge, EdgeShape, StraightLineEdge};
use crate::edge_path::{EdgePathBuilder, PathStep};

pub use providers::ConstraintProvider;

/// Ordered list of placed edges that concatenate into one outline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacePathBuilder {
    builders: Vec<EdgePathBuilder>,
}

impl FacePathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_builders(builders: Vec<EdgePathBuilder>) -> Self {
        Self { builders }
    }

    pub fn builders(&self) -> &[EdgePathBuilder] {
        &self.builders
    }

    pub fn add(&mut self, builder: EdgePathBuilder) -> &mut Self {
        self.builders.push(builder);
        self
    }

    pub fn last_mut(&mut self) -> Option<&mut EdgePathBuilder> {
        self.builders.last_mut()
    }

    /// Stand the last edge up at the end of the previous one
    pub fn left_side_transform(&mut self) -> Result<&mut Self> {
        let previous = self.previous_length("left side")?;
        self.place_last(|b| {
            b.add_transform(&[Transform::shift_x(previous), Transform::rotate_90()]);
        })
    }

    /// Mirror the last edge onto the top, at the height of the previous one
    pub fn top_side_transform(&mut self) -> Result<&mut Self> {
        let previous = self.previous_length("top side")?;
        self.place_last(|b| {
            b.add_transform(&[Transform::shift_y(previous), Transform::reflect_x()])
                .reverse_path();
        })
    }

    /// Bring the last edge down the y axis back to the origin
    pub fn right_side_transform(&mut self) -> Result<&mut Self> {
        self.previous_length("right side")?;
        self.place_last(|b| {
            b.add_transform(&[Transform::rotate_90(), Transform::reflect_x()])
                .reverse_path();
        })
    }

    /// Concatenate the placed edges in order
    pub fn build(&self) -> Result<Path> {
        let mut path = Path::new();
        for (i, builder) in self.builders.iter().enumerate() {
            let piece = builder.build()?;
            debug!(
                "face piece {}: {} segments, connecting line allowed: {}",
                i,
                piece.line_count(),
                builder.allows_connecting_line()
            );
            path = path.concat(&piece, builder.allows_connecting_line())?;
        }
        Ok(path)
    }

    fn previous_length(&self, side: &str) -> Result<f64> {
        let n = self.builders.len();
        if n < 2 {
            return Err(JointError::empty_path(format!(
                "{} placement needs a previous edge",
                side
            )));
        }
        Ok(self.builders[n - 2].length())
    }

    fn place_last<F: FnOnce(&mut EdgePathBuilder)>(&mut self, f: F) -> Result<&mut Self> {
        let last = self
            .builders
            .last_mut()
            .ok_or_else(|| JointError::empty_path("no edge to place"))?;
        f(last);
        Ok(self)
    }
}

/// One named panel of a box
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    name: String,
    plane: Plane,
    builder: FacePathBuilder,
    post_steps: Vec<PathStep>,
    providers: Vec<ConstraintProvider>,
}

impl Face {
    pub fn new(name: impl Into<String>, plane: Plane, builder: FacePathBuilder) -> Self {
        Self {
            name: name.into(),
            plane,
            builder,
            post_steps: Vec::new(),
            providers: Vec::new(),
        }
    }

    /// Panel with finger joints on all four sides.
    ///
    /// `e1` runs along the bottom and the top, `e2` along the right and the
    /// left side.
    pub fn full_joint_face(
        name: impl Into<String>,
        plane: Plane,
        e1: impl Into<Edge>,
        e2: impl Into<Edge>,
    ) -> Self {
        let e1: Edge = e1.into();
        let e2: Edge = e2.into();
        let l1 = e1.length();
        let l2 = e2.length();

        let builder = FacePathBuilder::from_builders(vec![
            EdgePathBuilder::new(e1.clone()),
            EdgePathBuilder::new(e2.clone())
                .with_transform(&[Transform::shift_x(l1), Transform::rotate_90()]),
            EdgePathBuilder::new(e1)
                .with_transform(&[Transform::shift_y(l2), Transform::reflect_x()])
                .reversed(),
            EdgePathBuilder::new(e2)
                .with_transform(&[Transform::rotate_90(), Transform::reflect_x()])
                .reversed(),
        ]);
        Self::new(name, plane, builder)
    }

    /// Like [`Face::full_joint_face`] with a plain top edge
    pub fn straight_top_face(
        name: impl Into<String>,
        plane: Plane,
        e1: impl Into<Edge>,
        e2: impl Into<Edge>,
    ) -> Self {
        let e1: Edge = e1.into();
        let e2: Edge = e2.into();
        let l1 = e1.length();
        let l2 = e2.length();

        let builder = FacePathBuilder::from_builders(vec![
            EdgePathBuilder::new(e1),
            EdgePathBuilder::new(e2.clone())
                .with_transform(&[Transform::shift_x(l1), Transform::rotate_90()]),
            EdgePathBuilder::new(StraightLineEdge::new(l1))
                .with_transform(&[Transform::shift_y(l2), Transform::reflect_x()])
                .reversed(),
            EdgePathBuilder::new(e2)
                .with_transform(&[Transform::rotate_90(), Transform::reflect_x()])
                .reversed(),
        ]);
        Self::new(name, plane, builder)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn builder(&self) -> &FacePathBuilder {
        &self.builder
    }

    pub fn providers(&self) -> &[ConstraintProvider] {
        &self.providers
    }

    pub fn add_post_transform(&mut self, transforms: &[Transform]) -> &mut Self {
        self.post_steps
            .push(PathStep::Transform(Transform::compose(transforms)));
        self
    }

    pub fn add_post_reverse(&mut self) -> &mut Self {
        self.post_steps.push(PathStep::Reverse);
        self
    }

    pub fn add_provider(&mut self, provider: ConstraintProvider) -> &mut Self {
        self.providers.push(provider);
        self
    }

    pub fn with_providers(mut self, providers: Vec<ConstraintProvider>) -> Self {
        self.providers = providers;
        self
    }

    /// Outline, post steps, then constraint providers in order
    pub fn build_path(&self) -> Result<Path> {
        debug!("building face '{}' in plane {}", self.name, self.plane);
        let path = self.builder.build()?;
        let path = self.post_steps.iter().fold(path, |p, step| step.apply(p));
        self.providers
            .iter()
            .try_fold(path, |p, provider| provider.apply(p))
    }
}
