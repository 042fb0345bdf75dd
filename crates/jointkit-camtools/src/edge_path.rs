//! Edge placement
//!
//! An [`EdgePathBuilder`] draws an edge and then runs its placement steps in
//! the order they were added. Faces concatenate the placed edges into one
//! outline.

use jointkit_core::Result;
use jointkit_geometry::{Path, Transform};

use crate::edge::{Edge, EdgeShape};

/// Step applied to a freshly built path
#[derive(Debug, Clone, PartialEq)]
pub enum PathStep {
    Transform(Transform),
    Reverse,
}

impl PathStep {
    /// Run the step on a path owned by the caller
    pub fn apply(&self, path: Path) -> Path {
        match self {
            PathStep::Transform(t) => path.transform(t),
            PathStep::Reverse => {
                let mut path = path;
                path.reverse_in_place();
                path
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgePathBuilder {
    edge: Edge,
    steps: Vec<PathStep>,
    allow_connecting_line: bool,
}

impl EdgePathBuilder {
    pub fn new(edge: impl Into<Edge>) -> Self {
        Self {
            edge: edge.into(),
            steps: Vec::new(),
            allow_connecting_line: false,
        }
    }

    pub fn edge(&self) -> &Edge {
        &self.edge
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Outside length of the wrapped edge
    pub fn length(&self) -> f64 {
        self.edge.length()
    }

    pub fn allows_connecting_line(&self) -> bool {
        self.allow_connecting_line
    }

    /// Append the product of `transforms` (rightmost applied first)
    pub fn add_transform(&mut self, transforms: &[Transform]) -> &mut Self {
        self.steps
            .push(PathStep::Transform(Transform::compose(transforms)));
        self
    }

    pub fn reverse_path(&mut self) -> &mut Self {
        self.steps.push(PathStep::Reverse);
        self
    }

    /// Let the face bridge a gap before this edge with a construction segment
    pub fn allow_concat(&mut self) -> &mut Self {
        self.allow_connecting_line = true;
        self
    }

    pub fn with_transform(mut self, transforms: &[Transform]) -> Self {
        self.add_transform(transforms);
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_path();
        self
    }

    pub fn allowing_concat(mut self) -> Self {
        self.allow_concat();
        self
    }

    pub fn build(&self) -> Result<Path> {
        let path = self.edge.make_path()?;
        Ok(self.steps.iter().fold(path, |p, step| step.apply(p)))
    }
}
