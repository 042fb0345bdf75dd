use jointkit_core::{Dim, JointError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::point::{Orientation, Point};
use crate::transform::Transform;

/// A straight segment of a [`crate::Path`].
///
/// Construction segments are guide lines that are not cut; the exporter turns
/// them into pen-up moves. The optional [`Dim`] records the quantity the
/// segment was drawn from so constraints can refer back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    #[serde(default)]
    pub construction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<Dim>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Result<Self> {
        if start == end {
            return Err(JointError::ZeroLengthSegment {
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self {
            start,
            end,
            construction: false,
            dim: None,
        })
    }

    pub fn with_dim(mut self, dim: Option<Dim>) -> Self {
        self.dim = dim;
        self
    }

    pub fn as_construction(mut self) -> Self {
        self.construction = true;
        self
    }

    pub fn is_construction(&self) -> bool {
        self.construction
    }

    pub fn is_real(&self) -> bool {
        !self.construction
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else if self.is_vertical() {
            Orientation::Vertical
        } else {
            Orientation::Other
        }
    }

    /// Shared coordinate of an axis-aligned segment: y for horizontal, x for vertical
    pub fn level(&self) -> Option<f64> {
        match self.orientation() {
            Orientation::Horizontal => Some(self.start.y),
            Orientation::Vertical => Some(self.start.x),
            Orientation::Other => None,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    /// Exact perpendicularity test on the direction vectors
    pub fn is_perpendicular_to(&self, other: &Line) -> bool {
        let a = self.direction();
        let b = other.direction();
        a.x * b.x + a.y * b.y == 0.0
    }

    /// Same segment walked the other way; flag and quantity are kept
    pub fn reversed(&self) -> Line {
        Line {
            start: self.end,
            end: self.start,
            construction: self.construction,
            dim: self.dim.clone(),
        }
    }

    pub fn reverse_in_place(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    pub fn transformed(&self, transform: &Transform) -> Line {
        Line {
            start: transform.apply_point(self.start),
            end: transform.apply_point(self.end),
            construction: self.construction,
            dim: self.dim.clone(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Line: [{}, {}] {:?}", self.start, self.end, self.orientation())?;
        if let Some(dim) = &self.dim {
            write!(f, " dim: {}", dim)?;
        }
        if self.construction {
            write!(f, " (construction)")?;
        }
        write!(f, ">")
    }
}
