//! Polyline paths
//!
//! A [`Path`] is an ordered list of points, the segments between consecutive
//! points and the constraints recorded against those segments. Builder calls
//! append one point and derive one segment at a time. `transform`, `reverse`
//! and `concat` return new paths and leave the receiver untouched; the explicit
//! `*_in_place` variants are for freshly built paths with a single owner.

use jointkit_core::{Dim, JointError, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constraint::Constraint;
use crate::line::Line;
use crate::point::{Orientation, Point};
use crate::transform::Transform;

/// Length argument of the horizontal/vertical builders
#[derive(Debug, Clone, PartialEq)]
pub enum Extent {
    Plain(f64),
    Dimensioned(Dim),
}

impl Extent {
    pub fn value(&self) -> f64 {
        match self {
            Extent::Plain(v) => *v,
            Extent::Dimensioned(d) => d.value,
        }
    }

    fn into_dim(self, operation: &str) -> Result<Dim> {
        match self {
            Extent::Dimensioned(d) => Ok(d),
            Extent::Plain(_) => Err(JointError::MissingDimension {
                operation: operation.to_string(),
            }),
        }
    }
}

impl From<f64> for Extent {
    fn from(v: f64) -> Self {
        Extent::Plain(v)
    }
}

impl From<Dim> for Extent {
    fn from(d: Dim) -> Self {
        Extent::Dimensioned(d)
    }
}

impl From<&Dim> for Extent {
    fn from(d: &Dim) -> Self {
        Extent::Dimensioned(d.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
    lines: Vec<Line>,
    #[serde(default)]
    constraints: Vec<Constraint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path seeded with the origin
    pub fn zero() -> Self {
        Self::starting_at(Point::origin())
    }

    pub fn starting_at(p: Point) -> Self {
        Self {
            points: vec![p],
            lines: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Current pen position
    pub fn location(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// First point of the path, i.e. its offset from the sketch origin
    pub fn origin_offset(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// Segments that will be cut
    pub fn real_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|l| l.is_real())
    }

    /// Mutable access to segments, for providers that clear redundant quantities
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn append_constraint(&mut self, constraint: Constraint) -> &mut Self {
        self.constraints.push(constraint);
        self
    }

    pub fn extend_constraints<I: IntoIterator<Item = Constraint>>(&mut self, constraints: I) {
        self.constraints.extend(constraints);
    }

    /// Refresh the segment copies held by the constraints after `lines_mut` edits
    pub fn resync_constraints(&mut self) {
        let lines = &self.lines;
        for constraint in &mut self.constraints {
            *constraint = constraint.resynced(lines);
        }
    }

    /// Append a point; on a non-empty path this derives a segment to it
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        self.push_point(Point::new(x, y), None)
    }

    pub fn move_to_origin(&mut self) -> Result<&mut Self> {
        self.add_point(0.0, 0.0)
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> Result<&mut Self> {
        self.require_location("line_to")?;
        self.push_point(Point::new(x, y), None)
    }

    pub fn line_to_rel(&mut self, dx: f64, dy: f64) -> Result<&mut Self> {
        let here = self.require_location("line_to_rel")?;
        self.push_point(here.offset(dx, dy), None)
    }

    /// Horizontal segment of signed length. A quantity argument is accepted but
    /// not attached; use [`Path::h_dim`] to keep it.
    pub fn h(&mut self, length: impl Into<Extent>) -> Result<&mut Self> {
        let here = self.require_location("h")?;
        self.push_point(here.offset(length.into().value(), 0.0), None)
    }

    /// Vertical segment of signed length, quantity not attached
    pub fn v(&mut self, length: impl Into<Extent>) -> Result<&mut Self> {
        let here = self.require_location("v")?;
        self.push_point(here.offset(0.0, length.into().value()), None)
    }

    /// Horizontal segment tagged with its quantity
    pub fn h_dim(&mut self, length: impl Into<Extent>) -> Result<&mut Self> {
        let dim = length.into().into_dim("h_dim")?;
        let here = self.require_location("h_dim")?;
        self.push_point(here.offset(dim.value, 0.0), Some(dim))
    }

    /// Vertical segment tagged with its quantity
    pub fn v_dim(&mut self, length: impl Into<Extent>) -> Result<&mut Self> {
        let dim = length.into().into_dim("v_dim")?;
        let here = self.require_location("v_dim")?;
        self.push_point(here.offset(0.0, dim.value), Some(dim))
    }

    /// Flag the most recent segment as a non-cut guide
    pub fn mark_last_as_construction(&mut self) -> Result<&mut Self> {
        let line = self
            .lines
            .last_mut()
            .ok_or_else(|| JointError::empty_path("no segment to mark as construction"))?;
        line.construction = true;
        Ok(self)
    }

    /// Close the path with a segment back to the first point, if needed
    pub fn close_path(&mut self) -> Result<&mut Self> {
        let first = self
            .origin_offset()
            .ok_or_else(|| JointError::empty_path("cannot close a path without points"))?;
        if self.points.len() > 1 && !self.is_closed() {
            self.push_point(first, None)?;
        }
        Ok(self)
    }

    /// Drop the last segment together with its end point
    pub fn remove_last_line(&mut self) -> Option<Line> {
        let line = self.lines.pop()?;
        self.points.pop();
        Some(line)
    }

    /// First point equals last point, compared exactly
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Reversed copy: point order, segment order, segment direction and constraints
    pub fn reverse(&self) -> Path {
        let mut p = self.clone();
        p.reverse_in_place();
        p
    }

    pub fn reverse_in_place(&mut self) {
        self.points.reverse();
        self.lines.reverse();
        for line in &mut self.lines {
            line.reverse_in_place();
        }
        for c in &mut self.constraints {
            *c = c.reversed();
        }
    }

    /// Transformed copy including constraints
    pub fn transform(&self, transform: &Transform) -> Path {
        Path {
            points: transform.apply_points(&self.points),
            lines: self.lines.iter().map(|l| l.transformed(transform)).collect(),
            constraints: self
                .constraints
                .iter()
                .map(|c| c.apply_transform(transform))
                .collect(),
        }
    }

    /// Append `other` to a copy of `self`.
    ///
    /// The end of `self` must equal the start of `other`. Otherwise a
    /// construction segment bridges the gap when `allow_connecting_line` is
    /// set, and the call fails with [`JointError::PathMismatch`] when it is not.
    pub fn concat(&self, other: &Path, allow_connecting_line: bool) -> Result<Path> {
        let (end, start) = match (self.location(), other.origin_offset()) {
            (Some(end), Some(start)) => (end, start),
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
        };

        let mut out = self.clone();
        if end == start {
            out.points.extend_from_slice(&other.points[1..]);
        } else if allow_connecting_line {
            trace!("bridging {} -> {} with a construction segment", end, start);
            out.lines.push(Line::new(end, start)?.as_construction());
            out.points.extend_from_slice(&other.points);
        } else {
            return Err(JointError::PathMismatch {
                end_x: end.x,
                end_y: end.y,
                start_x: start.x,
                start_y: start.y,
            });
        }
        out.lines.extend(other.lines.iter().cloned());
        out.constraints.extend(other.constraints.iter().cloned());
        Ok(out)
    }

    /// `(min, max)` corners over all points
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    pub fn width(&self) -> f64 {
        self.bounding_box()
            .map(|(min, max)| max.x - min.x)
            .unwrap_or(0.0)
    }

    pub fn height(&self) -> f64 {
        self.bounding_box()
            .map(|(min, max)| max.y - min.y)
            .unwrap_or(0.0)
    }

    /// Segments of `orientation` lying on `level`, starting at segment `since`
    pub fn lines_at_level(
        &self,
        level: f64,
        orientation: Orientation,
        since: usize,
    ) -> Result<Vec<Line>> {
        if since > self.lines.len() {
            return Err(JointError::empty_path(format!(
                "since_line {} outside of [0, {}]",
                since,
                self.lines.len()
            )));
        }
        Ok(self.lines[since..]
            .iter()
            .filter(|l| l.orientation() == orientation && l.level() == Some(level))
            .cloned()
            .collect())
    }

    /// Like [`Path::lines_at_level`] and records the result as a colinear constraint
    pub fn constrain_colinear(
        &mut self,
        level: f64,
        orientation: Orientation,
        since: usize,
    ) -> Result<Vec<Line>> {
        let lines = self.lines_at_level(level, orientation, since)?;
        self.constraints.push(Constraint::Colinear {
            lines: lines.clone(),
        });
        Ok(lines)
    }

    fn require_location(&self, operation: &str) -> Result<Point> {
        self.location()
            .ok_or_else(|| JointError::empty_path(format!("'{}' needs a start point", operation)))
    }

    fn push_point(&mut self, p: Point, dim: Option<Dim>) -> Result<&mut Self> {
        if let Some(last) = self.location() {
            let line = Line::new(last, p)?.with_dim(dim);
            self.lines.push(line);
        }
        self.points.push(p);
        Ok(self)
    }
}
