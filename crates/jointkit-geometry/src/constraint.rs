//! Constraint annotations
//!
//! Constraints record geometric relationships between segments of a path for
//! parametric CAD consumers. Each variant stores copies of the segments it
//! governs, so it follows the path through transforms and reversal:
//! [`Constraint::apply_transform`] and [`Constraint::reversed`] rebuild the
//! constraint against the moved segments.
//!
//! Consumers walk constraints with a [`ConstraintVisitor`].

use jointkit_core::Dim;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::line::Line;
use crate::transform::Transform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Perpendicular { first: Line, second: Line },
    /// All `lines` have the same length as `base`
    Equal { base: Line, lines: Vec<Line> },
    Horizontal { lines: Vec<Line> },
    Vertical { lines: Vec<Line> },
    /// Fixes the start of `line` to the sketch origin
    OriginLock { line: Line },
    /// Driving dimensions taken from the quantities of `lines`
    Dimension { lines: Vec<Line> },
    /// Named free parameter
    UserParameter { dim: Dim },
    Colinear { lines: Vec<Line> },
}

/// Handler for the segment data of each constraint variant
pub trait ConstraintVisitor {
    type Output;

    fn perpendicular(&mut self, first: &Line, second: &Line) -> Self::Output;
    fn equal(&mut self, base: &Line, lines: &[Line]) -> Self::Output;
    fn horizontal(&mut self, lines: &[Line]) -> Self::Output;
    fn vertical(&mut self, lines: &[Line]) -> Self::Output;
    fn origin_lock(&mut self, line: &Line) -> Self::Output;
    fn dimension(&mut self, lines: &[Line]) -> Self::Output;
    fn user_parameter(&mut self, dim: &Dim) -> Self::Output;
    fn colinear(&mut self, lines: &[Line]) -> Self::Output;
}

impl Constraint {
    pub fn perpendicular(first: &Line, second: &Line) -> Self {
        Constraint::Perpendicular {
            first: first.clone(),
            second: second.clone(),
        }
    }

    pub fn horizontal(line: &Line) -> Self {
        Constraint::Horizontal {
            lines: vec![line.clone()],
        }
    }

    pub fn vertical(line: &Line) -> Self {
        Constraint::Vertical {
            lines: vec![line.clone()],
        }
    }

    pub fn origin_lock(line: &Line) -> Self {
        Constraint::OriginLock { line: line.clone() }
    }

    pub fn user_parameter(dim: &Dim) -> Self {
        Constraint::UserParameter { dim: dim.clone() }
    }

    /// Equality group with the first line as base.
    ///
    /// Returns `None` for an empty slice.
    pub fn equal(lines: &[Line]) -> Option<Self> {
        let (base, rest) = lines.split_first()?;
        Some(Constraint::Equal {
            base: base.clone(),
            lines: rest.to_vec(),
        })
    }

    /// Identifier of the variant for downstream consumers
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Perpendicular { .. } => "perpendicular",
            Constraint::Equal { .. } => "equal",
            Constraint::Horizontal { .. } => "horizontal",
            Constraint::Vertical { .. } => "vertical",
            Constraint::OriginLock { .. } => "origin_lock",
            Constraint::Dimension { .. } => "dimension",
            Constraint::UserParameter { .. } => "user_parameter",
            Constraint::Colinear { .. } => "colinear",
        }
    }

    pub fn process<V: ConstraintVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Constraint::Perpendicular { first, second } => visitor.perpendicular(first, second),
            Constraint::Equal { base, lines } => visitor.equal(base, lines),
            Constraint::Horizontal { lines } => visitor.horizontal(lines),
            Constraint::Vertical { lines } => visitor.vertical(lines),
            Constraint::OriginLock { line } => visitor.origin_lock(line),
            Constraint::Dimension { lines } => visitor.dimension(lines),
            Constraint::UserParameter { dim } => visitor.user_parameter(dim),
            Constraint::Colinear { lines } => visitor.colinear(lines),
        }
    }

    /// Equivalent constraint on the transformed segments
    pub fn apply_transform(&self, transform: &Transform) -> Constraint {
        self.map_lines(|l| l.transformed(transform))
    }

    /// Equivalent constraint on the reversed segments
    pub fn reversed(&self) -> Constraint {
        self.map_lines(Line::reversed)
    }

    /// Equivalent constraint whose segments are taken from `lines`, matched by
    /// their end points and construction flag. Unmatched segments are kept.
    pub fn resynced(&self, lines: &[Line]) -> Constraint {
        self.map_lines(|l| {
            lines
                .iter()
                .find(|c| c.start == l.start && c.end == l.end && c.construction == l.construction)
                .cloned()
                .unwrap_or_else(|| l.clone())
        })
    }

    /// Every segment the constraint refers to
    pub fn lines(&self) -> Vec<&Line> {
        match self {
            Constraint::Perpendicular { first, second } => vec![first, second],
            Constraint::Equal { base, lines } => std::iter::once(base).chain(lines).collect(),
            Constraint::Horizontal { lines }
            | Constraint::Vertical { lines }
            | Constraint::Dimension { lines }
            | Constraint::Colinear { lines } => lines.iter().collect(),
            Constraint::OriginLock { line } => vec![line],
            Constraint::UserParameter { .. } => Vec::new(),
        }
    }

    fn map_lines<F: Fn(&Line) -> Line>(&self, f: F) -> Constraint {
        let all = |lines: &[Line]| lines.iter().map(&f).collect::<Vec<_>>();
        match self {
            Constraint::Perpendicular { first, second } => Constraint::Perpendicular {
                first: f(first),
                second: f(second),
            },
            Constraint::Equal { base, lines } => Constraint::Equal {
                base: f(base),
                lines: all(lines),
            },
            Constraint::Horizontal { lines } => Constraint::Horizontal { lines: all(lines) },
            Constraint::Vertical { lines } => Constraint::Vertical { lines: all(lines) },
            Constraint::OriginLock { line } => Constraint::OriginLock { line: f(line) },
            Constraint::Dimension { lines } => Constraint::Dimension { lines: all(lines) },
            Constraint::UserParameter { dim } => Constraint::UserParameter { dim: dim.clone() },
            Constraint::Colinear { lines } => Constraint::Colinear { lines: all(lines) },
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::UserParameter { dim } => write!(f, "{}({})", self.name(), dim),
            _ => write!(f, "{}[{} lines]", self.name(), self.lines().len()),
        }
    }
}
