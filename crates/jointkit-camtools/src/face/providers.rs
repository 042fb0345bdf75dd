//! Constraint providers
//!
//! Providers run after a face outline has been placed. Each one takes the path
//! and returns it with more constraints recorded; the sketch offset provider
//! also prepends construction segments that tie the outline to the origin.

use std::collections::HashMap;

use jointkit_core::{AbsDimKey, Dim, JointError, Result};
use jointkit_geometry::{Constraint, Line, Path, Point};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintProvider {
    /// Every consecutive pair of perpendicular real segments
    Perpendicular,
    /// Construction offset from the sketch origin to the first point
    SketchOffset {
        offset_x: Option<Dim>,
        offset_y: Option<Dim>,
    },
    /// Real segments whose quantities have the same magnitude
    EqualLengths,
    /// Segments that still carry a quantity
    Dimension,
    /// First segment starts at the origin
    OriginLock,
    /// First real segment is horizontal or vertical
    FirstLineAlignment,
}

impl ConstraintProvider {
    /// Providers of a panel whose first point sits at `offset_x` on the x axis
    pub fn standard(offset_x: Option<Dim>) -> Vec<Self> {
        vec![
            ConstraintProvider::Perpendicular,
            ConstraintProvider::SketchOffset {
                offset_x,
                offset_y: None,
            },
            ConstraintProvider::EqualLengths,
            ConstraintProvider::Dimension,
            ConstraintProvider::OriginLock,
            ConstraintProvider::FirstLineAlignment,
        ]
    }

    pub fn apply(&self, path: Path) -> Result<Path> {
        match self {
            ConstraintProvider::Perpendicular => Ok(perpendicular(path)),
            ConstraintProvider::SketchOffset { offset_x, offset_y } => {
                sketch_offset(path, offset_x.as_ref(), offset_y.as_ref())
            }
            ConstraintProvider::EqualLengths => Ok(equal_lengths(path)),
            ConstraintProvider::Dimension => Ok(dimension(path)),
            ConstraintProvider::OriginLock => origin_lock(path),
            ConstraintProvider::FirstLineAlignment => Ok(first_line_alignment(path)),
        }
    }
}

fn perpendicular(mut path: Path) -> Path {
    let found: Vec<Constraint> = path
        .lines()
        .windows(2)
        .filter(|w| w[0].is_real() && w[1].is_real() && w[0].is_perpendicular_to(&w[1]))
        .map(|w| Constraint::perpendicular(&w[0], &w[1]))
        .collect();
    trace!("{} perpendicular pairs", found.len());
    path.extend_constraints(found);
    path
}

fn sketch_offset(path: Path, offset_x: Option<&Dim>, offset_y: Option<&Dim>) -> Result<Path> {
    if offset_x.is_none() && offset_y.is_none() {
        return Ok(path);
    }
    let origin = path
        .origin_offset()
        .ok_or_else(|| JointError::empty_path("sketch offset on an empty path"))?;
    let expected = Point::new(
        offset_x.map_or(origin.x, |d| d.value),
        offset_y.map_or(origin.y, |d| d.value),
    );
    if expected != origin {
        return Err(JointError::OffsetMismatch {
            offset: format!("({}, {})", expected.x, expected.y),
            origin_x: origin.x,
            origin_y: origin.y,
        });
    }

    let mut lead = Path::zero();
    if let Some(dx) = offset_x.filter(|d| d.value != 0.0) {
        lead.h_dim(dx)?.mark_last_as_construction()?;
        if let Some(line) = lead.last_line().cloned() {
            lead.append_constraint(Constraint::horizontal(&line));
        }
    }
    if let Some(dy) = offset_y.filter(|d| d.value != 0.0) {
        lead.v_dim(dy)?.mark_last_as_construction()?;
        if let Some(line) = lead.last_line().cloned() {
            lead.append_constraint(Constraint::vertical(&line));
        }
    }
    lead.concat(&path, false)
}

fn equal_lengths(mut path: Path) -> Path {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut index: HashMap<AbsDimKey, usize> = HashMap::new();
    for (i, line) in path.lines().iter().enumerate() {
        let Some(dim) = line.dim.as_ref().filter(|_| line.is_real()) else {
            continue;
        };
        let slot = *index.entry(dim.abs_key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(i);
    }

    let mut found = Vec::new();
    for group in groups.iter().filter(|g| g.len() > 1) {
        // only the base keeps its quantity; the others follow through the constraint
        for &i in &group[1..] {
            path.lines_mut()[i].dim = None;
        }
        let lines: Vec<Line> = group.iter().map(|&i| path.lines()[i].clone()).collect();
        found.extend(Constraint::equal(&lines));
    }
    trace!("{} equality groups", found.len());
    path.extend_constraints(found);
    // earlier constraints still hold the segments with their old quantities
    path.resync_constraints();
    path
}

fn dimension(mut path: Path) -> Path {
    let lines: Vec<Line> = path
        .lines()
        .iter()
        .filter(|l| l.dim.is_some())
        .cloned()
        .collect();
    if !lines.is_empty() {
        path.append_constraint(Constraint::Dimension { lines });
    }
    path
}

fn origin_lock(mut path: Path) -> Result<Path> {
    let first = path
        .lines()
        .first()
        .cloned()
        .ok_or_else(|| JointError::empty_path("origin lock needs a segment"))?;
    path.append_constraint(Constraint::origin_lock(&first));
    Ok(path)
}

fn first_line_alignment(mut path: Path) -> Path {
    let Some(first) = path.real_lines().next().cloned() else {
        return path;
    };
    if first.is_horizontal() {
        path.append_constraint(Constraint::horizontal(&first));
    } else if first.is_vertical() {
        path.append_constraint(Constraint::vertical(&first));
    }
    path
}
