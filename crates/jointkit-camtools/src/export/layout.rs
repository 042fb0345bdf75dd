//! Sheet layout
//!
//! Every face gets its own row; the copies of a face sit next to each other.

use jointkit_geometry::{Path, Point, Transform};

use crate::boxes::FacePath;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
    row_height: f64,
}

impl LayoutCursor {
    /// Cursor starting one `spacing` away from the sheet origin
    pub fn new(spacing: f64) -> Self {
        Self {
            x: spacing,
            y: spacing,
            spacing,
            row_height: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Reserve `width` x `height` in the current row
    pub fn place(&mut self, width: f64, height: f64) -> Point {
        let position = self.position();
        self.x += width + self.spacing;
        self.row_height = self.row_height.max(height);
        position
    }

    pub fn next_row(&mut self) {
        self.y += self.row_height + self.spacing;
        self.x = self.spacing;
        self.row_height = 0.0;
    }
}

/// Move `path` so its bounding box starts at `at`
pub fn place_path(path: &Path, at: Point) -> Path {
    match path.bounding_box() {
        Some((min, _)) => path.transform(&Transform::shift(at.x - min.x, at.y - min.y)),
        None => path.clone(),
    }
}

/// Lay out every copy of every face and name the copies `<name>1`, `<name>2`, ...
pub fn layout_faces(faces: &[FacePath], spacing: f64) -> Vec<(String, Path)> {
    let mut cursor = LayoutCursor::new(spacing);
    let mut placed = Vec::new();
    for face in faces {
        let (w, h) = (face.path.width(), face.path.height());
        for i in 0..face.copies {
            let at = cursor.place(w, h);
            let name = if face.copies == 1 {
                face.name.clone()
            } else {
                format!("{}{}", face.name, i + 1)
            };
            placed.push((name, place_path(&face.path, at)));
        }
        cursor.next_row();
    }
    placed
}
