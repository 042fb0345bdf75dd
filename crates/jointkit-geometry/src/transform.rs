//! Affine 2D transforms
//!
//! Transforms are 3x3 homogeneous matrices. [`Transform::compose`] multiplies
//! the matrices in the order they are listed, so the rightmost transform is
//! applied first:
//!
//! ```text
//! compose([shift(dx = 25), rotate_90])  ==  p -> shift(rotate_90(p))
//! ```
//!
//! Only invertible constructors are exposed, so a transformed segment never
//! collapses to zero length.

use nalgebra::{Matrix3, Vector3};

use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Translation by `(dx, dy)`
    pub fn shift(dx: f64, dy: f64) -> Self {
        Self {
            matrix: Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0),
        }
    }

    /// Translation along x only
    pub fn shift_x(dx: f64) -> Self {
        Self::shift(dx, 0.0)
    }

    /// Translation along y only
    pub fn shift_y(dy: f64) -> Self {
        Self::shift(0.0, dy)
    }

    /// Counter-clockwise quarter turn about the origin.
    ///
    /// Uses an exact integer matrix, unlike [`Transform::rotation`].
    pub fn rotate_90() -> Self {
        Self {
            matrix: Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Counter-clockwise rotation by `angle` radians about the origin
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Mirror about the x axis: `(x, y) -> (x, -y)`
    pub fn reflect_x() -> Self {
        Self {
            matrix: Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Mirror about the y axis: `(x, y) -> (-x, y)`
    pub fn reflect_y() -> Self {
        Self {
            matrix: Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Matrix product of `transforms` in listed order.
    ///
    /// An empty slice yields the identity.
    pub fn compose(transforms: &[Transform]) -> Self {
        transforms
            .iter()
            .fold(Self::identity(), |acc, t| Self {
                matrix: acc.matrix * t.matrix,
            })
    }

    /// Apply `self` first, then `next`
    pub fn then(&self, next: &Transform) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn apply_point(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x, p.y, 1.0);
        Point::new(v.x, v.y)
    }

    pub fn apply_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply_point(*p)).collect()
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }
}
