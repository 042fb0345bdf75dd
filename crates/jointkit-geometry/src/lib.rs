//! # JointKit Geometry
//!
//! The path and transform engine underneath the edge generators.
//!
//! ## Components
//!
//! - **Point / Plane / Orientation**: plain value types
//! - **Transform**: 3x3 homogeneous affine transforms (shift, quarter turn,
//!   reflections) composed by matrix multiplication
//! - **Line**: a non-degenerate segment with a construction flag and an optional
//!   quantity
//! - **Path**: builder for axis-aligned polylines with reversal, concatenation,
//!   transform and bounding-box queries
//! - **Constraint**: geometric relationship records that follow the path through
//!   transforms and reversal
//!
//! ## Usage
//!
//! ```rust
//! use jointkit_geometry::{Path, Transform};
//!
//! let mut path = Path::zero();
//! path.h(10.0)?.v(3.0)?.h(5.0)?.v(-3.0)?.h(10.0)?;
//! let turned = path.transform(&Transform::rotate_90());
//! assert_eq!(turned.location().map(|p| p.y), Some(25.0));
//! # Ok::<(), jointkit_core::JointError>(())
//! ```

pub mod constraint;
pub mod line;
pub mod path;
pub mod point;
pub mod transform;

pub use constraint::{Constraint, ConstraintVisitor};
pub use line::Line;
pub use path::{Extent, Path};
pub use point::{Orientation, Plane, Point};
pub use transform::Transform;
