//! Error handling for JointKit
//!
//! Provides the error taxonomy of the geometry kernel:
//! - Edge configuration errors (finger/notch count rules)
//! - Quantity errors (unit mismatches)
//! - Path errors (non-adjacent concatenation, degenerate segments)
//! - Sketch errors (offset contradictions)
//!
//! All errors are raised synchronously where they are detected. They describe
//! bad input or programmer errors in a deterministic computation and are never
//! retried. All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Kernel error type
///
/// A unified error type for every fallible operation of the kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JointError {
    /// Finger and notch counts violate the alternation rule
    #[error("Invalid edge configuration (fingers: {finger_count}, notches: {notch_count}): {reason}")]
    InvalidEdgeConfiguration {
        /// The finger count of the rejected edge.
        finger_count: i64,
        /// The notch count of the rejected edge.
        notch_count: i64,
        /// Why the combination was rejected.
        reason: String,
    },

    /// Arithmetic between quantities with different units
    #[error("'{op}' not supported between quantities with mismatching units. {lhs} != {rhs}")]
    UnitMismatch {
        /// The operator symbol.
        op: String,
        /// Unit of the left operand.
        lhs: String,
        /// Unit of the right operand.
        rhs: String,
    },

    /// Concatenation of paths that do not share an end/start point
    #[error("Cannot concatenate paths: end point ({end_x}, {end_y}) != start point ({start_x}, {start_y})")]
    PathMismatch {
        /// X coordinate of the end of the first path.
        end_x: f64,
        /// Y coordinate of the end of the first path.
        end_y: f64,
        /// X coordinate of the start of the second path.
        start_x: f64,
        /// Y coordinate of the start of the second path.
        start_y: f64,
    },

    /// Explicit sketch offset contradicts the path origin
    #[error("Sketch offset ({offset}) does not match path origin offset ({origin_x}, {origin_y})")]
    OffsetMismatch {
        /// Description of the requested offset.
        offset: String,
        /// X coordinate of the path origin.
        origin_x: f64,
        /// Y coordinate of the path origin.
        origin_y: f64,
    },

    /// Closed-form edge sizing has no usable solution
    #[error("Unsolvable edge length: {reason}")]
    UnsolvableEdgeLength {
        /// Why the solve failed.
        reason: String,
    },

    /// Segment with identical start and end point
    #[error("Line with length 0 not allowed at ({x}, {y})")]
    ZeroLengthSegment {
        /// X coordinate of the degenerate segment.
        x: f64,
        /// Y coordinate of the degenerate segment.
        y: f64,
    },

    /// A dimensioned builder call received no quantity
    #[error("Expected a dimension for '{operation}'")]
    MissingDimension {
        /// The builder operation that required a quantity.
        operation: String,
    },

    /// Operation requires points or segments the path does not have
    #[error("Path is empty: {reason}")]
    EmptyPath {
        /// What the operation needed.
        reason: String,
    },

    /// Requested edge orientation sign does not match the built edge
    #[error("Edge type {requested} does not match the sign of the created edge ({actual})")]
    EdgeTypeMismatch {
        /// The requested orientation tag.
        requested: String,
        /// The orientation tag of the created edge.
        actual: String,
    },
}

impl JointError {
    /// Create an unsolvable-length error from a message
    pub fn unsolvable(reason: impl Into<String>) -> Self {
        JointError::UnsolvableEdgeLength {
            reason: reason.into(),
        }
    }

    /// Create an empty-path error from a message
    pub fn empty_path(reason: impl Into<String>) -> Self {
        JointError::EmptyPath {
            reason: reason.into(),
        }
    }

    /// Check if this error comes from the edge configuration rules
    pub fn is_edge_error(&self) -> bool {
        matches!(
            self,
            JointError::InvalidEdgeConfiguration { .. }
                | JointError::UnsolvableEdgeLength { .. }
                | JointError::EdgeTypeMismatch { .. }
        )
    }

    /// Check if this error comes from path stitching
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            JointError::PathMismatch { .. }
                | JointError::ZeroLengthSegment { .. }
                | JointError::EmptyPath { .. }
        )
    }
}

/// Result type using JointError
pub type Result<T> = std::result::Result<T, JointError>;
