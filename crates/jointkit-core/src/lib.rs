//! # JointKit Core
//!
//! Core types for JointKit.
//! Provides the named quantity algebra ([`Dim`]) shared by the geometry kernel,
//! the edge generators and the exporters, together with the kernel error type.

pub mod dimension;
pub mod error;

pub use dimension::{combine_names, AbsDimKey, Dim, DimOp, MM};
pub use error::{JointError, Result};
