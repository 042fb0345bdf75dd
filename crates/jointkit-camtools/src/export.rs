//! Drawing export
//!
//! - [`svg`]: hairline SVG documents for laser cutters
//! - [`layout`]: places built faces next to each other on one sheet
//! - [`json`]: face outlines with segments and constraints for CAD import

pub mod json;
pub mod layout;
pub mod svg;

pub use json::faces_to_json;
pub use layout::{layout_faces, LayoutCursor};
pub use svg::{BoxDrawing, PathExporter};
