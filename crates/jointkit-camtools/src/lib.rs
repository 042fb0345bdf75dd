//! # JointKit CAM Tools
//!
//! Finger-joint box generation on top of the geometry kernel.
//!
//! ## Components
//!
//! - **Edges**: straight, finger-joint, mortise holes and the stackable feet
//!   and stand-off edges, sized by count or by target length
//! - **Edge paths / Faces**: place four edges around a panel, stitch them
//!   into one closed outline and annotate it with CAD constraints
//! - **Box designs**: simple box (joined or straight top) and stackable box
//! - **Export**: SVG drawings with hairline strokes, sheet layout and JSON
//!
//! ## Usage
//!
//! ```rust
//! use jointkit_camtools::{BoxDesign, BoxParameters, SimpleBox, TopStyle};
//!
//! let edges = BoxParameters::default().edges()?;
//! let simple = SimpleBox::from_edges(
//!     edges.length,
//!     edges.width,
//!     edges.height,
//!     edges.thickness,
//!     edges.kerf,
//!     Vec::new(),
//!     TopStyle::Joined,
//! );
//! let faces = simple.build()?;
//! assert_eq!(faces.len(), 3);
//! # Ok::<(), jointkit_camtools::CamToolError>(())
//! ```

pub mod boxes;
pub mod edge;
pub mod edge_path;
pub mod error;
pub mod export;
pub mod face;

pub use boxes::{
    BoxDesign, BoxEdges, BoxParameters, FacePath, SimpleBox, StackableBox, TopStyle,
};
pub use edge::{
    CountRounding, Edge, EdgeShape, EdgeSizing, EdgeSolution, EdgeType, FingerJointEdge,
    FingerJointHolesEdge, StackableBottomTopEdge, StackableSideEdge, StraightLineEdge,
};
pub use edge_path::{EdgePathBuilder, PathStep};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use export::{faces_to_json, layout_faces, BoxDrawing, LayoutCursor, PathExporter};
pub use face::{ConstraintProvider, Face, FacePathBuilder};
