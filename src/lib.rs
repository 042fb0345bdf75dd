//! # JointKit
//!
//! Parametric finger-joint boxes for laser and CNC cutting.
//!
//! ## Architecture
//!
//! JointKit is organized as a workspace with multiple crates:
//!
//! 1. **jointkit-core** - Quantity algebra and kernel errors
//! 2. **jointkit-geometry** - Paths, transforms and constraint annotations
//! 3. **jointkit-camtools** - Edges, faces, box designs and export
//! 4. **jointkit-settings** - Presets stored as JSON or TOML
//! 5. **jointkit** - Command line binary that ties the crates together
//!
//! ## Features
//!
//! - **Finger joints**: thickness corner correction and kerf compensation
//! - **Box designs**: simple, straight top and stackable boxes
//! - **CAD friendly**: every outline carries perpendicular, equality,
//!   dimension and origin constraints with named parameters
//! - **Output**: hairline SVG for the cutter or JSON for CAD import

pub use jointkit_camtools as camtools;
pub use jointkit_core as core;
pub use jointkit_geometry as geometry;
pub use jointkit_settings as settings;

use anyhow::Context;
use jointkit_camtools::{
    faces_to_json, layout_faces, BoxDesign, BoxDrawing, FacePath, SimpleBox, StackableBox,
    TopStyle,
};
use jointkit_geometry::Constraint;
use jointkit_settings::{BoxStyle, Config, ExportFormat};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so drawings written to stdout stay clean
/// - RUST_LOG environment variable support
/// - `debug` level when `verbose` is set, `info` otherwise
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(())
}

/// Built faces and the named parameters of the chosen design
#[derive(Debug, Clone)]
pub struct BuiltBox {
    pub faces: Vec<FacePath>,
    pub user_parameters: Vec<Constraint>,
}

/// Size the edges of `config` and build every face of its box style
pub fn build_box(config: &Config) -> anyhow::Result<BuiltBox> {
    let edges = config
        .box_settings
        .edges()
        .context("invalid box parameters")?;
    for (axis, rounding) in &edges.roundings {
        debug!("{} edge: {}", axis, rounding);
    }

    let design: Box<dyn BoxDesign> = match config.style {
        BoxStyle::Simple | BoxStyle::StraightTop => {
            let top = if config.style == BoxStyle::Simple {
                TopStyle::Joined
            } else {
                TopStyle::Straight
            };
            let user_parameters = std::iter::once(&edges.thickness)
                .chain(edges.kerf.as_ref())
                .map(Constraint::user_parameter)
                .collect();
            Box::new(SimpleBox::from_edges(
                edges.length,
                edges.width,
                edges.height,
                edges.thickness,
                edges.kerf,
                user_parameters,
                top,
            ))
        }
        BoxStyle::Stackable => Box::new(
            StackableBox::create(&edges.length, &edges.width, &edges.height)
                .context("stackable box does not fit its feet")?,
        ),
    };

    let faces = design.build().context("failed to build faces")?;
    debug!("{} box: {} faces", config.style, faces.len());
    Ok(BuiltBox {
        faces,
        user_parameters: design.user_parameters().to_vec(),
    })
}

/// Render the box of `config` in its export format
pub fn render(config: &Config) -> anyhow::Result<String> {
    let built = build_box(config)?;
    match config.export.format {
        ExportFormat::Svg => {
            let mut drawing = BoxDrawing::new(config.export.margin);
            for (name, path) in layout_faces(&built.faces, config.export.spacing) {
                drawing.add(path, name);
            }
            Ok(drawing.to_svg()?)
        }
        ExportFormat::Json => Ok(faces_to_json(&built.faces, &built.user_parameters)?),
    }
}

/// Write a rendered drawing; relative names land in the export directory
pub fn write_output(config: &Config, name: &Path, drawing: &str) -> anyhow::Result<PathBuf> {
    let path = config.output_path(name);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, drawing).with_context(|| format!("failed to write {}", path.display()))?;
    info!("{} box written to {}", config.style, path.display());
    Ok(path)
}
