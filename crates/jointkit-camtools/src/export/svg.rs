use std::io::Write;
use std::path::Path as FsPath;

use jointkit_core::JointError;
use jointkit_geometry::{Path, Point};
use tracing::{debug, info};

use crate::error::CamToolResult;

/// Stroke width of one CSS pixel in mm, thin enough for laser vector cuts
pub const MIN_STROKE: f64 = 0.2645833333;

/// Space added to the bottom-right of the drawing, in mm
pub const DEFAULT_MARGIN: f64 = 30.0;

/// SVG path data builder.
///
/// Real segments become `L` commands, construction segments become pen-up
/// `M` moves.
#[derive(Debug, Clone, Default)]
pub struct PathExporter {
    commands: Vec<String>,
    closed: bool,
}

impl PathExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(format!("M {} {}", p.x, p.y));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(format!("L {} {}", p.x, p.y));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push("Z".to_string());
        self.closed = true;
        self
    }

    pub fn parse_box_path(&mut self, path: &Path) -> &mut Self {
        if let Some(first) = path.origin_offset() {
            self.move_to(first);
        }
        for line in path.lines() {
            if line.is_construction() {
                self.move_to(line.end);
            } else {
                self.line_to(line.end);
            }
        }
        self
    }

    /// Content of the `d` attribute
    pub fn data(&self) -> String {
        self.commands.join(" ")
    }

    /// `<path>` element with hairline styling
    pub fn as_hairline(&self, id: &str) -> String {
        format!(
            r##"<path d="{}" fill="none" id="{}" stroke="#0000FF" stroke-width="{}" />"##,
            self.data(),
            escape_attr(id),
            MIN_STROKE
        )
    }
}

/// Named paths rendered into one SVG document
#[derive(Debug, Clone)]
pub struct BoxDrawing {
    paths: Vec<(String, Path)>,
    margin: f64,
}

impl Default for BoxDrawing {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN)
    }
}

impl BoxDrawing {
    pub fn new(margin: f64) -> Self {
        Self {
            paths: Vec::new(),
            margin,
        }
    }

    pub fn add(&mut self, path: Path, name: impl Into<String>) -> &mut Self {
        self.paths.push((name.into(), path));
        self
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Bounding box over all paths
    pub fn bbox(&self) -> Option<(Point, Point)> {
        self.paths
            .iter()
            .filter_map(|(_, p)| p.bounding_box())
            .reduce(|(min_a, max_a), (min_b, max_b)| {
                (
                    Point::new(min_a.x.min(min_b.x), min_a.y.min(min_b.y)),
                    Point::new(max_a.x.max(max_b.x), max_a.y.max(max_b.y)),
                )
            })
    }

    /// Canvas size in mm: the far corner of the drawing plus the margin
    pub fn canvas_size(&self) -> Option<(f64, f64)> {
        let (_, max) = self.bbox()?;
        Some((max.x + self.margin, max.y + self.margin))
    }

    pub fn to_svg(&self) -> CamToolResult<String> {
        let (w, h) = self
            .canvas_size()
            .ok_or_else(|| JointError::empty_path("drawing has no paths"))?;

        let mut svg = String::from("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        svg.push_str(&format!(
            r#"<svg baseProfile="full" height="{h}mm" version="1.1" viewBox="0 0 {w} {h}" width="{w}mm" xmlns="http://www.w3.org/2000/svg">"#
        ));
        svg.push('\n');
        for (name, path) in &self.paths {
            let mut exporter = PathExporter::new();
            exporter.parse_box_path(path).close();
            svg.push_str(&format!("  {}\n", exporter.as_hairline(name)));
        }
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> CamToolResult<()> {
        writer.write_all(self.to_svg()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, file: impl AsRef<FsPath>) -> CamToolResult<()> {
        let file = file.as_ref();
        debug!("writing {} paths", self.paths.len());
        std::fs::write(file, self.to_svg()?)?;
        info!("saved drawing to {}", file.display());
        Ok(())
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
