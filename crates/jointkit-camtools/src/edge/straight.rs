use jointkit_core::{Dim, Result};
use jointkit_geometry::{Extent, Path};

use super::EdgeShape;

/// Plain edge without joints
#[derive(Debug, Clone, PartialEq)]
pub struct StraightLineEdge {
    length: Extent,
}

impl StraightLineEdge {
    pub fn new(length: impl Into<Extent>) -> Self {
        Self {
            length: length.into(),
        }
    }

    pub fn dim(&self) -> Option<&Dim> {
        match &self.length {
            Extent::Dimensioned(d) => Some(d),
            Extent::Plain(_) => None,
        }
    }
}

impl EdgeShape for StraightLineEdge {
    fn length(&self) -> f64 {
        self.length.value()
    }

    fn build_path(&self, path: &mut Path) -> Result<()> {
        match &self.length {
            Extent::Dimensioned(d) => path.h_dim(d)?,
            Extent::Plain(v) => path.h(*v)?,
        };
        Ok(())
    }
}
