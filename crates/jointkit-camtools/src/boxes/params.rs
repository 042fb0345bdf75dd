//! Box parameters
//!
//! Outer bounds, material and finger sizing of a box, as entered on the
//! command line or loaded from a settings file.

use jointkit_core::Dim;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::edge::{CountRounding, EdgeSizing, FingerJointEdge};
use crate::error::{CamToolResult, ParameterError, ParameterResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    /// Outside length in mm
    pub length: f64,
    /// Outside width in mm
    pub width: f64,
    /// Outside height in mm
    pub height: f64,
    /// Material thickness in mm
    pub thickness: f64,
    pub kerf: Option<f64>,
    /// Fingers along length, width and height
    pub finger_counts: [u32; 3],
    /// Finger length in multiples of the thickness
    pub k_factor: u32,
    /// Notch:finger ratio; when set the finger counts are solved from it
    pub finger_ratio: Option<f64>,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 80.0,
            height: 60.0,
            thickness: 3.0,
            kerf: None,
            finger_counts: [3, 3, 3],
            k_factor: 2,
            finger_ratio: None,
        }
    }
}

/// The three sized edges of a box plus any count rounding that happened
#[derive(Debug, Clone, PartialEq)]
pub struct BoxEdges {
    pub length: FingerJointEdge,
    pub width: FingerJointEdge,
    pub height: FingerJointEdge,
    pub thickness: Dim,
    pub kerf: Option<Dim>,
    pub roundings: Vec<(String, CountRounding)>,
}

impl BoxParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let smallest = self.length.min(self.width).min(self.height);
        if self.thickness <= 0.0 || self.thickness >= smallest / 2.0 {
            return Err(ParameterError::OutOfRange {
                name: "thickness".to_string(),
                value: self.thickness,
                min: 0.0,
                max: smallest / 2.0,
            });
        }

        if let Some(kerf) = self.kerf {
            if !(0.0..self.thickness).contains(&kerf) {
                return Err(ParameterError::OutOfRange {
                    name: "kerf".to_string(),
                    value: kerf,
                    min: 0.0,
                    max: self.thickness,
                });
            }
        }

        if self.k_factor == 0 {
            return Err(ParameterError::Incompatible(
                "finger length factor must be at least 1".to_string(),
            ));
        }

        match self.finger_ratio {
            Some(r) if r <= 0.0 => Err(ParameterError::OutOfRange {
                name: "finger_ratio".to_string(),
                value: r,
                min: 0.0,
                max: f64::INFINITY,
            }),
            Some(_) => Ok(()),
            None => {
                if let Some(n) = self.finger_counts.iter().find(|&&n| n < 2) {
                    return Err(ParameterError::Incompatible(format!(
                        "every edge needs at least 2 fingers, got {}",
                        n
                    )));
                }
                Ok(())
            }
        }
    }

    fn sizing(&self, axis: usize) -> EdgeSizing {
        match self.finger_ratio {
            Some(r) => EdgeSizing::Ratio(r),
            None => EdgeSizing::Count(self.finger_counts[axis]),
        }
    }

    /// Validate and size the length (I), width (II) and height (III) edges
    pub fn edges(&self) -> CamToolResult<BoxEdges> {
        self.validate()?;
        let thickness = Dim::mm(self.thickness, "thickness");
        let kerf = self.kerf.map(|k| Dim::mm(k, "kerf"));

        let length = FingerJointEdge::create_i(
            &Dim::mm(self.length, "length"),
            self.k_factor,
            &thickness,
            self.sizing(0),
            kerf.clone(),
        )?;
        let width = FingerJointEdge::create_ii(
            &Dim::mm(self.width, "width"),
            self.k_factor,
            &thickness,
            self.sizing(1),
            kerf.clone(),
        )?;
        let height = FingerJointEdge::create_iii(
            &Dim::mm(self.height, "height"),
            self.k_factor,
            &thickness,
            self.sizing(2),
            kerf.clone(),
        )?;

        let roundings: Vec<(String, CountRounding)> = [
            ("length", &length.rounding),
            ("width", &width.rounding),
            ("height", &height.rounding),
        ]
        .into_iter()
        .filter_map(|(name, r)| r.clone().map(|r| (name.to_string(), r)))
        .collect();
        for (name, r) in &roundings {
            warn!(
                "{} edge deviates by {:.3} mm from the requested size",
                name,
                r.length_deviation()
            );
        }

        Ok(BoxEdges {
            length: length.edge,
            width: width.edge,
            height: height.edge,
            thickness,
            kerf,
            roundings,
        })
    }
}
