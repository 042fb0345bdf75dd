//! Type definitions for the edge generators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation tag of a finger-joint edge.
///
/// The numeral names the box axis the edge belongs to (I length, II width,
/// III height), the sign says whether the edge starts with a finger (positive)
/// or a notch (negative). The tag decides whether the first and last element
/// are shortened by the thickness of the perpendicular wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    /// Finger first, full length
    IPositive = 1,
    /// Notch first, shortened by the thickness at both ends
    INegative = -1,
    /// Finger first, full length
    IIPositive = 2,
    /// Notch first, full length
    IINegative = -2,
    /// Finger first, shortened
    IIIPositive = 3,
    /// Notch first, shortened
    IIINegative = -3,
    OtherPositive = 4,
    OtherNegative = -4,
}

impl EdgeType {
    pub fn value(&self) -> i32 {
        *self as i32
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(EdgeType::IPositive),
            -1 => Some(EdgeType::INegative),
            2 => Some(EdgeType::IIPositive),
            -2 => Some(EdgeType::IINegative),
            3 => Some(EdgeType::IIIPositive),
            -3 => Some(EdgeType::IIINegative),
            4 => Some(EdgeType::OtherPositive),
            -4 => Some(EdgeType::OtherNegative),
            _ => None,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.value() > 0
    }

    /// Whether the outside measurement keeps its first and last element whole
    pub fn full_length(&self) -> bool {
        matches!(
            self,
            EdgeType::IPositive | EdgeType::IIPositive | EdgeType::IINegative
        )
    }

    /// Tag of the complementary edge
    pub fn negated(&self) -> Self {
        match self {
            EdgeType::IPositive => EdgeType::INegative,
            EdgeType::INegative => EdgeType::IPositive,
            EdgeType::IIPositive => EdgeType::IINegative,
            EdgeType::IINegative => EdgeType::IIPositive,
            EdgeType::IIIPositive => EdgeType::IIINegative,
            EdgeType::IIINegative => EdgeType::IIIPositive,
            EdgeType::OtherPositive => EdgeType::OtherNegative,
            EdgeType::OtherNegative => EdgeType::OtherPositive,
        }
    }

    /// Tag with the sign forced to match `positive`
    pub fn with_sign(&self, positive: bool) -> Self {
        if self.is_positive() == positive {
            *self
        } else {
            self.negated()
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (axis, sign) = match self {
            EdgeType::IPositive => ("I", '+'),
            EdgeType::INegative => ("I", '-'),
            EdgeType::IIPositive => ("II", '+'),
            EdgeType::IINegative => ("II", '-'),
            EdgeType::IIIPositive => ("III", '+'),
            EdgeType::IIINegative => ("III", '-'),
            EdgeType::OtherPositive => ("Other", '+'),
            EdgeType::OtherNegative => ("Other", '-'),
        };
        write!(f, "{}{}", axis, sign)
    }
}

/// How the finger/notch split of an edge is derived from its target length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeSizing {
    /// Fixed number of fingers; the notch length follows
    Count(u32),
    /// Fixed notch:finger ratio; the finger count follows and is rounded
    Ratio(f64),
}

/// Deviation introduced by rounding a solved finger count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRounding {
    pub target_length: f64,
    pub exact_count: f64,
    pub rounded_count: u32,
    pub realized_length: f64,
}

impl CountRounding {
    pub fn length_deviation(&self) -> f64 {
        self.realized_length - self.target_length
    }
}

impl fmt::Display for CountRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finger count {:.3} rounded to {}; edge length {} instead of {}",
            self.exact_count, self.rounded_count, self.realized_length, self.target_length
        )
    }
}
