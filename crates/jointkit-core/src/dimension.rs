//! Named quantities
//!
//! A [`Dim`] is a unit-tagged scalar that carries a human readable name through
//! arithmetic. Combining two quantities produces a parenthesised expression of
//! the operand names, so a finished drawing can be exported with parametric
//! expressions instead of bare numbers.
//!
//! Scalar arithmetic (`Dim op f64`, `f64 op Dim`) keeps the name of the quantity
//! and is available through the standard operator traits. Arithmetic between two
//! quantities is fallible because both operands must share a unit; it is exposed
//! through [`Dim::combine`] and the `*_dim` helpers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{JointError, Result};

/// Default unit for lengths
pub const MM: &str = "mm";

/// Binary operators supported between two quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl DimOp {
    /// Operator symbol used in combined names
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for DimOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combine two operand names into `lhs op rhs`.
///
/// Names that already contain a space are compound expressions (or free
/// parameters) and get wrapped in parentheses, which keeps the left-to-right
/// grouping of chained operations visible: `(d1 + d2) + d1`.
pub fn combine_names(lhs: &str, op: DimOp, rhs: &str) -> String {
    format!("{} {} {}", group_name(lhs), op.symbol(), group_name(rhs))
}

fn group_name(name: &str) -> String {
    if name.trim().contains(' ') {
        format!("({})", name)
    } else {
        name.to_string()
    }
}

/// A named, unit-tagged scalar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dim {
    pub value: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    MM.to_string()
}

impl Dim {
    pub fn new(value: f64, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
            unit: unit.into(),
        }
    }

    /// Named length in millimetres
    pub fn mm(value: f64, name: impl Into<String>) -> Self {
        Self::new(value, name, MM)
    }

    /// Unit-less quantity, used for counts
    pub fn count(value: f64, name: impl Into<String>) -> Self {
        Self::new(value, name, "")
    }

    /// Anonymous length in millimetres
    pub fn value(value: f64) -> Self {
        Self::new(value, "", MM)
    }

    /// A quantity whose name contains a space is a free parameter and is
    /// rendered by name rather than by value.
    pub fn is_parameter(&self) -> bool {
        self.name.contains(' ')
    }

    /// Truncated integer value, used for counts
    pub fn int_value(&self) -> i64 {
        self.value as i64
    }

    pub fn abs_value(&self) -> f64 {
        self.value.abs()
    }

    pub fn same_unit(&self, other: &Dim) -> bool {
        self.unit == other.unit
    }

    /// Equality on `(|value|, name, unit)`
    pub fn abs_equal(&self, other: &Dim) -> bool {
        self.abs_value() == other.abs_value() && self.name == other.name && self.unit == other.unit
    }

    /// Hash key on `(|value|, name, unit)` for grouping physically equal runs
    pub fn abs_key(&self) -> AbsDimKey {
        AbsDimKey::new(self)
    }

    /// Parametric expression: the name for parameters, otherwise `value unit`
    pub fn expression(&self) -> String {
        if self.is_parameter() {
            self.name.clone()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }

    /// Like [`Dim::expression`] but with the absolute value
    pub fn expression_abs(&self) -> String {
        if self.is_parameter() {
            self.name.clone()
        } else {
            format!("{} {}", self.abs_value(), self.unit)
        }
    }

    /// New quantity shifted by `delta`, with a fresh name
    pub fn new_relative(&self, delta: f64, name: impl Into<String>) -> Dim {
        Dim::new(self.value + delta, name, self.unit.clone())
    }

    /// Like [`Dim::new_relative`] with an explicit unit
    pub fn new_relative_with_unit(
        &self,
        delta: f64,
        name: impl Into<String>,
        unit: impl Into<String>,
    ) -> Dim {
        Dim::new(self.value + delta, name, unit)
    }

    /// New quantity named `{prefix}_{name}`
    pub fn new_with_name_prefix(&self, value: f64, prefix: &str) -> Dim {
        Dim::new(value, format!("{}_{}", prefix, self.name), self.unit.clone())
    }

    /// Like [`Dim::new_with_name_prefix`] with an explicit unit
    pub fn new_with_name_prefix_unit(
        &self,
        value: f64,
        prefix: &str,
        unit: impl Into<String>,
    ) -> Dim {
        Dim::new(value, format!("{}_{}", prefix, self.name), unit)
    }

    /// Binary operation between two quantities of the same unit
    pub fn combine(&self, op: DimOp, other: &Dim) -> Result<Dim> {
        if !self.same_unit(other) {
            return Err(JointError::UnitMismatch {
                op: op.symbol().to_string(),
                lhs: self.unit.clone(),
                rhs: other.unit.clone(),
            });
        }
        Ok(Dim::new(
            op.apply(self.value, other.value),
            combine_names(&self.name, op, &other.name),
            self.unit.clone(),
        ))
    }

    pub fn add_dim(&self, other: &Dim) -> Result<Dim> {
        self.combine(DimOp::Add, other)
    }

    pub fn sub_dim(&self, other: &Dim) -> Result<Dim> {
        self.combine(DimOp::Sub, other)
    }

    pub fn mul_dim(&self, other: &Dim) -> Result<Dim> {
        self.combine(DimOp::Mul, other)
    }

    pub fn div_dim(&self, other: &Dim) -> Result<Dim> {
        self.combine(DimOp::Div, other)
    }

    /// Divide by a plain number and record it in the name: `kerf` / 2 -> `kerf/2`
    pub fn div_by(&self, n: f64) -> Dim {
        let mut d = self / n;
        d.name = format!("{}/{}", d.name, n);
        d
    }

    /// Compare values only, ignoring name and unit
    pub fn value_cmp(&self, other: &Dim) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    pub fn is_greater_than(&self, other: &Dim) -> bool {
        self.value > other.value
    }

    pub fn is_less_than(&self, other: &Dim) -> bool {
        self.value < other.value
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} {}", self.value, self.unit)
        } else {
            write!(f, "{}={} {}", self.name, self.value, self.unit)
        }
    }
}

impl PartialEq<f64> for Dim {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd<f64> for Dim {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

macro_rules! scalar_ops {
    ($($trait:ident, $method:ident, $op:tt);*) => {
        $(
            impl $trait<f64> for &Dim {
                type Output = Dim;

                fn $method(self, rhs: f64) -> Dim {
                    Dim::new(self.value $op rhs, self.name.clone(), self.unit.clone())
                }
            }

            impl $trait<f64> for Dim {
                type Output = Dim;

                fn $method(self, rhs: f64) -> Dim {
                    (&self).$method(rhs)
                }
            }

            impl $trait<&Dim> for f64 {
                type Output = Dim;

                fn $method(self, rhs: &Dim) -> Dim {
                    Dim::new(self $op rhs.value, rhs.name.clone(), rhs.unit.clone())
                }
            }

            impl $trait<Dim> for f64 {
                type Output = Dim;

                fn $method(self, rhs: Dim) -> Dim {
                    self.$method(&rhs)
                }
            }
        )*
    };
}

scalar_ops!(Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);

impl Neg for &Dim {
    type Output = Dim;

    fn neg(self) -> Dim {
        self * -1.0
    }
}

impl Neg for Dim {
    type Output = Dim;

    fn neg(self) -> Dim {
        -&self
    }
}

/// Hash key of a [`Dim`] on `(|value|, name, unit)`
#[derive(Debug, Clone)]
pub struct AbsDimKey {
    abs_value: f64,
    name: String,
    unit: String,
}

impl AbsDimKey {
    fn new(dim: &Dim) -> Self {
        Self {
            abs_value: dim.abs_value(),
            name: dim.name.clone(),
            unit: dim.unit.clone(),
        }
    }
}

impl PartialEq for AbsDimKey {
    fn eq(&self, other: &Self) -> bool {
        self.abs_value == other.abs_value && self.name == other.name && self.unit == other.unit
    }
}

impl Eq for AbsDimKey {}

impl Hash for AbsDimKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 and -0.0 compare equal and must hash equal
        let bits = if self.abs_value == 0.0 {
            0u64
        } else {
            self.abs_value.to_bits()
        };
        bits.hash(state);
        self.name.hash(state);
        self.unit.hash(state);
    }
}

impl fmt::Display for AbsDimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbsDimKey({} {} {})", self.abs_value, self.name, self.unit)
    }
}
