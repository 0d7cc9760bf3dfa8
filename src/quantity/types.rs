use crate::quantity::fraction::{round_significant, SIGNIFICANT_DIGITS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A magnitude with an optional unit symbol.
///
/// The symbol is kept as written ("cups", "fl_oz"); it is resolved against a
/// `UnitTable` only when converting or formatting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Quantity {
    pub magnitude: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude,
            unit: Some(unit.into()),
        }
    }

    pub fn dimensionless(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: None,
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_none()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            magnitude: round_significant(self.magnitude * factor, SIGNIFICANT_DIGITS),
            unit: self.unit.clone(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.magnitude, unit),
            None => write!(f, "{}", self.magnitude),
        }
    }
}
