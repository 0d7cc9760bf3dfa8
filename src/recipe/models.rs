use crate::units::UnitTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ingredient line split into quantity, measurement and name
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParsedIngredient {
    pub quantity: f64,

    /// Measurement token as written; may not be a known unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_name: Option<String>,

    pub ingredient_name: String,
}

impl ParsedIngredient {
    pub fn new(quantity: f64, measurement_name: Option<&str>, ingredient_name: &str) -> Self {
        Self {
            quantity,
            measurement_name: measurement_name.map(str::to_string),
            ingredient_name: ingredient_name.to_string(),
        }
    }

    /// Move a measurement the table does not know back in front of the
    /// ingredient name: `2 [large] eggs` -> quantity 2, name "large eggs"
    pub fn fold_unknown_measurement(self, table: &UnitTable) -> Self {
        match self.measurement_name {
            Some(ref measurement) if table.resolve(measurement).is_none() => Self {
                ingredient_name: format!("{} {}", measurement, self.ingredient_name),
                measurement_name: None,
                quantity: self.quantity,
            },
            _ => self,
        }
    }
}

/// One numbered instruction step
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedInstruction {
    pub step_number: u32,
    pub instruction: String,
}

/// Number instruction texts 1, 2, 3, ... in order
pub fn number_instructions(steps: Vec<String>) -> Vec<ParsedInstruction> {
    steps
        .into_iter()
        .zip(1..)
        .map(|(instruction, step_number)| ParsedInstruction {
            step_number,
            instruction,
        })
        .collect()
}

/// An ingredient after scaling and optional unit conversion, ready to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledIngredient {
    pub quantity: f64,
    pub quantity_string: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<String>,
    pub ingredient_name: String,
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.measurement {
            Some(measurement) => write!(
                f,
                "{} {} {}",
                self.quantity_string, measurement, self.ingredient_name
            ),
            None => write!(f, "{} {}", self.quantity_string, self.ingredient_name),
        }
    }
}
