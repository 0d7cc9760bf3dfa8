use crate::error::RecipeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit family a measurement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum UnitSystem {
    #[serde(rename = "US", alias = "us")]
    Us,
    #[serde(rename = "SI", alias = "si")]
    Si,
}

impl UnitSystem {
    /// Largest magnitude the converter accepts as "nice" when no explicit
    /// maximum is configured
    pub fn default_max_threshold(self) -> f64 {
        match self {
            UnitSystem::Us => 5.0,
            UnitSystem::Si => 100.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Us => "US",
            UnitSystem::Si => "SI",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(UnitSystem::Us),
            "SI" => Ok(UnitSystem::Si),
            other => Err(RecipeError::ParseError(format!(
                "Unknown unit system '{}', expected US or SI",
                other
            ))),
        }
    }
}

/// Group of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    #[serde(alias = "V")]
    Volume,
    #[serde(alias = "M")]
    Mass,
}

impl UnitCategory {
    /// Name of the unit every factor in this category is expressed in
    pub fn base_unit(self) -> &'static str {
        match self {
            UnitCategory::Volume => "milliliters",
            UnitCategory::Mass => "grams",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Mass => "mass",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" | "v" => Ok(UnitCategory::Volume),
            "mass" | "m" => Ok(UnitCategory::Mass),
            other => Err(RecipeError::ParseError(format!(
                "Unknown unit category '{}', expected volume or mass",
                other
            ))),
        }
    }
}

/// A measurement unit from the catalog
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitDefinition {
    #[serde(rename = "id")]
    pub unit_id: u32,

    #[serde(rename = "plural")]
    pub plural_name: String,

    #[serde(rename = "singular")]
    pub singular_name: String,

    #[serde(default)]
    pub abbreviation: Option<String>,

    /// Other spellings found in recipes ("lbs", "c")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    pub system: UnitSystem,

    pub category: UnitCategory,

    /// Size of one unit in the category base unit (ml or g)
    pub factor: f64,

    #[serde(rename = "convertible", default = "default_convertible")]
    pub include_in_conversions: bool,
}

fn default_convertible() -> bool {
    true
}

impl UnitDefinition {
    /// Short name for decimal rendering, falling back to the plural noun
    pub fn short_name(&self) -> &str {
        self.abbreviation.as_deref().unwrap_or(&self.plural_name)
    }

    /// Every name this unit answers to: plural, singular, abbreviation, aliases
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.plural_name.as_str()),
            Some(self.singular_name.as_str()),
            self.abbreviation.as_deref(),
        ]
        .into_iter()
        .flatten()
        .chain(self.aliases.iter().map(String::as_str))
    }
}
