use crate::error::{RecipeError, Result};
use crate::units::types::{UnitCategory, UnitDefinition, UnitSystem};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("../../data/units.toml");

/// Read-only catalog of known units, indexed by every normalized unit name
#[derive(Debug, Clone)]
pub struct UnitTable {
    // Sorted by category, then by factor (smallest unit first)
    units: Vec<UnitDefinition>,
    index: HashMap<String, usize>,
}

/// Filter for `UnitTable::query`; `None` fields match anything
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitQuery {
    pub system: Option<UnitSystem>,
    pub category: Option<UnitCategory>,
    pub convertible_only: bool,
}

// TOML catalogs use [[unit]] array syntax
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(rename = "unit", default)]
    units: Vec<UnitDefinition>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<UnitDefinition>),
    Wrapped(CatalogFile),
}

/// Normalize a unit name into a lookup key: "Fl. Oz" -> "fl_oz"
pub fn normalize_unit_name(name: &str) -> String {
    name.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

impl UnitTable {
    pub fn new(mut units: Vec<UnitDefinition>) -> Result<Self> {
        for unit in &units {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(RecipeError::TableError(format!(
                    "Unit '{}' has invalid factor {}",
                    unit.plural_name, unit.factor
                )));
            }
        }

        units.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.factor.total_cmp(&b.factor))
                .then(a.unit_id.cmp(&b.unit_id))
        });

        let mut index = HashMap::new();
        for (position, unit) in units.iter().enumerate() {
            for name in unit.names() {
                let key = normalize_unit_name(name);
                if key.is_empty() {
                    continue;
                }
                match index.get(&key) {
                    Some(&existing) if existing != position => {
                        let existing: &UnitDefinition = &units[existing];
                        log::warn!(
                            "Unit name '{}' of '{}' is already used by '{}'; keeping the first",
                            name,
                            unit.plural_name,
                            existing.plural_name
                        );
                    }
                    Some(_) => {}
                    None => {
                        index.insert(key, position);
                    }
                }
            }
        }

        Ok(Self { units, index })
    }

    /// The built-in cooking catalog
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: CatalogFile = toml::from_str(content)
            .map_err(|e| RecipeError::TableError(format!("Invalid TOML unit catalog: {}", e)))?;
        Self::new(catalog.units)
    }

    /// Accepts either a bare array of units or `{ "unit": [...] }`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: JsonCatalog = serde_json::from_str(content)
            .map_err(|e| RecipeError::TableError(format!("Invalid JSON unit catalog: {}", e)))?;
        match catalog {
            JsonCatalog::List(units) => Self::new(units),
            JsonCatalog::Wrapped(file) => Self::new(file.units),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RecipeError::TableError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Look up a unit by plural, singular or abbreviated name
    pub fn resolve(&self, name: &str) -> Option<&UnitDefinition> {
        self.index
            .get(&normalize_unit_name(name))
            .map(|&position| &self.units[position])
    }

    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn query(&self, query: &UnitQuery) -> Vec<&UnitDefinition> {
        self.units
            .iter()
            .filter(|u| query.system.map_or(true, |s| u.system == s))
            .filter(|u| query.category.map_or(true, |c| u.category == c))
            .filter(|u| !query.convertible_only || u.include_in_conversions)
            .collect()
    }

    /// All recognized unit strings: plurals, then singulars, then
    /// abbreviations, then aliases
    pub fn unit_strings(&self) -> Vec<&str> {
        let mut strings: Vec<&str> = self.units.iter().map(|u| u.plural_name.as_str()).collect();
        strings.extend(self.units.iter().map(|u| u.singular_name.as_str()));
        strings.extend(self.units.iter().filter_map(|u| u.abbreviation.as_deref()));
        strings.extend(
            self.units
                .iter()
                .flat_map(|u| u.aliases.iter().map(String::as_str)),
        );
        strings
    }
}
