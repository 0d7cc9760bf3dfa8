use crate::error::Result;
use crate::tokens::QuantityTag;
use crate::units::{ConversionOptions, UnitSystem, UnitTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Unit selection thresholds
    #[serde(default)]
    pub conversion: ConversionConfig,

    // Unit catalog source
    #[serde(default)]
    pub units: UnitsConfig,

    // Markup around rendered tokens
    #[serde(default)]
    pub markup: Option<QuantityTag>,

    // Directory of the loaded file; relative catalog paths resolve against it
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionConfig {
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,

    #[serde(default)]
    pub us_max_threshold: Option<f64>,

    #[serde(default)]
    pub si_max_threshold: Option<f64>,

    #[serde(default)]
    pub sort_descending: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            min_threshold: default_min_threshold(),
            us_max_threshold: None,
            si_max_threshold: None,
            sort_descending: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UnitsConfig {
    // .toml or .json catalog; built-in catalog when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_min_threshold() -> f64 {
    0.25
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::load_from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Conversion thresholds for converting into `system`
    pub fn conversion_options(&self, system: UnitSystem) -> ConversionOptions {
        let max_threshold = match system {
            UnitSystem::Us => self.conversion.us_max_threshold,
            UnitSystem::Si => self.conversion.si_max_threshold,
        };
        ConversionOptions {
            min_threshold: self.conversion.min_threshold,
            max_threshold,
            sort_descending: self.conversion.sort_descending,
        }
    }

    /// Load the configured unit catalog, or the built-in one
    pub fn unit_table(&self) -> Result<UnitTable> {
        match &self.units.path {
            Some(path) => {
                let path = match &self.base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path.clone(),
                };
                log::debug!("Loading unit catalog from {}", path.display());
                UnitTable::load_from_file(path)
            }
            None => UnitTable::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::empty();
        assert_eq!(
            config.conversion_options(UnitSystem::Si),
            ConversionOptions::default()
        );
        assert!(config.markup.is_none());
        assert_eq!(config.unit_table().unwrap().len(), UnitTable::builtin().unwrap().len());
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
            [conversion]
            min_threshold = 0.5
            si_max_threshold = 250.0
            sort_descending = true

            [markup]
            tag = "span"
            [markup.attributes]
            class = "quantity"
            "#,
        )
        .unwrap();

        let si = config.conversion_options(UnitSystem::Si);
        assert_eq!(si.min_threshold, 0.5);
        assert_eq!(si.max_threshold, Some(250.0));
        assert!(si.sort_descending);
        assert_eq!(config.conversion_options(UnitSystem::Us).max_threshold, None);

        let tag = config.markup.unwrap();
        assert_eq!(tag.name, "span");
        assert_eq!(tag.attributes.get("class").map(String::as_str), Some("quantity"));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::load_from_str("[conversion]\nmin_threshold = \"low\""),
            Err(RecipeError::ConfigError(_))
        ));
        assert!(matches!(
            Config::load_from_file("/nonexistent/recipe-units.toml"),
            Err(RecipeError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = Config::load_from_str("[units]\npath = \"/nonexistent/units.json\"").unwrap();
        assert!(config.unit_table().is_err());
    }
}
