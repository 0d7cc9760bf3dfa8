use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecipeError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Unit table error: {0}")]
    TableError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

impl From<std::io::Error> for RecipeError {
    fn from(e: std::io::Error) -> Self {
        RecipeError::ConfigError(e.to_string())
    }
}

impl From<toml::de::Error> for RecipeError {
    fn from(e: toml::de::Error) -> Self {
        RecipeError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(e: serde_json::Error) -> Self {
        RecipeError::TableError(e.to_string())
    }
}
