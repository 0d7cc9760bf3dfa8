use crate::error::{RecipeError, Result};
use crate::format::{format_magnitude, format_quantity};
use crate::quantity::parse_quantity;
use crate::units::{convert_quantity, ConversionOptions, UnitSystem, UnitTable};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

lazy_static! {
    /// `{{ 3 cups }}`, `{{! 1 tsp}}`; content may not contain `}`
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\{\{\s*(!?)\s*([^}]*?)\s*\}\}").unwrap();
}

/// Markup element wrapped around each rendered token
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuantityTag {
    #[serde(rename = "tag")]
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl QuantityTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attribute keys are lower-cased
    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_lowercase(), value.into());
        self
    }

    /// `<span class="quantity">9 cups</span>`; attributes in key order
    pub fn wrap(&self, content: &str) -> String {
        let mut open = self.name.clone();
        for (key, value) in &self.attributes {
            open.push_str(&format!(" {}=\"{}\"", key, value.replace('"', "&quot;")));
        }
        format!("<{}>{}</{}>", open, content, self.name)
    }
}

/// Rewrites the `{{ ... }}` quantity tokens of a recipe text.
///
/// Each token is parsed, multiplied unless it starts with `!`, converted to
/// `to_system` when one is set, and formatted for its unit. A token that
/// fails any step is logged and rendered as its own trimmed content; the
/// rest of the text is still converted.
pub struct TokenConverter<'a> {
    table: &'a UnitTable,
    multiplier: f64,
    to_system: Option<UnitSystem>,
    options: ConversionOptions,
    tag: Option<&'a QuantityTag>,
}

impl<'a> TokenConverter<'a> {
    pub fn new(table: &'a UnitTable) -> Self {
        Self {
            table,
            multiplier: 1.0,
            to_system: None,
            options: ConversionOptions::default(),
            tag: None,
        }
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn to_system(mut self, system: Option<UnitSystem>) -> Self {
        self.to_system = system;
        self
    }

    pub fn options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tag(mut self, tag: Option<&'a QuantityTag>) -> Self {
        self.tag = tag;
        self
    }

    pub fn convert(&self, text: &str) -> String {
        TOKEN_PATTERN
            .replace_all(text, |caps: &Captures| {
                let suppress = !caps[1].is_empty();
                let content = &caps[2];
                let rendered = self.render_token(suppress, content).unwrap_or_else(|e| {
                    log::warn!("Leaving quantity token '{}' as written: {}", content, e);
                    content.trim().to_string()
                });
                match self.tag {
                    Some(tag) => tag.wrap(&rendered),
                    None => rendered,
                }
            })
            .into_owned()
    }

    /// Render the content of one token
    pub fn render_token(&self, suppress: bool, content: &str) -> Result<String> {
        let mut quantity = parse_quantity(content)?;
        if !suppress {
            quantity = quantity.scaled(self.multiplier);
        }
        if quantity.is_dimensionless() {
            return Ok(format_magnitude(quantity.magnitude));
        }

        if let Some(system) = self.to_system {
            let convertible = quantity
                .unit
                .as_deref()
                .and_then(|symbol| self.table.resolve(symbol))
                .map_or(true, |unit| unit.include_in_conversions);
            if convertible {
                quantity = convert_quantity(&quantity, system, self.table, &self.options)?;
            }
        }

        let symbol = quantity.unit.as_deref().unwrap_or_default();
        let unit = self
            .table
            .resolve(symbol)
            .ok_or_else(|| RecipeError::ConversionError(format!("Unknown unit '{}'", symbol)))?;
        format_quantity(&quantity, unit)
    }
}

/// Convert every quantity token of `text` with default conversion thresholds
pub fn convert_tokens(
    text: &str,
    multiplier: f64,
    to_system: Option<UnitSystem>,
    table: &UnitTable,
    tag: Option<&QuantityTag>,
) -> String {
    TokenConverter::new(table)
        .multiplier(multiplier)
        .to_system(to_system)
        .tag(tag)
        .convert(text)
}
