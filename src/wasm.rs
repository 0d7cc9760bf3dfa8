// WebAssembly bindings for the recipe-units API
use crate::format::{format_magnitude, format_quantity};
use crate::quantity::parse_quantity;
use crate::recipe;
use crate::tokens::TokenConverter;
use crate::units::{convert_quantity, ConversionOptions, UnitSystem, UnitTable};
use wasm_bindgen::prelude::*;

fn parse_system(system: Option<String>) -> Result<Option<UnitSystem>, JsValue> {
    system
        .map(|s| s.parse::<UnitSystem>())
        .transpose()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct RecipeUnitsWasm {
    table: UnitTable,
}

#[wasm_bindgen]
impl RecipeUnitsWasm {
    /// Build with a JSON unit catalog, or the built-in one when none is given
    #[wasm_bindgen(constructor)]
    pub fn new(units_json: Option<String>) -> Result<RecipeUnitsWasm, JsValue> {
        let table = match units_json {
            Some(json) => UnitTable::from_json_str(&json),
            None => UnitTable::builtin(),
        }
        .map_err(|e| JsValue::from_str(&format!("Failed to load units: {}", e)))?;

        Ok(Self { table })
    }

    /// Rewrite the `{{ ... }}` quantity tokens of a recipe text
    #[wasm_bindgen]
    pub fn convert_text(
        &self,
        text: &str,
        multiplier: f64,
        system: Option<String>,
    ) -> Result<String, JsValue> {
        let converter = TokenConverter::new(&self.table)
            .multiplier(multiplier)
            .to_system(parse_system(system)?);
        Ok(converter.convert(text))
    }

    /// Returns JSON string of the parsed ingredient records
    #[wasm_bindgen]
    pub fn parse_ingredients(&self, text: &str) -> Result<String, JsValue> {
        let ingredients: Vec<_> = recipe::parse_ingredients(text)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse ingredients: {}", e)))?
            .into_iter()
            .map(|ingredient| ingredient.fold_unknown_measurement(&self.table))
            .collect();

        serde_json::to_string(&ingredients)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize ingredients: {}", e)))
    }

    #[wasm_bindgen]
    pub fn parse_instructions(&self, text: &str) -> js_sys::Array {
        recipe::parse_instructions(text)
            .into_iter()
            .map(|step| JsValue::from_str(&step))
            .collect()
    }

    /// Parse one quantity and format it, converted to `system` when given
    #[wasm_bindgen]
    pub fn format_quantity(&self, text: &str, system: Option<String>) -> Result<String, JsValue> {
        let mut quantity = parse_quantity(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        if quantity.is_dimensionless() {
            return Ok(format_magnitude(quantity.magnitude));
        }

        if let Some(system) = parse_system(system)? {
            quantity = convert_quantity(&quantity, system, &self.table, &ConversionOptions::default())
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
        }

        let symbol = quantity.unit.as_deref().unwrap_or_default();
        let unit = self
            .table
            .resolve(symbol)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown unit '{}'", symbol)))?;
        format_quantity(&quantity, unit).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
