use crate::format::{format_magnitude, fractionalize, pluralize};
use crate::quantity::{round_significant, Quantity, SIGNIFICANT_DIGITS};
use crate::recipe::models::{ParsedIngredient, ScaledIngredient};
use crate::units::{convert_quantity, ConversionOptions, UnitDefinition, UnitSystem, UnitTable};

fn quantity_string(quantity: f64, unit: Option<&UnitDefinition>) -> String {
    match unit {
        Some(unit) if unit.system == UnitSystem::Si => format!("{:.2}", quantity),
        _ => fractionalize(quantity).unwrap_or_else(|_| format_magnitude(quantity)),
    }
}

/// Scale one ingredient and, when `to_system` is given and its measurement
/// is a convertible unit, convert it. A failed conversion keeps the scaled,
/// unconverted values.
pub fn scale_ingredient(
    ingredient: &ParsedIngredient,
    multiplier: f64,
    to_system: Option<UnitSystem>,
    table: &UnitTable,
    options: &ConversionOptions,
) -> ScaledIngredient {
    let mut quantity = round_significant(ingredient.quantity * multiplier, SIGNIFICANT_DIGITS);
    let mut unit = ingredient
        .measurement_name
        .as_deref()
        .and_then(|name| table.resolve(name));

    if let (Some(system), Some(from_unit)) = (to_system, unit) {
        if from_unit.include_in_conversions {
            let from = Quantity::new(quantity, from_unit.plural_name.clone());
            match convert_quantity(&from, system, table, options) {
                Ok(converted) => {
                    quantity = converted.magnitude;
                    unit = converted.unit.as_deref().and_then(|name| table.resolve(name));
                }
                Err(e) => {
                    log::warn!(
                        "Keeping '{}' in {}: {}",
                        ingredient.ingredient_name,
                        from_unit.plural_name,
                        e
                    );
                }
            }
        }
    }

    let measurement = match unit {
        Some(unit) => Some(pluralize(quantity, &unit.singular_name, &unit.plural_name).to_string()),
        None => ingredient.measurement_name.clone(),
    };

    ScaledIngredient {
        quantity,
        quantity_string: quantity_string(quantity, unit),
        measurement,
        ingredient_name: ingredient.ingredient_name.clone(),
    }
}

/// Scale and optionally convert a whole ingredient list
pub fn scale_ingredients(
    ingredients: &[ParsedIngredient],
    multiplier: f64,
    to_system: Option<UnitSystem>,
    table: &UnitTable,
    options: &ConversionOptions,
) -> Vec<ScaledIngredient> {
    ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, multiplier, to_system, table, options))
        .collect()
}
