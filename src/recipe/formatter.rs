use crate::error::Result;
use crate::format::fractionalize;
use crate::recipe::models::{ParsedIngredient, ParsedInstruction};

/// Render an ingredient as an editable line that parses back to the same record:
/// `1 1/2 [cups] flour`, or `banana` for a lone quantity of one
pub fn format_ingredient(ingredient: &ParsedIngredient) -> Result<String> {
    let quantity = fractionalize(ingredient.quantity)?;
    let name = &ingredient.ingredient_name;

    Ok(match &ingredient.measurement_name {
        Some(measurement) => format!("{} [{}] {}", quantity, measurement, name),
        None if ingredient.quantity == 1.0
            && name.starts_with(char::is_alphabetic) =>
        {
            name.clone()
        }
        None => format!("{} {}", quantity, name),
    })
}

pub fn format_ingredients(ingredients: &[ParsedIngredient]) -> Result<String> {
    let lines = ingredients
        .iter()
        .map(format_ingredient)
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

/// Render steps as "1. Preheat oven", one per line
pub fn format_instructions(instructions: &[ParsedInstruction]) -> String {
    instructions
        .iter()
        .map(|step| format!("{}. {}", step.step_number, step.instruction))
        .collect::<Vec<_>>()
        .join("\n")
}
