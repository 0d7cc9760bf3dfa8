// Ingredient and instruction text blocks <-> structured recipe records

pub mod formatter;
pub mod ingredient;
pub mod instruction;
pub mod models;
pub mod scale;
pub mod scan;

#[cfg(test)]
mod tests;

pub use formatter::{format_ingredient, format_ingredients, format_instructions};
pub use ingredient::{parse_ingredient_line, parse_ingredients};
pub use instruction::{parse_instruction_line, parse_instruction_steps, parse_instructions};
pub use models::{number_instructions, ParsedIngredient, ParsedInstruction, ScaledIngredient};
pub use scale::{scale_ingredient, scale_ingredients};
