use crate::error::{RecipeError, Result};
use crate::quantity::fraction::{round_significant, Ratio, MAX_DENOMINATOR, SIGNIFICANT_DIGITS};
use crate::quantity::glyphs::translate_fractions;
use crate::quantity::types::Quantity;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A period after a letter: "fl. oz" -> "fl oz"
    static ref LETTER_PERIOD: Regex = Regex::new(r"(\p{Alphabetic})\.").unwrap();

    /// Whitespace after a letter, joined so multi-word units form one key
    static ref LETTER_SPACE: Regex = Regex::new(r"(\p{Alphabetic})\s+").unwrap();

    /// Leading digit run (digits, '/', '.', whitespace), then the unit name
    static ref QUANTITY_PATTERN: Regex = Regex::new(r"(?s)^(\d+[\d/.\s]*)(.*)$").unwrap();
}

/// Parse a number run such as "3", "1/2", "0.75" or the mixed fraction "1 1/2".
///
/// Fractional parts are approximated with denominators up to 10 and the result
/// is rounded to six significant digits.
pub fn parse_number(run: &str) -> Result<f64> {
    let tokens: Vec<&str> = run.split_whitespace().collect();

    let value = match tokens.as_slice() {
        [single] => Ratio::parse(single)?.limit_denominator(MAX_DENOMINATOR),
        [whole, fraction] => {
            if !whole.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RecipeError::ParseError(format!(
                    "Whole part '{}' of '{}' is not an integer",
                    whole,
                    run.trim()
                )));
            }
            let whole = Ratio::parse(whole)?;
            let fraction = Ratio::parse(fraction)?.limit_denominator(MAX_DENOMINATOR);
            whole.add(fraction)?
        }
        [] => {
            return Err(RecipeError::ParseError("Empty number".to_string()));
        }
        _ => {
            return Err(RecipeError::ParseError(format!(
                "Too many numbers in '{}'",
                run.trim()
            )));
        }
    };

    Ok(round_significant(value.to_f64(), SIGNIFICANT_DIGITS))
}

/// Normalize unit punctuation: "fl. oz" -> "fl_oz", "fluid oz" -> "fluid_oz"
fn normalize_unit_text(text: &str) -> String {
    let without_periods = LETTER_PERIOD.replace_all(text, "$1");
    LETTER_SPACE
        .replace_all(&without_periods, "${1}_")
        .into_owned()
}

/// Parse text like "3 cups", "¼ cup", "1 1/2 cup" or "7" into a `Quantity`.
///
/// Text without a unit yields a dimensionless quantity; text that does not
/// start with a digit is a `ParseError`.
pub fn parse_quantity(text: &str) -> Result<Quantity> {
    let translated = translate_fractions(text.trim());
    let normalized = normalize_unit_text(&translated);

    let captures = QUANTITY_PATTERN.captures(&normalized).ok_or_else(|| {
        RecipeError::ParseError(format!("No leading number in '{}'", text.trim()))
    })?;

    let magnitude = parse_number(&captures[1])?;
    let unit = captures[2].trim();

    if unit.is_empty() {
        Ok(Quantity::dimensionless(magnitude))
    } else {
        Ok(Quantity::new(magnitude, unit))
    }
}
