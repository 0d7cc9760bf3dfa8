use crate::error::{RecipeError, Result};
use crate::quantity::{parse_number, translate_fractions};
use crate::recipe::models::ParsedIngredient;
use crate::recipe::scan::{numeric_run, split_lines, strip_tab_prefix, word_start};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[measurement]` or `[measurement] of` right after the quantity
    static ref BRACKET_MEASUREMENT: Regex = Regex::new(r"^\s*\[([^\]]*)\](?:\s+of\b)?").unwrap();

    /// A bare measurement word such as "cups", "tbsp." or "cuillères"
    static ref MEASUREMENT_WORD: Regex = Regex::new(r"^\p{Alphabetic}[\p{Alphabetic}.]*$").unwrap();
}

fn strip_leading_of(text: &str) -> &str {
    match text.strip_prefix("of") {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest,
        _ => text,
    }
}

/// Split "[cups] of flour" into ("cups", "flour")
fn split_bracket_measurement(rest: &str) -> Option<(&str, &str)> {
    let caps = BRACKET_MEASUREMENT.captures(rest)?;
    let measurement = caps.get(1)?.as_str().trim();
    let name = rest[caps.get(0)?.end()..].trim();
    if measurement.is_empty() {
        return Some(("", name));
    }
    Some((measurement, name))
}

/// Split "cups of flour" into ("cups", "flour") when a name follows the word
fn split_bare_measurement(rest: &str) -> Option<(&str, &str)> {
    let (word, tail) = rest.trim().split_once(char::is_whitespace)?;
    if !MEASUREMENT_WORD.is_match(word) {
        return None;
    }
    let name = strip_leading_of(tail.trim_start()).trim();
    if name.is_empty() {
        return None;
    }
    Some((word, name))
}

/// Parse one ingredient line such as "3 cups flour", "1 1/2 [fl oz] of milk"
/// or "salt and pepper".
///
/// A quantity counts only when its digits come before the first word;
/// otherwise the quantity is 1 and the whole text from that word on is the
/// name. After a quantity, a `[measurement]` token (optionally followed by
/// "of") is taken as the measurement, or else the first of two or more words.
pub fn parse_ingredient_line(text: &str) -> Result<ParsedIngredient> {
    let line = translate_fractions(strip_tab_prefix(text));
    let line = line.trim();

    let word = word_start(line);
    let quantity_run = numeric_run(line).filter(|run| word.map_or(true, |w| run.start < w));

    let Some(run) = quantity_run else {
        let name = match word {
            Some(start) => line[start..].trim(),
            None => line,
        };
        if name.is_empty() {
            return Err(RecipeError::ParseError(
                "Ingredient line is empty".to_string(),
            ));
        }
        return Ok(ParsedIngredient::new(1.0, None, name));
    };

    let quantity_end = word.map_or(run.end, |w| run.end.min(w));
    let quantity = parse_number(&line[run.start..quantity_end])?;
    let rest = &line[quantity_end..];

    let (measurement, name) = match split_bracket_measurement(rest) {
        Some(("", name)) => (None, name),
        Some((measurement, name)) => (Some(measurement), name),
        None => match split_bare_measurement(rest) {
            Some((measurement, name)) => (Some(measurement), name),
            None => (None, rest.trim()),
        },
    };

    if name.is_empty() {
        return Err(RecipeError::ParseError(format!(
            "No ingredient name in '{}'",
            line
        )));
    }

    Ok(ParsedIngredient::new(quantity, measurement, name))
}

/// Parse an ingredient block, one ingredient per non-blank line
pub fn parse_ingredients(text: &str) -> Result<Vec<ParsedIngredient>> {
    split_lines(text)
        .enumerate()
        .map(|(index, line)| {
            parse_ingredient_line(line).map_err(|e| match e {
                RecipeError::ParseError(msg) => {
                    RecipeError::ParseError(format!("line {}: {}", index + 1, msg))
                }
                other => other,
            })
        })
        .collect()
}
