use crate::error::{RecipeError, Result};
use crate::quantity::{approximate, Quantity, MAX_DENOMINATOR};
use crate::units::{UnitDefinition, UnitSystem};

fn check_magnitude(x: f64) -> Result<()> {
    if !x.is_finite() {
        return Err(RecipeError::FormatError(format!(
            "Cannot format non-finite magnitude {}",
            x
        )));
    }
    if x < 0.0 {
        return Err(RecipeError::FormatError(format!(
            "Cannot format negative magnitude {}",
            x
        )));
    }
    Ok(())
}

/// Render a non-negative number as an approximate mixed fraction:
/// `1.25` -> `"1 1/4"`, `0.5` -> `"1/2"`, `3.0` -> `"3"`.
///
/// Uses the same denominator limit as the quantity parser, so parsing the
/// output gives back the same fraction.
pub fn fractionalize(x: f64) -> Result<String> {
    check_magnitude(x)?;

    let mut whole = x.floor();
    let (mut numer, denom) = approximate(x - whole, MAX_DENOMINATOR as u32);
    if numer != 0 && u64::from(denom) == numer {
        whole += 1.0;
        numer = 0;
    }

    let mut parts = Vec::new();
    if whole > 0.0 {
        parts.push(format!("{:.0}", whole));
    }
    if numer > 0 {
        parts.push(format!("{}/{}", numer, denom));
    }

    if parts.is_empty() {
        Ok("0".to_string())
    } else {
        Ok(parts.join(" "))
    }
}

/// Singular only for exactly one; 0, 0.5 and 2 all take the plural
pub fn pluralize<'a, N: Into<f64>>(n: N, singular: &'a str, plural: &'a str) -> &'a str {
    if n.into() == 1.0 {
        singular
    } else {
        plural
    }
}

/// Render a bare magnitude: `9.0` -> `"9"`, `0.75` -> `"0.75"`
pub fn format_magnitude(x: f64) -> String {
    format!("{}", x)
}

/// Render a quantity in its resolved unit.
///
/// SI units use two decimals and the abbreviation ("236.59 ml"); US units use
/// a fraction and the pluralized noun ("1 1/2 cups").
pub fn format_quantity(quantity: &Quantity, unit: &UnitDefinition) -> Result<String> {
    let magnitude = quantity.magnitude;
    check_magnitude(magnitude)?;

    match unit.system {
        UnitSystem::Si => Ok(format!("{:.2} {}", magnitude, unit.short_name())),
        UnitSystem::Us => Ok(format!(
            "{} {}",
            fractionalize(magnitude)?,
            pluralize(magnitude, &unit.singular_name, &unit.plural_name)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::parse_quantity;
    use crate::units::UnitTable;

    #[test]
    fn test_fractionalize() {
        assert_eq!(fractionalize(1.25).unwrap(), "1 1/4");
        assert_eq!(fractionalize(0.5).unwrap(), "1/2");
        assert_eq!(fractionalize(3.0).unwrap(), "3");
        assert_eq!(fractionalize(2.333333).unwrap(), "2 1/3");
        assert_eq!(fractionalize(0.0).unwrap(), "0");
    }

    #[test]
    fn test_fractionalize_rounds_up_near_whole() {
        assert_eq!(fractionalize(2.97).unwrap(), "3");
        assert_eq!(fractionalize(0.999).unwrap(), "1");
    }

    #[test]
    fn test_fractionalize_decimal_midpoints() {
        assert_eq!(fractionalize(0.05).unwrap(), "1/10");
        assert_eq!(fractionalize(0.95).unwrap(), "9/10");
        assert_eq!(fractionalize(2.05).unwrap(), "2");
    }

    #[test]
    fn test_fractionalize_rejects_bad_input() {
        assert!(matches!(fractionalize(-1.0), Err(RecipeError::FormatError(_))));
        assert!(matches!(fractionalize(f64::NAN), Err(RecipeError::FormatError(_))));
        assert!(matches!(
            fractionalize(f64::INFINITY),
            Err(RecipeError::FormatError(_))
        ));
    }

    #[test]
    fn test_fraction_round_trip() {
        for whole in 0..30 {
            for denom in 1..=10 {
                for numer in 0..denom {
                    let x = whole as f64 + numer as f64 / denom as f64;
                    let text = fractionalize(x).unwrap();
                    let parsed = parse_quantity(&format!("{} cups", text)).unwrap();
                    assert_eq!(
                        fractionalize(parsed.magnitude).unwrap(),
                        text,
                        "round trip of {}",
                        x
                    );
                }
            }
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1.0, "cup", "cups"), "cup");
        assert_eq!(pluralize(2.0, "cup", "cups"), "cups");
        assert_eq!(pluralize(0.5, "cup", "cups"), "cups");
        assert_eq!(pluralize(0.0, "cup", "cups"), "cups");
        assert_eq!(pluralize(1u32, "hour", "hours"), "hour");
    }

    #[test]
    fn test_format_magnitude() {
        assert_eq!(format_magnitude(9.0), "9");
        assert_eq!(format_magnitude(0.75), "0.75");
    }

    #[test]
    fn test_format_quantity() {
        let table = UnitTable::builtin().unwrap();

        let cup = table.resolve("cup").unwrap();
        assert_eq!(
            format_quantity(&Quantity::new(1.5, "cup"), cup).unwrap(),
            "1 1/2 cups"
        );
        assert_eq!(format_quantity(&Quantity::new(1.0, "cup"), cup).unwrap(), "1 cup");

        let ml = table.resolve("ml").unwrap();
        assert_eq!(
            format_quantity(&Quantity::new(236.588, "ml"), ml).unwrap(),
            "236.59 ml"
        );

        assert!(matches!(
            format_quantity(&Quantity::new(-2.0, "cup"), cup),
            Err(RecipeError::FormatError(_))
        ));
    }
}
