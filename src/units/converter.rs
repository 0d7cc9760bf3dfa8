use crate::error::{RecipeError, Result};
use crate::quantity::{round_significant, Quantity, SIGNIFICANT_DIGITS};
use crate::units::table::{UnitQuery, UnitTable};
use crate::units::types::UnitSystem;

/// Bounds for picking a "nice" target unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionOptions {
    /// Smallest acceptable converted magnitude
    pub min_threshold: f64,
    /// Largest acceptable converted magnitude; `None` uses the target system default
    pub max_threshold: Option<f64>,
    /// Walk candidates largest unit first instead of smallest first
    pub sort_descending: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            min_threshold: 0.25,
            max_threshold: None,
            sort_descending: false,
        }
    }
}

impl ConversionOptions {
    pub fn max_threshold_for(&self, system: UnitSystem) -> f64 {
        self.max_threshold
            .unwrap_or_else(|| system.default_max_threshold())
    }
}

/// Convert a quantity into the unit of `to_system` that reads best.
///
/// Candidates are the convertible units of the same category in the target
/// system, smallest first (largest first with `sort_descending`). The first
/// candidate whose magnitude lies within the thresholds wins. When none does,
/// the last candidate examined is returned, so the result degrades to the
/// largest (or smallest) unit of the system instead of failing.
pub fn convert_quantity(
    quantity: &Quantity,
    to_system: UnitSystem,
    table: &UnitTable,
    options: &ConversionOptions,
) -> Result<Quantity> {
    let symbol = quantity.unit.as_deref().ok_or_else(|| {
        RecipeError::ConversionError("Dimensionless quantity has no unit to convert".to_string())
    })?;

    let from_unit = table
        .resolve(symbol)
        .ok_or_else(|| RecipeError::ConversionError(format!("Unknown unit '{}'", symbol)))?;

    let mut candidates = table.query(&UnitQuery {
        system: Some(to_system),
        category: Some(from_unit.category),
        convertible_only: true,
    });
    if options.sort_descending {
        candidates.reverse();
    }

    let base_magnitude = quantity.magnitude * from_unit.factor;
    let min_threshold = options.min_threshold;
    let max_threshold = options.max_threshold_for(to_system);

    let mut converted = None;
    for candidate in candidates {
        let magnitude = round_significant(base_magnitude / candidate.factor, SIGNIFICANT_DIGITS);
        log::debug!(
            "{} {} is {} {}",
            quantity.magnitude,
            from_unit.plural_name,
            magnitude,
            candidate.plural_name
        );
        converted = Some(Quantity::new(magnitude, candidate.plural_name.clone()));

        // direct comparisons: thresholds are floats
        if magnitude >= min_threshold && magnitude <= max_threshold {
            break;
        }
    }

    converted.ok_or_else(|| {
        RecipeError::ConversionError(format!(
            "No {} unit in the {} system to convert '{}' to",
            from_unit.category, to_system, from_unit.plural_name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UnitTable {
        UnitTable::builtin().unwrap()
    }

    #[test]
    fn test_cup_to_si_is_in_range() {
        let table = table();
        let result = convert_quantity(
            &Quantity::new(1.0, "cup"),
            UnitSystem::Si,
            &table,
            &ConversionOptions::default(),
        )
        .unwrap();

        let unit = table.resolve(result.unit.as_deref().unwrap()).unwrap();
        assert_eq!(unit.system, UnitSystem::Si);
        assert!(result.magnitude >= 0.25 && result.magnitude <= 100.0);
        assert_eq!(result.unit.as_deref(), Some("deciliters"));
        assert_eq!(result.magnitude, 2.36588);

        // same table, same answer
        let again = convert_quantity(
            &Quantity::new(1.0, "cup"),
            UnitSystem::Si,
            &table,
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(result, again);
    }

    #[test]
    fn test_small_volume_to_si() {
        let result = convert_quantity(
            &Quantity::new(2.0, "teaspoons"),
            UnitSystem::Si,
            &table(),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(result.unit.as_deref(), Some("milliliters"));
        assert_eq!(result.magnitude, 9.85784);
    }

    #[test]
    fn test_within_system_picks_nicer_unit() {
        let result = convert_quantity(
            &Quantity::new(10.0, "tsp"),
            UnitSystem::Us,
            &table(),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(result.unit.as_deref(), Some("tablespoons"));
        assert!((result.magnitude - 3.33334).abs() < 1e-4);
    }

    #[test]
    fn test_mass_to_us_skips_non_convertible() {
        let result = convert_quantity(
            &Quantity::new(1.0, "kg"),
            UnitSystem::Us,
            &table(),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(result.unit.as_deref(), Some("pounds"));
        assert!((result.magnitude - 2.20462).abs() < 1e-5);
    }

    #[test]
    fn test_fallback_is_last_candidate() {
        let result = convert_quantity(
            &Quantity::new(100.0, "gallons"),
            UnitSystem::Us,
            &table(),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(result.unit.as_deref(), Some("gallons"));
        assert_eq!(result.magnitude, 100.0);

        let options = ConversionOptions {
            max_threshold: Some(1.0),
            ..ConversionOptions::default()
        };
        let result =
            convert_quantity(&Quantity::new(1.0, "cup"), UnitSystem::Si, &table(), &options).unwrap();
        assert_eq!(result.unit.as_deref(), Some("liters"));
        assert_eq!(result.magnitude, 0.236588);
    }

    #[test]
    fn test_sort_descending_prefers_larger_units() {
        let options = ConversionOptions {
            sort_descending: true,
            ..ConversionOptions::default()
        };
        let descending =
            convert_quantity(&Quantity::new(3.0, "cups"), UnitSystem::Si, &table(), &options)
                .unwrap();
        assert_eq!(descending.unit.as_deref(), Some("liters"));
        assert_eq!(descending.magnitude, 0.709764);

        let ascending = convert_quantity(
            &Quantity::new(3.0, "cups"),
            UnitSystem::Si,
            &table(),
            &ConversionOptions::default(),
        )
        .unwrap();
        assert_eq!(ascending.unit.as_deref(), Some("deciliters"));
    }

    #[test]
    fn test_conversion_errors() {
        let table = table();
        let options = ConversionOptions::default();

        assert!(matches!(
            convert_quantity(&Quantity::new(2.0, "handfuls"), UnitSystem::Si, &table, &options),
            Err(RecipeError::ConversionError(_))
        ));
        assert!(matches!(
            convert_quantity(&Quantity::dimensionless(2.0), UnitSystem::Si, &table, &options),
            Err(RecipeError::ConversionError(_))
        ));

        let us_only = UnitTable::from_toml_str(
            r#"
[[unit]]
id = 1
plural = "cups"
singular = "cup"
system = "US"
category = "volume"
factor = 236.588
"#,
        )
        .unwrap();
        assert!(matches!(
            convert_quantity(&Quantity::new(1.0, "cup"), UnitSystem::Si, &us_only, &options),
            Err(RecipeError::ConversionError(_))
        ));
    }
}
