#[cfg(test)]
mod tests {
    use super::super::formatter::{format_ingredients, format_instructions};
    use super::super::ingredient::parse_ingredients;
    use super::super::instruction::{parse_instruction_steps, parse_instructions};
    use super::super::models::ParsedIngredient;
    use super::super::scale::scale_ingredients;
    use crate::units::{ConversionOptions, UnitSystem, UnitTable};

    const INGREDIENTS: &str = "
        2 1/4 cups all-purpose flour
        1 [tsp] of baking soda
        ½ tsp salt
        2 large eggs
        1 banana
        vanilla to taste
    ";

    #[test]
    fn test_ingredient_block_round_trips_through_editor_text() {
        let table = UnitTable::builtin().unwrap();
        let parsed: Vec<ParsedIngredient> = parse_ingredients(INGREDIENTS)
            .unwrap()
            .into_iter()
            .map(|i| i.fold_unknown_measurement(&table))
            .collect();

        assert_eq!(parsed.len(), 6);
        assert_eq!(parsed[0].quantity, 2.25);
        assert_eq!(parsed[0].ingredient_name, "all-purpose flour");
        assert_eq!(parsed[3].measurement_name, None);
        assert_eq!(parsed[3].ingredient_name, "large eggs");
        assert_eq!(parsed[5].quantity, 1.0);
        assert_eq!(parsed[5].ingredient_name, "vanilla to taste");

        let text = format_ingredients(&parsed).unwrap();
        let reparsed: Vec<ParsedIngredient> = parse_ingredients(&text)
            .unwrap()
            .into_iter()
            .map(|i| i.fold_unknown_measurement(&table))
            .collect();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_instruction_block_round_trips_through_editor_text() {
        let steps = parse_instruction_steps(
            "Step 1 - Preheat the oven to 350 degrees.\n\n 2. Cream butter and sugar\n\t3) Bake 12-15 minutes",
        );
        let texts: Vec<&str> = steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Preheat the oven to 350 degrees.",
                "Cream butter and sugar",
                "Bake 12-15 minutes"
            ]
        );

        let text = format_instructions(&steps);
        assert_eq!(parse_instructions(&text), texts);
    }

    #[test]
    fn test_recipe_scaled_and_converted() {
        let table = UnitTable::builtin().unwrap();
        let parsed: Vec<ParsedIngredient> = parse_ingredients("1 cup milk\n8 oz cheddar\n2 eggs")
            .unwrap()
            .into_iter()
            .map(|i| i.fold_unknown_measurement(&table))
            .collect();

        let lines: Vec<String> = scale_ingredients(
            &parsed,
            2.0,
            Some(UnitSystem::Si),
            &table,
            &ConversionOptions::default(),
        )
        .iter()
        .map(|i| i.to_string())
        .collect();

        assert_eq!(lines[0], "4.73 deciliters milk");
        assert_eq!(lines[1], "0.45 kilograms cheddar");
        assert_eq!(lines[2], "4 eggs");
    }
}
