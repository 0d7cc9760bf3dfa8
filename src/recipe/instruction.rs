use crate::quantity::translate_fractions;
use crate::recipe::models::{number_instructions, ParsedInstruction};
use crate::recipe::scan::{split_lines, strip_tab_prefix, word_start};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "Step 2 -", "step 3:", "STEP 4)"
    static ref STEP_LABEL: Regex = Regex::new(r"(?i)^\s*step\s*\d+\s*[-.:)]*").unwrap();
}

/// Instruction text of one line, without numbering; `None` for lines with no words
pub fn parse_instruction_line(line: &str) -> Option<&str> {
    let line = strip_tab_prefix(line);
    let line = match STEP_LABEL.find(line) {
        Some(label) => &line[label.end()..],
        None => line,
    };
    let start = word_start(line)?;
    let instruction = line[start..].trim_end();
    if instruction.is_empty() {
        None
    } else {
        Some(instruction)
    }
}

/// Split an instruction block into step texts, dropping any numbering.
///
/// `"1. Preheat oven\n\n2. Combine ingredients"` -> `["Preheat oven", "Combine ingredients"]`
pub fn parse_instructions(text: &str) -> Vec<String> {
    let text = translate_fractions(text);
    split_lines(&text)
        .filter_map(parse_instruction_line)
        .map(str::to_string)
        .collect()
}

/// Like `parse_instructions`, numbered 1, 2, 3, ... by position
pub fn parse_instruction_steps(text: &str) -> Vec<ParsedInstruction> {
    number_instructions(parse_instructions(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_and_blank_lines() {
        let steps = parse_instructions("1. Preheat oven\n\n2. Combine ingredients\nCook for 15 minutes");
        assert_eq!(
            steps,
            vec!["Preheat oven", "Combine ingredients", "Cook for 15 minutes"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_instructions("").is_empty());
        assert!(parse_instructions("  \n\t\n ").is_empty());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(parse_instruction_line("Step 2 - mix"), Some("mix"));
        assert_eq!(parse_instruction_line("step 10: Fold in the eggs"), Some("Fold in the eggs"));
        assert_eq!(parse_instruction_line("Stephanie's glaze goes on top"), Some("Stephanie's glaze goes on top"));
    }

    #[test]
    fn test_lines_without_words_dropped() {
        let steps = parse_instructions("1.\n2. Stir\n3)\n");
        assert_eq!(steps, vec!["Stir"]);
    }

    #[test]
    fn test_tab_prefix_and_crlf() {
        let steps = parse_instructions("1\tWhisk eggs\r\n2\tAdd ½ cup milk\r\n");
        assert_eq!(steps, vec!["Whisk eggs", "Add 1/2 cup milk"]);
    }

    #[test]
    fn test_non_ascii_first_word_kept() {
        let steps = parse_instructions("1. Égouttez les pâtes\n2. Ñora peppers go in");
        assert_eq!(steps, vec!["Égouttez les pâtes", "Ñora peppers go in"]);
    }

    #[test]
    fn test_hyphenated_number_starts_step() {
        assert_eq!(
            parse_instruction_line("4. 2-3 minutes more, stirring"),
            Some("2-3 minutes more, stirring")
        );
    }

    #[test]
    fn test_positional_step_numbers() {
        let steps = parse_instruction_steps("5. Mix\n9. Bake\n");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].step_number, 1);
        assert_eq!(steps[1].step_number, 2);
        assert_eq!(steps[1].instruction, "Bake");
    }
}
