// Text scanning shared by the ingredient and instruction parsers

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    /// Lines are separated by a newline plus any following whitespace
    pub static ref LINE_BREAK: Regex = Regex::new(r"\n\s*").unwrap();

    /// Digits optionally followed by more digits, '/', '.' and whitespace
    static ref NUMERIC_RUN: Regex = Regex::new(r"\d+[\d/.\s]*").unwrap();

    /// A run of letters in any script, or a whitespace-delimited number or
    /// fraction followed by a hyphen ("2-inch", "1/2-inch"), which starts a
    /// word rather than a quantity
    static ref WORD_START: Regex = Regex::new(r"\p{Alphabetic}+|(?:^|\s)(\d[\d/]*-)").unwrap();
}

/// Drop everything up to and including the last tab (spreadsheet pastes)
pub fn strip_tab_prefix(line: &str) -> &str {
    match line.rfind('\t') {
        Some(position) => &line[position + 1..],
        None => line,
    }
}

/// Byte offset where the first word starts
pub fn word_start(text: &str) -> Option<usize> {
    WORD_START
        .captures(text)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.start())
}

/// Byte range of the first numeric run
pub fn numeric_run(text: &str) -> Option<Range<usize>> {
    NUMERIC_RUN.find(text).map(|m| m.range())
}

/// Non-blank lines of a text block
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK
        .split(text.trim())
        .filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tab_prefix() {
        assert_eq!(strip_tab_prefix("1\t2\t3 cups flour"), "3 cups flour");
        assert_eq!(strip_tab_prefix("3 cups flour"), "3 cups flour");
        assert_eq!(strip_tab_prefix("flour\t"), "");
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("1. Preheat oven"), Some(3));
        assert_eq!(word_start("2-inch piece"), Some(0));
        assert_eq!(word_start("1 2-inch piece"), Some(2));
        assert_eq!(word_start("1/2-inch piece"), Some(0));
        assert_eq!(word_start("1 1/2-inch piece"), Some(2));
        assert_eq!(word_start("42"), None);
        assert_eq!(word_start(""), None);
    }

    #[test]
    fn test_word_start_non_ascii_letters() {
        assert_eq!(word_start("Émmental, grated"), Some(0));
        assert_eq!(word_start("2. Ñora peppers"), Some(3));
        assert_eq!(word_start("1) Žemlovka"), Some(3));
    }

    #[test]
    fn test_numeric_run() {
        assert_eq!(numeric_run("3 cups"), Some(0..2));
        assert_eq!(numeric_run(" - 1 1/2 cups"), Some(3..9));
        assert_eq!(numeric_run("salt"), None);
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<&str> = split_lines("a\n\n   b\r\nc\n").collect();
        assert_eq!(lines, vec!["a", "b\r", "c"]);
    }
}
