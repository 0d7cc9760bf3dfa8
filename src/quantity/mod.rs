// Quantity text parsing: fraction glyphs, mixed fractions and unit names

pub mod fraction;
pub mod glyphs;
pub mod parser;
pub mod types;

pub use fraction::{approximate, round_significant, Ratio, MAX_DENOMINATOR, SIGNIFICANT_DIGITS};
pub use glyphs::translate_fractions;
pub use parser::{parse_number, parse_quantity};
pub use types::Quantity;
