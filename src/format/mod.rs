// Rendering magnitudes, quantities and durations as text for cooks

pub mod formatter;
pub mod time;

pub use formatter::{format_magnitude, format_quantity, fractionalize, pluralize};
pub use time::{readable_minutes, readable_time};
