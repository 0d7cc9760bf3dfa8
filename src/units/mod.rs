// Unit catalog and table-driven conversion between US customary and SI units

pub mod converter;
pub mod table;
pub mod types;

pub use converter::{convert_quantity, ConversionOptions};
pub use table::{normalize_unit_name, UnitQuery, UnitTable};
pub use types::{UnitCategory, UnitDefinition, UnitSystem};
