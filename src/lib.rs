pub mod config;
pub mod error;
pub mod format;
pub mod quantity;
pub mod recipe;
pub mod tokens;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::Config;
pub use error::{RecipeError, Result};
pub use quantity::{parse_quantity, Quantity};
pub use tokens::{convert_tokens, QuantityTag, TokenConverter};
pub use units::{convert_quantity, ConversionOptions, UnitSystem, UnitTable};
