// Inline `{{ quantity }}` tokens in recipe prose

pub mod converter;


pub use converter::{convert_tokens, QuantityTag, TokenConverter};
