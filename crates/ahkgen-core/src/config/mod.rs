// Ahkgen Config API
// TOML macro-file parsing into validated macro lists

pub mod parser;

pub use parser::{Config, ConfigError};
