#[macro_use]
mod macros;
mod deslop_config;
mod error;

pub use deslop_config::{DeslopConfig, PatternEntry};
pub use error::ConfigError;
