mod types;
mod loader;
mod defaults;
mod validation;

pub use types::*;
pub use loader::{load_config, CONFIG_FILES};
pub use validation::validate_config;
