//! Explicit configuration passed to the resolver at construction.
mod loader;
mod manager;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    CollationSettings,
    ConfigError,
    LoggingSettings,
    ValidationError,
};
