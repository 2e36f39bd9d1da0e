//! Configuration module
//!
//! Loads `~/.config/ifsc-finder/config.toml`. Every field has a default so a
//! missing or partial file is never fatal.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{
    AutocompleteConfig, ClipboardBackend, ClipboardConfig, Config, NavigationPolicy,
    NotificationConfig, ServerConfig,
};
