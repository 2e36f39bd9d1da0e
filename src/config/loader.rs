use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

const CONFIG_DIR: &str = "ifsc-finder";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning to surface in the UI
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return ConfigResult::default(),
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring invalid config at {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", first_line(&e.to_string()))),
            }
        }
    }
}

fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or(message)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
