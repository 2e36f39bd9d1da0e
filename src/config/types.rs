// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ENDPOINT: &str = "/autocomplete";
pub const ALTERNATE_ENDPOINT: &str = "/api/autocomplete";

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// What Up/Down do at the edges of the suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// Down past the last row goes to the first, Up above the first goes to the last
    #[default]
    Wrap,
    /// Down stops at the last row, Up from the first row clears the focus
    Clamp,
}

/// Suggestion server section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 5000,
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Autocomplete widget section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub enabled: bool,
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub navigation: NavigationPolicy,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            enabled: true,
            debounce_ms: 300,
            min_query_len: 2,
            navigation: NavigationPolicy::Wrap,
        }
    }
}

impl AutocompleteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
        }
    }
}

/// Toast timing section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
    pub fade_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: 3000,
            fade_ms: 300,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}
