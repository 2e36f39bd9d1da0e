//! Command-line arguments
//!
//! Flags override the config file; anything left unset keeps the file's value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, NavigationPolicy};

#[derive(Parser, Debug, Default)]
#[command(name = "ifsc-finder", version)]
#[command(about = "Look up Indian bank branches by IFSC, MICR, bank, city or branch")]
pub struct Args {
    /// Search server base URL (e.g. http://localhost:5000)
    #[arg(short = 'u', long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Suggestion endpoint path, /autocomplete or /api/autocomplete
    #[arg(short = 'e', long = "endpoint", value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Arrow-key behavior at the ends of the suggestion list
    #[arg(long = "nav", value_enum, value_name = "POLICY")]
    pub navigation: Option<NavigationPolicy>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the full search URL instead of the search term on submit
    #[arg(long = "print-url")]
    pub print_url: bool,

    /// Validate an IFSC or MICR code and exit without starting the UI
    #[arg(long = "check", value_name = "CODE")]
    pub check: Option<String>,
}

impl Args {
    /// Apply flag overrides on top of a loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.server.endpoint = endpoint.clone();
        }
        if let Some(navigation) = self.navigation {
            config.autocomplete.navigation = navigation;
        }
    }
}
