//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log file to report on when no file argument is given.
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (HOURS_*)
        figment = figment.merge(Env::prefixed("HOURS_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for hours.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hours"))
}
