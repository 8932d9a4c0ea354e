//! Configuration management.
//!
//! Settings come from three layers, highest priority first:
//! 1. Command-line flags ([`CliSettings`])
//! 2. A TOML config file passed with `--config`
//! 3. Built-in defaults
//!
//! The config file understands two top-level keys:
//!
//! ```toml
//! output = "build"
//! stylesheet = "https://cdn.example.com/style.css"
//! ```
//!
//! Unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Output directory used when neither flag nor config file names one.
pub const DEFAULT_OUTPUT_DIR: &str = "til";

/// Settings given on the command line. Only `Some` values override.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output: Option<PathBuf>,
    /// Override stylesheet URL.
    pub stylesheet: Option<String>,
}

/// Raw config file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output directory.
    pub output: Option<PathBuf>,
    /// Stylesheet URL.
    pub stylesheet: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory receiving the `.html` files.
    pub output_dir: PathBuf,
    /// Stylesheet URL; empty means no `<link>` tag.
    pub stylesheet: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            stylesheet: String::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve against CLI settings and defaults.
    pub fn resolve(self, cli: &CliSettings) -> Settings {
        let defaults = Settings::default();
        Settings {
            output_dir: cli
                .output
                .clone()
                .or(self.output)
                .unwrap_or(defaults.output_dir),
            stylesheet: cli
                .stylesheet
                .clone()
                .or(self.stylesheet)
                .unwrap_or(defaults.stylesheet),
        }
    }
}

impl Settings {
    /// Load the optional config file and layer CLI settings on top.
    pub fn load(config_path: Option<&Path>, cli: &CliSettings) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => {
                let config = Config::load_from_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            None => Config::default(),
        };
        Ok(config.resolve(cli))
    }
}
