//! Application configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for sitesmith.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Template store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Output directory settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Embedded server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Template store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory holding one subdirectory per template-type.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
}

/// Output directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where generated site directories are materialized.
    #[serde(default = "default_sites_dir")]
    pub sites_dir: String,

    /// Where downloadable archives are written, keyed by generation id.
    #[serde(default = "default_archives_dir")]
    pub archives_dir: String,

    /// Where archives are extracted for preview serving.
    #[serde(default = "default_preview_dir")]
    pub preview_dir: String,
}

/// Embedded server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional directory of front-end assets served at the root.
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// Generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Theme applied when a request names none.
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

// Default value functions
fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_sites_dir() -> String {
    "output/sites".to_string()
}

fn default_archives_dir() -> String {
    "output/archives".to_string()
}

fn default_preview_dir() -> String {
    "output/preview".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_theme() -> String {
    "professional".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sites_dir: default_sites_dir(),
            archives_dir: default_archives_dir(),
            preview_dir: default_preview_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.store.templates_dir.is_empty() {
            return Err(CoreError::config("store.templates_dir cannot be empty"));
        }

        if self.output.sites_dir.is_empty() {
            return Err(CoreError::config("output.sites_dir cannot be empty"));
        }

        if self.output.archives_dir.is_empty() {
            return Err(CoreError::config("output.archives_dir cannot be empty"));
        }

        if self.output.preview_dir.is_empty() {
            return Err(CoreError::config("output.preview_dir cannot be empty"));
        }

        if self.generator.default_theme.is_empty() {
            return Err(CoreError::config("generator.default_theme cannot be empty"));
        }

        Ok(())
    }
}
