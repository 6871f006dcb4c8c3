//! Command implementations.

pub mod generate;
pub mod list;
pub mod serve;

use std::path::Path;

use color_eyre::eyre::Result;
use sitesmith_core::Config;

/// Load configuration, falling back to defaults when no file exists at the
/// given path.
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        tracing::info!(path = %path.display(), "no configuration file, using defaults");
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitesmith.toml");
        fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_load_config_invalid_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitesmith.toml");
        fs::write(&path, "not toml at all [").unwrap();

        assert!(load_config(&path).is_err());
    }
}
