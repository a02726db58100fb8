//! Session configuration.
//!
//! Configuration is read from the YAML file named by `ROSTER_CONFIG`, or
//! `roster.yaml` in the working directory, and includes:
//! - Default page size of the user list
//! - Search debounce quiet period
//! - Whether fixture records are seeded
//! - Photo upload size limit

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::form::DEFAULT_MAX_IMAGE_BYTES;
use crate::store::query::DEFAULT_ITEMS_PER_PAGE;
use crate::ui::debounce::DEFAULT_SEARCH_DEBOUNCE_MS;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "roster.yaml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rows per page of the user list (default: 5)
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Quiet period before typed search text is applied (default: 300)
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Load the fixture users into a fresh session (default: true)
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,

    /// Largest accepted photo upload in bytes (default: 2 MiB)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_seed_fixtures() -> bool {
    true
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            search_debounce_ms: default_search_debounce_ms(),
            seed_fixtures: default_seed_fixtures(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl Config {
    /// Path of the config file, and whether it was named explicitly
    pub fn config_path() -> (PathBuf, bool) {
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => (PathBuf::from(path), true),
            _ => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }

    /// Load configuration from file, or return default if not found.
    ///
    /// A file named by `ROSTER_CONFIG` must exist; the working-directory
    /// file is optional.
    pub fn load() -> Result<Self> {
        let (path, explicit) = Self::config_path();
        if !path.exists() {
            if explicit {
                return Err(RosterError::Config(format!(
                    "{CONFIG_ENV} points at {}, which does not exist",
                    path.display()
                )));
            }
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RosterError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config = Self::parse(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml_ng::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            return Err(RosterError::Config(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// The effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.search_debounce_ms, 300);
        assert!(config.seed_fixtures);
        assert_eq!(config.max_image_bytes, 2 * 1024 * 1024);
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::parse("items_per_page: 8\n").unwrap();
        assert_eq!(config.items_per_page, 8);
        assert_eq!(config.search_debounce_ms, 300);
        assert!(config.seed_fixtures);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = Config::parse("items_per_page: 0\n").unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = Config::parse("items_per_page: [oops\n").unwrap_err();
        assert!(matches!(err, RosterError::YamlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "seed_fixtures: false").unwrap();
        writeln!(file, "search_debounce_ms: 50").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.seed_fixtures);
        assert_eq!(config.search_debounce_ms, 50);
        assert_eq!(config.items_per_page, 5);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config {
            items_per_page: 10,
            seed_fixtures: false,
            ..Config::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }
}
