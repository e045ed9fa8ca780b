//! Technicolor Config
//!
//! This crate handles configuration loading for technicolor and owns
//! the color registry built from it.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/technicolor/config.toml`
//! - macOS: `~/Library/Application Support/technicolor/config.toml`
//! - Windows: `%APPDATA%\technicolor\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use technicolor_config::{Config, Registry};
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! let registry = Registry::from_config(&config);
//!
//! // Or load with an override file or inline TOML
//! let config = Config::load_with_override(Some("[palette]\nMode = \"dark\"")).unwrap();
//! ```

mod palette;
mod registry;

pub use palette::{Mode, PaletteConfig};
pub use registry::Registry;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use technicolor_core::{Error, Result};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[palette]
Mode    = "light"
Enabled = true
"#;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Palette configuration
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// This can be used to show users the default config or
    /// to write a default config file.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[palette]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_config::Config;
    /// if let Some(path) = Config::config_path() {
    ///     println!("Config path: {}", path.display());
    /// }
    /// ```
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "technicolor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "technicolor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use technicolor_config::Config;
    /// let path = Config::ensure_config_file().unwrap();
    /// assert!(path.exists());
    /// ```
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;

        // Create directory if it doesn't exist
        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");

        // Create default config if file doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use technicolor_config::Config;
    /// let config = Config::load().unwrap();
    /// ```
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("Parse error: {}", e)));
            }
        }

        // Return defaults if no config found
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use technicolor_config::Config;
    /// use std::path::Path;
    /// let config = Config::load_from(Path::new("./config.toml")).unwrap();
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Arguments
    ///
    /// * `override_config` - Optional path to override file or inline TOML string
    ///
    /// # Example
    ///
    /// ```no_run
    /// use technicolor_config::Config;
    ///
    /// // Load with file override
    /// let config = Config::load_with_override(Some("./custom.toml")).unwrap();
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[palette]\nMode = \"dark\"")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        // Start with base config
        let mut config = Self::load()?;

        // Apply override if provided
        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                // It's a file path
                std::fs::read_to_string(override_path)?
            } else {
                // Treat as inline TOML
                override_str.to_string()
            };

            // Parse and merge
            let override_config: Config = toml::from_str(&override_toml)
                .map_err(|e| Error::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    /// This is used for applying CLI overrides or secondary config files.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_config::{Config, Mode};
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [palette]
    ///     Mode = "dark"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.palette.mode, Mode::Dark);
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.palette.merge(&other.palette);
    }

    /// Save configuration to a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to save the configuration to
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Build the color registry for this config's palette mode.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_config::Config;
    /// let registry = Config::default().registry();
    /// assert!(registry.fg("RED").is_some());
    /// ```
    pub fn registry(&self) -> Registry {
        Registry::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.palette.mode, Mode::Light);
        assert!(config.palette.enabled);
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config.palette.mode, Mode::Light);
        assert!(config.palette.enabled);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        assert_eq!(base.palette.mode, Mode::Light);

        let override_toml = r#"
            [palette]
            Mode = "dark"
            Enabled = false
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.palette.mode, Mode::Dark);
        assert!(!base.palette.enabled);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[palette]\nMode = \"dark\"").unwrap();
        assert_eq!(config.palette.mode, Mode::Dark);
        assert!(config.palette.enabled);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.palette.mode, Mode::Light);
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("technicolor"));
        }
    }

    #[test]
    fn test_registry_follows_mode() {
        let config: Config = toml::from_str("[palette]\nMode = \"dark\"").unwrap();
        let registry = config.registry();
        assert_eq!(registry.fg("RED").unwrap().codes(), &[31]);

        let registry = Config::default().registry();
        assert_eq!(registry.fg("RED").unwrap().codes(), &[91]);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.palette.mode, parsed.palette.mode);
        assert_eq!(config.palette.enabled, parsed.palette.enabled);
    }

    #[test]
    fn test_save_to_round_trips_through_load_from() {
        let path = std::env::temp_dir().join("technicolor-save-test.toml");

        let config: Config = toml::from_str("[palette]\nMode = \"dark\"\nEnabled = false").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.palette.mode, Mode::Dark);
        assert!(!loaded.palette.enabled);

        std::fs::remove_file(&path).ok();
    }
}
