//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::branding::APP_DATA_DIR;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "DAYTONA_CONFIG_DIR";

/// Theme display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemePreference {
    /// The opposite preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("invalid theme '{other}' (expected light or dark)")),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Directory holding `data/motos.json` and the asset files
    pub site_root: PathBuf,
    /// Catalog file; defaults to `<site_root>/data/motos.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            catalog: None,
        }
    }
}

impl PathConfig {
    /// Resolved catalog file path.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| self.site_root.join("data").join("motos.json"))
    }
}

/// Hero slider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Seconds between automatic advances
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Longest accepted slider interval (one hour)
pub const MAX_INTERVAL_SECS: u64 = 3600;

/// Default slider interval (5 seconds)
fn default_interval_secs() -> u64 {
    5
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl SliderConfig {
    /// Interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Daytona/config.toml`
/// - macOS: `~/Library/Application Support/Daytona/config.toml`
/// - Windows: `%APPDATA%\Daytona\config.toml`
///
/// `DAYTONA_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Hero slider settings
    #[serde(default)]
    pub slider: SliderConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Honors `DAYTONA_CONFIG_DIR`, otherwise the platform config dir.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Platform cache directory for the asset manifest, if any.
    pub fn cache_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(APP_DATA_DIR))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves to an explicit file using temp file + rename.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `interval_secs` is between 1 and [`MAX_INTERVAL_SECS`]
    /// - `site_root` is not empty
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_INTERVAL_SECS).contains(&self.slider.interval_secs) {
            anyhow::bail!(
                "slider.interval_secs must be between 1 and {MAX_INTERVAL_SECS}, got {}",
                self.slider.interval_secs
            );
        }
        if self.paths.site_root.as_os_str().is_empty() {
            anyhow::bail!("paths.site_root must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.site_root, PathBuf::from("."));
        assert_eq!(config.paths.catalog, None);
        assert_eq!(config.slider.interval_secs, 5);
        assert_eq!(config.slider.interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_catalog_path_defaults_under_site_root() {
        let mut paths = PathConfig {
            site_root: PathBuf::from("/srv/daytona"),
            catalog: None,
        };
        assert_eq!(
            paths.catalog_path(),
            PathBuf::from("/srv/daytona/data/motos.json")
        );

        paths.catalog = Some(PathBuf::from("/tmp/other.json"));
        assert_eq!(paths.catalog_path(), PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.slider.interval_secs = 0;
        assert!(config.validate().is_err());

        config.slider.interval_secs = MAX_INTERVAL_SECS;
        assert!(config.validate().is_ok());
        config.slider.interval_secs = MAX_INTERVAL_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_interval_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[slider]\ninterval_secs = 9223372036854775807\n").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("interval_secs"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.paths.site_root = PathBuf::from("/srv/site");
        config.slider.interval_secs = 8;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[paths]\nsite_root = \"/srv/site\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.paths.site_root, PathBuf::from("/srv/site"));
        assert_eq!(loaded.slider.interval_secs, 5);
    }

    #[test]
    fn test_theme_preference_parsing() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!(" Light ".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }
}
