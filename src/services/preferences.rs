//! Persisted user preferences.
//!
//! The only preference is the theme. It lives in `preferences.toml` next to
//! the configuration file and is written immediately whenever it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::{Config, ThemePreference};

/// File name of the preferences file inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Storage for the theme preference.
pub trait PreferenceStore {
    /// Reads the stored theme. `Ok(None)` when nothing was stored yet.
    fn load_theme(&self) -> Result<Option<ThemePreference>>;

    /// Stores the theme.
    fn save_theme(&mut self, theme: ThemePreference) -> Result<()>;
}

/// On-disk shape of `preferences.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Preferences {
    theme: ThemePreference,
}

/// TOML-file backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory.
    pub fn in_config_dir() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join(PREFERENCES_FILE)))
    }

    /// Path of the preferences file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read preferences file: {}",
            self.path.display()
        ))?;
        let prefs: Preferences = toml::from_str(&content).context(format!(
            "Failed to parse preferences file: {}",
            self.path.display()
        ))?;
        Ok(Some(prefs.theme))
    }

    fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create preferences directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(&Preferences { theme })
            .context("Failed to serialize preferences")?;
        let temp_path = self.path.with_extension("toml.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp preferences file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp preferences file to: {}",
            self.path.display()
        ))?;
        Ok(())
    }
}

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// and inspect what the controller persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    theme: Rc<RefCell<Option<ThemePreference>>>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a theme.
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self {
            theme: Rc::new(RefCell::new(Some(theme))),
        }
    }

    /// Currently stored theme.
    pub fn stored(&self) -> Option<ThemePreference> {
        *self.theme.borrow()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>> {
        Ok(*self.theme.borrow())
    }

    fn save_theme(&mut self, theme: ThemePreference) -> Result<()> {
        *self.theme.borrow_mut() = Some(theme);
        Ok(())
    }
}
