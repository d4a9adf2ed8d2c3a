//! Light/dark theme preference and brand logo swapping.

use std::collections::HashMap;
use tracing::{info, warn};

use crate::config::ThemePreference;
use crate::models::Catalog;

use super::preferences::PreferenceStore;

/// Brands with a dedicated dark-theme logo, and the logo file name.
pub const DARK_LOGOS: &[(&str, &str)] = &[
    ("yamaha", "yamaha-logo-dark.jpg"),
    ("siam", "siam-logo-dark.png"),
    ("voge", "voge-logo-dark.png"),
];

/// Icon shown on the theme toggle while the dark theme is active (sun).
pub const ICON_DARK: &str = "☀";

/// Icon shown on the theme toggle while the light theme is active (moon).
pub const ICON_LIGHT: &str = "☾";

/// Dark logo path for an allow-listed brand.
pub fn dark_logo_path(brand_id: &str) -> Option<String> {
    DARK_LOGOS
        .iter()
        .find(|(id, _)| *id == brand_id)
        .map(|(id, file)| format!("motos/{id}/{file}"))
}

/// Tracks the active theme and the logo source displayed for each brand.
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    preference: ThemePreference,
    /// Logo source currently displayed, per brand
    logos: HashMap<String, String>,
    /// Source a logo had before its first dark swap
    original_logos: HashMap<String, String>,
}

impl ThemeController {
    /// Creates a controller showing each brand's catalog logo.
    ///
    /// The light theme is assumed until [`initialize`](Self::initialize) runs.
    pub fn new(store: Box<dyn PreferenceStore>, catalog: &Catalog) -> Self {
        let logos = catalog
            .iter()
            .map(|(id, brand)| (id.to_string(), brand.logo_path.clone()))
            .collect();
        Self {
            store,
            preference: ThemePreference::Light,
            logos,
            original_logos: HashMap::new(),
        }
    }

    /// Reads the stored preference (default light) and applies it.
    pub fn initialize(&mut self) {
        let preference = match self.store.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!("Could not read theme preference, using light: {err:#}");
                ThemePreference::default()
            }
        };
        self.apply(preference);
    }

    /// Flips the preference, persists it and applies it.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.preference.toggled();
        self.set(next);
        next
    }

    /// Sets an explicit preference, persisting and applying it.
    pub fn set(&mut self, preference: ThemePreference) {
        if let Err(err) = self.store.save_theme(preference) {
            warn!("Could not persist theme preference: {err:#}");
        }
        self.apply(preference);
        info!("Theme set to {preference}");
    }

    fn apply(&mut self, preference: ThemePreference) {
        self.preference = preference;
        for (brand_id, _) in DARK_LOGOS {
            let Some(current) = self.logos.get_mut(*brand_id) else {
                continue;
            };
            match preference {
                ThemePreference::Dark => {
                    self.original_logos
                        .entry((*brand_id).to_string())
                        .or_insert_with(|| current.clone());
                    if let Some(dark) = dark_logo_path(brand_id) {
                        *current = dark;
                    }
                }
                ThemePreference::Light => {
                    if let Some(original) = self.original_logos.get(*brand_id) {
                        current.clone_from(original);
                    }
                }
            }
        }
    }

    /// Active preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Toggle icon for the active preference.
    pub fn icon(&self) -> &'static str {
        match self.preference {
            ThemePreference::Dark => ICON_DARK,
            ThemePreference::Light => ICON_LIGHT,
        }
    }

    /// Logo source currently displayed for a brand.
    pub fn logo(&self, brand_id: &str) -> Option<&str> {
        self.logos.get(brand_id).map(String::as_str)
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("preference", &self.preference)
            .field("logos", &self.logos)
            .finish_non_exhaustive()
    }
}
