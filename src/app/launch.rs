use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::services::{
    AssetCache, CatalogStore, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
};
use crate::tui;

use super::link::SystemLinkOpener;
use super::showroom::Showroom;

/// Catalog location relative to a site root.
pub const DEFAULT_CATALOG: &str = "data/motos.json";

/// Site root and catalog file after applying command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    /// Directory the catalog's asset paths are relative to
    pub site_root: PathBuf,
    /// Catalog JSON file
    pub catalog: PathBuf,
}

impl SitePaths {
    /// Resolves paths: explicit flags first, then the configuration.
    ///
    /// `--root` without `--catalog` also moves the catalog under the new root.
    pub fn resolve(config: &Config, root: Option<&Path>, catalog: Option<&Path>) -> Self {
        let site_root = root.map_or_else(|| config.paths.site_root.clone(), Path::to_path_buf);
        let catalog = match (catalog, root) {
            (Some(catalog), _) => catalog.to_path_buf(),
            (None, Some(root)) => root.join(DEFAULT_CATALOG),
            (None, None) => config.paths.catalog_path(),
        };
        Self { site_root, catalog }
    }
}

/// Preference store in the config dir, or an in-memory one if that is unavailable.
pub fn preference_store() -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::in_config_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Theme preference will not persist: {e:#}");
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

/// Writes `config` to the config file on first launch so it can be edited.
fn write_default_config(config: &Config) {
    let path = match Config::config_file_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("No config directory: {e:#}");
            return;
        }
    };
    if path.exists() {
        return;
    }
    match config.save() {
        Ok(()) => info!("Wrote default configuration to {}", path.display()),
        Err(e) => warn!("Could not write default configuration: {e:#}"),
    }
}

/// Loads the catalog, registers the asset cache and runs the terminal UI.
pub fn launch_showroom(config: &Config, paths: &SitePaths) -> Result<()> {
    write_default_config(config);
    let store = CatalogStore::load(&paths.catalog);
    info!(
        brands = store.catalog().len(),
        models = store.catalog().model_count(),
        "Showroom starting from {}",
        paths.site_root.display()
    );

    let asset_cache = AssetCache::register(store.catalog(), &paths.site_root, Config::cache_dir());
    let showroom = Showroom::new(
        store,
        preference_store(),
        config.slider.interval(),
        Instant::now(),
    );
    let mut app_state = tui::AppState::new(showroom, asset_cache, Box::new(SystemLinkOpener));

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_config_by_default() {
        let mut config = Config::new();
        config.paths.site_root = PathBuf::from("/srv/site");
        let paths = SitePaths::resolve(&config, None, None);
        assert_eq!(paths.site_root, PathBuf::from("/srv/site"));
        assert_eq!(paths.catalog, PathBuf::from("/srv/site/data/motos.json"));
    }

    #[test]
    fn test_root_flag_moves_catalog() {
        let mut config = Config::new();
        config.paths.catalog = Some(PathBuf::from("/etc/motos.json"));
        let paths = SitePaths::resolve(&config, Some(Path::new("/tmp/site")), None);
        assert_eq!(paths.catalog, PathBuf::from("/tmp/site/data/motos.json"));
    }

    #[test]
    fn test_catalog_flag_wins() {
        let config = Config::new();
        let paths = SitePaths::resolve(
            &config,
            Some(Path::new("/tmp/site")),
            Some(Path::new("other.json")),
        );
        assert_eq!(paths.site_root, PathBuf::from("/tmp/site"));
        assert_eq!(paths.catalog, PathBuf::from("other.json"));
    }
}
