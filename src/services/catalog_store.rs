//! Catalog loading with a fail-soft fallback.
//!
//! The catalog is read once at startup. Any read or parse failure substitutes
//! the embedded two-brand dataset for the rest of the session; nothing from a
//! partially valid file is merged in.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{Brand, Catalog};

/// Why the catalog file could not be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Read {
        /// Catalog path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not a brand mapping of the expected shape
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Catalog path
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from the catalog file
    File(PathBuf),
    /// Embedded fallback data, with the reason the file was rejected
    Fallback {
        /// Rendered load error
        reason: String,
    },
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Fallback { .. } => write!(f, "datos de respaldo"),
        }
    }
}

/// Holds the session's catalog. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    source: CatalogSource,
}

impl CatalogStore {
    /// Loads the catalog from `path`, falling back to the embedded dataset.
    ///
    /// Never fails: the error is logged and recorded in [`CatalogSource`].
    pub fn load(path: &Path) -> Self {
        match Self::read_catalog(path) {
            Ok(catalog) => {
                info!(
                    brands = catalog.len(),
                    models = catalog.model_count(),
                    "Catalog loaded from {}",
                    path.display()
                );
                Self {
                    catalog,
                    source: CatalogSource::File(path.to_path_buf()),
                }
            }
            Err(err) => {
                warn!("Catalog unavailable, using fallback data: {err}");
                Self::fallback(err.to_string())
            }
        }
    }

    /// Builds a store around an already constructed catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            source: CatalogSource::File(PathBuf::new()),
        }
    }

    /// Reads and parses a catalog file.
    pub fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Store holding only the embedded fallback data.
    fn fallback(reason: String) -> Self {
        let catalog = fallback_catalog().unwrap_or_else(|err| {
            // The embedded file is part of the binary; this only trips on a broken build.
            warn!("Embedded fallback catalog is invalid: {err:#}");
            Catalog::new()
        });
        Self {
            catalog,
            source: CatalogSource::Fallback { reason },
        }
    }

    /// Looks up a brand.
    pub fn get(&self, brand_id: &str) -> Option<&Brand> {
        self.catalog.get(brand_id)
    }

    /// The full catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the data came from.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// True when the embedded fallback is in use.
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CatalogSource::Fallback { .. })
    }
}

/// Parses the embedded fallback dataset.
pub fn fallback_catalog() -> Result<Catalog> {
    let json_data = include_str!("fallback_catalog.json");
    serde_json::from_str(json_data).context("Failed to parse embedded fallback_catalog.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("motos.json");
        fs::write(
            &path,
            r#"{"gilera": {"name": "Gilera", "logo": "motos/gilera/logo.png",
                "models": [{"model": "Smash 110", "cilindrada": 110,
                            "colors": ["Negro"], "images": []}]}}"#,
        )
        .unwrap();

        let store = CatalogStore::load(&path);
        assert!(!store.is_fallback());
        assert_eq!(store.source(), &CatalogSource::File(path));
        assert_eq!(store.get("gilera").unwrap().models[0].name, "Smash 110");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = CatalogStore::load(&temp_dir.path().join("nope.json"));
        assert!(store.is_fallback());
        assert_eq!(store.catalog().len(), 2);
    }

    #[test]
    fn test_wrong_shape_falls_back_without_merge() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("motos.json");
        // First brand is valid, second is missing its logo
        fs::write(
            &path,
            r#"{"gilera": {"name": "Gilera", "logo": "g.png", "models": []},
                "motomel": {"name": "Motomel"}}"#,
        )
        .unwrap();

        let store = CatalogStore::load(&path);
        assert!(store.is_fallback());
        assert!(store.get("gilera").is_none());
        assert!(store.get("honda").is_some());
    }

    #[test]
    fn test_read_error_is_typed() {
        let temp_dir = TempDir::new().unwrap();
        let err = CatalogStore::read_catalog(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn test_fallback_dataset_contents() {
        let catalog = fallback_catalog().unwrap();
        let honda = catalog.get("honda").unwrap();
        assert_eq!(honda.name, "Honda");
        assert_eq!(honda.logo_path, "motos/honda/honda-seeklogo.png");
        assert_eq!(honda.models.len(), 1);
        assert_eq!(honda.models[0].name, "CG 125");
        assert_eq!(honda.models[0].displacement, 125);
        assert_eq!(honda.models[0].colors, vec!["Rojo", "Negro", "Blanco"]);
        assert_eq!(honda.models[0].images, vec!["images/honda_cg125_1.jpg"]);

        let zanella = catalog.get("zanella").unwrap();
        assert_eq!(zanella.name, "Zanella");
        assert_eq!(zanella.logo_path, "motos/zanella/zanella-seeklogo.png");
        assert_eq!(zanella.models[0].name, "ZB 110");
        assert_eq!(zanella.models[0].displacement, 110);
        assert_eq!(zanella.models[0].colors, vec!["Azul", "Negro"]);
        assert_eq!(zanella.models[0].images, vec!["images/zanella_zb110_1.jpg"]);
    }
}
