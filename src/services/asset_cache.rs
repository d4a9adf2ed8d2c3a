//! Background asset cache worker.
//!
//! Registered once at startup. The worker thread hashes every asset the
//! catalog references (logos, dark logos, model images and the placeholder)
//! and writes a manifest into the cache directory. Failures are logged and
//! never reach the user interface.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;
use tracing::{debug, info, warn};

use crate::models::{Catalog, PLACEHOLDER_IMAGE};

use super::theme_controller::dark_logo_path;

/// Manifest file name inside the cache directory.
pub const MANIFEST_FILE: &str = "asset-manifest.json";

/// Cached entry for one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// SHA-256 of the file contents, lowercase hex
    pub sha256: String,
    /// File size in bytes
    pub bytes: u64,
}

/// Manifest written by the worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Site root the asset paths are relative to
    pub site_root: PathBuf,
    /// Cached assets by relative path
    pub assets: BTreeMap<String, AssetEntry>,
    /// Referenced assets not present under the site root
    pub missing: Vec<String>,
}

impl AssetManifest {
    /// Reads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read asset manifest: {}", path.display()))?;
        serde_json::from_str(&content)
            .context(format!("Failed to parse asset manifest: {}", path.display()))
    }
}

/// Worker status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// Not registered (no cache directory available)
    Unsupported,
    /// Hashing assets
    Running,
    /// Manifest written
    Ready {
        /// Number of cached assets
        cached: usize,
        /// Number of referenced but absent assets
        missing: usize,
    },
    /// Registration failed; the UI is unaffected
    Failed(String),
}

/// Messages from the worker thread.
#[derive(Debug, Clone)]
enum CacheMessage {
    Ready { cached: usize, missing: usize },
    Failed(String),
}

/// Handle held by the application for the worker.
#[derive(Debug)]
pub struct AssetCache {
    status: CacheStatus,
    receiver: Option<Receiver<CacheMessage>>,
}

impl AssetCache {
    /// A handle that never registers a worker.
    pub fn disabled() -> Self {
        Self {
            status: CacheStatus::Unsupported,
            receiver: None,
        }
    }

    /// Registers the worker if a cache directory is available.
    pub fn register(catalog: &Catalog, site_root: &Path, cache_dir: Option<PathBuf>) -> Self {
        let Some(cache_dir) = cache_dir else {
            debug!("No cache directory available, asset cache not registered");
            return Self::disabled();
        };

        let assets = referenced_assets(catalog);
        let site_root = site_root.to_path_buf();
        let (sender, receiver) = channel();

        let spawned = thread::Builder::new()
            .name("asset-cache".to_string())
            .spawn(move || {
                if let Err(err) = run_cache(&sender, &site_root, &cache_dir, &assets) {
                    let _ = sender.send(CacheMessage::Failed(format!("{err:#}")));
                }
            });

        match spawned {
            Ok(_) => Self {
                status: CacheStatus::Running,
                receiver: Some(receiver),
            },
            Err(err) => {
                warn!("Asset cache registration failed: {err}");
                Self {
                    status: CacheStatus::Failed(err.to_string()),
                    receiver: None,
                }
            }
        }
    }

    /// Polls the worker. Returns true if the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        match receiver.try_recv() {
            Ok(CacheMessage::Ready { cached, missing }) => {
                info!(cached, missing, "Asset cache ready");
                self.status = CacheStatus::Ready { cached, missing };
                self.receiver = None;
                true
            }
            Ok(CacheMessage::Failed(reason)) => {
                warn!("Asset cache registration failed: {reason}");
                self.status = CacheStatus::Failed(reason);
                self.receiver = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                false
            }
        }
    }

    /// Current status.
    pub fn status(&self) -> &CacheStatus {
        &self.status
    }
}

/// Every asset path the catalog can display, sorted and deduplicated.
pub fn referenced_assets(catalog: &Catalog) -> Vec<String> {
    let mut assets = BTreeSet::new();
    assets.insert(PLACEHOLDER_IMAGE.to_string());
    for (brand_id, brand) in catalog.iter() {
        assets.insert(brand.logo_path.clone());
        if let Some(dark) = dark_logo_path(brand_id) {
            assets.insert(dark);
        }
        for model in &brand.models {
            assets.extend(model.images.iter().cloned());
        }
    }
    assets.into_iter().collect()
}

/// Hashes the assets and writes the manifest.
fn run_cache(
    sender: &Sender<CacheMessage>,
    site_root: &Path,
    cache_dir: &Path,
    assets: &[String],
) -> Result<()> {
    let manifest = build_manifest(site_root, assets)?;

    fs::create_dir_all(cache_dir).context(format!(
        "Failed to create cache directory: {}",
        cache_dir.display()
    ))?;
    let content =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize asset manifest")?;
    let manifest_path = cache_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, content).context(format!(
        "Failed to write asset manifest: {}",
        manifest_path.display()
    ))?;

    sender
        .send(CacheMessage::Ready {
            cached: manifest.assets.len(),
            missing: manifest.missing.len(),
        })
        .context("Failed to report asset cache status")?;
    Ok(())
}

/// Hashes each asset present under `site_root`.
pub fn build_manifest(site_root: &Path, assets: &[String]) -> Result<AssetManifest> {
    let mut manifest = AssetManifest {
        site_root: site_root.to_path_buf(),
        ..AssetManifest::default()
    };

    for asset in assets {
        let path = site_root.join(asset);
        if !path.is_file() {
            manifest.missing.push(asset.clone());
            continue;
        }
        let data =
            fs::read(&path).context(format!("Failed to read asset: {}", path.display()))?;
        let digest = Sha256::digest(&data);
        manifest.assets.insert(
            asset.clone(),
            AssetEntry {
                sha256: format!("{digest:x}"),
                bytes: data.len() as u64,
            },
        );
    }

    Ok(manifest)
}
