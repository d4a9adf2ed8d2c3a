//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use daytona::app::{RecordingLinkOpener, Showroom};
use daytona::models::{Brand, Catalog, Model};
use daytona::services::{AssetCache, CatalogStore, MemoryPreferenceStore};
use daytona::tui::AppState;
use ratatui::layout::Rect;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Builds a brand from (model, cc, colors, images) tuples.
pub fn brand(name: &str, models: &[(&str, u32, &[&str], &[&str])]) -> Brand {
    Brand {
        name: name.to_string(),
        logo_path: format!("motos/{}/logo.png", name.to_lowercase()),
        models: models
            .iter()
            .map(|(model, cc, colors, images)| Model::new(*model, *cc, colors, images))
            .collect(),
    }
}

/// A small deterministic catalog: three brands, mixed displacements.
///
/// Brand order (ascending id): corven, honda, yamaha.
pub fn test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "corven",
        brand(
            "Corven",
            &[("Energy 110", 110, &["Rojo", "Negro"], &["images/energy_1.jpg"])],
        ),
    );
    catalog.insert(
        "honda",
        brand(
            "Honda",
            &[
                (
                    "CG 125",
                    125,
                    &["Rojo", "Negro", "Blanco"],
                    &["images/cg_1.jpg", "images/cg_2.jpg"],
                ),
                ("Wave 110", 110, &["Azul"], &["images/wave_1.jpg"]),
                ("CB 125F", 125, &["Gris"], &[]),
            ],
        ),
    );
    catalog.insert(
        "yamaha",
        brand(
            "Yamaha",
            &[("FZ 25", 250, &["Azul", "Negro"], &["images/fz_1.jpg"])],
        ),
    );
    catalog
}

/// Writes `catalog` as JSON under `<dir>/data/motos.json`.
pub fn write_catalog(dir: &Path, catalog: &Catalog) -> PathBuf {
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    let path = data_dir.join("motos.json");
    let json = serde_json::to_string_pretty(catalog).expect("Failed to serialize catalog");
    fs::write(&path, json).expect("Failed to write catalog");
    path
}

/// Temp site root with the test catalog in place.
pub fn temp_site() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(dir.path(), &test_catalog());
    (dir, path)
}

/// Showroom over the test catalog with an in-memory preference store.
pub fn test_showroom(now: Instant) -> Showroom {
    Showroom::new(
        CatalogStore::from_catalog(test_catalog()),
        Box::new(MemoryPreferenceStore::new()),
        Duration::from_secs(5),
        now,
    )
}

/// AppState over the test catalog plus a handle on the link recorder.
pub fn test_app_state() -> (AppState, RecordingLinkOpener) {
    let opener = RecordingLinkOpener::new();
    let mut state = AppState::new(
        test_showroom(Instant::now()),
        AssetCache::disabled(),
        Box::new(opener.clone()),
    );
    state.viewport = Rect::new(0, 0, 100, 40);
    (state, opener)
}

/// Key press without modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Path to the daytona binary
pub fn daytona_bin() -> String {
    std::env::var("CARGO_BIN_EXE_daytona").unwrap_or_else(|_| "target/release/daytona".to_string())
}

/// Command with an isolated config directory and the given catalog.
pub fn isolated_command(args: &[&str], config_dir: &Path, catalog: &Path) -> Command {
    let mut cmd = Command::new(daytona_bin());
    cmd.env("DAYTONA_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.arg("--catalog").arg(catalog);
    cmd.args(args);
    cmd
}
