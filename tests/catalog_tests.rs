//! Integration tests for catalog loading, fallback and site path resolution.

use std::fs;
use std::path::Path;

use daytona::app::SitePaths;
use daytona::config::Config;
use daytona::services::search::{search, NO_RESULTS_MESSAGE};
use daytona::services::{CatalogSource, CatalogStore};
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_load_catalog_from_file() {
    let (_dir, path) = temp_site();
    let store = CatalogStore::load(&path);

    assert!(!store.is_fallback());
    assert_eq!(store.source(), &CatalogSource::File(path.clone()));
    assert_eq!(store.catalog(), &test_catalog());
    let ids: Vec<&str> = store.catalog().brand_ids().collect();
    assert_eq!(ids, vec!["corven", "honda", "yamaha"]);
}

#[test]
fn test_missing_catalog_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::load(&dir.path().join("nope.json"));

    assert!(store.is_fallback());
    let ids: Vec<&str> = store.catalog().brand_ids().collect();
    assert_eq!(ids, vec!["honda", "zanella"]);
    let honda = store.get("honda").unwrap();
    assert_eq!(honda.models[0].name, "CG 125");
    assert_eq!(honda.models[0].displacement, 125);
}

#[test]
fn test_malformed_catalog_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motos.json");
    fs::write(&path, "{ \"honda\": [1, 2, 3] }").unwrap();

    let store = CatalogStore::load(&path);
    assert!(store.is_fallback());
    match store.source() {
        CatalogSource::Fallback { reason } => assert!(reason.contains("parse")),
        CatalogSource::File(_) => panic!("expected fallback"),
    }
}

#[test]
fn test_empty_catalog_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motos.json");
    fs::write(&path, "{}").unwrap();

    let store = CatalogStore::load(&path);
    assert!(!store.is_fallback());
    assert!(store.catalog().is_empty());
    assert!(search(store.catalog(), "honda").results().is_empty());
}

#[test]
fn test_missing_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("motos.json");
    fs::write(
        &path,
        r#"{"keller": {"name": "Keller", "logo": "motos/keller.png",
            "models": [{"model": "Stratus 150", "cilindrada": 150}]}}"#,
    )
    .unwrap();

    let store = CatalogStore::load(&path);
    let model = &store.get("keller").unwrap().models[0];
    assert!(model.colors.is_empty());
    assert!(model.images.is_empty());
    assert_eq!(model.default_image(), daytona::models::PLACEHOLDER_IMAGE);
}

#[test]
fn test_bundled_sample_catalog_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/motos.json");
    let catalog = CatalogStore::read_catalog(&path).expect("bundled catalog should parse");

    assert!(catalog.len() >= 2);
    for (_, brand) in catalog.iter() {
        assert!(!brand.models.is_empty(), "{} has no models", brand.name);
    }
}

#[test]
fn test_search_over_loaded_catalog() {
    let (_dir, path) = temp_site();
    let store = CatalogStore::load(&path);

    let results = search(store.catalog(), "  110 ");
    let titles: Vec<String> = results.results().iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Corven Energy 110", "Honda Wave 110"]);

    assert!(search(store.catalog(), "ducati").results().is_empty());
    assert!(!NO_RESULTS_MESSAGE.is_empty());
}

#[test]
fn test_site_paths_resolution() {
    let config = Config::default();
    let root = TempDir::new().unwrap();

    let paths = SitePaths::resolve(&config, Some(root.path()), None);
    assert_eq!(paths.site_root, root.path());
    assert_eq!(paths.catalog, root.path().join("data/motos.json"));

    let explicit = root.path().join("other.json");
    let paths = SitePaths::resolve(&config, Some(root.path()), Some(&explicit));
    assert_eq!(paths.catalog, explicit);
}
