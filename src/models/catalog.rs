//! In-memory catalog keyed by brand identifier.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Brand, Model};

/// Identity of a model inside the catalog: brand identifier plus model index.
///
/// Used as the key of per-card side tables so UI state never has to carry a
/// copy of the model record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelKey {
    /// Brand identifier (catalog key)
    pub brand_id: String,
    /// Index into the brand's model list
    pub index: usize,
}

impl ModelKey {
    /// Creates a new model key.
    pub fn new(brand_id: impl Into<String>, index: usize) -> Self {
        Self {
            brand_id: brand_id.into(),
            index,
        }
    }
}

/// Brand identifier → brand mapping.
///
/// Iteration follows ascending brand identifier, which is the "catalog
/// order" used by search discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    brands: BTreeMap<String, Brand>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a brand.
    pub fn insert(&mut self, brand_id: impl Into<String>, brand: Brand) {
        self.brands.insert(brand_id.into(), brand);
    }

    /// Looks up a brand by identifier.
    pub fn get(&self, brand_id: &str) -> Option<&Brand> {
        self.brands.get(brand_id)
    }

    /// Resolves a model key.
    pub fn model(&self, key: &ModelKey) -> Option<&Model> {
        self.brands.get(&key.brand_id)?.models.get(key.index)
    }

    /// Iterates `(brand_id, brand)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Brand)> {
        self.brands.iter().map(|(id, brand)| (id.as_str(), brand))
    }

    /// Brand identifiers in catalog order.
    pub fn brand_ids(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    /// Number of brands.
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    /// Returns true when the catalog holds no brands.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Total number of models across all brands.
    pub fn model_count(&self) -> usize {
        self.brands.values().map(|b| b.models.len()).sum()
    }

    /// Finds a brand identifier by identifier or case-insensitive display name.
    pub fn resolve_brand_id(&self, name_or_id: &str) -> Option<&str> {
        if let Some((id, _)) = self.brands.get_key_value(name_or_id) {
            return Some(id.as_str());
        }
        let wanted = name_or_id.to_lowercase();
        self.brands
            .iter()
            .find(|(_, brand)| brand.name.to_lowercase() == wanted)
            .map(|(id, _)| id.as_str())
    }
}
