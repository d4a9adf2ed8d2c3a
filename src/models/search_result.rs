//! Search result projection.

use serde::Serialize;

use super::{Brand, Model, ModelKey};

/// How a search result was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The brand name matched; every model of the brand is emitted
    Brand,
    /// The model name matched on its own
    Model,
}

/// A model found by the search engine, with its parent brand's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Discovery kind
    pub kind: MatchKind,
    /// Brand identifier
    pub brand_id: String,
    /// Brand display name
    pub brand: String,
    /// Index of the model in the brand's list
    #[serde(skip)]
    pub model_index: usize,
    /// Model name
    pub model: String,
    /// Displacement in cc
    pub displacement: u32,
    /// First image or placeholder
    pub image: String,
    /// Available colors
    pub colors: Vec<String>,
}

impl SearchResult {
    /// Projects a model of `brand` into a result.
    pub fn project(
        kind: MatchKind,
        brand_id: &str,
        brand: &Brand,
        model_index: usize,
        model: &Model,
    ) -> Self {
        Self {
            kind,
            brand_id: brand_id.to_string(),
            brand: brand.name.clone(),
            model_index,
            model: model.name.clone(),
            displacement: model.displacement,
            image: model.default_image().to_string(),
            colors: model.colors.clone(),
        }
    }

    /// Catalog key of the projected model.
    pub fn key(&self) -> ModelKey {
        ModelKey::new(self.brand_id.clone(), self.model_index)
    }

    /// Title line: "<brand> <model>".
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Detail line: "<cc>cc • <colors>".
    pub fn detail(&self) -> String {
        format!("{}cc • {}", self.displacement, self.colors.join(", "))
    }
}
