//! Brand and model records as they appear in the catalog data file.

use serde::{Deserialize, Serialize};

/// Image shown when a model has no image for the requested slot.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.jpg";

/// A motorcycle model offered under a brand.
///
/// # Invariants
///
/// - `images[i]` is the picture for `colors[i]`
/// - `images` may be shorter than `colors`; missing slots resolve to
///   [`PLACEHOLDER_IMAGE`] when a default image is needed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Model name (e.g., "CG 125")
    #[serde(rename = "model")]
    pub name: String,
    /// Engine displacement in cc
    #[serde(rename = "cilindrada")]
    pub displacement: u32,
    /// Color labels in display order
    #[serde(default)]
    pub colors: Vec<String>,
    /// Image references, parallel to `colors`
    #[serde(default)]
    pub images: Vec<String>,
}

impl Model {
    /// Creates a model from borrowed parts.
    pub fn new(
        name: impl Into<String>,
        displacement: u32,
        colors: &[&str],
        images: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            displacement,
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
            images: images.iter().map(|i| (*i).to_string()).collect(),
        }
    }

    /// Returns the image shown before any color is chosen.
    pub fn default_image(&self) -> &str {
        self.images.first().map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    /// Returns the index of a color label (case-sensitive exact match).
    pub fn color_index(&self, label: &str) -> Option<usize> {
        self.colors.iter().position(|c| c == label)
    }

    /// Returns the image aligned with a color label, if one exists.
    pub fn image_for_color(&self, label: &str) -> Option<&str> {
        let index = self.color_index(label)?;
        self.images.get(index).map(String::as_str)
    }

    /// Display label for the displacement class (e.g., "125cc").
    pub fn displacement_label(&self) -> String {
        format!("{}cc", self.displacement)
    }
}

/// A manufacturer entry owning one or more models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Display name (e.g., "Honda")
    pub name: String,
    /// Logo asset path relative to the site root
    #[serde(rename = "logo")]
    pub logo_path: String,
    /// Models in catalog order
    #[serde(default)]
    pub models: Vec<Model>,
}

impl Brand {
    /// Distinct displacement classes across the brand's models, ascending.
    pub fn displacements(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self.models.iter().map(|m| m.displacement).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Models whose displacement equals `cc`, in catalog order.
    pub fn models_with_displacement(&self, cc: u32) -> impl Iterator<Item = (usize, &Model)> {
        self.models
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.displacement == cc)
    }
}
