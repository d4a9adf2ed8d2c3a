//! Brand panel browsing: displacement filters, model cards and color swatches.

use std::collections::HashMap;
use tracing::debug;

use crate::models::{Brand, Catalog, ModelKey};

/// Shown before a displacement filter is chosen.
pub const SELECT_PROMPT: &str = "Selecciona una cilindrada para ver los modelos disponibles.";

/// Shown when the chosen displacement has no models.
pub const NO_MODELS_MESSAGE: &str = "No hay modelos disponibles para esta cilindrada.";

/// A model card rendered in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCard {
    /// Catalog identity of the model
    pub key: ModelKey,
    /// Image currently displayed on the card
    pub image: String,
}

/// What the panel body shows below the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// No filter chosen yet
    Prompt,
    /// Cards for the chosen displacement
    Models(Vec<ModelCard>),
    /// The chosen displacement has no models
    Empty,
}

impl PanelContent {
    /// Cards on display (empty unless models are shown).
    pub fn cards(&self) -> &[ModelCard] {
        match self {
            Self::Models(cards) => cards,
            Self::Prompt | Self::Empty => &[],
        }
    }
}

/// An open brand panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPanel {
    /// Brand identifier
    pub brand_id: String,
    /// Brand display name (panel title)
    pub title: String,
    /// Distinct displacements, ascending
    pub filters: Vec<u32>,
    /// Active filter, if any
    pub active_filter: Option<u32>,
    /// Panel body
    pub content: PanelContent,
}

/// Owns the open panel and the per-card selected colors.
///
/// Selected colors live in a side table keyed by model identity and are
/// dropped whenever the cards are rebuilt or the panel closes.
#[derive(Debug, Clone, Default)]
pub struct CatalogBrowser {
    panel: Option<BrandPanel>,
    selected_colors: HashMap<ModelKey, String>,
}

impl CatalogBrowser {
    /// Creates a browser with no panel open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the panel for `brand_id`. Unknown brands are ignored.
    ///
    /// Returns true when the panel opened.
    pub fn open_brand(&mut self, catalog: &Catalog, brand_id: &str) -> bool {
        let Some(brand) = catalog.get(brand_id) else {
            debug!("Ignoring unknown brand '{brand_id}'");
            return false;
        };

        self.selected_colors.clear();
        self.panel = Some(BrandPanel {
            brand_id: brand_id.to_string(),
            title: brand.name.clone(),
            filters: brand.displacements(),
            active_filter: None,
            content: PanelContent::Prompt,
        });
        debug!("Opened brand panel '{brand_id}'");
        true
    }

    /// Applies a displacement filter to the open panel.
    pub fn select_displacement(&mut self, catalog: &Catalog, cc: u32) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let Some(brand) = catalog.get(&panel.brand_id) else {
            return;
        };

        let cards = build_cards(&panel.brand_id, brand, cc);
        self.selected_colors.clear();
        panel.active_filter = Some(cc);
        panel.content = if cards.is_empty() {
            PanelContent::Empty
        } else {
            PanelContent::Models(cards)
        };
    }

    /// Selects a color swatch on the card at `card_index`.
    ///
    /// The label is matched exactly against the model's colors. The card image
    /// changes only if an image is aligned with that color; the selection is
    /// recorded either way.
    pub fn select_color(&mut self, catalog: &Catalog, card_index: usize, label: &str) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let PanelContent::Models(cards) = &mut panel.content else {
            return;
        };
        let Some(card) = cards.get_mut(card_index) else {
            return;
        };
        let Some(model) = catalog.model(&card.key) else {
            return;
        };

        if let Some(image) = model.image_for_color(label) {
            card.image = image.to_string();
        }
        self.selected_colors
            .insert(card.key.clone(), label.to_string());
        debug!("Selected color '{label}' for {}", model.name);
    }

    /// Closes the panel and forgets every selected color.
    pub fn close(&mut self) {
        self.panel = None;
        self.selected_colors.clear();
    }

    /// The open panel, if any.
    pub fn panel(&self) -> Option<&BrandPanel> {
        self.panel.as_ref()
    }

    /// True when a panel is open.
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// Card at `index` in the open panel.
    pub fn card(&self, index: usize) -> Option<&ModelCard> {
        self.panel.as_ref()?.content.cards().get(index)
    }

    /// Last color chosen for a model, if any.
    pub fn selected_color(&self, key: &ModelKey) -> Option<&str> {
        self.selected_colors.get(key).map(String::as_str)
    }
}

fn build_cards(brand_id: &str, brand: &Brand, cc: u32) -> Vec<ModelCard> {
    brand
        .models_with_displacement(cc)
        .map(|(index, model)| ModelCard {
            key: ModelKey::new(brand_id, index),
            image: model.default_image().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Model, PLACEHOLDER_IMAGE};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "honda",
            Brand {
                name: "Honda".to_string(),
                logo_path: "motos/honda/logo.png".to_string(),
                models: vec![
                    Model::new(
                        "CG 125",
                        125,
                        &["Rojo", "Negro", "Blanco"],
                        &["images/cg_rojo.jpg", "images/cg_negro.jpg"],
                    ),
                    Model::new("XR 150", 150, &["Blanco"], &[]),
                    Model::new("Biz 125", 125, &["Azul"], &["images/biz.jpg"]),
                ],
            },
        );
        catalog
    }

    #[test]
    fn test_open_unknown_brand_is_noop() {
        let mut browser = CatalogBrowser::new();
        assert!(!browser.open_brand(&catalog(), "suzuki"));
        assert!(browser.panel().is_none());
    }

    #[test]
    fn test_open_brand_lists_filters_and_prompt() {
        let mut browser = CatalogBrowser::new();
        assert!(browser.open_brand(&catalog(), "honda"));
        let panel = browser.panel().unwrap();
        assert_eq!(panel.title, "Honda");
        assert_eq!(panel.filters, vec![125, 150]);
        assert_eq!(panel.content, PanelContent::Prompt);
    }

    #[test]
    fn test_select_displacement_filters_exactly() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 125);

        let panel = browser.panel().unwrap();
        assert_eq!(panel.active_filter, Some(125));
        let keys: Vec<usize> = panel.content.cards().iter().map(|c| c.key.index).collect();
        assert_eq!(keys, vec![0, 2]);
    }

    #[test]
    fn test_select_unknown_displacement_shows_empty_state() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 300);
        assert_eq!(browser.panel().unwrap().content, PanelContent::Empty);
    }

    #[test]
    fn test_card_default_image_uses_placeholder() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 150);
        assert_eq!(browser.card(0).unwrap().image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_select_color_swaps_aligned_image() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 125);

        browser.select_color(&catalog, 0, "Negro");
        assert_eq!(browser.card(0).unwrap().image, "images/cg_negro.jpg");
        assert_eq!(
            browser.selected_color(&ModelKey::new("honda", 0)),
            Some("Negro")
        );

        // Blanco has no aligned image: image stays, selection is recorded
        browser.select_color(&catalog, 0, "Blanco");
        assert_eq!(browser.card(0).unwrap().image, "images/cg_negro.jpg");
        assert_eq!(
            browser.selected_color(&ModelKey::new("honda", 0)),
            Some("Blanco")
        );
    }

    #[test]
    fn test_refiltering_resets_card_colors() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 125);
        browser.select_color(&catalog, 0, "Negro");

        browser.select_displacement(&catalog, 125);
        assert_eq!(browser.card(0).unwrap().image, "images/cg_rojo.jpg");
        assert_eq!(browser.selected_color(&ModelKey::new("honda", 0)), None);
    }

    #[test]
    fn test_close_discards_selected_colors() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.open_brand(&catalog, "honda");
        browser.select_displacement(&catalog, 125);
        browser.select_color(&catalog, 1, "Azul");
        browser.close();

        assert!(!browser.is_open());
        assert_eq!(browser.selected_color(&ModelKey::new("honda", 2)), None);
    }

    #[test]
    fn test_select_color_without_cards_is_noop() {
        let catalog = catalog();
        let mut browser = CatalogBrowser::new();
        browser.select_color(&catalog, 0, "Rojo");
        browser.open_brand(&catalog, "honda");
        browser.select_color(&catalog, 0, "Rojo");
        assert_eq!(browser.selected_color(&ModelKey::new("honda", 0)), None);
    }
}
