//! Enlarged image overlay.

/// Alt text used when none is given.
pub const DEFAULT_ALT: &str = "Imagen ampliada";

/// Image zoom overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomOverlay {
    visible: bool,
    image: Option<String>,
    alt: String,
    caption: String,
}

impl ZoomOverlay {
    /// Hidden overlay with no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `image` with its alt text and caption.
    pub fn open(&mut self, image: &str, alt: &str, caption: &str) {
        self.image = Some(image.to_string());
        self.alt = if alt.is_empty() {
            DEFAULT_ALT.to_string()
        } else {
            alt.to_string()
        };
        self.caption = caption.to_string();
        self.visible = true;
    }

    /// Hides the overlay. The image reference stays until
    /// [`clear_image`](Self::clear_image) runs.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Drops the image reference if the overlay is still hidden.
    pub fn clear_image(&mut self) {
        if !self.visible {
            self.image = None;
        }
    }

    /// True while shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Loaded image reference.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Alt text.
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Caption under the image.
    pub fn caption(&self) -> &str {
        &self.caption
    }
}

/// Caption for a model card image: "<model> - <color>" or just the model.
pub fn card_caption(model: &str, selected_color: Option<&str>) -> String {
    match selected_color {
        Some(color) => format!("{model} - {color}"),
        None => model.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut zoom = ZoomOverlay::new();
        zoom.open("images/cg.jpg", "", "CG 125 - Rojo");
        assert!(zoom.is_visible());
        assert_eq!(zoom.alt(), DEFAULT_ALT);
        assert_eq!(zoom.caption(), "CG 125 - Rojo");

        zoom.close();
        assert!(!zoom.is_visible());
        assert_eq!(zoom.image(), Some("images/cg.jpg"));
        zoom.clear_image();
        assert_eq!(zoom.image(), None);
    }

    #[test]
    fn test_clear_after_reopen_keeps_new_image() {
        let mut zoom = ZoomOverlay::new();
        zoom.open("images/a.jpg", "A", "");
        zoom.close();
        zoom.open("images/b.jpg", "B", "");
        zoom.clear_image();
        assert_eq!(zoom.image(), Some("images/b.jpg"));
    }

    #[test]
    fn test_card_caption() {
        assert_eq!(card_caption("CG 125", Some("Negro")), "CG 125 - Negro");
        assert_eq!(card_caption("CG 125", None), "CG 125");
    }
}
