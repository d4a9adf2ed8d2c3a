//! Theme system for consistent UI colors across dark and light modes.
//!
//! The palette follows the persisted [`ThemePreference`]; there is no OS
//! detection, the light palette is the default.

use ratatui::style::Color;

use crate::config::ThemePreference;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Brand red for borders, titles, and calls to action
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and success messages
    pub success: Color,
    /// Error state color for errors
    pub error: Color,
    /// Warning state color for warnings and cautions
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text, disabled items, and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    // State indicators
    /// Active/focused element color
    pub active: Color,
    /// Inactive/disabled element color
    pub inactive: Color,
}

impl Theme {
    /// Palette for a stored preference.
    #[must_use]
    pub const fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(230, 57, 70),
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            active: Color::Yellow,
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// # Color Choices
    /// - Darker red for titles so it stays readable on white
    /// - Black text on white background
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(193, 18, 31),
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            active: Color::Rgb(180, 100, 0),
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_preference() {
        assert_eq!(Theme::from_preference(ThemePreference::Dark), Theme::dark());
        assert_eq!(Theme::from_preference(ThemePreference::Light), Theme::light());
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn test_theme_contrast() {
        let dark = Theme::dark();
        assert_eq!(dark.text, Color::White);
        assert_eq!(dark.background, Color::Black);

        let light = Theme::light();
        assert_eq!(light.text, Color::Black);
        assert_eq!(light.background, Color::White);
        // Yellow is too bright for a white background
        assert_ne!(light.accent, Color::Yellow);
    }

    #[test]
    fn test_semantic_colors_present() {
        let theme = Theme::dark();
        assert_ne!(theme.success, theme.error);
        assert_ne!(theme.primary, theme.accent);
        assert_ne!(theme.text, theme.text_muted);
    }
}
