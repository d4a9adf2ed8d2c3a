//! Help registry for centralized keybinding definitions.
//!
//! This module loads help definitions from an embedded TOML file and provides
//! methods to query bindings by context for the status bar and help overlay.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("../data/help.toml");

/// Order in which contexts appear in the help overlay.
pub const OVERLAY_ORDER: &[&str] = &[
    contexts::MAIN,
    contexts::PANEL,
    contexts::SEARCH,
    contexts::LEAD,
    contexts::ZOOM,
    contexts::MOUSE,
];

/// A single keybinding definition
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (optional)
    pub hint: Option<String>,
    /// Priority for display order (lower = more important, shown first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// Description of when this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

/// Root structure of the help TOML file
#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

/// Help registry providing access to keybinding definitions
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    meta: HelpMeta,
    contexts: HashMap<String, Context>,
}

impl HelpRegistry {
    /// Load the help registry from the embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        let help_file: HelpFile = toml::from_str(HELP_TOML)?;
        Ok(Self {
            meta: help_file.meta,
            contexts: help_file.contexts,
        })
    }

    /// Get the app name from metadata
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.meta.app_name
    }

    /// Get a context by name
    #[must_use]
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Get all bindings for a context, sorted by priority
    #[must_use]
    pub fn get_bindings(&self, context_name: &str) -> Vec<&Binding> {
        self.contexts
            .get(context_name)
            .map(|context| {
                let mut bindings: Vec<&Binding> = context.bindings.iter().collect();
                bindings.sort_by_key(|b| b.priority);
                bindings
            })
            .unwrap_or_default()
    }

    /// Bindings with a status bar hint, sorted by priority
    #[must_use]
    pub fn get_status_bar_hints(&self, context_name: &str) -> Vec<&Binding> {
        self.get_bindings(context_name)
            .into_iter()
            .filter(|b| b.hint.is_some())
            .collect()
    }

    /// Format a binding for display in help overlay
    /// Returns (`keys_string`, `action_string`)
    #[must_use]
    pub fn format_binding_for_help(binding: &Binding) -> (String, String) {
        let keys = if binding.alt_keys.is_empty() {
            binding.keys.join("/")
        } else {
            format!(
                "{} ({})",
                binding.keys.join("/"),
                binding.alt_keys.join("/")
            )
        };
        (keys, binding.action.clone())
    }

    /// Compact (key, hint) pairs for the status bar
    #[must_use]
    pub fn format_status_bar_hints(
        &self,
        context_name: &str,
        max_hints: usize,
    ) -> Vec<(String, String)> {
        self.get_status_bar_hints(context_name)
            .into_iter()
            .take(max_hints)
            .map(|b| {
                let key = b.keys.first().map_or("", String::as_str);
                let hint = b.hint.as_deref().unwrap_or(&b.action);
                (key.to_string(), hint.to_string())
            })
            .collect()
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::load().unwrap_or_else(|err| {
            warn!("Embedded help.toml is invalid: {err}");
            Self {
                meta: HelpMeta::default(),
                contexts: HashMap::new(),
            }
        })
    }
}

/// Known context names as constants for type safety
pub mod contexts {
    /// Landing screen: hero and brand grid
    pub const MAIN: &str = "main";
    /// Open brand panel
    pub const PANEL: &str = "panel";
    /// Search bar
    pub const SEARCH: &str = "search";
    /// Lead capture modal
    pub const LEAD: &str = "lead";
    /// Image zoom overlay
    pub const ZOOM: &str = "zoom";
    /// Help overlay
    pub const HELP: &str = "help";
    /// Mouse gestures (informational)
    pub const MOUSE: &str = "mouse";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_help_registry() {
        let registry = HelpRegistry::load().expect("Failed to load help registry");
        assert_eq!(registry.app_name(), "Daytona Motos");
    }

    #[test]
    fn test_every_overlay_context_exists() {
        let registry = HelpRegistry::load().unwrap();
        for name in OVERLAY_ORDER.iter().chain([&contexts::HELP]) {
            assert!(registry.get_context(name).is_some(), "missing context {name}");
        }
    }

    #[test]
    fn test_get_bindings_sorted_by_priority() {
        let registry = HelpRegistry::load().unwrap();
        let bindings = registry.get_bindings(contexts::PANEL);
        assert!(!bindings.is_empty());

        for window in bindings.windows(2) {
            assert!(window[0].priority <= window[1].priority);
        }
    }

    #[test]
    fn test_format_status_bar_hints() {
        let registry = HelpRegistry::load().unwrap();
        let hints = registry.format_status_bar_hints(contexts::MAIN, 3);
        assert_eq!(hints.len(), 3);
        assert_eq!(hints[0].1, "Marcas");
    }

    #[test]
    fn test_format_binding_with_alt_keys() {
        let binding = Binding {
            keys: vec!["Enter".to_string()],
            alt_keys: vec!["z".to_string()],
            action: "Ampliar".to_string(),
            hint: None,
            priority: 1,
        };
        assert_eq!(
            HelpRegistry::format_binding_for_help(&binding),
            ("Enter (z)".to_string(), "Ampliar".to_string())
        );
    }
}
