//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::tui::help_registry::contexts;

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Confirm,

    // === HERO ===
    NextSlide,
    PreviousSlide,
    ToggleHeroPause,

    // === PANEL ===
    NextFilter,
    PreviousFilter,
    NextColor,
    PreviousColor,
    OpenLead,
    OpenZoom,

    // === LEAD FORM ===
    NextField,
    PreviousField,

    // === OVERLAYS ===
    ToggleTheme,
    ToggleSearch,
    CloseZoom,
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Get the action ID string used in help.toml
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::Confirm => "confirm",

            Self::NextSlide => "next_slide",
            Self::PreviousSlide => "previous_slide",
            Self::ToggleHeroPause => "toggle_hero_pause",

            Self::NextFilter => "next_filter",
            Self::PreviousFilter => "previous_filter",
            Self::NextColor => "next_color",
            Self::PreviousColor => "previous_color",
            Self::OpenLead => "open_lead",
            Self::OpenZoom => "open_zoom",

            Self::NextField => "next_field",
            Self::PreviousField => "previous_field",

            Self::ToggleTheme => "toggle_theme",
            Self::ToggleSearch => "toggle_search",
            Self::CloseZoom => "close_zoom",
            Self::ToggleHelp => "toggle_help",

            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_panel_shortcuts();
        registry.register_search_shortcuts();
        registry.register_lead_shortcuts();
        registry.register_zoom_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the landing screen.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::MAIN;

        // === BRAND GRID ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Enter, M::NONE, Action::Confirm);

        // === HERO ===
        self.register(ctx, K::Char(']'), M::NONE, Action::NextSlide);
        self.register(ctx, K::Char('['), M::NONE, Action::PreviousSlide);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleHeroPause);

        self.register_global(ctx);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
    }

    /// Register all shortcuts for the open brand panel.
    fn register_panel_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::PANEL;

        self.register(ctx, K::Left, M::NONE, Action::PreviousFilter);
        self.register(ctx, K::Right, M::NONE, Action::NextFilter);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousFilter);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextFilter);
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);

        self.register(ctx, K::Char('c'), M::NONE, Action::NextColor);
        self.register(ctx, K::Char('C'), M::SHIFT, Action::PreviousColor);
        self.register(ctx, K::Enter, M::NONE, Action::OpenZoom);
        self.register(ctx, K::Char('z'), M::NONE, Action::OpenZoom);
        self.register(ctx, K::Char('a'), M::NONE, Action::OpenLead);

        self.register_global(ctx);
    }

    /// Register shortcuts for the search bar. Printable keys go to the input.
    fn register_search_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::SEARCH;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Enter, M::NONE, Action::Confirm);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the lead modal. Printable keys go to the focused input.
    fn register_lead_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::LEAD;

        self.register(ctx, K::Tab, M::NONE, Action::NextField);
        self.register(ctx, K::Down, M::NONE, Action::NextField);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousField);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousField);
        self.register(ctx, K::Up, M::NONE, Action::PreviousField);
        self.register(ctx, K::Left, M::NONE, Action::PreviousColor);
        self.register(ctx, K::Right, M::NONE, Action::NextColor);
        self.register(ctx, K::Enter, M::NONE, Action::Confirm);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the zoom overlay.
    fn register_zoom_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::ZOOM;

        self.register(ctx, K::Enter, M::NONE, Action::CloseZoom);
        self.register(ctx, K::Char('z'), M::NONE, Action::CloseZoom);
        self.register(ctx, K::Char('q'), M::NONE, Action::CloseZoom);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the help overlay.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::HELP;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::ToggleHelp);
    }

    /// Shortcuts shared by the landing screen and the brand panel.
    fn register_global(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('/'), M::NONE, Action::ToggleSearch);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(contexts::MAIN, key(KeyCode::Up)),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            registry.lookup(contexts::MAIN, key(KeyCode::Char('t'))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            registry.lookup(
                contexts::MAIN,
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_context_specific_bindings() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(contexts::MAIN, key(KeyCode::Left)),
            Some(Action::NavigateLeft)
        );
        assert_eq!(
            registry.lookup(contexts::PANEL, key(KeyCode::Left)),
            Some(Action::PreviousFilter)
        );
        assert_eq!(
            registry.lookup(contexts::LEAD, key(KeyCode::Left)),
            Some(Action::PreviousColor)
        );
        assert!(registry.matches(contexts::ZOOM, key(KeyCode::Esc), Action::Cancel));
    }

    #[test]
    fn test_text_contexts_leave_letters_unbound() {
        let registry = ShortcutRegistry::new();

        for c in ['a', 't', 'q', '/', 'z'] {
            assert_eq!(registry.lookup(contexts::SEARCH, key(KeyCode::Char(c))), None);
            assert_eq!(registry.lookup(contexts::LEAD, key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_most_actions_are_bound() {
        let registry = ShortcutRegistry::new();
        let mut ids: Vec<_> = registry.bindings.values().map(Action::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert!(ids.len() > 15);
    }
}
