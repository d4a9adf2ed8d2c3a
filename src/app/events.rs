//! Showroom events and side effects.

use crate::services::lead::{Contact, Lead, LeadTarget};

/// Every user interaction the showroom core understands.
///
/// The terminal UI translates key presses and mouse gestures into these; the
/// core never sees raw terminal events.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowroomEvent {
    // === HERO ===
    /// Pointer moved over the hero banner
    PointerEnterHero,
    /// Pointer left the hero banner
    PointerLeaveHero,
    /// Drag gesture over the hero, in pixel-equivalent deltas
    Swipe {
        /// Horizontal travel (positive: right)
        delta_x: f32,
        /// Vertical travel (positive: down)
        delta_y: f32,
    },
    /// Next-slide button
    NextSlide,
    /// Previous-slide button
    PreviousSlide,

    // === THEME ===
    /// Theme toggle button
    ToggleTheme,

    // === BROWSING ===
    /// Open the side panel for a brand id
    OpenBrand(String),
    /// Close the side panel
    ClosePanel,
    /// Displacement filter button
    SelectDisplacement(u32),
    /// Color swatch on a model card
    SelectColor {
        /// Card position in the panel
        card: usize,
        /// Swatch label
        label: String,
    },

    // === SEARCH ===
    /// Search toggle button
    ToggleSearch,
    /// Search input changed
    SetQuery(String),
    /// A search result was picked
    SelectResult(usize),

    // === LEAD ===
    /// "Pedir asesoramiento" on a model card
    OpenLead {
        /// Card position in the panel
        card: usize,
    },
    /// Lead color selector moved forward
    NextLeadColor,
    /// Lead color selector moved back
    PreviousLeadColor,
    /// Messaging button for a contact
    SubmitLead(Contact),
    /// Lead modal close button
    CloseLead,

    // === ZOOM ===
    /// Card image clicked
    OpenZoom {
        /// Card position in the panel
        card: usize,
    },
    /// Zoom close button
    CloseZoom,

    /// Escape key: closes search, panel, lead modal and zoom
    Escape,
}

/// Work the core asks its host to perform outside the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the lead's deep link in the platform handler
    OpenLink(Lead),
}

/// Deferred follow-ups queued on the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Apply a search result's displacement to the brand's panel
    SelectDisplacement {
        /// Brand the result belongs to
        brand_id: String,
        /// Displacement to select
        cc: u32,
    },
    /// Close the lead modal after a submission, if it still shows this target
    CloseLead(LeadTarget),
    /// Release the zoom image after the overlay closed
    ClearZoom,
}
