//! Showroom core: the single owner of application state.
//!
//! Every service hangs off [`Showroom`]. User input arrives as
//! [`ShowroomEvent`]s through [`Showroom::handle`]; time advances through
//! [`Showroom::tick`]. Nothing here touches the terminal.

use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::models::{default_slides, Catalog, HeroSlide, Model, SearchResult};
use crate::services::lead::LeadForm;
use crate::services::preferences::PreferenceStore;
use crate::services::scheduler::{LEAD_CLOSE_DELAY, SEARCH_SELECT_DELAY, ZOOM_CLEAR_DELAY};
use crate::services::search::{search, SearchOutcome};
use crate::services::zoom::card_caption;
use crate::services::{
    CatalogBrowser, CatalogStore, Scheduler, SlideRotator, ThemeController, ZoomOverlay,
};

use super::events::{Deferred, Effect, ShowroomEvent};

/// Search bar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    /// Whether the bar is shown
    pub open: bool,
    /// Raw input text
    pub query: String,
    /// Result of the last query
    pub outcome: SearchOutcome,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
            outcome: SearchOutcome::Hidden,
        }
    }
}

/// Application state for one session.
#[derive(Debug)]
pub struct Showroom {
    store: CatalogStore,
    slides: Vec<HeroSlide>,
    rotator: SlideRotator,
    theme: ThemeController,
    browser: CatalogBrowser,
    search: SearchBar,
    lead: LeadForm,
    zoom: ZoomOverlay,
    scheduler: Scheduler<Deferred>,
}

impl Showroom {
    /// Builds the showroom and applies the stored theme.
    pub fn new(
        store: CatalogStore,
        preferences: Box<dyn PreferenceStore>,
        slide_interval: Duration,
        now: Instant,
    ) -> Self {
        let slides = default_slides();
        let rotator = SlideRotator::new(slides.len(), slide_interval, now);
        let mut theme = ThemeController::new(preferences, store.catalog());
        theme.initialize();

        Self {
            store,
            slides,
            rotator,
            theme,
            browser: CatalogBrowser::new(),
            search: SearchBar::default(),
            lead: LeadForm::new(),
            zoom: ZoomOverlay::new(),
            scheduler: Scheduler::new(),
        }
    }

    /// Applies a user event.
    pub fn handle(&mut self, event: ShowroomEvent, now: Instant) -> Option<Effect> {
        match event {
            ShowroomEvent::PointerEnterHero => self.rotator.pointer_enter(),
            ShowroomEvent::PointerLeaveHero => self.rotator.pointer_leave(now),
            ShowroomEvent::Swipe { delta_x, delta_y } => {
                self.rotator.swipe(delta_x, delta_y);
            }
            ShowroomEvent::NextSlide => self.rotator.next(),
            ShowroomEvent::PreviousSlide => self.rotator.previous(),
            ShowroomEvent::ToggleTheme => {
                self.theme.toggle();
            }
            ShowroomEvent::OpenBrand(brand_id) => {
                self.browser.open_brand(self.store.catalog(), &brand_id);
            }
            ShowroomEvent::ClosePanel => self.browser.close(),
            ShowroomEvent::SelectDisplacement(cc) => {
                self.browser.select_displacement(self.store.catalog(), cc);
            }
            ShowroomEvent::SelectColor { card, label } => {
                self.browser.select_color(self.store.catalog(), card, &label);
            }
            ShowroomEvent::ToggleSearch => self.search.open = !self.search.open,
            ShowroomEvent::SetQuery(query) => self.set_query(query),
            ShowroomEvent::SelectResult(index) => self.select_result(index, now),
            ShowroomEvent::OpenLead { card } => self.open_lead(card),
            ShowroomEvent::NextLeadColor => self.lead.next_color(),
            ShowroomEvent::PreviousLeadColor => self.lead.previous_color(),
            ShowroomEvent::SubmitLead(contact) => {
                let lead = self.lead.submit(contact)?;
                info!(
                    contact = %contact,
                    "Lead for {} {} ({}cc, {})",
                    lead.brand,
                    lead.model,
                    lead.displacement,
                    lead.color
                );
                if let Some(target) = self.lead.target().cloned() {
                    self.scheduler
                        .schedule(now, LEAD_CLOSE_DELAY, Deferred::CloseLead(target));
                }
                return Some(Effect::OpenLink(lead));
            }
            ShowroomEvent::CloseLead => self.lead.close(),
            ShowroomEvent::OpenZoom { card } => self.open_zoom(card),
            ShowroomEvent::CloseZoom => self.close_zoom(now),
            ShowroomEvent::Escape => {
                self.search.open = false;
                self.browser.close();
                self.lead.close();
                self.close_zoom(now);
            }
        }
        None
    }

    /// Advances the rotator and runs due deferred tasks.
    ///
    /// Returns true when anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.rotator.tick(now);
        for task in self.scheduler.drain_due(now) {
            self.run_deferred(task);
            changed = true;
        }
        changed
    }

    fn run_deferred(&mut self, task: Deferred) {
        debug!("Running deferred task {task:?}");
        match task {
            Deferred::SelectDisplacement { brand_id, cc } => {
                let same_brand = self
                    .browser
                    .panel()
                    .is_some_and(|panel| panel.brand_id == brand_id);
                if same_brand {
                    self.browser.select_displacement(self.store.catalog(), cc);
                }
            }
            Deferred::CloseLead(target) => {
                if self.lead.target() == Some(&target) {
                    self.lead.close();
                }
            }
            Deferred::ClearZoom => self.zoom.clear_image(),
        }
    }

    fn set_query(&mut self, query: String) {
        self.search.outcome = search(self.store.catalog(), &query);
        self.search.query = query;
    }

    fn select_result(&mut self, index: usize, now: Instant) {
        let Some(result) = self.search.outcome.results().get(index).cloned() else {
            return;
        };
        self.search.open = false;
        if self.browser.open_brand(self.store.catalog(), &result.brand_id) {
            self.scheduler.schedule(
                now,
                SEARCH_SELECT_DELAY,
                Deferred::SelectDisplacement {
                    brand_id: result.brand_id,
                    cc: result.displacement,
                },
            );
        }
    }

    fn open_lead(&mut self, card: usize) {
        let Some((brand, model, color)) = self.card_model(card) else {
            return;
        };
        let (brand, model, color) = (brand.to_string(), model.clone(), color.map(str::to_string));
        self.lead.open(&brand, &model, color.as_deref());
    }

    fn open_zoom(&mut self, card: usize) {
        let Some(image) = self.browser.card(card).map(|c| c.image.clone()) else {
            return;
        };
        let Some((_, model, color)) = self.card_model(card) else {
            return;
        };
        let caption = card_caption(&model.name, color);
        let alt = model.name.clone();
        self.zoom.open(&image, &alt, &caption);
    }

    fn close_zoom(&mut self, now: Instant) {
        if self.zoom.is_visible() {
            self.zoom.close();
            self.scheduler
                .schedule(now, ZOOM_CLEAR_DELAY, Deferred::ClearZoom);
        }
    }

    /// Brand name, model and selected color behind a panel card.
    fn card_model(&self, card: usize) -> Option<(&str, &Model, Option<&str>)> {
        let panel = self.browser.panel()?;
        let key = &self.browser.card(card)?.key;
        let model = self.store.catalog().model(key)?;
        Some((panel.title.as_str(), model, self.browser.selected_color(key)))
    }

    // === Read access for renderers and tests ===

    /// Loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    /// Catalog store with its load source.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Hero banners.
    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    /// Slide rotator.
    pub fn rotator(&self) -> &SlideRotator {
        &self.rotator
    }

    /// Theme controller.
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Brand panel browser.
    pub fn browser(&self) -> &CatalogBrowser {
        &self.browser
    }

    /// Search bar.
    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    /// Visible search results.
    pub fn search_results(&self) -> &[SearchResult] {
        self.search.outcome.results()
    }

    /// Lead form.
    pub fn lead(&self) -> &LeadForm {
        &self.lead
    }

    /// Lead form, for editing the name and phone inputs.
    pub fn lead_mut(&mut self) -> &mut LeadForm {
        &mut self.lead
    }

    /// Zoom overlay.
    pub fn zoom(&self) -> &ZoomOverlay {
        &self.zoom
    }

    /// Number of queued deferred tasks.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }
}
