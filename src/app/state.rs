//! Command dispatcher UI state and its reducers.
//!
//! [`CommandUiState`] holds every transient flag the navbar needs: scroll
//! styling, mobile menu, command palette visibility, and the text typed into
//! the search inputs. Each event type has its own reducer method returning
//! whether anything visible changed, so the state can be unit tested without
//! a DOM or renderer.
//!
//! # State Components
//!
//! - **Scroll flag**: derived from the viewport offset against a threshold
//! - **Mobile menu**: toggled by the menu button, forced closed on navigation
//! - **Search panel**: the command palette state machine ([`SearchPanel`])
//! - **Queries**: navbar form text and palette filter text
//!
//! # Example
//!
//! ```rust
//! use artauction::app::{CommandUiState, DispatchSettings};
//!
//! let mut state = CommandUiState::new(DispatchSettings::default(), "/");
//! assert!(state.observe_scroll(42.0));
//! assert!(state.scrolled);
//! ```

use super::modes::SearchPanel;
use super::palette::{filter_suggestions, DEFAULT_SUGGESTIONS};
use super::routes::{DEFAULT_SEARCH_ROUTE, NAV_LINKS};
use crate::ui::viewmodel::{NavLinkView, NavbarView};

/// Vertical offset, in pixels, past which the navbar counts as scrolled.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 10.0;

/// Tunables for the dispatcher, taken from [`crate::Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchSettings {
    pub scroll_threshold: f64,
    pub search_route: String,
    pub palette_suggestions: Vec<String>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            search_route: DEFAULT_SEARCH_ROUTE.to_string(),
            palette_suggestions: DEFAULT_SUGGESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Transient navbar state, owned by one dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandUiState {
    /// Viewport offset is past the threshold.
    pub scrolled: bool,

    /// Mobile navigation drawer is showing.
    pub mobile_menu_open: bool,

    /// Command palette visibility.
    pub search_panel: SearchPanel,

    /// Text in the navbar search form, replaced on every keystroke.
    pub search_query: String,

    /// Text typed into the palette's filter input.
    pub palette_query: String,

    /// Suggestions matching `palette_query`.
    pub palette_matches: Vec<String>,

    /// Route the host last reported.
    pub current_path: String,

    pub settings: DispatchSettings,
}

impl CommandUiState {
    /// Fresh state for a page showing `current_path`.
    #[must_use]
    pub fn new(settings: DispatchSettings, current_path: impl Into<String>) -> Self {
        let palette_matches = settings.palette_suggestions.clone();
        Self {
            scrolled: false,
            mobile_menu_open: false,
            search_panel: SearchPanel::Closed,
            search_query: String::new(),
            palette_query: String::new(),
            palette_matches,
            current_path: current_path.into(),
            settings,
        }
    }

    /// Recomputes the scroll flag. Returns `true` when it flipped.
    pub fn observe_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > self.settings.scroll_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Records a route change and closes the mobile menu.
    ///
    /// Returns `true` when anything visible changed.
    pub fn observe_route(&mut self, path: &str) -> bool {
        let menu_was_open = self.mobile_menu_open;
        let path_changed = self.current_path != path;

        self.mobile_menu_open = false;
        if path_changed {
            self.current_path = path.to_string();
        }

        menu_was_open || path_changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Opens the palette. Returns `true` if it was closed.
    pub fn open_search(&mut self) -> bool {
        if self.search_panel.is_open() {
            return false;
        }
        self.search_panel = SearchPanel::Open;
        true
    }

    /// Closes the palette and clears its filter. Returns `true` if it was open.
    pub fn close_search(&mut self) -> bool {
        if !self.search_panel.is_open() {
            return false;
        }
        self.search_panel = SearchPanel::Closed;
        self.set_palette_query(String::new());
        true
    }

    /// Flips the palette, as the keyboard shortcut does.
    pub fn toggle_search(&mut self) {
        if self.search_panel.toggled().is_open() {
            self.open_search();
        } else {
            self.close_search();
        }
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    /// Replaces the palette filter text and refilters suggestions.
    pub fn set_palette_query(&mut self, query: String) {
        self.palette_query = query;
        self.apply_palette_filter();
    }

    /// Recomputes `palette_matches` from `palette_query`.
    pub fn apply_palette_filter(&mut self) {
        self.palette_matches = filter_suggestions(&self.settings.palette_suggestions, &self.palette_query);
    }

    /// Builds the render-ready navbar view.
    #[must_use]
    pub fn compute_view(&self) -> NavbarView {
        let links = NAV_LINKS
            .iter()
            .map(|link| NavLinkView {
                label: link.label,
                path: link.path,
                is_active: link.is_active(&self.current_path),
            })
            .collect();

        NavbarView {
            scrolled: self.scrolled,
            links,
            mobile_menu_open: self.mobile_menu_open,
            search_open: self.search_panel.is_open(),
            search_query: self.search_query.clone(),
            palette_query: self.palette_query.clone(),
            palette_entries: self.palette_matches.clone(),
        }
    }
}
