//! Event handling for the command dispatcher.
//!
//! Every host input (scroll tick, route change, key press, click, keystroke
//! in a search box) arrives as one [`Event`]. [`handle_event`] applies the
//! matching reducer on [`CommandUiState`] and returns whether the navbar
//! needs re-rendering along with the actions the host must run, in order.
//!
//! # Event Types
//!
//! - **Observers**: `Scrolled`, `RouteChanged`
//! - **Keyboard**: `Key` (palette shortcut, Escape)
//! - **Buttons**: `OpenSearch`, `DismissSearch`, `ToggleMobileMenu`
//! - **Search**: `SearchInput`, `SubmitSearch`, `PaletteInput`, `PaletteSelect`
//!
//! # Search Pipeline
//!
//! Form submission and palette selection share one pipeline: trim, drop empty
//! input silently, percent-encode, navigate to the search route, then notify.
//! A palette selection closes the panel before any action is produced; a
//! selection arriving while the palette is closed is ignored.
//!
//! # Example
//!
//! ```rust
//! use artauction::app::{handle_event, Action, CommandUiState, DispatchSettings, Event};
//!
//! let mut state = CommandUiState::new(DispatchSettings::default(), "/");
//! handle_event(&mut state, &Event::SearchInput("van gogh".into()));
//! let (_, actions) = handle_event(&mut state, &Event::SubmitSearch);
//!
//! assert_eq!(
//!     actions[0],
//!     Action::Navigate { path: "/auctions?search=van%20gogh".into() }
//! );
//! ```

use super::actions::Action;
use super::keys::{Key, KeyPress};
use super::routes::{normalize_query, search_path};
use super::state::CommandUiState;
use crate::domain::Notification;

/// Discrete inputs the dispatcher reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Viewport scrolled to `offset_y` pixels.
    Scrolled { offset_y: f64 },

    /// The router reports a new active path.
    RouteChanged { path: String },

    /// A key pressed anywhere in the document.
    Key(KeyPress),

    /// Search icon pressed.
    OpenSearch,

    /// Palette dismissed (close button, overlay click).
    DismissSearch,

    /// Mobile menu button pressed.
    ToggleMobileMenu,

    /// Navbar search form value changed.
    SearchInput(String),

    /// Navbar search form submitted.
    SubmitSearch,

    /// Palette filter value changed.
    PaletteInput(String),

    /// A palette entry was chosen.
    PaletteSelect(String),
}

/// Where a search was started from; picks the notification wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchOrigin {
    Form,
    Palette,
}

/// Applies `event` to `state`.
///
/// Returns `(should_render, actions)`. The handler is infallible: every input
/// is validated locally before an action is produced.
pub fn handle_event(state: &mut CommandUiState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Scrolled { offset_y } => (state.observe_scroll(*offset_y), vec![]),
        Event::RouteChanged { path } => {
            tracing::debug!(path = %path, menu_open = state.mobile_menu_open, "route changed");
            (state.observe_route(path), vec![])
        }
        Event::Key(press) => handle_key(state, press),
        Event::OpenSearch => (state.open_search(), vec![]),
        Event::DismissSearch => (state.close_search(), vec![]),
        Event::ToggleMobileMenu => {
            state.toggle_mobile_menu();
            (true, vec![])
        }
        Event::SearchInput(query) => {
            state.set_search_query(query.clone());
            (true, vec![])
        }
        Event::SubmitSearch => {
            let actions = search_actions(state, &state.search_query, SearchOrigin::Form);
            (false, actions)
        }
        Event::PaletteInput(query) => {
            state.set_palette_query(query.clone());
            (true, vec![])
        }
        Event::PaletteSelect(value) => {
            if !state.close_search() {
                tracing::debug!("palette selection while closed ignored");
                return (false, vec![]);
            }
            (true, search_actions(state, value, SearchOrigin::Palette))
        }
    }
}

fn handle_key(state: &mut CommandUiState, press: &KeyPress) -> (bool, Vec<Action>) {
    if press.is_palette_shortcut() {
        state.toggle_search();
        tracing::debug!(open = state.search_panel.is_open(), "palette shortcut");
        return (true, vec![Action::PreventDefault]);
    }

    if press.key == Key::Escape && state.search_panel.is_open() {
        return (state.close_search(), vec![]);
    }

    (false, vec![])
}

fn search_actions(state: &CommandUiState, raw: &str, origin: SearchOrigin) -> Vec<Action> {
    let Some(term) = normalize_query(raw) else {
        tracing::debug!(?origin, "ignoring empty search");
        return vec![];
    };

    let path = search_path(&state.settings.search_route, term);
    tracing::debug!(?origin, term = %term, path = %path, "search submitted");

    let notification = match origin {
        SearchOrigin::Form => {
            Notification::info("Searching...", format!("Finding results for \"{term}\""))
        }
        SearchOrigin::Palette => {
            Notification::info("Search results", format!("Showing results for \"{term}\""))
        }
    };

    vec![Action::Navigate { path }, Action::Notify(notification)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SearchPanel;
    use crate::app::state::DispatchSettings;
    use crate::domain::NotificationKind;

    fn state() -> CommandUiState {
        CommandUiState::new(DispatchSettings::default(), "/")
    }

    fn shortcut() -> Event {
        Event::Key(KeyPress::ctrl(Key::Char('k')))
    }

    #[test]
    fn shortcut_toggles_palette_and_prevents_default() {
        let mut s = state();

        let (render, actions) = handle_event(&mut s, &shortcut());
        assert!(render);
        assert_eq!(actions, vec![Action::PreventDefault]);
        assert_eq!(s.search_panel, SearchPanel::Open);

        handle_event(&mut s, &Event::Key(KeyPress::meta(Key::Char('k'))));
        assert_eq!(s.search_panel, SearchPanel::Closed);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut s = state();
        let (render, actions) = handle_event(&mut s, &Event::Key(KeyPress::plain(Key::Char('k'))));
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(s, state());
    }

    #[test]
    fn escape_dismisses_open_palette() {
        let mut s = state();
        handle_event(&mut s, &Event::OpenSearch);

        let (render, _) = handle_event(&mut s, &Event::Key(KeyPress::plain(Key::Escape)));
        assert!(render);
        assert_eq!(s.search_panel, SearchPanel::Closed);
    }

    #[test]
    fn whitespace_submit_does_nothing() {
        let mut s = state();
        handle_event(&mut s, &Event::SearchInput("  ".into()));

        let (_, actions) = handle_event(&mut s, &Event::SubmitSearch);
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_navigates_then_notifies() {
        let mut s = state();
        handle_event(&mut s, &Event::SearchInput("  van gogh ".into()));

        let (_, actions) = handle_event(&mut s, &Event::SubmitSearch);

        assert_eq!(
            actions[0],
            Action::Navigate { path: "/auctions?search=van%20gogh".into() }
        );
        match &actions[1] {
            Action::Notify(n) => {
                assert_eq!(n.kind, NotificationKind::Info);
                assert_eq!(n.message, "Finding results for \"van gogh\"");
            }
            other => panic!("expected notification, got {other:?}"),
        }
    }

    #[test]
    fn palette_select_closes_before_navigating() {
        let mut s = state();
        handle_event(&mut s, &Event::OpenSearch);
        handle_event(&mut s, &Event::PaletteInput("scul".into()));

        let (render, actions) = handle_event(&mut s, &Event::PaletteSelect("Sculpture".into()));

        assert!(render);
        assert_eq!(s.search_panel, SearchPanel::Closed);
        assert!(s.palette_query.is_empty());
        assert_eq!(
            actions,
            vec![
                Action::Navigate { path: "/auctions?search=Sculpture".into() },
                Action::Notify(Notification::info(
                    "Search results",
                    "Showing results for \"Sculpture\""
                )),
            ]
        );
    }

    #[test]
    fn palette_select_while_closed_is_ignored() {
        let mut s = state();

        let (render, actions) = handle_event(&mut s, &Event::PaletteSelect("monet".into()));

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(s, state());
    }

    #[test]
    fn empty_palette_select_only_closes() {
        let mut s = state();
        handle_event(&mut s, &Event::OpenSearch);

        let (render, actions) = handle_event(&mut s, &Event::PaletteSelect(" ".into()));

        assert!(render);
        assert!(actions.is_empty());
        assert!(!s.search_panel.is_open());
    }

    #[test]
    fn custom_search_route_is_used() {
        let settings = DispatchSettings {
            search_route: "/catalog".into(),
            ..DispatchSettings::default()
        };
        let mut s = CommandUiState::new(settings, "/");
        handle_event(&mut s, &Event::SearchInput("monet".into()));

        let (_, actions) = handle_event(&mut s, &Event::SubmitSearch);
        assert_eq!(actions[0], Action::Navigate { path: "/catalog?search=monet".into() });
    }

    #[test]
    fn route_change_closes_mobile_menu() {
        let mut s = state();
        handle_event(&mut s, &Event::ToggleMobileMenu);
        assert!(s.mobile_menu_open);

        let (render, _) = handle_event(&mut s, &Event::RouteChanged { path: "/about".into() });
        assert!(render);
        assert!(!s.mobile_menu_open);
    }
}
