//! Mounted command dispatcher.
//!
//! [`CommandDispatcher`] pairs a [`CommandUiState`] with the scroll and
//! keydown listener registrations it needs. Mounting registers both; dropping
//! the dispatcher unregisters both.

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::listeners::{EventSource, ListenerGuard, ListenerKind};
use super::state::{CommandUiState, DispatchSettings};
use crate::ui::viewmodel::NavbarView;
use std::cell::RefCell;
use std::rc::Rc;

/// Dispatcher bound to a host event source for its lifetime.
#[derive(Debug)]
pub struct CommandDispatcher<S: EventSource> {
    state: CommandUiState,
    _scroll: ListenerGuard<S>,
    _keydown: ListenerGuard<S>,
}

impl<S: EventSource> CommandDispatcher<S> {
    /// Mounts a dispatcher on `source` for a page showing `current_path`.
    pub fn mount(source: &Rc<RefCell<S>>, settings: DispatchSettings, current_path: &str) -> Self {
        tracing::debug!(path = %current_path, "mounting command dispatcher");
        Self {
            state: CommandUiState::new(settings, current_path),
            _scroll: ListenerGuard::register(source, ListenerKind::Scroll),
            _keydown: ListenerGuard::register(source, ListenerKind::KeyDown),
        }
    }

    /// Handles one event; see [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> (bool, Vec<Action>) {
        handle_event(&mut self.state, event)
    }

    #[must_use]
    pub const fn state(&self) -> &CommandUiState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> NavbarView {
        self.state.compute_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keys::{Key, KeyPress};
    use crate::app::listeners::ListenerRegistry;
    use crate::app::modes::SearchPanel;

    #[test]
    fn mount_and_unmount_balance_listeners() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));

        let dispatcher = CommandDispatcher::mount(&registry, DispatchSettings::default(), "/");
        assert!(registry.borrow().is_listening(ListenerKind::Scroll));
        assert!(registry.borrow().is_listening(ListenerKind::KeyDown));

        drop(dispatcher);
        assert_eq!(registry.borrow().active_count(), 0);
    }

    #[test]
    fn shortcut_twice_round_trips() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let mut dispatcher = CommandDispatcher::mount(&registry, DispatchSettings::default(), "/");
        let shortcut = Event::Key(KeyPress::meta(Key::Char('k')));

        assert_eq!(dispatcher.state().search_panel, SearchPanel::Closed);
        dispatcher.dispatch(&shortcut);
        assert_eq!(dispatcher.state().search_panel, SearchPanel::Open);
        dispatcher.dispatch(&shortcut);
        assert_eq!(dispatcher.state().search_panel, SearchPanel::Closed);
    }
}
