use std::cell::RefCell;
use std::rc::Rc;

use artauction::app::{Key, KeyPress, ListenerKind, ListenerRegistry, SearchPanel};
use artauction::effects::{Navigator, Notifier, RecordingNavigator, RecordingNotifier};
use artauction::{Action, CommandDispatcher, DispatchSettings, Event};

/// Minimal host: runs actions the way the console does.
struct Host {
    registry: Rc<RefCell<ListenerRegistry>>,
    dispatcher: CommandDispatcher<ListenerRegistry>,
    navigator: RecordingNavigator,
    notifier: RecordingNotifier,
}

impl Host {
    fn mount(path: &str) -> Self {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let dispatcher = CommandDispatcher::mount(&registry, DispatchSettings::default(), path);
        Self {
            registry,
            dispatcher,
            navigator: RecordingNavigator::new(),
            notifier: RecordingNotifier::new(),
        }
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = self.dispatcher.dispatch(&event);
        for action in actions {
            match action {
                Action::PreventDefault => {}
                Action::Navigate { path } => self.navigator.navigate(&path),
                Action::Notify(n) => self.notifier.notify(n),
            }
        }
        render
    }
}

#[test]
fn shortcut_opens_then_closes_palette() {
    let mut host = Host::mount("/");
    let shortcut = Event::Key(KeyPress::ctrl(Key::Char('k')));

    assert!(host.send(shortcut.clone()));
    assert_eq!(host.dispatcher.state().search_panel, SearchPanel::Open);
    assert!(host.dispatcher.view().search_open);

    host.send(shortcut);
    assert_eq!(host.dispatcher.state().search_panel, SearchPanel::Closed);
    assert!(host.navigator.history().is_empty());
}

#[test]
fn whitespace_search_has_no_effects() {
    let mut host = Host::mount("/");

    host.send(Event::SearchInput("   ".into()));
    host.send(Event::SubmitSearch);

    assert!(host.navigator.history().is_empty());
    assert!(host.notifier.delivered().is_empty());
}

#[test]
fn form_search_navigates_with_encoded_term() {
    let mut host = Host::mount("/");

    host.send(Event::SearchInput("van gogh".into()));
    host.send(Event::SubmitSearch);

    assert_eq!(
        host.navigator.history(),
        vec!["/auctions?search=van%20gogh".to_string()]
    );
    let delivered = host.notifier.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "Searching...");
}

#[test]
fn palette_selection_closes_then_searches() {
    let mut host = Host::mount("/");

    host.send(Event::OpenSearch);
    host.send(Event::PaletteInput("street".into()));
    assert_eq!(host.dispatcher.view().palette_entries, vec!["Street art".to_string()]);

    host.send(Event::PaletteSelect("Street art".into()));

    assert!(!host.dispatcher.view().search_open);
    assert_eq!(host.navigator.current().as_deref(), Some("/auctions?search=Street%20art"));
    assert_eq!(host.notifier.delivered()[0].title, "Search results");
}

#[test]
fn navigation_closes_mobile_menu_and_moves_active_link() {
    let mut host = Host::mount("/");

    host.send(Event::ToggleMobileMenu);
    assert!(host.dispatcher.view().mobile_menu_open);

    assert!(host.send(Event::RouteChanged { path: "/faqs".into() }));

    let view = host.dispatcher.view();
    assert!(!view.mobile_menu_open);
    let active: Vec<_> = view.links.iter().filter(|l| l.is_active).map(|l| l.path).collect();
    assert_eq!(active, vec!["/faqs"]);
}

#[test]
fn scroll_styling_tracks_offset() {
    let mut host = Host::mount("/");

    assert!(host.send(Event::Scrolled { offset_y: 120.0 }));
    assert!(host.dispatcher.view().scrolled);
    assert!(!host.send(Event::Scrolled { offset_y: 80.0 }));
    assert!(host.send(Event::Scrolled { offset_y: 0.0 }));
    assert!(!host.dispatcher.view().scrolled);
}

#[test]
fn unmounting_releases_listeners() {
    let host = Host::mount("/");
    let registry = Rc::clone(&host.registry);
    assert!(registry.borrow().is_listening(ListenerKind::Scroll));
    assert!(registry.borrow().is_listening(ListenerKind::KeyDown));

    drop(host);

    assert_eq!(registry.borrow().active_count(), 0);
}
