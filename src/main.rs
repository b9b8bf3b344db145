//! Console host for the admin core.
//!
//! Stands in for the browser: it owns the listener registry, the router, and
//! the toast channel, reads one command per line from stdin, forwards it to the
//! dispatcher or the moderation store, and runs whatever actions come back.
//!
//! # Usage
//!
//! ```text
//! artauction-admin [config=<file.toml>] [key=value ...] < script.txt
//! ```
//!
//! # Commands
//!
//! - `list`: show seller applications
//! - `approve <id>` / `reject <id>`: moderate an application
//! - `nav`: show navbar state
//! - `scroll <px>`: report a viewport offset
//! - `route <path>`: report a route change
//! - `key <combo>`: press a key, e.g. `key ctrl+k`
//! - `open` / `dismiss`: open or dismiss the command palette
//! - `menu`: toggle the mobile menu
//! - `type <text>`: set the navbar search box
//! - `submit`: submit the navbar search
//! - `palette <text>`: type into the palette filter
//! - `select <text>`: choose a palette entry
//! - `quit`: exit

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use artauction::app::{CommandDispatcher, Event, KeyPress, ListenerKind, ListenerRegistry};
use artauction::effects::{Navigator, Notifier, RecordingNavigator, TracingNotifier};
use artauction::ui::{render_applications, render_navbar};
use artauction::{Action, ApplicationStatusStore, Config, Notification};

/// Notifier that prints toasts and forwards them to the log.
#[derive(Debug, Clone, Copy, Default)]
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!(
            "  [{:?}] {}: {}",
            notification.kind, notification.title, notification.message
        );
        TracingNotifier.notify(notification);
    }
}

/// Parsed stdin command.
#[derive(Debug, PartialEq)]
enum Command {
    List,
    Approve(String),
    Reject(String),
    Nav,
    Dispatch(Event),
    Quit,
}

struct Host {
    listeners: Rc<RefCell<ListenerRegistry>>,
    dispatcher: CommandDispatcher<ListenerRegistry>,
    store: ApplicationStatusStore,
    navigator: RecordingNavigator,
    notifier: ConsoleNotifier,
}

impl Host {
    fn new(config: &Config) -> artauction::Result<Self> {
        let listeners = Rc::new(RefCell::new(ListenerRegistry::new()));
        let dispatcher = CommandDispatcher::mount(&listeners, config.dispatch_settings(), "/");
        let store = artauction::initialize(config, ConsoleNotifier)?;

        Ok(Self {
            listeners,
            dispatcher,
            store,
            navigator: RecordingNavigator::new(),
            notifier: ConsoleNotifier,
        })
    }

    fn run_line(&mut self, line: &str) -> bool {
        let Some(command) = parse_command(line) else {
            if !line.trim().is_empty() {
                println!("  unknown command: {}", line.trim());
            }
            return true;
        };

        match command {
            Command::Quit => return false,
            Command::List => print!("{}", render_applications(self.store.applications(), true)),
            Command::Nav => print!("{}", render_navbar(&self.dispatcher.view())),
            Command::Approve(id) => {
                if let Err(e) = self.store.approve(&id) {
                    println!("  {e}");
                }
            }
            Command::Reject(id) => {
                if let Err(e) = self.store.reject(&id) {
                    println!("  {e}");
                }
            }
            Command::Dispatch(event) => self.dispatch(event),
        }
        true
    }

    fn dispatch(&mut self, event: Event) {
        let required = match event {
            Event::Scrolled { .. } => Some(ListenerKind::Scroll),
            Event::Key(_) => Some(ListenerKind::KeyDown),
            _ => None,
        };
        if let Some(kind) = required {
            if !self.listeners.borrow().is_listening(kind) {
                tracing::debug!(?kind, "no listener registered, event dropped");
                return;
            }
        }

        let (should_render, actions) = self.dispatcher.dispatch(&event);
        tracing::debug!(action_count = actions.len(), should_render, "event handled");

        for action in actions {
            self.execute_action(action);
        }

        if should_render {
            print!("{}", render_navbar(&self.dispatcher.view()));
        }
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::PreventDefault => tracing::trace!("default key handling suppressed"),
            Action::Navigate { path } => {
                self.navigator.navigate(&path);
                println!("  -> {path}");
                let route = route_of(&path).to_string();
                self.dispatch(Event::RouteChanged { path: route });
            }
            Action::Notify(notification) => self.notifier.notify(notification),
        }
    }
}

/// Route part of a navigation target, without its query string.
fn route_of(target: &str) -> &str {
    target.split_once('?').map_or(target, |(route, _)| route)
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').map_or((line, ""), |(w, r)| (w, r.trim()));

    let command = match word {
        "list" => Command::List,
        "nav" => Command::Nav,
        "quit" | "exit" => Command::Quit,
        "approve" if !rest.is_empty() => Command::Approve(rest.to_string()),
        "reject" if !rest.is_empty() => Command::Reject(rest.to_string()),
        "scroll" => Command::Dispatch(Event::Scrolled {
            offset_y: rest.parse().ok()?,
        }),
        "route" if rest.starts_with('/') => Command::Dispatch(Event::RouteChanged {
            path: rest.to_string(),
        }),
        "key" => Command::Dispatch(Event::Key(KeyPress::parse(rest)?)),
        "open" => Command::Dispatch(Event::OpenSearch),
        "dismiss" => Command::Dispatch(Event::DismissSearch),
        "menu" => Command::Dispatch(Event::ToggleMobileMenu),
        "type" => Command::Dispatch(Event::SearchInput(rest.to_string())),
        "submit" => Command::Dispatch(Event::SubmitSearch),
        "palette" => Command::Dispatch(Event::PaletteInput(rest.to_string())),
        "select" => Command::Dispatch(Event::PaletteSelect(rest.to_string())),
        _ => return None,
    };
    Some(command)
}

fn parse_args() -> BTreeMap<String, String> {
    std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        })
        .collect()
}

fn main() {
    let args = parse_args();
    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("artauction-admin: {e}");
            std::process::exit(2);
        }
    };

    artauction::observability::init_tracing(&config);
    let _span = tracing::debug_span!("console").entered();

    let mut host = match Host::new(&config) {
        Ok(host) => host,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("artauction-admin: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", render_applications(host.store.applications(), true));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if !host.run_line(&line) {
            break;
        }
        let _ = io::stdout().flush();
    }

    tracing::debug!(
        visited = host.navigator.history().len(),
        pending = host.store.pending_count(),
        "console exiting"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use artauction::app::Key;

    fn host() -> Host {
        Host::new(&Config::default()).unwrap()
    }

    #[test]
    fn commands_need_their_arguments() {
        assert_eq!(parse_command("approve app-001"), Some(Command::Approve("app-001".into())));
        assert_eq!(parse_command("reject  app-004 "), Some(Command::Reject("app-004".into())));
        assert_eq!(parse_command("approve"), None);
        assert_eq!(parse_command("reject   "), None);
        assert_eq!(parse_command("scroll lots"), None);
        assert_eq!(parse_command("key hyper+k"), None);
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn routes_must_be_absolute() {
        assert_eq!(parse_command("route auctions"), None);
        assert_eq!(
            parse_command("route /auctions"),
            Some(Command::Dispatch(Event::RouteChanged { path: "/auctions".into() }))
        );
    }

    #[test]
    fn dispatch_commands_map_to_events() {
        assert_eq!(
            parse_command("scroll 12.5"),
            Some(Command::Dispatch(Event::Scrolled { offset_y: 12.5 }))
        );
        assert_eq!(
            parse_command("key ctrl+k"),
            Some(Command::Dispatch(Event::Key(KeyPress::ctrl(Key::Char('k')))))
        );
        assert_eq!(
            parse_command("type van gogh"),
            Some(Command::Dispatch(Event::SearchInput("van gogh".into())))
        );
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn route_of_strips_query() {
        assert_eq!(route_of("/auctions?search=van%20gogh"), "/auctions");
        assert_eq!(route_of("/faqs"), "/faqs");
    }

    #[test]
    fn search_from_open_menu_closes_it_after_navigation() {
        let mut host = host();

        assert!(host.run_line("menu"));
        assert!(host.dispatcher.state().mobile_menu_open);

        host.run_line("type monet");
        host.run_line("submit");

        assert_eq!(host.navigator.current().as_deref(), Some("/auctions?search=monet"));
        assert_eq!(host.dispatcher.state().current_path, "/auctions");
        assert!(!host.dispatcher.state().mobile_menu_open);
    }

    #[test]
    fn scroll_and_keys_need_a_listener() {
        let mut host = host();
        host.listeners = Rc::new(RefCell::new(ListenerRegistry::new()));

        host.run_line("scroll 200");
        host.run_line("key ctrl+k");

        assert!(!host.dispatcher.state().scrolled);
        assert!(!host.dispatcher.state().search_panel.is_open());

        host.run_line("open");
        assert!(host.dispatcher.state().search_panel.is_open());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut host = host();
        assert!(host.run_line("nav"));
        assert!(host.run_line("nonsense"));
        assert!(!host.run_line("quit"));
    }
}
