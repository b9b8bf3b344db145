//! Command dispatcher: navbar state, search surface, and input routing.
//!
//! This layer sits between the host (browser shim or console) and the
//! navigation/notification collaborators. It turns raw input into state
//! changes and a list of effects for the host to run.
//!
//! # Architecture
//!
//! ```text
//! Host Input → Event → handle_event → CommandUiState reducers → Actions → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Effects returned to the host
//! - [`dispatcher`]: Mounted dispatcher owning its listener registrations
//! - [`handler`]: Event processing and the search pipeline
//! - [`keys`]: Key presses and the palette shortcut
//! - [`listeners`]: Scoped listener registration
//! - [`modes`]: Search panel state machine
//! - [`palette`]: Fuzzy filtering of palette suggestions
//! - [`routes`]: Navigation links and search URLs
//! - [`state`]: UI state container and reducers

pub mod actions;
pub mod dispatcher;
pub mod handler;
pub mod keys;
pub mod listeners;
pub mod modes;
pub mod palette;
pub mod routes;
pub mod state;

pub use actions::Action;
pub use dispatcher::CommandDispatcher;
pub use handler::{handle_event, Event};
pub use keys::{Key, KeyPress, Modifiers};
pub use listeners::{EventSource, ListenerGuard, ListenerKind, ListenerRegistry};
pub use modes::SearchPanel;
pub use state::{CommandUiState, DispatchSettings};
