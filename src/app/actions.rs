//! Side effects requested by the dispatcher.
//!
//! [`handle_event`](crate::app::handle_event) returns a `Vec<Action>` per
//! event. The host runs them in order, which is how the palette search
//! guarantees the panel is closed before navigation happens: the state change
//! is applied inside the handler, and only then are the effects returned.

use crate::domain::Notification;

/// Commands the host executes on behalf of the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Suppress the browser's default handling of the triggering key event.
    ///
    /// Emitted for the palette shortcut so the browser's own Ctrl+K binding
    /// never fires.
    PreventDefault,

    /// Change route.
    Navigate {
        /// Path including the query string.
        path: String,
    },

    /// Show a toast.
    Notify(Notification),
}
