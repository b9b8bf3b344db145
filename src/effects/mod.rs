//! Side channels consumed by the core.
//!
//! The core never delivers toasts or changes routes itself. It talks to the
//! host through two narrow traits:
//!
//! - [`Notifier`]: fire-and-forget notification delivery
//! - [`Navigator`]: route changes
//!
//! Both return `()`: the core observes nothing back, so a slow or broken
//! delivery channel cannot fail a transition.
//!
//! Recording implementations are provided for hosts that want to inspect or
//! replay what was emitted (and for tests).

pub mod navigator;
pub mod notifier;

pub use navigator::{Navigator, RecordingNavigator};
pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
