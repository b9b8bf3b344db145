//! Navigation seam.

use std::cell::RefCell;
use std::rc::Rc;

/// Route-change service provided by the host.
pub trait Navigator {
    /// Moves the browsing session to `path` (path plus optional query string).
    fn navigate(&mut self, path: &str);
}

/// Records requested paths instead of routing.
///
/// Clones share the history buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path navigated to, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Most recent path, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path = %path, "navigating");
        self.history.borrow_mut().push(path.to_string());
    }
}
