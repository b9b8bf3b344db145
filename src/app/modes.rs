//! Search surface state machine.
//!
//! The command palette is either [`SearchPanel::Closed`] or
//! [`SearchPanel::Open`]. There is no terminal state: the machine lives as
//! long as the page.
//!
//! ```text
//!            open / shortcut
//!   Closed ───────────────────▶ Open
//!     ▲                          │
//!     └──────────────────────────┘
//!      select / dismiss / shortcut
//! ```

/// Visibility of the command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPanel {
    #[default]
    Closed,
    Open,
}

impl SearchPanel {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The opposite state, as used by the keyboard shortcut.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}
