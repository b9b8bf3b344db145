//! Status to badge category mapping.
//!
//! Pure and total: every status maps to a category, and labels that do not
//! name a known status fall back to [`BadgeCategory::Neutral`] instead of
//! failing.

use crate::domain::ApplicationStatus;

/// Colour group a status badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeCategory {
    /// Yellow; awaiting action.
    Warning,
    /// Green.
    Success,
    /// Red.
    Error,
    /// Gray; anything unrecognised.
    Neutral,
}

impl BadgeCategory {
    /// ANSI SGR foreground code used by the text renderer.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Warning => "33",
            Self::Success => "32",
            Self::Error => "31",
            Self::Neutral => "90",
        }
    }
}

/// Maps a status to its badge category.
#[must_use]
pub const fn classify(status: ApplicationStatus) -> BadgeCategory {
    match status {
        ApplicationStatus::Pending => BadgeCategory::Warning,
        ApplicationStatus::Approved => BadgeCategory::Success,
        ApplicationStatus::Rejected => BadgeCategory::Error,
    }
}

/// Maps a raw status label to its badge category.
///
/// Matching is exact on the lowercase labels; everything else is `Neutral`.
///
/// # Examples
///
/// ```
/// use artauction::moderation::{classify_label, BadgeCategory};
///
/// assert_eq!(classify_label("pending"), BadgeCategory::Warning);
/// assert_eq!(classify_label("archived"), BadgeCategory::Neutral);
/// ```
#[must_use]
pub fn classify_label(label: &str) -> BadgeCategory {
    match label {
        "pending" => classify(ApplicationStatus::Pending),
        "approved" => classify(ApplicationStatus::Approved),
        "rejected" => classify(ApplicationStatus::Rejected),
        _ => BadgeCategory::Neutral,
    }
}
