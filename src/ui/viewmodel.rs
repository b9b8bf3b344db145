//! View model types representing renderable UI state.
//!
//! View models are computed from the store snapshot and the dispatcher state
//! and carry no behaviour, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use artauction::domain::Application;
//! use artauction::ui::viewmodel::ApplicationCard;
//!
//! let app = Application::new("a1", "Mira Okafor", "mira@example.com");
//! let card = ApplicationCard::from_application(&app);
//! assert_eq!(card.status_label, "Pending");
//! assert!(card.can_moderate);
//! ```

use super::format::{capitalize, format_submitted};
use crate::domain::{Application, ApplicationStatus};
use crate::moderation::{classify, BadgeCategory};

/// One row of the seller-applications screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCard {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub business_name: String,
    pub phone: String,
    pub business_address: String,
    pub tax_id: String,
    /// Submission date as `M/D/YYYY`.
    pub submitted: String,
    /// Capitalized status, e.g. `Approved`.
    pub status_label: String,
    pub badge: BadgeCategory,
    /// Approve/reject buttons are only shown for pending applications.
    pub can_moderate: bool,
}

impl ApplicationCard {
    #[must_use]
    pub fn from_application(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            name: app.name.clone(),
            email: app.email.clone(),
            avatar_url: app.avatar_url.clone(),
            business_name: app.business_name.clone(),
            phone: app.phone.clone(),
            business_address: app.business_address.clone(),
            tax_id: app.tax_id.clone(),
            submitted: format_submitted(&app.submitted_at),
            status_label: capitalize(app.status.as_str()),
            badge: classify(app.status),
            can_moderate: app.status == ApplicationStatus::Pending,
        }
    }
}

/// A navbar link with its highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub path: &'static str,
    pub is_active: bool,
}

/// Everything the navbar needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    /// Compact, shadowed style once the page is scrolled.
    pub scrolled: bool,
    pub links: Vec<NavLinkView>,
    pub mobile_menu_open: bool,
    pub search_open: bool,
    pub search_query: String,
    pub palette_query: String,
    pub palette_entries: Vec<String>,
}
