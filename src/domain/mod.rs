//! Domain layer for the moderation console.
//!
//! Core types independent of any host environment: seller applications and
//! their status machine, notifications, and the crate error type.
//!
//! # Organization
//!
//! - [`application`]: Application model, status enum, and decisions
//! - [`error`]: Error types and result aliases
//! - [`notification`]: Notification payloads
//!
//! # Examples
//!
//! ```
//! use artauction::domain::{Application, ApplicationStatus, Decision};
//!
//! let app = Application::new("a1", "Mira Okafor", "mira@example.com");
//! let next = app.status.decide(Decision::Approve).unwrap();
//! assert_eq!(next, ApplicationStatus::Approved);
//! ```

pub mod application;
pub mod error;
pub mod notification;

pub use application::{Application, ApplicationStatus, Decision};
pub use error::{MarketplaceError, Result};
pub use notification::{Notification, NotificationKind};
