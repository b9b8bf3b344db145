//! Error types for the moderation console.
//!
//! This module defines the centralized error type [`MarketplaceError`] and a type
//! alias [`Result`] used throughout the crate. All errors derive their `Error`
//! implementation through `thiserror`.

use crate::domain::application::ApplicationStatus;
use thiserror::Error;

/// The main error type for moderation and configuration operations.
///
/// Transition refusals (`ApplicationNotFound`, `NotPending`) leave the
/// application collection untouched. The remaining variants come from loading
/// seeds and configuration files.
///
/// # Examples
///
/// ```
/// use artauction::MarketplaceError;
///
/// let err = MarketplaceError::ApplicationNotFound { id: "a9".to_string() };
/// assert_eq!(err.to_string(), "Application not found: a9");
/// ```
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// No application with the given id exists in the collection.
    #[error("Application not found: {id}")]
    ApplicationNotFound {
        /// Id that was looked up.
        id: String,
    },

    /// The application already left the pending state.
    ///
    /// Approved and rejected are terminal; a second decision is refused instead
    /// of overwriting the first one.
    #[error("Application {id} is not pending (current status: {status})")]
    NotPending {
        /// Id of the finalized application.
        id: String,
        /// Status the application is locked into.
        status: ApplicationStatus,
    },

    /// Two applications in a seed share the same id.
    #[error("Duplicate application id: {id}")]
    DuplicateApplication {
        /// The repeated id.
        id: String,
    },

    /// Seed file is readable but unsupported.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for crate operations.
pub type Result<T> = std::result::Result<T, MarketplaceError>;
