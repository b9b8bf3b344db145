//! Guarded status transitions over the moderation queue.
//!
//! [`ApplicationStatusStore`] owns the current [`ApplicationCollection`] and is
//! the only place it changes. Each successful transition swaps in a whole new
//! snapshot and sends one notification through the configured [`Notifier`].
//!
//! # Transition Rules
//!
//! | current    | approve    | reject     |
//! |------------|------------|------------|
//! | `pending`  | `approved` | `rejected` |
//! | `approved` | refused    | refused    |
//! | `rejected` | refused    | refused    |
//!
//! Refused transitions return [`MarketplaceError::NotPending`] and emit no
//! notification. Unknown ids return [`MarketplaceError::ApplicationNotFound`].
//!
//! # Example
//!
//! ```rust
//! use artauction::domain::{Application, ApplicationStatus};
//! use artauction::effects::RecordingNotifier;
//! use artauction::moderation::{ApplicationCollection, ApplicationStatusStore};
//!
//! let seed = ApplicationCollection::new(vec![
//!     Application::new("a1", "Mira Okafor", "mira@example.com"),
//! ])?;
//! let notifier = RecordingNotifier::new();
//! let mut store = ApplicationStatusStore::new(seed, notifier.clone());
//!
//! let updated = store.approve("a1")?;
//! assert_eq!(updated.get("a1").unwrap().status, ApplicationStatus::Approved);
//! assert_eq!(notifier.delivered().len(), 1);
//! # Ok::<(), artauction::MarketplaceError>(())
//! ```

use crate::domain::error::{MarketplaceError, Result};
use crate::domain::{Application, ApplicationStatus, Decision, Notification};
use crate::effects::Notifier;
use crate::moderation::collection::ApplicationCollection;
use std::sync::Arc;

/// Owner of the moderation queue.
pub struct ApplicationStatusStore {
    applications: ApplicationCollection,
    notifier: Box<dyn Notifier>,
}

impl ApplicationStatusStore {
    /// Creates a store hydrated with `applications`.
    pub fn new(applications: ApplicationCollection, notifier: impl Notifier + 'static) -> Self {
        tracing::debug!(
            total = applications.len(),
            pending = applications.count_with_status(ApplicationStatus::Pending),
            "moderation store hydrated"
        );

        Self {
            applications,
            notifier: Box::new(notifier),
        }
    }

    /// Current snapshot. Cheap: elements are shared.
    #[must_use]
    pub fn snapshot(&self) -> ApplicationCollection {
        self.applications.clone()
    }

    #[must_use]
    pub const fn applications(&self) -> &ApplicationCollection {
        &self.applications
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Application>> {
        self.applications.get(id)
    }

    /// Applications still awaiting a decision.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.applications.count_with_status(ApplicationStatus::Pending)
    }

    /// Approves a pending application.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn approve(&mut self, id: &str) -> Result<ApplicationCollection> {
        self.transition(id, Decision::Approve)
    }

    /// Rejects a pending application.
    ///
    /// # Errors
    ///
    /// See [`Self::transition`].
    pub fn reject(&mut self, id: &str) -> Result<ApplicationCollection> {
        self.transition(id, Decision::Reject)
    }

    /// Applies `decision` to the application with `id`.
    ///
    /// On success the store holds, and returns, a new snapshot in which only
    /// that application changed. A success notification is sent on approve, an
    /// error notification on reject.
    ///
    /// # Errors
    ///
    /// - [`MarketplaceError::ApplicationNotFound`] if no application has `id`
    /// - [`MarketplaceError::NotPending`] if the application is already final
    ///
    /// In both cases the collection is left untouched and nothing is sent.
    pub fn transition(&mut self, id: &str, decision: Decision) -> Result<ApplicationCollection> {
        let _span = tracing::debug_span!("transition", id = %id, decision = ?decision).entered();

        let found = self
            .applications
            .position(id)
            .and_then(|index| self.applications.at(index).map(|app| (index, app)));
        let Some((index, current)) = found else {
            tracing::warn!(id = %id, "transition requested for unknown application");
            return Err(MarketplaceError::ApplicationNotFound { id: id.to_string() });
        };

        let next = current.status.decide(decision).map_err(|status| {
            tracing::warn!(id = %id, status = %status, "refusing transition of finalized application");
            MarketplaceError::NotPending {
                id: id.to_string(),
                status,
            }
        })?;

        let updated = current.with_status(next);
        let notification = Self::notification_for(decision, &updated);

        self.applications = self.applications.replaced(index, updated);
        tracing::debug!(status = %next, "application transitioned");

        self.notifier.notify(notification);

        Ok(self.applications.clone())
    }

    fn notification_for(decision: Decision, application: &Application) -> Notification {
        match decision {
            Decision::Approve => Notification::success(
                "Application approved successfully",
                format!("{} can now sell on the marketplace", application.display_identity()),
            ),
            Decision::Reject => Notification::error(
                "Application rejected",
                format!("{} was not approved", application.display_identity()),
            ),
        }
    }
}

impl std::fmt::Debug for ApplicationStatusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationStatusStore")
            .field("applications", &self.applications)
            .finish_non_exhaustive()
    }
}
