//! Ordered, id-keyed collection of seller applications.
//!
//! Elements are reference counted so that replacing one application produces
//! a new collection whose other elements are the very same allocations as
//! before. Readers holding an older snapshot never observe a partial update.

use crate::domain::error::{MarketplaceError, Result};
use crate::domain::{Application, ApplicationStatus};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable snapshot of the moderation queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationCollection {
    items: Vec<Arc<Application>>,
}

impl ApplicationCollection {
    /// Builds a collection, keeping the input order.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::DuplicateApplication`] if two applications
    /// share an id.
    pub fn new(applications: Vec<Application>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(applications.len());
        for app in &applications {
            if !seen.insert(app.id.as_str()) {
                return Err(MarketplaceError::DuplicateApplication { id: app.id.clone() });
            }
        }

        Ok(Self {
            items: applications.into_iter().map(Arc::new).collect(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Application>> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Application>> {
        self.items.iter().find(|app| app.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|app| app.id == id)
    }

    /// Element at `index`, as returned by [`Self::position`].
    #[must_use]
    pub(crate) fn at(&self, index: usize) -> Option<&Arc<Application>> {
        self.items.get(index)
    }

    /// Number of applications currently in `status`.
    #[must_use]
    pub fn count_with_status(&self, status: ApplicationStatus) -> usize {
        self.items.iter().filter(|app| app.status == status).count()
    }

    /// Returns a new collection with the element at `index` swapped for
    /// `application`. All other elements are shared with `self`.
    pub(crate) fn replaced(&self, index: usize, application: Application) -> Self {
        let mut fresh = Some(Arc::new(application));
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(i, existing)| {
                let slot = if i == index { fresh.take() } else { None };
                slot.unwrap_or_else(|| Arc::clone(existing))
            })
            .collect();

        Self { items }
    }
}

impl<'a> IntoIterator for &'a ApplicationCollection {
    type Item = &'a Arc<Application>;
    type IntoIter = std::slice::Iter<'a, Arc<Application>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
