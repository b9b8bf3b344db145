//! Seller application domain model.
//!
//! An [`Application`] is a request from a user to start selling on the
//! marketplace. Its [`ApplicationStatus`] moves one way only: from
//! `Pending` to either `Approved` or `Rejected`, both of which are terminal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation status of a seller application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Awaiting an operator decision.
    Pending,
    /// Accepted; the applicant may sell.
    Approved,
    /// Declined.
    Rejected,
}

/// Operator decision applied to a pending application.
///
/// Only the two outcomes are representable, so a transition back to
/// `Pending` cannot be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Move to [`ApplicationStatus::Approved`].
    Approve,
    /// Move to [`ApplicationStatus::Rejected`].
    Reject,
}

impl Decision {
    /// Status the decision leads to.
    #[must_use]
    pub const fn target(self) -> ApplicationStatus {
        match self {
            Self::Approve => ApplicationStatus::Approved,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }
}

impl ApplicationStatus {
    /// Lowercase label as used in seeds and badges.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether no further decision can be applied.
    #[must_use]
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Applies a decision to the current status.
    ///
    /// Returns the new status when the current one is `Pending`. A finalized
    /// status is handed back unchanged in the `Err` arm.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the status is already `Approved` or `Rejected`.
    ///
    /// # Examples
    ///
    /// ```
    /// use artauction::domain::{ApplicationStatus, Decision};
    ///
    /// assert_eq!(
    ///     ApplicationStatus::Pending.decide(Decision::Approve),
    ///     Ok(ApplicationStatus::Approved)
    /// );
    /// assert_eq!(
    ///     ApplicationStatus::Rejected.decide(Decision::Approve),
    ///     Err(ApplicationStatus::Rejected)
    /// );
    /// ```
    pub const fn decide(self, decision: Decision) -> Result<Self, Self> {
        match self {
            Self::Pending => Ok(decision.target()),
            Self::Approved | Self::Rejected => Err(self),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seller moderation request.
///
/// Profile fields are display-only. Field names follow the camelCase shape of
/// the storefront's data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub email: String,
    pub business_name: String,
    pub phone: String,
    pub business_address: String,
    pub tax_id: String,
    #[serde(default)]
    pub avatar_url: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: ApplicationStatus,
}

const fn default_status() -> ApplicationStatus {
    ApplicationStatus::Pending
}

impl Application {
    /// Creates a pending application submitted now.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            business_name: String::new(),
            phone: String::new(),
            business_address: String::new(),
            tax_id: String::new(),
            avatar_url: String::new(),
            submitted_at: Utc::now(),
            status: ApplicationStatus::Pending,
        }
    }

    /// Returns a copy carrying `status`; every other field is cloned as is.
    #[must_use]
    pub fn with_status(&self, status: ApplicationStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Short identifying text used in notifications: `Name <email>`.
    #[must_use]
    pub fn display_identity(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_accepts_either_decision() {
        assert_eq!(
            ApplicationStatus::Pending.decide(Decision::Approve),
            Ok(ApplicationStatus::Approved)
        );
        assert_eq!(
            ApplicationStatus::Pending.decide(Decision::Reject),
            Ok(ApplicationStatus::Rejected)
        );
    }

    #[test]
    fn finalized_statuses_refuse_every_decision() {
        for status in [ApplicationStatus::Approved, ApplicationStatus::Rejected] {
            for decision in [Decision::Approve, Decision::Reject] {
                assert_eq!(status.decide(decision), Err(status));
            }
            assert!(status.is_final());
        }
        assert!(!ApplicationStatus::Pending.is_final());
    }

    #[test]
    fn deserializes_storefront_shape() {
        let json = r#"{
            "id": "a1",
            "name": "Mira Okafor",
            "email": "mira@example.com",
            "businessName": "Okafor Prints",
            "phone": "+1 555 0100",
            "businessAddress": "12 Canal St",
            "taxId": "TX-1",
            "avatarUrl": "https://example.com/a1.png",
            "submittedAt": "2024-03-05T10:00:00Z"
        }"#;

        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.business_name, "Okafor Prints");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.display_identity(), "Mira Okafor <mira@example.com>");
    }

    #[test]
    fn unknown_status_label_is_rejected_by_serde() {
        let result: Result<ApplicationStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }
}
