//! Seed loading for the moderation queue.
//!
//! The queue is hydrated once from a JSON document. Only the shape is checked
//! (through `serde`) plus id uniqueness; field contents are taken as is.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "applications": [
//!     {
//!       "id": "a1",
//!       "name": "Mira Okafor",
//!       "email": "mira@example.com",
//!       "businessName": "Okafor Prints",
//!       "phone": "+1 555 0100",
//!       "businessAddress": "12 Canal St, Portland",
//!       "taxId": "93-1234567",
//!       "avatarUrl": "https://example.com/avatars/a1.png",
//!       "submittedAt": "2024-03-05T10:00:00Z",
//!       "status": "pending"
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::{MarketplaceError, Result};
use crate::domain::Application;
use crate::moderation::collection::ApplicationCollection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed format version understood by this crate.
const SEED_VERSION: u32 = 1;

/// Seed bundled into the binary, used when no seed path is configured.
const BUNDLED_SEED: &str = include_str!("../../data/applications.json");

/// Top-level seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedFile {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    applications: Vec<Application>,
}

const fn default_version() -> u32 {
    SEED_VERSION
}

/// Parses a seed document.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the version is unsupported, or
/// ids repeat.
pub fn parse_seed(json: &str) -> Result<ApplicationCollection> {
    let seed: SeedFile = serde_json::from_str(json)?;

    if seed.version != SEED_VERSION {
        return Err(MarketplaceError::Seed(format!(
            "unsupported seed version {} (expected {SEED_VERSION})",
            seed.version
        )));
    }

    tracing::debug!(count = seed.applications.len(), "seed parsed");
    ApplicationCollection::new(seed.applications)
}

/// Reads and parses a seed file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_seed`] fails.
pub fn load_seed(path: &Path) -> Result<ApplicationCollection> {
    tracing::debug!(path = ?path, "loading seed");
    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// The seed compiled into the crate.
///
/// # Errors
///
/// Only fails if the bundled document itself is invalid.
pub fn bundled_seed() -> Result<ApplicationCollection> {
    parse_seed(BUNDLED_SEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApplicationStatus;

    #[test]
    fn bundled_seed_parses() {
        let seed = bundled_seed().unwrap();
        assert!(!seed.is_empty());
        assert!(seed.count_with_status(ApplicationStatus::Pending) > 0);
    }

    #[test]
    fn rejects_future_versions() {
        let err = parse_seed(r#"{"version": 2, "applications": []}"#).unwrap_err();
        assert!(matches!(err, MarketplaceError::Seed(_)));
    }

    #[test]
    fn missing_version_defaults_to_current() {
        let seed = parse_seed(r#"{"applications": []}"#).unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_seed("{ not json").unwrap_err();
        assert!(matches!(err, MarketplaceError::Json(_)));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"version": 1, "applications": [{
                "id": "a1", "name": "Mira", "email": "mira@example.com",
                "businessName": "", "phone": "", "businessAddress": "",
                "taxId": "", "submittedAt": "2024-01-01T00:00:00Z",
                "status": "approved"
            }]}"#,
        )
        .unwrap();

        let seed = load_seed(&path).unwrap();
        assert_eq!(seed.get("a1").unwrap().status, ApplicationStatus::Approved);
    }
}
