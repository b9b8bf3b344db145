//! Seller-application moderation.
//!
//! # Modules
//!
//! - [`badge`]: Status to badge category mapping
//! - [`collection`]: Id-keyed application snapshots with shared elements
//! - [`seed`]: JSON seed loading
//! - [`store`]: The guarded approve/reject workflow

pub mod badge;
pub mod collection;
pub mod seed;
pub mod store;

pub use badge::{classify, classify_label, BadgeCategory};
pub use collection::ApplicationCollection;
pub use seed::{bundled_seed, load_seed, parse_seed};
pub use store::ApplicationStatusStore;
