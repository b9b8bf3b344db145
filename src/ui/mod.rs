//! Presentation layer: view models and a plain-text renderer.
//!
//! ```text
//! Store snapshot / CommandUiState → view models → render_* → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready structs for cards and the navbar
//! - [`format`]: Date, number, and label formatting
//! - [`renderer`]: Text output used by the console host

pub mod format;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_applications, render_navbar};
pub use viewmodel::{ApplicationCard, NavLinkView, NavbarView};
