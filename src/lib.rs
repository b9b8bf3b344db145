//! ArtAuction admin core: seller moderation and navbar command dispatch.
//!
//! The crate holds the control logic behind the storefront's admin screens:
//! - Guarded approve/reject workflow for seller applications
//! - Status badge classification that never fails on unknown labels
//! - Navbar state: scroll styling, mobile menu, active links
//! - Command palette with a global Ctrl/Cmd+K shortcut and fuzzy suggestions
//! - Search submission that navigates to the auction listing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console Host (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!            │                              │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Dispatcher (app/)        │   │ Moderation (moderation/) │
//! │ - Events → reducers      │   │ - Status store           │
//! │ - Actions for the host   │   │ - Badge classification   │
//! │ - Scoped listeners       │   │ - Seed loading           │
//! └──────────────────────────┘   └──────────────────────────┘
//!            │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Effects (effects/): Navigator, Notifier            │
//! │  Presentation (ui/): view models, text renderer     │
//! │  Domain (domain/): Application, errors              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The dispatcher and the moderation store share no state.
//!
//! # Modules
//!
//! - [`app`]: Command dispatcher with event/action model
//! - [`domain`]: Applications, notifications, errors
//! - [`effects`]: Navigation and notification seams
//! - [`infrastructure`]: Data directory and path helpers
//! - [`moderation`]: Application status store and badges
//! - [`observability`]: Tracing setup
//! - [`ui`]: View models and text rendering
//!
//! # Configuration
//!
//! Options come from `key=value` pairs, optionally layered over a TOML file
//! named by the `config` key:
//!
//! ```toml
//! trace_level = "debug"
//! log_file = "~/.local/share/artauction-admin/console.log"
//! seed_path = "./applications.json"
//! scroll_threshold = 10.0
//! search_route = "/auctions"
//! palette_suggestions = ["Impressionism", "Sculpture"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use artauction::effects::RecordingNotifier;
//! use artauction::{handle_event, initialize, Action, CommandUiState, Config, Event};
//!
//! let config = Config::default();
//! let notifier = RecordingNotifier::new();
//! let mut store = initialize(&config, notifier.clone())?;
//!
//! let first_pending = store
//!     .applications()
//!     .iter()
//!     .find(|app| !app.status.is_final())
//!     .map(|app| app.id.clone())
//!     .unwrap();
//! store.approve(&first_pending)?;
//! assert_eq!(notifier.delivered().len(), 1);
//!
//! let mut ui = CommandUiState::new(config.dispatch_settings(), "/");
//! handle_event(&mut ui, &Event::SearchInput("monet".into()));
//! let (_, actions) = handle_event(&mut ui, &Event::SubmitSearch);
//! assert_eq!(actions[0], Action::Navigate { path: "/auctions?search=monet".into() });
//! # Ok::<(), artauction::MarketplaceError>(())
//! ```

pub mod app;
pub mod domain;
pub mod effects;
pub mod infrastructure;
pub mod moderation;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, CommandDispatcher, CommandUiState, DispatchSettings, Event};
pub use domain::{Application, ApplicationStatus, MarketplaceError, Notification, Result};
pub use moderation::{ApplicationCollection, ApplicationStatusStore};

use app::palette::DEFAULT_SUGGESTIONS;
use app::routes::DEFAULT_SEARCH_ROUTE;
use app::state::DEFAULT_SCROLL_THRESHOLD;
use effects::Notifier;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Console configuration.
///
/// Every field has a default, so a partial TOML file or an empty argument map
/// is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log filter directive: `trace`, `debug`, `info`, `warn`, `error`, or a
    /// full `EnvFilter` string. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data dir>/artauction-admin.log`.
    pub log_file: Option<String>,

    /// Seed JSON for the moderation queue. Default: the bundled seed.
    pub seed_path: Option<String>,

    /// Scroll offset in pixels past which the navbar compacts. Default: 10.
    pub scroll_threshold: f64,

    /// Route receiving search queries. Must start with `/`. Default: `/auctions`.
    pub search_route: String,

    /// Command palette suggestions.
    pub palette_suggestions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            log_file: None,
            seed_path: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            search_route: DEFAULT_SEARCH_ROUTE.to_string(),
            palette_suggestions: DEFAULT_SUGGESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Parses configuration from a `key=value` map with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`, `log_file`, `seed_path`: taken as is
    /// - `scroll_threshold`: non-negative finite number, else default
    /// - `search_route`: must start with `/`, else default
    /// - `palette_suggestions`: comma-separated, empty items dropped
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use artauction::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("scroll_threshold".to_string(), "24".to_string());
    /// map.insert("search_route".to_string(), "catalog".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.scroll_threshold, 24.0);
    /// assert_eq!(config.search_route, "/auctions");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().with_overrides(map)
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// names a `search_route` without a leading `/`.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "reading configuration file");
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()
    }

    /// Loads `config=<file>` first if present, then applies the other keys.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Config::from_file`].
    pub fn load(map: &BTreeMap<String, String>) -> Result<Self> {
        let base = match map.get("config") {
            Some(path) => Self::from_file(Path::new(&infrastructure::expand_tilde(path)))?,
            None => Self::default(),
        };
        Ok(base.with_overrides(map))
    }

    /// Dispatcher tunables derived from this configuration.
    #[must_use]
    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            scroll_threshold: self.scroll_threshold,
            search_route: self.search_route.clone(),
            palette_suggestions: self.palette_suggestions.clone(),
        }
    }

    fn with_overrides(mut self, map: &BTreeMap<String, String>) -> Self {
        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone());
        }
        if let Some(file) = map.get("log_file") {
            self.log_file = Some(file.clone());
        }
        if let Some(seed) = map.get("seed_path") {
            self.seed_path = Some(seed.clone());
        }
        if let Some(threshold) = map
            .get("scroll_threshold")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
        {
            self.scroll_threshold = threshold;
        }
        if let Some(route) = map.get("search_route").filter(|r| r.starts_with('/')) {
            self.search_route = route.clone();
        }
        if let Some(list) = map.get("palette_suggestions") {
            let suggestions: Vec<String> = list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !suggestions.is_empty() {
                self.palette_suggestions = suggestions;
            }
        }
        self
    }

    fn validate(self) -> Result<Self> {
        if !self.search_route.starts_with('/') {
            return Err(MarketplaceError::Config(format!(
                "search_route must start with '/': {}",
                self.search_route
            )));
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(MarketplaceError::Config(format!(
                "scroll_threshold must be a non-negative number: {}",
                self.scroll_threshold
            )));
        }
        Ok(self)
    }
}

/// Hydrates the moderation store from the configured seed.
///
/// Uses `config.seed_path` when set, otherwise the bundled seed.
///
/// # Errors
///
/// Returns an error if the seed cannot be read or parsed.
pub fn initialize(config: &Config, notifier: impl Notifier + 'static) -> Result<ApplicationStatusStore> {
    tracing::debug!(seed_path = ?config.seed_path, "initializing moderation store");

    let applications = match &config.seed_path {
        Some(path) => moderation::load_seed(Path::new(&infrastructure::expand_tilde(path)))?,
        None => moderation::bundled_seed()?,
    };

    Ok(ApplicationStatusStore::new(applications, notifier))
}
