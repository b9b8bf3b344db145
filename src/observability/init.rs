//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name used under the data directory when no log file is configured.
const DEFAULT_LOG_FILE: &str = "artauction-admin.log";

/// Initializes the tracing subscriber with a rotating log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters by `RUST_LOG` if set, else `config.trace_level`, else `"info"`
/// 2. Formats events as plain text lines without ANSI colours
/// 3. Writes them through a rotating [`FileWriter`]
///
/// # File Location
///
/// `config.log_file` if set (tilde expanded), otherwise
/// `<data dir>/artauction-admin.log`.
///
/// # Initialization Behavior
///
/// - Creates the log directory if needed
/// - Silently returns if that fails; logging is optional
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use artauction::observability::init_tracing;
/// use artauction::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     log_file: Some(dir.path().join("console.log").display().to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_path = resolve_log_path(config);
    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(log_path));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}

fn resolve_log_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || crate::infrastructure::paths::get_data_dir().join(DEFAULT_LOG_FILE),
        |path| PathBuf::from(crate::infrastructure::paths::expand_tilde(path)),
    )
}
