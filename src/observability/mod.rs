//! Logging setup with file-based output.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter (rotating) → log file
//! ```
//!
//! # Features
//!
//! - **File Output**: Plain text lines, no ANSI colours
//! - **Automatic Rotation**: Size-based, with bounded backup retention
//!
//! # Configuration
//!
//! Level is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in [`crate::Config`]
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
