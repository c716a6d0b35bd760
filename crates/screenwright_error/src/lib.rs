//! Error types for the Screenwright toolkit.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use screenwright_error::{ScreenwrightResult, ConfigError};
//!
//! fn load() -> ScreenwrightResult<String> {
//!     Err(ConfigError::new("temperature out of range"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod export;
mod generation;
mod json;
mod script;
mod storage;

pub use config::ConfigError;
pub use error::{ScreenwrightError, ScreenwrightErrorKind, ScreenwrightResult};
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use script::{ScriptError, ScriptErrorKind};
pub use storage::{StorageError, StorageErrorKind};
