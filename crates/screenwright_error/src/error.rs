//! Top-level error wrapper types.

use crate::{ConfigError, ExportError, GenerationError, JsonError, ScriptError, StorageError};

/// Every error condition a Screenwright operation can surface.
///
/// # Examples
///
/// ```
/// use screenwright_error::{ScreenwrightError, JsonError};
///
/// let err: ScreenwrightError = JsonError::new("unexpected end of input").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScreenwrightErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Screenplay structure error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Text generation collaborator error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Project store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Document exporter error
    #[from(ExportError)]
    Export(ExportError),
}

/// Screenwright error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Screenwright Error: {}", _0)]
pub struct ScreenwrightError(Box<ScreenwrightErrorKind>);

impl ScreenwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ScreenwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScreenwrightErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScreenwrightErrorKind
impl<T> From<T> for ScreenwrightError
where
    T: Into<ScreenwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Screenwright operations.
pub type ScreenwrightResult<T> = std::result::Result<T, ScreenwrightError>;
