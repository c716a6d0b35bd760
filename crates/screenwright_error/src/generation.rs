//! Text generation error types.

/// Failure conditions reported by a text generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The backing service rejected or failed the request
    #[display("Generation service error: {}", _0)]
    Service(String),
    /// The service returned no usable text
    #[display("Generation returned an empty response")]
    EmptyResponse,
    /// The request could not be assembled
    #[display("Invalid generation request: {}", _0)]
    InvalidRequest(String),
}

/// Text generation error with location tracking.
///
/// # Examples
///
/// ```
/// use screenwright_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
