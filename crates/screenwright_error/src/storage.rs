//! Project store error types.

/// Kinds of project store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// No project saved under the given name
    #[display("Project not found: {}", _0)]
    NotFound(String),
    /// Project name is empty or not usable as a key
    #[display("Invalid project name: {:?}", _0)]
    InvalidName(String),
    /// Store is unavailable
    #[display("Project store unavailable: {}", _0)]
    Unavailable(String),
}

/// Project store error with location tracking.
///
/// # Examples
///
/// ```
/// use screenwright_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("pilot".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
