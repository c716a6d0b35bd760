//! Screenplay structure error types.

/// Structural defects found in a block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Dialogue block with no owning character cue
    #[display("Dialogue block at index {} has no preceding character cue", index)]
    OrphanDialogue {
        /// Position of the offending block in the sequence
        index: usize,
    },
    /// Failed to read screenplay source text
    #[display("Failed to read screenplay source: {}", _0)]
    SourceRead(String),
}

/// Error type for screenplay structure problems.
///
/// # Examples
///
/// ```
/// use screenwright_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::OrphanDialogue { index: 2 });
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
