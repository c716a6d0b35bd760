//! JSON error types.

/// Failure to encode or decode JSON output, such as the CLI's block listing.
///
/// # Examples
///
/// ```
/// use screenwright_error::{JsonError, ScreenwrightError, ScreenwrightErrorKind};
///
/// let err: ScreenwrightError = JsonError::new("key must be a string").into();
/// match err.kind() {
///     ScreenwrightErrorKind::Json(json) => assert_eq!(json.message, "key must be a string"),
///     other => panic!("unexpected kind: {other}"),
/// }
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Message from the serializer
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl JsonError {
    /// Wrap a serializer message, recording the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
