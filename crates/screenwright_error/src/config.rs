//! Configuration error types.

/// A configuration source could not be read, parsed or validated.
///
/// Raised while layering `screenwright.toml` files and by
/// `GenerationSettings::validate` for out-of-range values.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the configuration
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl ConfigError {
    /// Describe a configuration problem, recording the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenwright_error::ConfigError;
    ///
    /// let err = ConfigError::new("max_output_tokens must be positive");
    /// assert!(err.message.contains("max_output_tokens"));
    /// assert!(err.file.ends_with(".rs"));
    /// ```
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
