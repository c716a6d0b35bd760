//! Story metadata collected from the writer.

use serde::{Deserialize, Serialize};

/// Free-text story settings used when assembling prompts.
///
/// Every field is optional; empty fields are left out of prompts or replaced
/// with a sensible default.
///
/// # Examples
///
/// ```
/// use screenwright_core::StoryMetadata;
///
/// let metadata = StoryMetadata::builder()
///     .title("Night Shift")
///     .genre("Thriller")
///     .build()
///     .unwrap();
///
/// assert_eq!(metadata.title(), "Night Shift");
/// assert!(metadata.tone().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct StoryMetadata {
    /// Title or one-line idea
    title: String,
    /// Genre
    genre: String,
    /// Tone or style
    tone: String,
    /// Principal characters
    characters: String,
    /// Setting
    setting: String,
    /// Free-form notes
    notes: String,
    /// Prose style for the screenplay
    writing_style: String,
    /// Trend or viral format for social shorts
    trend_style: String,
}

impl StoryMetadata {
    /// Creates a new metadata builder.
    pub fn builder() -> StoryMetadataBuilder {
        StoryMetadataBuilder::default()
    }
}
