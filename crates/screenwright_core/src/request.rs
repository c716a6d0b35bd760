//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// Which backing model a request should be routed to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    /// Low-latency model for short prompts
    #[display("fast")]
    Fast,
    /// Larger model for long prompts
    #[display("deep")]
    Deep,
}

impl ModelTier {
    /// Route a prompt by its length in characters.
    ///
    /// Prompts at or under `threshold` characters go to the fast model.
    ///
    /// # Examples
    ///
    /// ```
    /// use screenwright_core::ModelTier;
    ///
    /// assert_eq!(ModelTier::for_prompt("short", 300), ModelTier::Fast);
    /// assert_eq!(ModelTier::for_prompt(&"x".repeat(301), 300), ModelTier::Deep);
    /// ```
    pub fn for_prompt(prompt: &str, threshold: usize) -> Self {
        if prompt.chars().count() <= threshold {
            Self::Fast
        } else {
            Self::Deep
        }
    }
}

/// A single generation request.
///
/// # Examples
///
/// ```
/// use screenwright_core::{GenerateRequest, ModelTier};
///
/// let request = GenerateRequest::builder()
///     .system_instruction("You are a screenwriter.")
///     .user_prompt("Write scene 1.")
///     .model("llama-3.1-8b-instant")
///     .tier(ModelTier::Fast)
///     .temperature(0.7f32)
///     .max_output_tokens(512u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_output_tokens(), 512);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// System instruction for the model
    system_instruction: String,
    /// User prompt text
    user_prompt: String,
    /// Concrete model identifier
    model: String,
    /// Routing tier the model was chosen for
    tier: ModelTier,
    /// Sampling temperature
    temperature: f32,
    /// Output budget in tokens
    max_output_tokens: u32,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text returned by a generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text, uncleaned
    pub text: String,
}
