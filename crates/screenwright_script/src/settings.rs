//! Generation settings and layered configuration loading.

use config::{Config, File, FileFormat};
use screenwright_core::{ModelTier, ScriptMode};
use screenwright_error::{ConfigError, ScreenwrightError, ScreenwrightResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../screenwright.toml");

/// Knobs for talking to the text generation collaborator.
///
/// # Examples
///
/// ```
/// use screenwright_core::ModelTier;
/// use screenwright_script::GenerationSettings;
///
/// let settings = GenerationSettings::default();
/// assert_eq!(*settings.routing_threshold(), 300);
/// assert_eq!(settings.tier_for("Write scene 1."), ModelTier::Fast);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerationSettings {
    /// Model used for prompts at or under the routing threshold
    fast_model: String,
    /// Model used for longer prompts
    deep_model: String,
    /// Prompt length, in characters, above which the deep model is used
    routing_threshold: usize,
    /// Sampling temperature
    temperature: f32,
    /// Output budget per request
    max_output_tokens: u32,
    /// How much trailing draft text is sent as context
    prompt_tail_chars: usize,
    /// Chat transcript bound
    transcript_limit: usize,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            fast_model: "llama-3.1-8b-instant".to_string(),
            deep_model: "llama-3.3-70b-versatile".to_string(),
            routing_threshold: 300,
            temperature: 0.7,
            max_output_tokens: 512,
            prompt_tail_chars: 4000,
            transcript_limit: 80,
        }
    }
}

impl GenerationSettings {
    /// Route a prompt to a tier by its length.
    pub fn tier_for(&self, prompt: &str) -> ModelTier {
        ModelTier::for_prompt(prompt, self.routing_threshold)
    }

    /// Model identifier configured for a tier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Deep => &self.deep_model,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Override the output budget.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Override the chat transcript bound.
    pub fn with_transcript_limit(mut self, transcript_limit: usize) -> Self {
        self.transcript_limit = transcript_limit;
        self
    }

    /// Check that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid setting.
    pub fn validate(&self) -> ScreenwrightResult<()> {
        if self.fast_model.trim().is_empty() || self.deep_model.trim().is_empty() {
            return Err(ConfigError::new("Model names must not be empty").into());
        }
        if !(self.temperature > 0.0 && self.temperature <= 2.0) {
            return Err(ConfigError::new(format!(
                "Temperature must be in (0.0, 2.0], got {}",
                self.temperature
            ))
            .into());
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::new("max_output_tokens must be positive").into());
        }
        if self.prompt_tail_chars == 0 {
            return Err(ConfigError::new("prompt_tail_chars must be positive").into());
        }
        if self.transcript_limit == 0 {
            return Err(ConfigError::new("transcript_limit must be positive").into());
        }
        Ok(())
    }
}

/// Top-level configuration file contents.
///
/// ```toml
/// mode = "short_film"
///
/// [generation]
/// fast_model = "llama-3.1-8b-instant"
/// routing_threshold = 300
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StudioConfig {
    /// Script mode new sessions start in
    #[serde(default)]
    mode: ScriptMode,
    /// Generation settings
    generation: GenerationSettings,
}

impl StudioConfig {
    /// Load configuration with precedence: explicit file > current dir > home dir > bundled defaults.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (`screenwright.toml` shipped with the library)
    /// 2. User config in home directory (`~/.config/screenwright/screenwright.toml`)
    /// 3. User config in current directory (`./screenwright.toml`)
    /// 4. `explicit`, when given (must exist)
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or the result fails validation.
    #[instrument(skip(explicit), fields(explicit = ?explicit.map(Path::display)))]
    pub fn load(explicit: Option<&Path>) -> ScreenwrightResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/screenwright/screenwright.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("screenwright").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    /// Load configuration from a single file layered over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScreenwrightResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ScreenwrightResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                ScreenwrightError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScreenwrightError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.generation.validate()?;
        debug!(mode = %config.mode, fast_model = %config.generation.fast_model, "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_default_impl() {
        let config: StudioConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(GenerationSettings::default().validate().is_ok());
        assert!(
            GenerationSettings::default()
                .with_temperature(0.0)
                .validate()
                .is_err()
        );
        assert!(
            GenerationSettings::default()
                .with_temperature(2.5)
                .validate()
                .is_err()
        );
        assert!(
            GenerationSettings::default()
                .with_max_output_tokens(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_model_for_tier() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model_for(ModelTier::Fast), "llama-3.1-8b-instant");
        assert_eq!(settings.model_for(ModelTier::Deep), "llama-3.3-70b-versatile");
    }
}
