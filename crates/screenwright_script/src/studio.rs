//! Generation workflow over a text generation collaborator.
//!
//! The studio turns a writer action into one prompt, routes it to a model
//! tier, sends it, cleans the reply and folds it back into the session. Only
//! one request is in flight at a time; failures are returned to the caller
//! without retry.

use crate::{
    GenerationSettings, SOCIAL_SYSTEM_PROMPT, SYSTEM_PROMPT, SessionState, clean_response,
    continuation_prompt, first_scene_prompt, outline_prompt, plan_continuation,
    script_doctor_prompt, social_prompt,
};
use screenwright_core::{
    ContinuationPlan, GenerateRequest, ModelTier, ProjectRecord, ScriptMode, StoryMetadata,
};
use screenwright_error::{GenerationError, GenerationErrorKind, ScreenwrightResult};
use screenwright_interface::{DocumentExporter, ProjectStore, TextGenerator};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A fully assembled request for the next unit of a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPrompt {
    /// System instruction for the mode
    pub system_instruction: &'static str,
    /// User prompt text
    pub user_prompt: String,
    /// Tier the prompt routes to
    pub tier: ModelTier,
    /// Model configured for that tier
    pub model: String,
    /// Plan the prompt was built from
    pub plan: ContinuationPlan,
    /// Short label recorded in the transcript
    pub label: &'static str,
}

/// Assemble the prompt for the next unit of the session's draft.
///
/// Social shorts ask for the next variation. Short films ask for scene 1 when
/// the draft is empty and for the planned next scene or beat otherwise.
pub fn prepare_continuation(
    session: &SessionState,
    settings: &GenerationSettings,
) -> PreparedPrompt {
    prepare_for_mode(session, session.mode, settings)
}

fn prepare_for_mode(
    session: &SessionState,
    mode: ScriptMode,
    settings: &GenerationSettings,
) -> PreparedPrompt {
    let outline = session.story_outline.as_deref();
    let plan = plan_continuation(&session.blocks(), mode, outline);
    let tail = *settings.prompt_tail_chars();

    let (system_instruction, user_prompt, label) = match mode {
        ScriptMode::SocialShort => (
            SOCIAL_SYSTEM_PROMPT,
            social_prompt(&session.metadata, &plan, &session.draft, tail),
            "Generate next social variation",
        ),
        ScriptMode::ShortFilm if session.draft.trim().is_empty() => (
            SYSTEM_PROMPT,
            first_scene_prompt(&session.metadata, &plan, outline),
            "Generate scene 1",
        ),
        ScriptMode::ShortFilm => (
            SYSTEM_PROMPT,
            continuation_prompt(&session.draft, &plan, outline, tail),
            "Generate next scene",
        ),
    };

    let tier = settings.tier_for(&user_prompt);
    PreparedPrompt {
        system_instruction,
        model: settings.model_for(tier).to_string(),
        user_prompt,
        tier,
        plan,
        label,
    }
}

/// Drives a [`TextGenerator`] on behalf of a writing session.
pub struct Studio<G: TextGenerator> {
    generator: G,
    settings: GenerationSettings,
}

impl<G: TextGenerator> Studio<G> {
    /// Create a studio with the given generator and settings.
    pub fn new(generator: G, settings: GenerationSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// The active generation settings.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// The underlying generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Start an empty session using the configured transcript limit.
    pub fn new_session(&self, metadata: StoryMetadata, mode: ScriptMode) -> SessionState {
        SessionState::with_settings(metadata, mode, &self.settings)
    }

    /// Send one prompt and return the cleaned reply.
    async fn request(&self, system_instruction: &str, prompt: String) -> ScreenwrightResult<String> {
        let tier = self.settings.tier_for(&prompt);
        let model = self.settings.model_for(tier).to_string();

        let request = GenerateRequest::builder()
            .system_instruction(system_instruction)
            .user_prompt(prompt)
            .model(model)
            .tier(tier)
            .temperature(*self.settings.temperature())
            .max_output_tokens(*self.settings.max_output_tokens())
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::InvalidRequest(e.to_string())))?;

        debug!(
            provider = self.generator.provider_name(),
            model = %request.model(),
            %tier,
            prompt_len = request.user_prompt().len(),
            "Sending generation request"
        );

        let response = self.generator.generate(&request).await?;
        let text = clean_response(&response.text);
        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }
        Ok(text)
    }

    /// Generate a numbered beat outline and store it on the session.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or yields no text.
    #[instrument(skip_all, fields(title = %session.metadata.title()))]
    pub async fn generate_outline(&self, session: &mut SessionState) -> ScreenwrightResult<String> {
        let outline = self
            .request(SYSTEM_PROMPT, outline_prompt(&session.metadata))
            .await?;

        session.story_outline = Some(outline.clone());
        session.record_exchange("Generate story outline", outline.clone());
        info!(outline_len = outline.len(), "Generated story outline");
        Ok(outline)
    }

    /// Generate scene 1, replacing the current draft.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or yields no text; the draft is
    /// left untouched on error.
    #[instrument(skip_all, fields(title = %session.metadata.title()))]
    pub async fn generate_first_scene(
        &self,
        session: &mut SessionState,
    ) -> ScreenwrightResult<String> {
        let outline = session.story_outline.as_deref();
        let plan = plan_continuation(&[], ScriptMode::ShortFilm, outline);
        let prompt = first_scene_prompt(&session.metadata, &plan, outline);

        let scene = self.request(SYSTEM_PROMPT, prompt).await?;

        session.draft = scene.clone();
        session.record_exchange("Generate scene 1", scene.clone());
        info!(scene_len = scene.len(), "Generated first scene");
        Ok(scene)
    }

    async fn extend(
        &self,
        session: &mut SessionState,
        prepared: PreparedPrompt,
    ) -> ScreenwrightResult<String> {
        debug!(
            target_description = %prepared.plan.target_description,
            beat_index = prepared.plan.beat_index,
            "Prepared continuation"
        );

        let text = self
            .request(prepared.system_instruction, prepared.user_prompt)
            .await?;

        session.append_to_draft(&text);
        session.record_exchange(prepared.label, text.clone());
        info!(
            added_len = text.len(),
            draft_len = session.draft.len(),
            "Extended draft"
        );
        Ok(text)
    }

    /// Generate the next unit for the session's mode and append it to the draft.
    ///
    /// Short films get the next planned scene (or scene 1 for an empty draft);
    /// social shorts get the next variation.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or yields no text; the draft is
    /// left untouched on error.
    #[instrument(skip_all, fields(mode = %session.mode, draft_len = session.draft.len()))]
    pub async fn continue_script(&self, session: &mut SessionState) -> ScreenwrightResult<String> {
        let prepared = prepare_continuation(session, &self.settings);
        self.extend(session, prepared).await
    }

    /// Generate the next short-film scene and append it to the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or yields no text.
    #[instrument(skip_all, fields(draft_len = session.draft.len()))]
    pub async fn generate_next_scene(
        &self,
        session: &mut SessionState,
    ) -> ScreenwrightResult<String> {
        let prepared = prepare_for_mode(session, ScriptMode::ShortFilm, &self.settings);
        self.extend(session, prepared).await
    }

    /// Generate the next social short variation and append it to the draft.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or yields no text.
    #[instrument(skip_all, fields(draft_len = session.draft.len()))]
    pub async fn generate_social_variation(
        &self,
        session: &mut SessionState,
    ) -> ScreenwrightResult<String> {
        let prepared = prepare_for_mode(session, ScriptMode::SocialShort, &self.settings);
        self.extend(session, prepared).await
    }

    /// Ask for a rewrite of the draft's weak sections.
    ///
    /// The reply is stored as `last_assistant` only; the draft is not changed.
    ///
    /// # Errors
    ///
    /// Returns `GenerationErrorKind::InvalidRequest` for an empty draft, or
    /// any generation failure.
    #[instrument(skip_all, fields(draft_len = session.draft.len()))]
    pub async fn run_script_doctor(&self, session: &mut SessionState) -> ScreenwrightResult<String> {
        if session.draft.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::InvalidRequest(
                "script doctor needs a draft".to_string(),
            ))
            .into());
        }

        let prompt = script_doctor_prompt(&session.draft, *self.settings.prompt_tail_chars());
        let notes = self.request(SYSTEM_PROMPT, prompt).await?;

        session.record_exchange("Run script doctor", notes.clone());
        info!(notes_len = notes.len(), "Script doctor finished");
        Ok(notes)
    }

    /// Save the session to a project store.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn save_project(
        &self,
        store: &dyn ProjectStore,
        name: &str,
        session: &SessionState,
    ) -> ScreenwrightResult<ProjectRecord> {
        session.save(store, name)
    }

    /// Load a saved project into a fresh session using the configured transcript bound.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn load_project(
        &self,
        store: &dyn ProjectStore,
        name: &str,
        metadata: StoryMetadata,
        mode: ScriptMode,
    ) -> ScreenwrightResult<SessionState> {
        let mut session = self.new_session(metadata, mode);
        session.load(store, name)?;
        Ok(session)
    }

    /// Export the session's segmented draft.
    ///
    /// # Errors
    ///
    /// Propagates exporter failures unchanged.
    pub fn export(
        &self,
        exporter: &dyn DocumentExporter,
        session: &SessionState,
        dest: &Path,
    ) -> ScreenwrightResult<PathBuf> {
        session.export(exporter, dest)
    }
}
