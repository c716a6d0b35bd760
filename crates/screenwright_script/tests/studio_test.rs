use async_trait::async_trait;
use screenwright_core::{
    BlockKind, GenerateRequest, GenerateResponse, ModelTier, Role, ScriptBlock, ScriptMode,
    StoryMetadata,
};
use screenwright_error::{
    GenerationError, GenerationErrorKind, ScreenwrightErrorKind, ScreenwrightResult,
};
use screenwright_interface::TextGenerator;
use screenwright_script::{GenerationSettings, SessionState, Studio};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock generator that replays canned replies and records every request.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<ScreenwrightResult<String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedGenerator {
    fn new(replies: Vec<ScreenwrightResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ScreenwrightResult<GenerateResponse> {
        self.requests.lock().expect("requests lock").push(req.clone());
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok("(no more replies)".to_string()))?;
        Ok(GenerateResponse { text: reply })
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn metadata() -> StoryMetadata {
    StoryMetadata::builder()
        .title("Night Shift")
        .genre("Thriller")
        .characters("Mary, John")
        .build()
        .expect("metadata")
}

#[tokio::test]
async fn test_first_scene_replaces_draft_and_cleans_reply() {
    let generator = ScriptedGenerator::replying(&[
        "Sure! Here is the scene:\n<b>FADE IN:</b>\n\nINT. DINER - NIGHT\n\n\n\nMARY\nWhere were you?",
    ]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = "old draft".to_string();

    let scene = studio
        .generate_first_scene(&mut session)
        .await
        .expect("first scene");

    assert_eq!(scene, "FADE IN:\n\nINT. DINER - NIGHT\n\nMARY\nWhere were you?");
    assert_eq!(session.draft, scene);
    assert_eq!(session.last_assistant, scene);
    assert_eq!(session.transcript().len(), 2);

    let requests = studio.generator().requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].user_prompt().contains("Title: Night Shift"));
    assert!(requests[0].user_prompt().contains("Write ONLY SCENE 1"));
    assert!((*requests[0].temperature() - 0.7).abs() < f32::EPSILON);
    assert_eq!(*requests[0].max_output_tokens(), 512);
}

#[tokio::test]
async fn test_continue_script_appends_next_scene() {
    let generator = ScriptedGenerator::replying(&["EXT. PARKING LOT - NIGHT\n\nJOHN\nI was here."]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = "INT. DINER - NIGHT\n\nMARY\nWhere were you?\n\n".to_string();

    studio
        .continue_script(&mut session)
        .await
        .expect("next scene");

    assert_eq!(
        session.draft,
        "INT. DINER - NIGHT\n\nMARY\nWhere were you?\n\nEXT. PARKING LOT - NIGHT\n\nJOHN\nI was here."
    );
    assert_eq!(session.continuation_state().scene_count, 2);

    let request = &studio.generator().requests()[0];
    assert!(request.user_prompt().contains("following \"INT. DINER - NIGHT\""));
    assert!(request.user_prompt().contains("SCREENPLAY SO FAR:"));
}

#[tokio::test]
async fn test_long_prompt_routes_to_deep_model() {
    let generator = ScriptedGenerator::replying(&["INT. OFFICE - DAY"]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = format!("INT. DINER - NIGHT\n{}", "Mary waits. ".repeat(40));

    studio
        .continue_script(&mut session)
        .await
        .expect("next scene");

    let request = &studio.generator().requests()[0];
    assert!(request.user_prompt().chars().count() > 300);
    assert_eq!(*request.tier(), ModelTier::Deep);
    assert_eq!(request.model(), "llama-3.3-70b-versatile");
}

#[tokio::test]
async fn test_continue_script_with_outline_targets_beat() {
    let generator = ScriptedGenerator::replying(&["INT. ROOF - DAWN\nMary looks down."]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.story_outline = Some("1. Setup\n2. Twist\n3. Chase\n4. Roof".to_string());
    session.draft = "INT. A - DAY\n\nEXT. B - DAY\n\nINT. C - NIGHT".to_string();

    studio
        .continue_script(&mut session)
        .await
        .expect("beat 4");

    let request = &studio.generator().requests()[0];
    assert!(request.user_prompt().contains("beat #4"));
    assert!(request.user_prompt().contains("STORY OUTLINE:"));
    assert_eq!(session.continuation_state().scene_count, 4);
}

#[tokio::test]
async fn test_continue_script_on_empty_draft_starts_scene_one() {
    let generator = ScriptedGenerator::replying(&["FADE IN:\n\nINT. HALL - DAY"]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);

    studio
        .continue_script(&mut session)
        .await
        .expect("scene 1");

    assert_eq!(session.draft, "FADE IN:\n\nINT. HALL - DAY");
    let entries: Vec<_> = session.transcript().iter().collect();
    assert_eq!(entries[0].content, "Generate scene 1");
    assert_eq!(entries[1].role, Role::Assistant);
}

#[tokio::test]
async fn test_social_variation_uses_social_prompt() {
    let generator = ScriptedGenerator::replying(&["HOST\nWait for it..."]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::SocialShort);
    session.draft = "HOST\nYou won't believe this.".to_string();

    studio
        .continue_script(&mut session)
        .await
        .expect("variation");

    let request = &studio.generator().requests()[0];
    assert!(request.system_instruction().contains("social media"));
    assert!(request.user_prompt().contains("PREVIOUS VARIATIONS:"));
    assert_eq!(
        session.blocks(),
        vec![
            ScriptBlock::new(BlockKind::Character, "HOST"),
            ScriptBlock::new(BlockKind::Dialogue, "You won't believe this."),
            ScriptBlock::new(BlockKind::Character, "HOST"),
            ScriptBlock::new(BlockKind::Dialogue, "Wait for it..."),
        ]
    );
}

#[tokio::test]
async fn test_outline_is_stored_on_session() {
    let generator = ScriptedGenerator::replying(&["1. Setup: Mary waits.\n2. Twist: John lies."]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);

    studio
        .generate_outline(&mut session)
        .await
        .expect("outline");

    assert_eq!(
        session.story_outline.as_deref(),
        Some("1. Setup: Mary waits.\n2. Twist: John lies.")
    );
    assert!(session.draft.is_empty());
}

#[tokio::test]
async fn test_script_doctor_leaves_draft_alone() {
    let generator = ScriptedGenerator::replying(&["Tighten the diner scene."]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = "INT. DINER - NIGHT\nMary waits.".to_string();

    let notes = studio
        .run_script_doctor(&mut session)
        .await
        .expect("doctor");

    assert_eq!(notes, "Tighten the diner scene.");
    assert_eq!(session.draft, "INT. DINER - NIGHT\nMary waits.");
    assert_eq!(session.last_assistant, notes);
}

#[tokio::test]
async fn test_script_doctor_requires_draft() {
    let studio = Studio::new(ScriptedGenerator::replying(&[]), GenerationSettings::default());
    let mut session = SessionState::default();

    let err = studio
        .run_script_doctor(&mut session)
        .await
        .expect_err("empty draft");
    assert!(matches!(err.kind(), ScreenwrightErrorKind::Generation(_)));
    assert!(studio.generator().requests().is_empty());
}

#[tokio::test]
async fn test_empty_reply_is_an_error_and_draft_is_kept() {
    let generator = ScriptedGenerator::replying(&["<p>  </p>\n\n"]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = "INT. DINER - NIGHT".to_string();

    let err = studio
        .continue_script(&mut session)
        .await
        .expect_err("empty reply");

    match err.kind() {
        ScreenwrightErrorKind::Generation(e) => {
            assert_eq!(e.kind, GenerationErrorKind::EmptyResponse)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(session.draft, "INT. DINER - NIGHT");
    assert!(session.transcript().is_empty());
}

#[tokio::test]
async fn test_service_errors_propagate_without_retry() {
    let generator = ScriptedGenerator::new(vec![Err(GenerationError::new(
        GenerationErrorKind::Service("503 upstream".to_string()),
    )
    .into())]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);

    let err = studio
        .generate_first_scene(&mut session)
        .await
        .expect_err("service error");

    assert!(err.to_string().contains("503 upstream"));
    assert_eq!(studio.generator().requests().len(), 1);
    assert!(session.draft.is_empty());
}

#[tokio::test]
async fn test_short_prompt_routes_to_fast_model() {
    let generator = ScriptedGenerator::replying(&["1. Beat"]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::default();

    studio
        .generate_outline(&mut session)
        .await
        .expect("outline");

    let request = &studio.generator().requests()[0];
    assert!(request.user_prompt().chars().count() <= 300);
    assert_eq!(*request.tier(), ModelTier::Fast);
    assert_eq!(request.model(), "llama-3.1-8b-instant");
}

#[tokio::test]
async fn test_explicit_mode_actions_ignore_session_mode() {
    let generator = ScriptedGenerator::replying(&["HOST\nPart two.", "EXT. ROOF - DAY"]);
    let studio = Studio::new(generator, GenerationSettings::default());
    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    session.draft = "INT. DINER - NIGHT\nMary waits.".to_string();

    studio
        .generate_social_variation(&mut session)
        .await
        .expect("variation");
    studio
        .generate_next_scene(&mut session)
        .await
        .expect("scene");

    let requests = studio.generator().requests();
    assert!(requests[0].system_instruction().contains("social media"));
    assert!(requests[1].user_prompt().contains("Write the NEXT scene only."));
    assert_eq!(session.mode, ScriptMode::ShortFilm);
    assert_eq!(session.continuation_state().scene_count, 2);
}

#[tokio::test]
async fn test_project_round_trip_through_studio() {
    use screenwright_script::InMemoryProjectStore;

    let generator = ScriptedGenerator::replying(&["FADE IN:\n\nINT. HALL - DAY"]);
    let settings = GenerationSettings::default();
    let studio = Studio::new(generator, settings);
    let store = InMemoryProjectStore::new();

    let mut session = SessionState::new(metadata(), ScriptMode::ShortFilm);
    studio
        .generate_first_scene(&mut session)
        .await
        .expect("scene");
    studio
        .save_project(&store, "pilot", &session)
        .expect("save");

    let loaded = studio
        .load_project(&store, "pilot", metadata(), ScriptMode::ShortFilm)
        .expect("load");
    assert_eq!(loaded.draft, session.draft);
    assert_eq!(loaded.last_assistant, session.last_assistant);
    assert_eq!(loaded.transcript().limit(), 80);
}

#[tokio::test]
async fn test_studio_sessions_use_configured_transcript_limit() {
    let generator = ScriptedGenerator::replying(&["1. A", "2. B", "3. C"]);
    let studio = Studio::new(
        generator,
        GenerationSettings::default().with_transcript_limit(4),
    );
    let mut session = studio.new_session(metadata(), ScriptMode::ShortFilm);
    assert_eq!(session.transcript().limit(), 4);

    for _ in 0..3 {
        studio
            .generate_outline(&mut session)
            .await
            .expect("outline");
    }

    assert_eq!(session.transcript().len(), 4);
    assert_eq!(session.last_assistant, "3. C");
}
