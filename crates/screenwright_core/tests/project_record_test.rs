use screenwright_core::{
    ChatEntry, GenerateRequest, ModelTier, ProjectRecord, Role, ScriptMode, StoryMetadata,
};
use std::str::FromStr;

#[test]
fn project_record_round_trips_through_json() {
    let record = ProjectRecord::new(
        "FADE IN:\n\nINT. DINER - NIGHT",
        vec![
            ChatEntry::new(Role::User, "Generate scene 1"),
            ChatEntry::new(Role::Assistant, "FADE IN:"),
        ],
        Some("1. Setup".to_string()),
    );

    let json = serde_json::to_string(&record).expect("serialize");
    let back: ProjectRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, record);
    assert!(json.contains("\"chatHistory\""));
    assert!(json.contains("\"role\":\"assistant\""));
}

#[test]
fn project_record_tolerates_missing_optional_fields() {
    let json = r#"{"scriptText":"EXT. ROOF - DAWN","savedAt":"2024-05-01T12:00:00Z"}"#;
    let record: ProjectRecord = serde_json::from_str(json).expect("deserialize");
    assert_eq!(record.script_text(), "EXT. ROOF - DAWN");
    assert!(record.chat_history().is_empty());
    assert!(record.story_outline().is_none());
}

#[test]
fn tier_routing_uses_character_count() {
    // 100 multi-byte characters are still 100 characters
    let prompt = "é".repeat(100);
    assert_eq!(ModelTier::for_prompt(&prompt, 100), ModelTier::Fast);
    assert_eq!(ModelTier::for_prompt(&prompt, 99), ModelTier::Deep);
    assert_eq!(ModelTier::for_prompt("", 0), ModelTier::Fast);
}

#[test]
fn request_builder_requires_every_field() {
    let result = GenerateRequest::builder()
        .system_instruction("sys")
        .user_prompt("user")
        .build();
    assert!(result.is_err());
}

#[test]
fn metadata_defaults_are_empty() {
    let metadata = StoryMetadata::default();
    assert!(metadata.title().is_empty());
    assert!(metadata.trend_style().is_empty());
}

#[test]
fn script_mode_parses_snake_case() {
    assert_eq!(
        ScriptMode::from_str("social_short").expect("parse"),
        ScriptMode::SocialShort
    );
    assert_eq!(ScriptMode::default(), ScriptMode::ShortFilm);
    assert_eq!(ScriptMode::ShortFilm.to_string(), "short_film");
}
