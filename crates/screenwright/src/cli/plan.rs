//! Continuation planning and prompt preview command handlers.

use super::commands::ModeArg;
use super::input::{read_outline, read_source};
use screenwright::{
    ScreenwrightResult, ScriptMode, SessionState, StoryMetadata, StudioConfig,
    plan_continuation, prepare_continuation, segment,
};
use std::path::Path;

fn resolve_mode(mode: Option<ModeArg>, config: &StudioConfig) -> ScriptMode {
    mode.map(ScriptMode::from).unwrap_or(*config.mode())
}

/// Print the continuation plan for a draft.
#[tracing::instrument(skip(mode))]
pub fn plan_script(
    input: &Path,
    mode: Option<ModeArg>,
    outline: Option<&Path>,
    config: Option<&Path>,
) -> ScreenwrightResult<()> {
    let config = StudioConfig::load(config)?;
    let mode = resolve_mode(mode, &config);
    let blocks = segment(&read_source(input)?);
    let outline = read_outline(outline)?;

    let plan = plan_continuation(&blocks, mode, outline.as_deref());

    println!("Mode:       {}", mode);
    println!(
        "Reference:  {}",
        plan.reference_heading.as_deref().unwrap_or("(none)")
    );
    if let Some(beat) = plan.beat_index {
        println!("Beat:       #{}", beat);
    }
    println!("Next:       {}", plan.target_description);
    Ok(())
}

/// Print the prompt and routed model for the next unit of a draft.
#[tracing::instrument(skip(mode))]
pub fn preview_prompt(
    input: &Path,
    mode: Option<ModeArg>,
    outline: Option<&Path>,
    config: Option<&Path>,
) -> ScreenwrightResult<()> {
    let config = StudioConfig::load(config)?;
    let mut session = SessionState::with_settings(
        StoryMetadata::default(),
        resolve_mode(mode, &config),
        config.generation(),
    );
    session.draft = read_source(input)?;
    session.story_outline = read_outline(outline)?;

    let prepared = prepare_continuation(&session, config.generation());

    println!("Model:  {} ({})", prepared.model, prepared.tier);
    println!("Action: {}", prepared.label);
    println!("{:-<60}", "");
    println!("{}", prepared.system_instruction);
    println!("{:-<60}", "");
    println!("{}", prepared.user_prompt);
    Ok(())
}
