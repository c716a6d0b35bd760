//! Continuation planning.
//!
//! Decides what unit of content to request next from the current block
//! sequence. The planner only produces the instruction; writing the text is
//! the generator's job. Nothing is stored between calls, so the plan is
//! recomputed from the draft every time.

use screenwright_core::{ContinuationPlan, ContinuationState, ScriptBlock, ScriptMode};

/// Shortest runtime, in seconds, requested for a social short.
pub const SOCIAL_MIN_SECONDS: u32 = 15;

/// Longest runtime, in seconds, requested for a social short.
pub const SOCIAL_MAX_SECONDS: u32 = 60;

/// Plan the next unit of content for a draft.
///
/// - `ShortFilm` with a non-blank outline targets beat `scene_count + 1`.
/// - `ShortFilm` without an outline asks for the next logical scene, or for
///   scene 1 when the draft is empty.
/// - `SocialShort` never counts scenes and asks for the next short variation
///   within the social duration window.
///
/// `reference_heading` is always the most recent scene heading, if any.
/// Never fails; an empty draft yields a "start from the first unit" instruction.
///
/// # Examples
///
/// ```
/// use screenwright_core::ScriptMode;
/// use screenwright_script::plan_continuation;
///
/// let plan = plan_continuation(&[], ScriptMode::ShortFilm, None);
/// assert!(plan.target_description.starts_with("Start from scene 1"));
/// assert!(plan.reference_heading.is_none());
/// ```
#[tracing::instrument(skip(blocks, outline), fields(block_count = blocks.len(), has_outline = outline.is_some()))]
pub fn plan_continuation(
    blocks: &[ScriptBlock],
    mode: ScriptMode,
    outline: Option<&str>,
) -> ContinuationPlan {
    let state = ContinuationState::from_blocks(blocks);
    let outline = outline.map(str::trim).filter(|o| !o.is_empty());

    let (target_description, beat_index) = match mode {
        ScriptMode::ShortFilm => match outline {
            Some(_) => {
                let beat = state.scene_count + 1;
                (outline_beat(beat, state.last_scene_heading.as_deref()), Some(beat))
            }
            None if blocks.is_empty() => (
                "Start from scene 1: write only the opening scene of the short film.".to_string(),
                None,
            ),
            None => (next_scene(state.last_scene_heading.as_deref()), None),
        },
        ScriptMode::SocialShort => (social_variation(blocks.is_empty()), None),
    };

    tracing::debug!(
        scene_count = state.scene_count,
        beat_index,
        "Planned continuation"
    );

    ContinuationPlan {
        target_description,
        reference_heading: state.last_scene_heading,
        beat_index,
    }
}

fn outline_beat(beat: usize, heading: Option<&str>) -> String {
    match heading {
        Some(heading) => format!(
            "Write beat #{beat} of the story outline as the next scene, following \"{heading}\"."
        ),
        None if beat == 1 => {
            "Start from beat #1 of the story outline: write it as the opening scene.".to_string()
        }
        None => format!("Write beat #{beat} of the story outline as the next scene."),
    }
}

fn next_scene(heading: Option<&str>) -> String {
    match heading {
        Some(heading) => format!("Continue with the next logical scene following \"{heading}\"."),
        None => "Continue with the next logical scene.".to_string(),
    }
}

fn social_variation(first: bool) -> String {
    if first {
        format!(
            "Start with the first short variation: a single hook-driven beat running \
             {SOCIAL_MIN_SECONDS}-{SOCIAL_MAX_SECONDS} seconds."
        )
    } else {
        format!(
            "Generate the next short variation/beat, distinct from the previous ones and \
             running {SOCIAL_MIN_SECONDS}-{SOCIAL_MAX_SECONDS} seconds."
        )
    }
}
