//! Prompt assembly for the generation workflow.

use screenwright_core::{ContinuationPlan, StoryMetadata};

/// System instruction for short-film screenplay requests.
pub const SYSTEM_PROMPT: &str = "You are a professional screenwriter. \
    Write in standard screenplay format using INT./EXT., ACTION, CHARACTER, DIALOGUE. \
    Maintain story logic and pacing. \
    Output only the screenplay text.";

/// System instruction for short vertical social-media scripts.
pub const SOCIAL_SYSTEM_PROMPT: &str = "You write short vertical videos for social media. \
    Open with a hook in the first two seconds, keep every beat visual and fast, \
    and format the script with CHARACTER cues above their DIALOGUE. \
    Output only the script text.";

const DEFAULT_WRITING_STYLE: &str = "cinematic";
const DEFAULT_TREND_STYLE: &str = "hook-first, punchy, loopable";

/// The last `max_chars` characters of `text`, split on a character boundary.
///
/// # Examples
///
/// ```
/// use screenwright_script::tail_chars;
///
/// assert_eq!(tail_chars("FADE IN:", 3), "IN:");
/// assert_eq!(tail_chars("héllo", 4), "éllo");
/// assert_eq!(tail_chars("short", 100), "short");
/// ```
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    let count = text.chars().count();
    if count <= max_chars {
        return text;
    }
    text.char_indices()
        .nth(count - max_chars)
        .map_or(text, |(start, _)| &text[start..])
}

fn metadata_lines(metadata: &StoryMetadata) -> String {
    let fields = [
        ("Title", metadata.title()),
        ("Genre", metadata.genre()),
        ("Tone", metadata.tone()),
        ("Characters", metadata.characters()),
        ("Setting", metadata.setting()),
        ("Notes", metadata.notes()),
    ];

    let mut lines: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(label, value)| format!("{label}: {}", value.trim()))
        .collect();

    let style = metadata.writing_style().trim();
    lines.push(format!(
        "Writing style: {}",
        if style.is_empty() { DEFAULT_WRITING_STYLE } else { style }
    ));
    lines.join("\n")
}

fn outline_section(outline: Option<&str>) -> String {
    match outline.map(str::trim).filter(|o| !o.is_empty()) {
        Some(outline) => format!("\nSTORY OUTLINE:\n{outline}\n"),
        None => String::new(),
    }
}

/// Prompt for the opening scene of a short film.
pub fn first_scene_prompt(
    metadata: &StoryMetadata,
    plan: &ContinuationPlan,
    outline: Option<&str>,
) -> String {
    format!(
        "{}\n{}\n{}\nWrite ONLY SCENE 1 of a short film.\nStart with FADE IN.\nDo not write more than one scene.\n",
        metadata_lines(metadata),
        outline_section(outline),
        plan.target_description,
    )
}

/// Prompt for the next unit of an existing short-film draft.
///
/// Only the last `tail` characters of the draft are sent.
pub fn continuation_prompt(
    draft: &str,
    plan: &ContinuationPlan,
    outline: Option<&str>,
    tail: usize,
) -> String {
    format!(
        "{}\nWrite the NEXT scene only.\nDo not repeat previous scenes.\n{}\nSCREENPLAY SO FAR:\n{}\n",
        plan.target_description,
        outline_section(outline),
        tail_chars(draft.trim(), tail),
    )
}

/// Prompt for a numbered beat outline.
pub fn outline_prompt(metadata: &StoryMetadata) -> String {
    format!(
        "{}\n\nCreate a beat outline for this short film.\n\
         List 5 to 8 numbered beats, one per line, as \"N. Beat name: one-sentence summary\".\n\
         Output only the outline.\n",
        metadata_lines(metadata)
    )
}

/// Prompt asking for a rewrite of the draft's weak sections.
pub fn script_doctor_prompt(draft: &str, tail: usize) -> String {
    format!(
        "Analyze the following screenplay.\n\
         Improve pacing, dialogue, and character motivation.\n\
         Rewrite ONLY the weak sections.\n\nSCRIPT:\n{}\n",
        tail_chars(draft.trim(), tail)
    )
}

/// Prompt for the next social short variation.
pub fn social_prompt(
    metadata: &StoryMetadata,
    plan: &ContinuationPlan,
    draft: &str,
    tail: usize,
) -> String {
    let trend = metadata.trend_style().trim();
    let trend = if trend.is_empty() { DEFAULT_TREND_STYLE } else { trend };
    let previous = tail_chars(draft.trim(), tail);

    let mut prompt = format!(
        "{}\nTrend / viral style: {trend}\n\n{}\n",
        metadata_lines(metadata),
        plan.target_description
    );
    if !previous.is_empty() {
        prompt.push_str(&format!("\nPREVIOUS VARIATIONS:\n{previous}\n"));
    }
    prompt
}
