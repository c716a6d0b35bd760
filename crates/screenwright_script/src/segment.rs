//! Line-oriented screenplay segmentation.
//!
//! Generated screenplay text is free-form prose punctuated by convention, so
//! the segmenter is lenient: it never fails, and any line it cannot place is
//! treated as action. Classification is a single forward pass with no
//! backtracking, and rule order is precedence:
//!
//! 1. blank lines are skipped
//! 2. `INT.` / `EXT.` / `INT/EXT.` prefix → scene heading
//! 3. `CUT TO:` / `FADE IN:` / `FADE OUT:` suffix → transition
//! 4. all upper-case, at most six words → character cue, followed by one
//!    dialogue block made of the non-upper-case lines directly below it
//! 5. anything else → action
//!
//! Known limitation: short upper-case action lines ("NO!") and shot headers
//! ("CLOSE ON THE DOOR") are read as character cues.

use regex::Regex;
use screenwright_core::{BlockKind, ScriptBlock};
use screenwright_error::{ScreenwrightResult, ScriptError, ScriptErrorKind};
use std::sync::LazyLock;

static SCENE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:INT/EXT\.|INT\.|EXT\.)").expect("Valid scene heading regex")
});

static TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:CUT TO:|FADE IN:|FADE OUT:)$").expect("Valid transition regex")
});

/// Longest line, in words, still read as a character cue.
const MAX_CUE_WORDS: usize = 6;

/// Turn escaped newline sequences and carriage returns into plain `\n`.
///
/// # Examples
///
/// ```
/// use screenwright_script::normalize_line_breaks;
///
/// assert_eq!(normalize_line_breaks(r"FADE IN:\nINT. HALL"), "FADE IN:\nINT. HALL");
/// assert_eq!(normalize_line_breaks("a\r\nb"), "a\nb");
/// ```
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Classify raw screenplay text into an ordered block sequence.
///
/// Never fails: unmatched or ambiguous lines become [`BlockKind::Action`].
/// Calling it twice on the same text yields identical sequences.
///
/// # Examples
///
/// ```
/// use screenwright_core::{BlockKind, ScriptBlock};
/// use screenwright_script::segment;
///
/// let blocks = segment("FADE IN:\n\nINT. DINER - NIGHT\n\nMARY\nWhere were you?\n\nCUT TO:");
/// assert_eq!(
///     blocks,
///     vec![
///         ScriptBlock::new(BlockKind::Transition, "FADE IN:"),
///         ScriptBlock::new(BlockKind::SceneHeading, "INT. DINER - NIGHT"),
///         ScriptBlock::new(BlockKind::Character, "MARY"),
///         ScriptBlock::new(BlockKind::Dialogue, "Where were you?"),
///         ScriptBlock::new(BlockKind::Transition, "CUT TO:"),
///     ]
/// );
/// ```
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn segment(text: &str) -> Vec<ScriptBlock> {
    let normalized = normalize_line_breaks(text);
    let mut lines = normalized.lines().map(str::trim).peekable();
    let mut blocks = Vec::new();

    while let Some(line) = lines.next() {
        if line.is_empty() {
            continue;
        }

        if SCENE_HEADING.is_match(line) {
            blocks.push(ScriptBlock::new(BlockKind::SceneHeading, line));
        } else if TRANSITION.is_match(line) {
            blocks.push(ScriptBlock::new(BlockKind::Transition, line));
        } else if is_character_cue(line) {
            blocks.push(ScriptBlock::new(BlockKind::Character, line));

            let mut dialogue = Vec::new();
            while let Some(next) = lines.next_if(|l| !l.is_empty() && !is_all_upper(l)) {
                dialogue.push(next);
            }
            if !dialogue.is_empty() {
                blocks.push(ScriptBlock::new(BlockKind::Dialogue, dialogue.join(" ")));
            }
        } else {
            blocks.push(ScriptBlock::new(BlockKind::Action, line));
        }
    }

    tracing::debug!(block_count = blocks.len(), "Segmented screenplay text");
    blocks
}

/// Verify every dialogue block belongs to a character cue.
///
/// A dialogue block must be preceded by exactly one character cue, with only
/// action blocks allowed in between. Each cue owns a single dialogue block.
///
/// # Errors
///
/// Returns `ScriptErrorKind::OrphanDialogue` for the first dialogue block
/// without an owning cue.
///
/// # Examples
///
/// ```
/// use screenwright_core::{BlockKind, ScriptBlock};
/// use screenwright_script::check_dialogue_attribution;
///
/// let orphan = vec![
///     ScriptBlock::new(BlockKind::SceneHeading, "INT. HALL - DAY"),
///     ScriptBlock::new(BlockKind::Dialogue, "Who said that?"),
/// ];
/// assert!(check_dialogue_attribution(&orphan).is_err());
/// ```
pub fn check_dialogue_attribution(blocks: &[ScriptBlock]) -> ScreenwrightResult<()> {
    let mut owner: Option<usize> = None;

    for (index, block) in blocks.iter().enumerate() {
        match block.kind() {
            BlockKind::Character => owner = Some(index),
            BlockKind::Action => {}
            BlockKind::Dialogue => {
                if owner.take().is_none() {
                    tracing::warn!(index, "Dialogue block without a character cue");
                    return Err(
                        ScriptError::new(ScriptErrorKind::OrphanDialogue { index }).into()
                    );
                }
            }
            BlockKind::SceneHeading | BlockKind::Transition => owner = None,
        }
    }

    Ok(())
}

/// Cased text with no lower-case letters; caseless scripts never qualify.
fn is_all_upper(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}

fn is_character_cue(line: &str) -> bool {
    is_all_upper(line) && line.split_whitespace().count() <= MAX_CUE_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(blocks: &[ScriptBlock]) -> Vec<BlockKind> {
        blocks.iter().map(ScriptBlock::kind).collect()
    }

    #[test]
    fn test_upper_case_detection() {
        assert!(is_all_upper("JOHN"));
        assert!(is_all_upper("MARY (V.O.)"));
        assert!(!is_all_upper("Mary"));
        assert!(!is_all_upper("..."));
        assert!(!is_all_upper("42"));
        assert!(is_all_upper("ÉLODIE"));
        assert!(!is_all_upper("你好吗？"));
        assert!(!is_all_upper("שלום עולם"));
        assert!(!is_all_upper("مرحبا"));
    }

    #[test]
    fn test_cue_word_limit() {
        assert!(is_character_cue("THE MAN IN THE GREY COAT"));
        assert!(!is_character_cue("THE MAN IN THE LONG GREY COAT"));
    }

    #[test]
    fn test_long_upper_case_line_is_action() {
        let blocks = segment("THE WHOLE ROOM GOES DARK AT ONCE NOW");
        assert_eq!(kinds(&blocks), vec![BlockKind::Action]);
    }

    #[test]
    fn test_scene_heading_is_case_insensitive() {
        let blocks = segment("int. garage - night\nExt. Roof - Dawn\nINT/EXT. CAR - DAY");
        assert_eq!(kinds(&blocks), vec![BlockKind::SceneHeading; 3]);
    }

    #[test]
    fn test_heading_takes_precedence_over_cue() {
        let blocks = segment("INT. HALL\nEXT. YARD");
        assert_eq!(kinds(&blocks), vec![BlockKind::SceneHeading; 2]);
    }

    #[test]
    fn test_transition_suffix() {
        let blocks = segment("SMASH CUT TO:\nfade out:\nFADE IN:");
        assert_eq!(kinds(&blocks), vec![BlockKind::Transition; 3]);
    }

    #[test]
    fn test_dialogue_spans_lines_until_blank() {
        let blocks = segment("JOHN\nI can't.\n(beat)\nI won't.\n\nHe leaves.");
        assert_eq!(
            blocks,
            vec![
                ScriptBlock::new(BlockKind::Character, "JOHN"),
                ScriptBlock::new(BlockKind::Dialogue, "I can't. (beat) I won't."),
                ScriptBlock::new(BlockKind::Action, "He leaves."),
            ]
        );
    }

    #[test]
    fn test_dialogue_stops_at_upper_case_line() {
        let blocks = segment("JOHN\nRun!\nMARY\nWhere?");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Character,
                BlockKind::Dialogue,
                BlockKind::Character,
                BlockKind::Dialogue,
            ]
        );
    }

    #[test]
    fn test_attribution_allows_intervening_action() {
        let blocks = vec![
            ScriptBlock::new(BlockKind::Character, "JOHN"),
            ScriptBlock::new(BlockKind::Action, "He coughs."),
            ScriptBlock::new(BlockKind::Dialogue, "Sorry."),
        ];
        assert!(check_dialogue_attribution(&blocks).is_ok());
    }

    #[test]
    fn test_attribution_rejects_second_dialogue_for_one_cue() {
        let blocks = vec![
            ScriptBlock::new(BlockKind::Character, "JOHN"),
            ScriptBlock::new(BlockKind::Dialogue, "One."),
            ScriptBlock::new(BlockKind::Dialogue, "Two."),
        ];
        let err = check_dialogue_attribution(&blocks).expect_err("orphan dialogue");
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_attribution_resets_at_scene_heading() {
        let blocks = vec![
            ScriptBlock::new(BlockKind::Character, "JOHN"),
            ScriptBlock::new(BlockKind::SceneHeading, "EXT. YARD - DAY"),
            ScriptBlock::new(BlockKind::Dialogue, "Hello?"),
        ];
        assert!(check_dialogue_attribution(&blocks).is_err());
    }
}
