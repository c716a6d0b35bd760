//! Continuation state and plans derived from a block sequence.

use crate::{BlockKind, ScriptBlock};
use serde::{Deserialize, Serialize};

/// Progress summary of a draft.
///
/// Derived on demand from a block sequence and never stored.
///
/// # Examples
///
/// ```
/// use screenwright_core::{BlockKind, ContinuationState, ScriptBlock};
///
/// let blocks = vec![
///     ScriptBlock::new(BlockKind::SceneHeading, "INT. DINER - NIGHT"),
///     ScriptBlock::new(BlockKind::Character, "MARY"),
///     ScriptBlock::new(BlockKind::Dialogue, "Where were you?"),
/// ];
///
/// let state = ContinuationState::from_blocks(&blocks);
/// assert_eq!(state.scene_count, 1);
/// assert_eq!(state.last_scene_heading.as_deref(), Some("INT. DINER - NIGHT"));
/// assert_eq!(state.last_speaker.as_deref(), Some("MARY"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationState {
    /// Text of the most recent scene heading
    pub last_scene_heading: Option<String>,
    /// Number of scene headings in the draft
    pub scene_count: usize,
    /// Text of the most recent character cue
    pub last_speaker: Option<String>,
}

impl ContinuationState {
    /// Derive the state from a block sequence.
    pub fn from_blocks(blocks: &[ScriptBlock]) -> Self {
        Self {
            last_scene_heading: last_of(blocks, BlockKind::SceneHeading),
            scene_count: blocks
                .iter()
                .filter(|b| b.is(BlockKind::SceneHeading))
                .count(),
            last_speaker: last_of(blocks, BlockKind::Character),
        }
    }
}

fn last_of(blocks: &[ScriptBlock], kind: BlockKind) -> Option<String> {
    blocks
        .iter()
        .rev()
        .find(|b| b.is(kind))
        .map(|b| b.text().to_string())
}

/// Instruction describing the next unit of content to request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuationPlan {
    /// Natural-language instruction for the generator
    pub target_description: String,
    /// Most recent scene heading the new unit follows, if any
    pub reference_heading: Option<String>,
    /// Outline beat being targeted, when beats were counted
    pub beat_index: Option<usize>,
}
