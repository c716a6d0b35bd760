//! Screenplay block types.

use serde::{Deserialize, Serialize};

/// Classification of a single screenplay element.
///
/// # Examples
///
/// ```
/// use screenwright_core::BlockKind;
///
/// assert_eq!(BlockKind::SceneHeading.to_string(), "scene_heading");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlockKind {
    /// Location/time slug line (`INT. KITCHEN - DAY`)
    SceneHeading,
    /// Descriptive prose
    Action,
    /// Speaker cue
    Character,
    /// Spoken lines belonging to the preceding character cue
    Dialogue,
    /// Shift between scenes (`CUT TO:`)
    Transition,
}

/// One classified element of a screenplay, in reading order.
///
/// Blocks are immutable; a block sequence is rebuilt whenever the draft changes.
///
/// # Examples
///
/// ```
/// use screenwright_core::{BlockKind, ScriptBlock};
///
/// let block = ScriptBlock::new(BlockKind::Character, "MARY");
/// assert_eq!(block.kind(), BlockKind::Character);
/// assert_eq!(block.text(), "MARY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptBlock {
    kind: BlockKind,
    text: String,
}

impl ScriptBlock {
    /// Create a block of the given kind.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The block classification.
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// The block text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this block is of the given kind.
    pub fn is(&self, kind: BlockKind) -> bool {
        self.kind == kind
    }
}
