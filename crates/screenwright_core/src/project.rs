//! Saved project records.

use crate::ChatEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat record persisted for a named project.
///
/// Only the draft string is stored; blocks are always re-derived on load.
///
/// # Examples
///
/// ```
/// use screenwright_core::ProjectRecord;
///
/// let record = ProjectRecord::new("FADE IN:", Vec::new(), None);
/// let json = serde_json::to_string(&record).unwrap();
/// assert!(json.contains("\"scriptText\""));
/// assert!(json.contains("\"savedAt\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Full draft text
    script_text: String,
    /// Chat transcript at save time
    #[serde(default)]
    chat_history: Vec<ChatEntry>,
    /// Beat outline, if one was generated
    #[serde(default)]
    story_outline: Option<String>,
    /// Save timestamp
    saved_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        script_text: impl Into<String>,
        chat_history: Vec<ChatEntry>,
        story_outline: Option<String>,
    ) -> Self {
        Self {
            script_text: script_text.into(),
            chat_history,
            story_outline,
            saved_at: Utc::now(),
        }
    }
}
