//! Typed session state owned by the host UI.

use crate::{GenerationSettings, check_dialogue_attribution, plan_continuation, segment};
use screenwright_core::{
    BlockKind, ChatEntry, ContinuationPlan, ContinuationState, ProjectRecord, Role, ScriptBlock,
    ScriptMode, StoryMetadata,
};
use screenwright_error::ScreenwrightResult;
use screenwright_interface::{DocumentExporter, ProjectStore};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default bound on transcript entries.
pub const DEFAULT_TRANSCRIPT_LIMIT: usize = 80;

/// Chat transcript that keeps only the most recent entries.
///
/// # Examples
///
/// ```
/// use screenwright_core::{ChatEntry, Role};
/// use screenwright_script::ChatTranscript;
///
/// let mut transcript = ChatTranscript::new(2);
/// transcript.push(ChatEntry::new(Role::User, "one"));
/// transcript.push(ChatEntry::new(Role::User, "two"));
/// transcript.push(ChatEntry::new(Role::User, "three"));
///
/// let kept: Vec<&str> = transcript.iter().map(|e| e.content.as_str()).collect();
/// assert_eq!(kept, vec!["two", "three"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SavedTranscript")]
pub struct ChatTranscript {
    entries: VecDeque<ChatEntry>,
    limit: usize,
}

/// Serialized form, re-bounded through [`ChatTranscript::from_entries`] on load.
#[derive(Deserialize)]
struct SavedTranscript {
    entries: Vec<ChatEntry>,
    limit: usize,
}

impl From<SavedTranscript> for ChatTranscript {
    fn from(saved: SavedTranscript) -> Self {
        Self::from_entries(saved.entries, saved.limit)
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSCRIPT_LIMIT)
    }
}

impl ChatTranscript {
    /// Create an empty transcript holding at most `limit` entries (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Build a transcript from saved entries, keeping the newest `limit`.
    pub fn from_entries(entries: Vec<ChatEntry>, limit: usize) -> Self {
        let mut transcript = Self::new(limit);
        for entry in entries {
            transcript.push(entry);
        }
        transcript
    }

    /// Append an entry, evicting the oldest ones past the bound.
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries held.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Copy of the entries, oldest first.
    pub fn to_vec(&self) -> Vec<ChatEntry> {
        self.entries.iter().cloned().collect()
    }
}

/// Everything one writing session holds.
///
/// The draft string is the only source of truth for the screenplay; blocks
/// are re-derived from it on every call and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Full screenplay text
    pub draft: String,
    /// Latest generator reply, including script doctor notes
    pub last_assistant: String,
    /// Beat outline, once generated
    pub story_outline: Option<String>,
    /// Story settings used for prompts
    pub metadata: StoryMetadata,
    /// What kind of script is being written
    pub mode: ScriptMode,
    transcript: ChatTranscript,
}

impl SessionState {
    /// Start an empty session.
    pub fn new(metadata: StoryMetadata, mode: ScriptMode) -> Self {
        Self {
            metadata,
            mode,
            ..Self::default()
        }
    }

    /// Start an empty session bounded by the configured transcript limit.
    pub fn with_settings(
        metadata: StoryMetadata,
        mode: ScriptMode,
        settings: &GenerationSettings,
    ) -> Self {
        Self::new(metadata, mode).with_transcript_limit(*settings.transcript_limit())
    }

    /// Replace the transcript bound, keeping the newest entries.
    pub fn with_transcript_limit(mut self, limit: usize) -> Self {
        self.transcript = ChatTranscript::from_entries(self.transcript.to_vec(), limit);
        self
    }

    /// The chat transcript.
    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// Segment the current draft.
    pub fn blocks(&self) -> Vec<ScriptBlock> {
        segment(&self.draft)
    }

    /// Progress summary of the current draft.
    pub fn continuation_state(&self) -> ContinuationState {
        ContinuationState::from_blocks(&self.blocks())
    }

    /// Plan the next unit of content for the current draft.
    pub fn plan_next(&self) -> ContinuationPlan {
        plan_continuation(&self.blocks(), self.mode, self.story_outline.as_deref())
    }

    /// Verify dialogue attribution in the current draft.
    ///
    /// # Errors
    ///
    /// Returns `ScriptErrorKind::OrphanDialogue` for the first unattributed dialogue.
    pub fn check(&self) -> ScreenwrightResult<()> {
        check_dialogue_attribution(&self.blocks())
    }

    /// Record one request/reply exchange.
    pub fn record_exchange(&mut self, request: impl Into<String>, reply: impl Into<String>) {
        let reply = reply.into();
        self.transcript.push(ChatEntry::new(Role::User, request));
        self.transcript.push(ChatEntry::new(Role::Assistant, reply.clone()));
        self.last_assistant = reply;
    }

    /// Append generated text to the draft, separated by a blank line.
    pub fn append_to_draft(&mut self, text: &str) {
        let existing = self.draft.trim_end();
        self.draft = if existing.is_empty() {
            text.to_string()
        } else {
            format!("{existing}\n\n{text}")
        };
    }

    /// Snapshot the session as a project record.
    pub fn to_record(&self) -> ProjectRecord {
        ProjectRecord::new(
            self.draft.clone(),
            self.transcript.to_vec(),
            self.story_outline.clone(),
        )
    }

    /// Replace draft, transcript and outline with a saved record.
    ///
    /// Metadata and mode are left as they are.
    pub fn restore(&mut self, record: &ProjectRecord) {
        self.draft = record.script_text().clone();
        self.story_outline = record.story_outline().clone();
        self.transcript =
            ChatTranscript::from_entries(record.chat_history().clone(), self.transcript.limit());
        self.last_assistant = self
            .transcript
            .iter()
            .rev()
            .find(|e| e.role == Role::Assistant)
            .map(|e| e.content.clone())
            .unwrap_or_default();
    }

    /// Save the session under `name`.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    #[instrument(skip(self, store), fields(draft_len = self.draft.len()))]
    pub fn save(&self, store: &dyn ProjectStore, name: &str) -> ScreenwrightResult<ProjectRecord> {
        let record = self.to_record();
        store.save(name, &record)?;
        info!(name, "Saved project");
        Ok(record)
    }

    /// Load the project saved under `name` into this session.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged; the session is untouched on error.
    #[instrument(skip(self, store))]
    pub fn load(&mut self, store: &dyn ProjectStore, name: &str) -> ScreenwrightResult<()> {
        let record = store.load(name)?;
        self.restore(&record);
        info!(name, draft_len = self.draft.len(), "Loaded project");
        Ok(())
    }

    /// Hand the segmented draft to an exporter.
    ///
    /// # Errors
    ///
    /// Propagates exporter failures unchanged.
    #[instrument(skip(self, exporter), fields(format = exporter.format_name()))]
    pub fn export(
        &self,
        exporter: &dyn DocumentExporter,
        dest: &Path,
    ) -> ScreenwrightResult<PathBuf> {
        let blocks = self.blocks();
        debug!(
            block_count = blocks.len(),
            scenes = blocks.iter().filter(|b| b.is(BlockKind::SceneHeading)).count(),
            "Exporting draft"
        );
        exporter.export(&blocks, dest)
    }
}
