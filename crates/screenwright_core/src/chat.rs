//! Chat transcript entries.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single entry in the session chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Author of the entry
    pub role: Role,
    /// Entry text
    pub content: String,
}

impl ChatEntry {
    /// Create an entry.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
