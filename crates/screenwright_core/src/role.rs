//! Role types for transcript participants.

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
///
/// # Examples
///
/// ```
/// use screenwright_core::Role;
///
/// assert_eq!(format!("{}", Role::Assistant), "Assistant");
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions
    System,
    /// The writer
    User,
    /// The generation service
    Assistant,
}
