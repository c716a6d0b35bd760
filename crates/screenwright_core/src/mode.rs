//! Script mode selection.

use serde::{Deserialize, Serialize};

/// What kind of script the session is writing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScriptMode {
    /// Scene-structured short film, optionally driven by a beat outline
    #[default]
    ShortFilm,
    /// Short vertical social-media script, not scene-structured
    SocialShort,
}
