//! Screenplay segmentation and continuation planning for Screenwright.
//!
//! The pure core of the toolkit:
//!
//! - **Segmenter**: classify flat generated text into ordered [`ScriptBlock`]s
//! - **Continuation planner**: decide what unit of content to request next
//! - **Response cleaning**: scrub generator output before it joins the draft
//!
//! Around it sits a thin workflow layer: typed [`SessionState`], prompt
//! assembly, layered [`StudioConfig`] loading and the [`Studio`], which drives a
//! [`TextGenerator`](screenwright_interface::TextGenerator) one request at a time.
//!
//! # Example
//!
//! ```
//! use screenwright_core::{BlockKind, ScriptMode};
//! use screenwright_script::{plan_continuation, segment};
//!
//! let blocks = segment("INT. KITCHEN - DAY\n\nJOHN\nI can't believe it.\n");
//! assert_eq!(blocks[0].kind(), BlockKind::SceneHeading);
//!
//! let plan = plan_continuation(&blocks, ScriptMode::ShortFilm, Some("1. Setup\n2. Twist"));
//! assert_eq!(plan.beat_index, Some(2));
//! ```
//!
//! [`ScriptBlock`]: screenwright_core::ScriptBlock

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clean;
mod planner;
mod prompts;
mod segment;
mod session;
mod settings;
mod store;
mod studio;

pub use clean::clean_response;
pub use planner::{SOCIAL_MAX_SECONDS, SOCIAL_MIN_SECONDS, plan_continuation};
pub use prompts::{
    SOCIAL_SYSTEM_PROMPT, SYSTEM_PROMPT, continuation_prompt, first_scene_prompt, outline_prompt,
    script_doctor_prompt, social_prompt, tail_chars,
};
pub use segment::{check_dialogue_attribution, normalize_line_breaks, segment};
pub use session::{ChatTranscript, DEFAULT_TRANSCRIPT_LIMIT, SessionState};
pub use settings::{GenerationSettings, StudioConfig};
pub use store::{InMemoryProjectStore, validate_project_name};
pub use studio::{PreparedPrompt, Studio, prepare_continuation};
