//! Screenwright - screenplay segmentation and continuation planning
//!
//! Screenwright turns flat, model-generated screenplay text into typed blocks
//! and decides what the next unit of a draft should be. Text generation,
//! project persistence and document export sit behind traits so a host can
//! plug in its own services.
//!
//! # Quick Start
//!
//! ```
//! use screenwright::{BlockKind, ScriptMode, plan_continuation, segment};
//!
//! let draft = "FADE IN:\n\nINT. DINER - NIGHT\nRain hits the window.\n\nMARY\nWhere were you?";
//! let blocks = segment(draft);
//! assert_eq!(blocks[1].kind(), BlockKind::SceneHeading);
//!
//! let plan = plan_continuation(&blocks, ScriptMode::ShortFilm, None);
//! assert_eq!(plan.reference_heading.as_deref(), Some("INT. DINER - NIGHT"));
//! ```
//!
//! # Architecture
//!
//! - `screenwright_core` - Data types (blocks, plans, metadata, requests)
//! - `screenwright_interface` - Collaborator traits
//! - `screenwright_error` - Error types
//! - `screenwright_script` - Segmenter, planner, prompts, session and studio workflow
//!
//! This crate re-exports everything for convenience and ships the
//! `screenwright` command-line tool.

#![forbid(unsafe_code)]

pub use screenwright_core::*;
pub use screenwright_error::*;
pub use screenwright_interface::*;
pub use screenwright_script::*;
