//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the screenwright binary.

mod commands;
mod input;
mod plan;
mod script;

pub use commands::{Cli, Commands};
pub use plan::{plan_script, preview_prompt};
pub use script::{check_script, clean_script, segment_script};
