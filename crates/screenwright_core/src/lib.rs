//! Core data types for the Screenwright screenplay toolkit.
//!
//! This crate provides the plain data shared by every other Screenwright crate:
//! screenplay blocks, continuation state, chat transcript entries, project
//! records and generation requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod chat;
mod continuation;
mod logging;
mod metadata;
mod mode;
mod project;
mod request;
mod role;

pub use block::{BlockKind, ScriptBlock};
pub use chat::ChatEntry;
pub use continuation::{ContinuationPlan, ContinuationState};
pub use logging::{LogFormat, init_logging};
pub use metadata::{StoryMetadata, StoryMetadataBuilder};
pub use mode::ScriptMode;
pub use project::ProjectRecord;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, ModelTier};
pub use role::Role;
