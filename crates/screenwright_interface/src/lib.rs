//! Collaborator trait definitions for the Screenwright toolkit.
//!
//! The screenplay core never talks to a network, a disk or a renderer
//! directly. Those concerns sit behind the traits in this crate so that
//! hosts can plug in their own backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{DocumentExporter, ProjectStore, TextGenerator};
