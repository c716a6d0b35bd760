//! Trait definitions for external collaborators.

use async_trait::async_trait;
use screenwright_core::{GenerateRequest, GenerateResponse, ProjectRecord, ScriptBlock};
use screenwright_error::ScreenwrightResult;
use std::path::{Path, PathBuf};

/// Hosted text generation service.
///
/// Implementations perform one blocking round trip per call; callers never
/// issue overlapping requests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> ScreenwrightResult<GenerateResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;
}

/// Durable storage for named projects.
pub trait ProjectStore: Send + Sync {
    /// Save a project, replacing any previous record under the same name.
    fn save(&self, name: &str, record: &ProjectRecord) -> ScreenwrightResult<()>;

    /// Load a project by name.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NotFound` if nothing is saved under `name`.
    fn load(&self, name: &str) -> ScreenwrightResult<ProjectRecord>;

    /// Names of all saved projects, sorted.
    fn list(&self) -> ScreenwrightResult<Vec<String>>;
}

/// Renders a block sequence to a document.
pub trait DocumentExporter {
    /// Short name of the produced format (e.g., "docx").
    fn format_name(&self) -> &'static str;

    /// Render `blocks` under `dest` and return the written path.
    ///
    /// # Errors
    ///
    /// Returns `ExportErrorKind::MissingDependency` when the renderer is unavailable.
    fn export(&self, blocks: &[ScriptBlock], dest: &Path) -> ScreenwrightResult<PathBuf>;
}
