//! In-memory project store.

use screenwright_core::ProjectRecord;
use screenwright_error::{ScreenwrightResult, StorageError, StorageErrorKind};
use screenwright_interface::ProjectStore;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Check that a project name can be used as a storage key.
///
/// Names must contain a non-whitespace character and no path separators.
///
/// # Examples
///
/// ```
/// use screenwright_script::validate_project_name;
///
/// assert!(validate_project_name("pilot").is_ok());
/// assert!(validate_project_name("  ").is_err());
/// assert!(validate_project_name("../pilot").is_err());
/// ```
pub fn validate_project_name(name: &str) -> ScreenwrightResult<()> {
    if name.trim().is_empty() || name.contains(['/', '\\']) {
        return Err(StorageError::new(StorageErrorKind::InvalidName(name.to_string())).into());
    }
    Ok(())
}

/// Project store kept in process memory.
///
/// Useful for tests and for hosts that persist projects elsewhere.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: Mutex<BTreeMap<String, ProjectRecord>>,
}

impl InMemoryProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> ScreenwrightResult<MutexGuard<'_, BTreeMap<String, ProjectRecord>>> {
        self.projects.lock().map_err(|e| {
            StorageError::new(StorageErrorKind::Unavailable(format!("lock poisoned: {}", e)))
                .into()
        })
    }
}

impl ProjectStore for InMemoryProjectStore {
    fn save(&self, name: &str, record: &ProjectRecord) -> ScreenwrightResult<()> {
        validate_project_name(name)?;
        self.lock()?.insert(name.to_string(), record.clone());
        debug!(name, "Stored project in memory");
        Ok(())
    }

    fn load(&self, name: &str) -> ScreenwrightResult<ProjectRecord> {
        validate_project_name(name)?;
        self.lock()?
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(name.to_string())).into())
    }

    fn list(&self) -> ScreenwrightResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
