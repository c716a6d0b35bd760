//! Reading screenplay sources from files or stdin.

use screenwright::{ScreenwrightResult, ScriptError, ScriptErrorKind};
use std::path::Path;

/// Read a whole source, treating `-` as stdin.
pub fn read_source(path: &Path) -> ScreenwrightResult<String> {
    let text = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(path)
    };

    text.map_err(|e| {
        ScriptError::new(ScriptErrorKind::SourceRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}

/// Read an optional outline file.
pub fn read_outline(path: Option<&Path>) -> ScreenwrightResult<Option<String>> {
    path.map(read_source).transpose()
}
