//! Document loading from files and strings.

use std::path::Path;

use serde_json::Value;

use crate::error::InputError;

/// Load and decode a JSON document from a file path.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file doesn't exist,
/// or `InputError::InvalidJson` if the file isn't valid JSON.
pub fn load_document(path: &Path) -> Result<Value, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content)
}

/// Decode a JSON document from a string.
///
/// # Errors
///
/// Returns `InputError::InvalidJson` if the string isn't valid JSON.
pub fn load_document_str(content: &str) -> Result<Value, InputError> {
    serde_json::from_str(content).map_err(|source| InputError::InvalidJson { source })
}
