//! Name validation
//!
//! Normalizes and checks file and folder names before they enter the store.

use crate::error::StorageError;

/// Name given to a file constructed with an empty name
pub const DEFAULT_FILE_NAME: &str = "NewFile.txt";

/// Extension appended to file names that carry none
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Separates a file's stem from its extension
pub const EXTENSION_SEPARATOR: char = '.';

/// Name given to a folder constructed with an empty name
pub const DEFAULT_FOLDER_NAME: &str = "NewFolder";

/// Validates a candidate file name and returns its normalized form.
///
/// Accepts ASCII alphanumerics plus at most one `.` separator. A name with no
/// separator gets [`DEFAULT_EXTENSION`] appended; an empty name becomes
/// [`DEFAULT_FILE_NAME`] without being scanned.
pub fn validate_file_name(candidate: &str) -> Result<String, StorageError> {
    if candidate.is_empty() {
        return Ok(DEFAULT_FILE_NAME.to_string());
    }

    let mut separator_seen = false;
    for c in candidate.chars() {
        if c.is_ascii_alphanumeric() {
            continue;
        }
        if c == EXTENSION_SEPARATOR && !separator_seen {
            separator_seen = true;
            continue;
        }
        // duplicate separator or disallowed character
        return Err(StorageError::InvalidFormat(candidate.to_string()));
    }

    if separator_seen {
        Ok(candidate.to_string())
    } else {
        Ok(format!("{}{}", candidate, DEFAULT_EXTENSION))
    }
}

/// Validates a candidate folder name: ASCII alphanumerics only, empty
/// becomes [`DEFAULT_FOLDER_NAME`].
pub fn validate_folder_name(candidate: &str) -> Result<String, StorageError> {
    if candidate.is_empty() {
        return Ok(DEFAULT_FOLDER_NAME.to_string());
    }

    if candidate.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(candidate.to_string())
    } else {
        Err(StorageError::InvalidFormat(candidate.to_string()))
    }
}
