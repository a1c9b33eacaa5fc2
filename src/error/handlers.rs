//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::FolderStoreError;
use log::error;

/// Handle a folder store error
pub fn handle_error(err: &FolderStoreError) {
    error!("Folder store error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &FolderStoreError) -> i32 {
    match err {
        FolderStoreError::Storage(_) => 65,
        FolderStoreError::Registry(_) => 65,
        FolderStoreError::Config(_) => 78,
        FolderStoreError::IoError(_) => 74,
    }
}
