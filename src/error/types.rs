//! Error types
//!
//! Defines domain-specific error types for each module of the folder store.

use std::fmt;
use std::io;

/// Storage module errors
///
/// Only raised while building values. Structural folder operations report
/// failure through their `bool` result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A file or folder name broke the naming rule. Carries the rejected candidate verbatim.
    InvalidFormat(String),
    /// An icon was built from a slice that does not hold exactly `ICON_DIM` values.
    InvalidIconLength(usize),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidFormat(name) => write!(f, "Invalid format: {}", name),
            StorageError::InvalidIconLength(len) => write!(
                f,
                "Invalid icon length: expected {} values, got {}",
                crate::storage::ICON_DIM,
                len
            ),
        }
    }
}

impl std::error::Error for StorageError {}

/// Registry module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    FolderExists(String),
    FolderNotFound(String),
    CapacityReached(usize),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::FolderExists(name) => write!(f, "Folder already exists: {}", name),
            RegistryError::FolderNotFound(name) => write!(f, "Folder not found: {}", name),
            RegistryError::CapacityReached(max) => {
                write!(f, "Folder limit reached ({} folders)", max)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// General folder store error that encompasses all error types
#[derive(Debug)]
pub enum FolderStoreError {
    Storage(StorageError),
    Registry(RegistryError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for FolderStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderStoreError::Storage(e) => write!(f, "Storage error: {}", e),
            FolderStoreError::Registry(e) => write!(f, "Registry error: {}", e),
            FolderStoreError::Config(e) => write!(f, "Configuration error: {}", e),
            FolderStoreError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FolderStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolderStoreError::Storage(e) => Some(e),
            FolderStoreError::Registry(e) => Some(e),
            FolderStoreError::Config(e) => Some(e),
            FolderStoreError::IoError(e) => Some(e),
        }
    }
}

// Implement conversions from specific errors to FolderStoreError
impl From<StorageError> for FolderStoreError {
    fn from(error: StorageError) -> Self {
        FolderStoreError::Storage(error)
    }
}

impl From<RegistryError> for FolderStoreError {
    fn from(error: RegistryError) -> Self {
        FolderStoreError::Registry(error)
    }
}

impl From<config::ConfigError> for FolderStoreError {
    fn from(error: config::ConfigError) -> Self {
        FolderStoreError::Config(error)
    }
}

impl From<io::Error> for FolderStoreError {
    fn from(error: io::Error) -> Self {
        FolderStoreError::IoError(error)
    }
}
