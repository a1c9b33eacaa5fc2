pub mod config;
pub mod error;
pub mod shell;
pub mod storage;

pub use error::{FolderStoreError, RegistryError, StorageError};
pub use storage::{File, Folder, FolderRegistry, Icon};
