//! In-memory file storage
//!
//! Handles files, folders, name validation and shared folder access.

pub mod file;
pub mod folder;
pub mod icon;
pub mod registry;
pub mod shared;
pub mod validation;

// Re-export commonly used types and functions
pub use file::File;
pub use folder::{FileMut, Folder};
pub use icon::{ICON_DIM, Icon};
pub use registry::FolderRegistry;
pub use shared::{SharedFolder, copy_between, move_between, share};
pub use validation::{
    DEFAULT_EXTENSION, DEFAULT_FILE_NAME, DEFAULT_FOLDER_NAME, EXTENSION_SEPARATOR,
    validate_file_name, validate_folder_name,
};
