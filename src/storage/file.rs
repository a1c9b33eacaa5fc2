//! File records
//!
//! A named unit of text content with an optional icon.

use std::fmt;

use crate::error::StorageError;
use crate::storage::icon::Icon;
use crate::storage::validation::{DEFAULT_FILE_NAME, validate_file_name};

/// A single file held by a [`Folder`](crate::storage::Folder).
///
/// `Clone` is a deep copy: the clone gets its own icon buffer. Use
/// [`File::move_out`] to transfer ownership and leave the source empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    contents: String,
    icon: Option<Icon>,
}

impl File {
    /// Creates a file after validating `name`.
    ///
    /// An empty name becomes `NewFile.txt` and a name without an extension
    /// gets `.txt` appended. Any other rule violation yields
    /// [`StorageError::InvalidFormat`] and no file is built.
    pub fn new(
        name: &str,
        contents: impl Into<String>,
        icon: Option<Icon>,
    ) -> Result<Self, StorageError> {
        let name = validate_file_name(name)?;
        Ok(Self {
            name,
            contents: contents.into(),
            icon,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn icon_mut(&mut self) -> Option<&mut Icon> {
        self.icon.as_mut()
    }

    /// Replaces the icon. The previous icon, if any, is dropped.
    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    pub fn take_icon(&mut self) -> Option<Icon> {
        self.icon.take()
    }

    /// Size of the contents in bytes
    pub fn size(&self) -> usize {
        self.contents.len()
    }

    /// True once the file's data has been moved out
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Transfers name, contents and icon into a new file.
    ///
    /// The source is left with an empty name, empty contents and no icon.
    pub fn move_out(&mut self) -> File {
        File {
            name: std::mem::take(&mut self.name),
            contents: std::mem::take(&mut self.contents),
            icon: self.icon.take(),
        }
    }

    /// True if this file's name sorts strictly before `other`'s (byte-wise).
    pub fn precedes(&self, other: &File) -> bool {
        self.name < other.name
    }
}

impl Default for File {
    fn default() -> Self {
        Self {
            name: DEFAULT_FILE_NAME.to_string(),
            contents: String::new(),
            icon: None,
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Size: {} bytes", self.size())?;
        write!(f, "Contents: {}", self.contents)
    }
}
