//! Folder collections
//!
//! A folder owns its files in name order and never holds two files with the
//! same name. Lookups are binary searches over that order; insertions land at
//! the searched position, so the order survives every operation.

use log::debug;
use std::fmt;

use crate::error::StorageError;
use crate::storage::file::File;
use crate::storage::icon::Icon;
use crate::storage::validation::{DEFAULT_FOLDER_NAME, validate_folder_name};

/// Indentation used for each file line in a listing
const LISTING_INDENT: &str = "   ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    files: Vec<File>,
}

impl Folder {
    /// Creates an empty folder. An empty name becomes `NewFolder`; any
    /// non-alphanumeric character yields [`StorageError::InvalidFormat`].
    pub fn new(name: &str) -> Result<Self, StorageError> {
        let name = validate_folder_name(name)?;
        Ok(Self {
            name,
            files: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the folder. Returns false and keeps the current name if
    /// `new_name` is empty or not alphanumeric.
    pub fn rename(&mut self, new_name: &str) -> bool {
        if new_name.is_empty() {
            debug!("Rejected empty rename of folder {}", self.name);
            return false;
        }

        match validate_folder_name(new_name) {
            Ok(valid) => {
                debug!("Renamed folder {} to {}", self.name, valid);
                self.name = valid;
                true
            }
            Err(e) => {
                debug!("Rejected rename of folder {}: {}", self.name, e);
                false
            }
        }
    }

    /// Files in name order
    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(File::name).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_ok()
    }

    pub fn get_file(&self, name: &str) -> Option<&File> {
        self.search(name).ok().map(|index| &self.files[index])
    }

    /// Edit handle for the file called `name`. Only contents and icon can
    /// change through it, so the folder's order is unaffected.
    pub fn get_file_mut(&mut self, name: &str) -> Option<FileMut<'_>> {
        match self.search(name) {
            Ok(index) => Some(FileMut {
                file: &mut self.files[index],
            }),
            Err(_) => None,
        }
    }

    /// Total size in bytes of every file in the folder
    pub fn size(&self) -> usize {
        self.files.iter().map(File::size).sum()
    }

    /// Moves `file` into the folder.
    ///
    /// Fails without touching either side if the file has already been
    /// emptied by a move or if a file with the same name is present. On
    /// success `file` is left empty.
    pub fn add_file(&mut self, file: &mut File) -> bool {
        if file.is_empty() {
            debug!("Rejected add of emptied file to folder {}", self.name);
            return false;
        }

        if self.files.is_empty() {
            self.files.push(file.move_out());
            debug!("Added first file to folder {}", self.name);
            return true;
        }

        match self.search(file.name()) {
            Ok(_) => {
                debug!(
                    "Rejected duplicate {} in folder {}",
                    file.name(),
                    self.name
                );
                false
            }
            Err(position) => {
                let moved = file.move_out();
                debug!("Added {} to folder {}", moved.name(), self.name);
                self.files.insert(position, moved);
                true
            }
        }
    }

    /// Removes the file called `name`. Returns false if there is none.
    pub fn remove_file(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        match self.search(name) {
            Ok(index) => {
                self.files.remove(index);
                debug!("Removed {} from folder {}", name, self.name);
                true
            }
            Err(_) => {
                debug!("Cannot remove {}: not in folder {}", name, self.name);
                false
            }
        }
    }

    /// Transfers the file called `name` into `destination`.
    ///
    /// A destination with this folder's name counts as the same folder and
    /// succeeds without changes. Fails, leaving both folders untouched, when
    /// the destination already holds `name` or this folder does not.
    pub fn move_file_to(&mut self, name: &str, destination: &mut Folder) -> bool {
        if destination.name == self.name {
            return true;
        }

        let Some((source_index, destination_index)) = self.locate_transfer(name, destination)
        else {
            return false;
        };

        let file = self.files.remove(source_index);
        destination.files.insert(destination_index, file);
        debug!("Moved {} from {} to {}", name, self.name, destination.name);
        true
    }

    /// Places a deep copy of the file called `name` into `destination`.
    ///
    /// Same checks as [`Folder::move_file_to`]; the source file is left as is.
    pub fn copy_file_to(&mut self, name: &str, destination: &mut Folder) -> bool {
        if destination.name == self.name {
            return true;
        }

        let Some((source_index, destination_index)) = self.locate_transfer(name, destination)
        else {
            return false;
        };

        let copy = self.files[source_index].clone();
        destination.files.insert(destination_index, copy);
        debug!("Copied {} from {} to {}", name, self.name, destination.name);
        true
    }

    /// Renders the folder name followed by each file name, indented, in name order.
    pub fn display(&self) -> String {
        self.to_string()
    }

    fn search(&self, name: &str) -> Result<usize, usize> {
        self.files
            .binary_search_by(|file| file.name().cmp(name))
    }

    /// Source index and destination insertion point for a move or copy, or
    /// None if the transfer must be refused.
    fn locate_transfer(&self, name: &str, destination: &Folder) -> Option<(usize, usize)> {
        let destination_index = match destination.search(name) {
            Ok(_) => {
                debug!(
                    "Cannot transfer {}: already in folder {}",
                    name, destination.name
                );
                return None;
            }
            Err(position) => position,
        };

        match self.search(name) {
            Ok(source_index) => Some((source_index, destination_index)),
            Err(_) => {
                debug!("Cannot transfer {}: not in folder {}", name, self.name);
                None
            }
        }
    }
}

/// Mutable view of a file held by a folder. The name is read-only.
#[derive(Debug)]
pub struct FileMut<'a> {
    file: &'a mut File,
}

impl FileMut<'_> {
    pub fn name(&self) -> &str {
        self.file.name()
    }

    pub fn contents(&self) -> &str {
        self.file.contents()
    }

    pub fn size(&self) -> usize {
        self.file.size()
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.file.set_contents(contents);
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.file.icon()
    }

    pub fn icon_mut(&mut self) -> Option<&mut Icon> {
        self.file.icon_mut()
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.file.set_icon(icon);
    }

    pub fn take_icon(&mut self) -> Option<Icon> {
        self.file.take_icon()
    }
}

impl Default for Folder {
    fn default() -> Self {
        Self {
            name: DEFAULT_FOLDER_NAME.to_string(),
            files: Vec::new(),
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for file in &self.files {
            writeln!(f, "{}{}", LISTING_INDENT, file.name())?;
        }
        Ok(())
    }
}
