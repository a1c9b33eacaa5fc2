//! Folder registry
//!
//! Tracks the named folders a shell session works with.

use log::{info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::{FolderStoreError, RegistryError};
use crate::storage::folder::Folder;
use crate::storage::shared::{SharedFolder, share};

/// Registry of folders keyed by folder name
pub struct FolderRegistry {
    folders: BTreeMap<String, SharedFolder>,
    max_folders: usize,
}

impl FolderRegistry {
    pub fn new(max_folders: usize) -> Self {
        Self {
            folders: BTreeMap::new(),
            max_folders,
        }
    }

    /// Builds a registry holding the configured initial folders
    pub fn from_config(config: &StoreConfig) -> Result<Self, FolderStoreError> {
        let mut registry = Self::new(config.max_folders);
        for name in &config.initial_folders {
            registry.create(name)?;
        }
        Ok(registry)
    }

    /// Creates an empty folder. An empty name creates `NewFolder`.
    pub fn create(&mut self, name: &str) -> Result<SharedFolder, FolderStoreError> {
        let folder = Folder::new(name)?;

        if self.folders.contains_key(folder.name()) {
            return Err(RegistryError::FolderExists(folder.name().to_string()).into());
        }

        if self.folders.len() >= self.max_folders {
            warn!(
                "Refused folder {}: registry full ({} folders)",
                folder.name(),
                self.max_folders
            );
            return Err(RegistryError::CapacityReached(self.max_folders).into());
        }

        let key = folder.name().to_string();
        let shared = share(folder);
        self.folders.insert(key.clone(), Arc::clone(&shared));

        info!(
            "Created folder {} ({}/{} folders)",
            key,
            self.folders.len(),
            self.max_folders
        );
        Ok(shared)
    }

    pub fn get(&self, name: &str) -> Result<SharedFolder, RegistryError> {
        self.folders
            .get(name)
            .map(Arc::clone)
            .ok_or_else(|| RegistryError::FolderNotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<SharedFolder, RegistryError> {
        let removed = self
            .folders
            .remove(name)
            .ok_or_else(|| RegistryError::FolderNotFound(name.to_string()))?;
        info!("Removed folder {}", name);
        Ok(removed)
    }

    /// Renames a folder and re-keys it.
    ///
    /// Returns `Ok(false)` when the folder rejects the new name; the
    /// registry is unchanged in that case.
    pub async fn rename(&mut self, old_name: &str, new_name: &str) -> Result<bool, FolderStoreError> {
        let shared = self.get(old_name)?;

        if new_name != old_name && self.folders.contains_key(new_name) {
            return Err(RegistryError::FolderExists(new_name.to_string()).into());
        }

        let renamed = {
            let mut folder = shared.lock().await;
            if !folder.rename(new_name) {
                return Ok(false);
            }
            folder.name().to_string()
        };

        self.folders.remove(old_name);
        self.folders.insert(renamed.clone(), shared);
        info!("Renamed folder {} to {}", old_name, renamed);
        Ok(true)
    }

    /// Folder names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.folders.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

impl Default for FolderRegistry {
    fn default() -> Self {
        Self::new(StoreConfig::default().max_folders)
    }
}
