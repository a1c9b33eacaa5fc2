//! Configuration management for the folder store shell
//!
//! Loads `config.toml` (optional) with `FOLDER_STORE_*` environment overrides.
//! Only scalar settings (`prompt`, `max_folders`) can be overridden from the
//! environment; `initial_folders` comes from the file.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::storage::validate_folder_name;

const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_MAX_FOLDERS: usize = 64;
const ENV_PREFIX: &str = "FOLDER_STORE";

/// Shell configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Folders created when the shell starts
    pub initial_folders: Vec<String>,

    /// Prompt written before each command
    /// Environment: FOLDER_STORE_PROMPT
    pub prompt: String,

    /// Maximum number of folders the registry may hold
    /// Environment: FOLDER_STORE_MAX_FOLDERS
    pub max_folders: usize,
}

impl StoreConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env("config", false)
    }

    fn load_with_env(path: &str, required: bool) -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?
            .add_source(File::with_name(path).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Self::finish(settings)
    }

    /// Load configuration from the given file only
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?
            .add_source(File::with_name(path))
            .build()?;
        Self::finish(settings)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        Config::builder()
            .set_default("initial_folders", Vec::<String>::new())?
            .set_default("prompt", DEFAULT_PROMPT)?
            .set_default("max_folders", DEFAULT_MAX_FOLDERS as i64)
    }

    fn finish(settings: Config) -> Result<Self, config::ConfigError> {
        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.max_folders == 0 {
            return Err(config::ConfigError::Message(
                "max_folders must be greater than 0".into(),
            ));
        }

        if self.initial_folders.len() > self.max_folders {
            return Err(config::ConfigError::Message(format!(
                "{} initial folders exceed max_folders ({})",
                self.initial_folders.len(),
                self.max_folders
            )));
        }

        for name in &self.initial_folders {
            if let Err(e) = validate_folder_name(name) {
                return Err(config::ConfigError::Message(format!(
                    "initial_folders: {}",
                    e
                )));
            }
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_folders: Vec::new(),
            prompt: DEFAULT_PROMPT.to_string(),
            max_folders: DEFAULT_MAX_FOLDERS,
        }
    }
}
