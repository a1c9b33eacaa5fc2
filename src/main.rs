//! Folder Store - Entry Point
//!
//! An interactive shell over in-memory folders of files.

use log::info;
use tokio::io::BufReader;

use folder_store::config::StoreConfig;
use folder_store::error::FolderStoreError;
use folder_store::error::handlers::{error_to_exit_code, handle_error};
use folder_store::shell::run_session;
use folder_store::storage::FolderRegistry;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    info!("Launching folder store shell...");

    if let Err(e) = run().await {
        handle_error(&e);
        std::process::exit(error_to_exit_code(&e));
    }
}

async fn run() -> Result<(), FolderStoreError> {
    let config = StoreConfig::load()?;

    let mut registry = FolderRegistry::from_config(&config)?;
    info!(
        "Loaded {} folders (max {})",
        registry.len(),
        config.max_folders
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(&mut registry, &config.prompt, stdin, &mut stdout).await
}
