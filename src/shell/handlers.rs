use log::{info, warn};

use crate::error::FolderStoreError;
use crate::shell::parser::{Command, CommandResult};
use crate::storage::{File, FolderRegistry, copy_between, move_between};

const HELP_TEXT: &str = "Commands:
  MKDIR [folder]
  RMDIR <folder>
  FOLDERS
  RENAME <folder> <new-name>
  TOUCH <folder> [file [contents...]]
  WRITE <folder> <file> <contents...>
  CAT <folder> <file>
  RM <folder> <file>
  MV <from-folder> <file> <to-folder>
  CP <from-folder> <file> <to-folder>
  LS <folder>
  DU <folder>
  QUIT";

// Handle a single command against the registry
pub async fn handle_command(registry: &mut FolderRegistry, command: Command) -> CommandResult {
    let outcome = match command {
        Command::Quit => return CommandResult::quit("Goodbye"),
        Command::Help => Ok(CommandResult::reply(HELP_TEXT)),
        Command::Folders => Ok(handle_cmd_folders(registry)),
        Command::Mkdir(name) => handle_cmd_mkdir(registry, &name).await,
        Command::Rmdir(name) => handle_cmd_rmdir(registry, &name),
        Command::Rename { folder, new_name } => {
            handle_cmd_rename(registry, &folder, &new_name).await
        }
        Command::Touch {
            folder,
            file,
            contents,
        } => handle_cmd_touch(registry, &folder, &file, contents).await,
        Command::Write {
            folder,
            file,
            contents,
        } => handle_cmd_write(registry, &folder, &file, contents).await,
        Command::Cat { folder, file } => handle_cmd_cat(registry, &folder, &file).await,
        Command::Rm { folder, file } => handle_cmd_rm(registry, &folder, &file).await,
        Command::Mv { from, file, to } => handle_cmd_mv(registry, &from, &file, &to).await,
        Command::Cp { from, file, to } => handle_cmd_cp(registry, &from, &file, &to).await,
        Command::Ls(name) => handle_cmd_ls(registry, &name).await,
        Command::Du(name) => handle_cmd_du(registry, &name).await,
        Command::Invalid(usage) => Ok(CommandResult::reply(usage)),
        Command::Unknown(line) => {
            warn!("Unknown command: {}", line);
            Ok(CommandResult::reply(format!("Unknown command: {}", line)))
        }
    };

    outcome.unwrap_or_else(|e| {
        warn!("Command failed: {}", e);
        CommandResult::reply(format!("Error: {}", e))
    })
}

// Command handler for FOLDERS
fn handle_cmd_folders(registry: &FolderRegistry) -> CommandResult {
    if registry.is_empty() {
        CommandResult::reply("No folders")
    } else {
        CommandResult::reply(registry.names().join("\n"))
    }
}

// Command handler for MKDIR
async fn handle_cmd_mkdir(
    registry: &mut FolderRegistry,
    name: &str,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.create(name)?;
    let created = shared.lock().await.name().to_string();
    Ok(CommandResult::reply(format!("Created folder {}", created)))
}

// Command handler for RMDIR
fn handle_cmd_rmdir(
    registry: &mut FolderRegistry,
    name: &str,
) -> Result<CommandResult, FolderStoreError> {
    registry.remove(name)?;
    Ok(CommandResult::reply(format!("Removed folder {}", name)))
}

// Command handler for RENAME
async fn handle_cmd_rename(
    registry: &mut FolderRegistry,
    folder: &str,
    new_name: &str,
) -> Result<CommandResult, FolderStoreError> {
    if registry.rename(folder, new_name).await? {
        Ok(CommandResult::reply(format!(
            "Renamed {} to {}",
            folder, new_name
        )))
    } else {
        Ok(CommandResult::reply(format!(
            "Cannot rename {}: invalid name {}",
            folder, new_name
        )))
    }
}

// Command handler for TOUCH
async fn handle_cmd_touch(
    registry: &FolderRegistry,
    folder: &str,
    file_name: &str,
    contents: String,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    let mut file = File::new(file_name, contents, None)?;
    let name = file.name().to_string();

    let mut folder_guard = shared.lock().await;
    if folder_guard.add_file(&mut file) {
        info!("Added {} to {}", name, folder_guard.name());
        Ok(CommandResult::reply(format!(
            "Added {} to {}",
            name,
            folder_guard.name()
        )))
    } else {
        Ok(CommandResult::reply(format!(
            "Cannot add {}: already in {}",
            name,
            folder_guard.name()
        )))
    }
}

// Command handler for WRITE
async fn handle_cmd_write(
    registry: &FolderRegistry,
    folder: &str,
    file_name: &str,
    contents: String,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    let mut folder_guard = shared.lock().await;
    match folder_guard.get_file_mut(file_name) {
        Some(mut file) => {
            file.set_contents(contents);
            Ok(CommandResult::reply(format!(
                "Wrote {} bytes to {}",
                file.size(),
                file_name
            )))
        }
        None => Ok(not_found(file_name, folder)),
    }
}

// Command handler for CAT
async fn handle_cmd_cat(
    registry: &FolderRegistry,
    folder: &str,
    file_name: &str,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    let folder_guard = shared.lock().await;
    match folder_guard.get_file(file_name) {
        Some(file) => Ok(CommandResult::reply(file.to_string())),
        None => Ok(not_found(file_name, folder)),
    }
}

// Command handler for RM
async fn handle_cmd_rm(
    registry: &FolderRegistry,
    folder: &str,
    file_name: &str,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    if shared.lock().await.remove_file(file_name) {
        Ok(CommandResult::reply(format!(
            "Removed {} from {}",
            file_name, folder
        )))
    } else {
        Ok(not_found(file_name, folder))
    }
}

// Command handler for MV
async fn handle_cmd_mv(
    registry: &FolderRegistry,
    from: &str,
    file_name: &str,
    to: &str,
) -> Result<CommandResult, FolderStoreError> {
    let source = registry.get(from)?;
    let destination = registry.get(to)?;
    if move_between(&source, file_name, &destination).await {
        Ok(CommandResult::reply(format!(
            "Moved {} from {} to {}",
            file_name, from, to
        )))
    } else {
        Ok(CommandResult::reply(format!(
            "Cannot move {} from {} to {}",
            file_name, from, to
        )))
    }
}

// Command handler for CP
async fn handle_cmd_cp(
    registry: &FolderRegistry,
    from: &str,
    file_name: &str,
    to: &str,
) -> Result<CommandResult, FolderStoreError> {
    let source = registry.get(from)?;
    let destination = registry.get(to)?;
    if copy_between(&source, file_name, &destination).await {
        Ok(CommandResult::reply(format!(
            "Copied {} from {} to {}",
            file_name, from, to
        )))
    } else {
        Ok(CommandResult::reply(format!(
            "Cannot copy {} from {} to {}",
            file_name, from, to
        )))
    }
}

// Command handler for LS
async fn handle_cmd_ls(
    registry: &FolderRegistry,
    folder: &str,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    let listing = shared.lock().await.display();
    Ok(CommandResult::reply(listing.trim_end()))
}

// Command handler for DU
async fn handle_cmd_du(
    registry: &FolderRegistry,
    folder: &str,
) -> Result<CommandResult, FolderStoreError> {
    let shared = registry.get(folder)?;
    let size = shared.lock().await.size();
    Ok(CommandResult::reply(format!("{} bytes", size)))
}

fn not_found(file_name: &str, folder: &str) -> CommandResult {
    CommandResult::reply(format!("File not found: {} in {}", file_name, folder))
}
