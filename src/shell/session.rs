//! Shell session
//!
//! Reads commands line by line and writes one reply per command.

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::FolderStoreError;
use crate::shell::handlers::handle_command;
use crate::shell::parser::{CommandStatus, parse_command};
use crate::storage::FolderRegistry;

/// Runs commands from `reader` until QUIT or end of input.
pub async fn run_session<R, W>(
    registry: &mut FolderRegistry,
    prompt: &str,
    mut reader: R,
    writer: &mut W,
) -> Result<(), FolderStoreError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let mut commands = 0usize;

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            info!("Input closed after {} commands", commands);
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        commands += 1;
        let result = handle_command(registry, parse_command(&line)).await;

        if let Some(msg) = result.message {
            writer.write_all(msg.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }

        if result.status == CommandStatus::Quit {
            info!("Session ended by QUIT after {} commands", commands);
            break;
        }
    }

    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_stops_at_quit() {
        let mut registry = FolderRegistry::default();
        let input: &[u8] = b"MKDIR Docs\n\nQUIT\nMKDIR Never\n";
        let mut output = Vec::new();

        run_session(&mut registry, "$ ", input, &mut output)
            .await
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "$ Created folder Docs\n$ $ Goodbye\n");
        assert_eq!(registry.names(), vec!["Docs"]);
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let mut registry = FolderRegistry::default();
        let input: &[u8] = b"FOLDERS";
        let mut output = Vec::new();

        run_session(&mut registry, "", input, &mut output)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "No folders\n");
    }
}
