//! Editor launcher

use gqlapi_walkthrough::{Editor, EditorChoice, EditorError};
use std::path::Path;
use tokio::process::Command;

/// Spawns the chosen editor and waits for it to exit
///
/// "None" resolves to the configured default, then `$VISUAL`, then `$EDITOR`.
#[derive(Debug, Clone, Default)]
pub struct CommandEditor {
    default: Option<String>,
}

impl CommandEditor {
    /// Create launcher with an optional fallback command
    #[inline]
    #[must_use]
    pub fn new(default: Option<String>) -> Self {
        Self { default }
    }

    /// Command line for `choice`, if one can be resolved
    #[must_use]
    pub fn resolve(&self, choice: EditorChoice) -> Option<String> {
        if let Some(program) = choice.program() {
            return Some(program.to_string());
        }
        self.default
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|cmd| !cmd.trim().is_empty())
    }
}

#[async_trait::async_trait]
impl Editor for CommandEditor {
    async fn open(&self, path: &Path, choice: EditorChoice) -> Result<(), EditorError> {
        let command_line = self.resolve(choice).ok_or_else(|| {
            EditorError::NotFound("no editor configured; set $VISUAL or $EDITOR".to_string())
        })?;

        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| EditorError::NotFound(command_line.clone()))?;

        tracing::debug!("Opening {} with {}", path.display(), command_line);
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => EditorError::NotFound(program.to_string()),
                _ => EditorError::Io(e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::Exited(status.to_string()))
        }
    }
}
