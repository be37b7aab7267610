//! Identity-provider plugin backed by an external command

use crate::config::CommandConfig;
use gqlapi_project::Project;
use gqlapi_walkthrough::{IdentityProvider, ProviderError};
use std::process::Stdio;
use tokio::process::Command;

/// Runs the configured auth plugin in the project root
///
/// The plugin may prompt the operator itself, so stdin and stderr are
/// inherited. The last non-empty stdout line is the new resource name.
#[derive(Debug, Clone, Default)]
pub struct CommandIdentityProvider {
    config: CommandConfig,
}

impl CommandIdentityProvider {
    /// Create provider from config
    #[inline]
    #[must_use]
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }
}

/// Resource name reported on stdout
fn resource_name(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .last()
        .map(str::to_string)
}

#[async_trait::async_trait]
impl IdentityProvider for CommandIdentityProvider {
    async fn add(&self, project: &Project) -> Result<String, ProviderError> {
        let program = self
            .config
            .command
            .as_deref()
            .ok_or(ProviderError::NotInstalled)?;

        let output = Command::new(program)
            .args(&self.config.args)
            .current_dir(project.root())
            // Shares the operator's stdin; piped answers are not forwarded.
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ProviderError::NotInstalled,
                _ => ProviderError::Failed(e.to_string()),
            })?;

        if !output.status.success() {
            return Err(ProviderError::Failed(format!(
                "{program} exited with {}",
                output.status
            )));
        }

        resource_name(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            ProviderError::Failed(format!("{program} did not report a resource name"))
        })
    }
}
