//! Schema compiler backed by an external command

use crate::config::CommandConfig;
use gqlapi_project::paths::PARAMETERS_FILE_NAME;
use gqlapi_walkthrough::{CompileError, CompileRequest, SchemaCompiler};
use tokio::process::Command;

/// Writes `parameters.json`, then runs the configured compiler
///
/// The compiler receives `--resource-dir <dir>` and, for a bare base schema,
/// `--no-config`. With no command configured only the parameters are written.
#[derive(Debug, Clone, Default)]
pub struct CommandCompiler {
    config: CommandConfig,
}

impl CommandCompiler {
    /// Create compiler from config
    #[inline]
    #[must_use]
    pub fn new(config: CommandConfig) -> Self {
        Self { config }
    }

    fn command(&self, program: &str, request: &CompileRequest) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(&self.config.args)
            .arg("--resource-dir")
            .arg(&request.resource_dir);
        if request.no_config {
            cmd.arg("--no-config");
        }
        cmd
    }
}

#[async_trait::async_trait]
impl SchemaCompiler for CommandCompiler {
    async fn compile(&self, request: CompileRequest) -> Result<(), CompileError> {
        let parameters_path = request.resource_dir.join(PARAMETERS_FILE_NAME);
        request.parameters.save(&parameters_path)?;
        tracing::debug!("Wrote {}", parameters_path.display());

        let Some(program) = self.config.command.as_deref() else {
            tracing::warn!("No schema compiler configured, skipping compilation");
            return Ok(());
        };

        let status = self
            .command(program, &request)
            .status()
            .await
            .map_err(|source| CompileError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed {
                status: status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlapi_project::ResourceParameters;

    fn request(dir: &std::path::Path) -> CompileRequest {
        CompileRequest::new(dir.join("api").join("todo"), ResourceParameters::for_api("todo"))
    }

    #[tokio::test]
    async fn unconfigured_writes_parameters_only() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path());
        let params_path = req.resource_dir.join("parameters.json");

        CommandCompiler::default().compile(req).await.unwrap();

        assert_eq!(
            ResourceParameters::load(&params_path).unwrap(),
            ResourceParameters::for_api("todo")
        );
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = CommandCompiler::new(CommandConfig::new("gqlapi-no-such-compiler"));

        let err = compiler.compile(request(dir.path())).await.unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn passes_resource_dir_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.txt");
        let script = format!("echo \"$@\" > {}", log.display());
        let compiler = CommandCompiler::new(
            CommandConfig::new("sh").with_args(["-c", script.as_str(), "compiler"]),
        );

        let req = request(dir.path()).without_config();
        let resource_dir = req.resource_dir.clone();
        compiler.compile(req).await.unwrap();

        let args = std::fs::read_to_string(log).unwrap();
        assert_eq!(
            args.trim(),
            format!("--resource-dir {} --no-config", resource_dir.display())
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let compiler =
            CommandCompiler::new(CommandConfig::new("sh").with_args(["-c", "exit 3"]));

        let err = compiler.compile(request(dir.path())).await.unwrap_err();
        assert!(matches!(err, CompileError::Failed { .. }));
    }
}
