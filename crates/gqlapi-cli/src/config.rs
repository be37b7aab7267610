//! Wizard configuration
//!
//! Read from `amplify/.config/gqlapi.toml` in the project, or from an
//! explicit `--config` path. Every section is optional.
//!
//! ```toml
//! [compiler]
//! command = "graphql-transform"
//! args = ["compile"]
//!
//! [identity_provider]
//! command = "auth-plugin"
//! args = ["add", "--service", "Cognito"]
//!
//! [editor]
//! default = "code --wait"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the config file inside `amplify/.config`
pub const CONFIG_FILE_NAME: &str = "gqlapi.toml";

/// Errors loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config in {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },
}

/// An external program and its leading arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Program to run; unset means "not available"
    pub command: Option<String>,
    /// Arguments placed before any the wizard adds
    pub args: Vec<String>,
}

impl CommandConfig {
    /// Create config for `command`
    #[inline]
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            args: Vec::new(),
        }
    }

    /// With arguments
    #[inline]
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// Editor settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command used when the operator picks "None"
    pub default: Option<String>,
}

/// Wizard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Schema compiler
    pub compiler: CommandConfig,
    /// Identity-provider plugin
    pub identity_provider: CommandConfig,
    /// Editor
    pub editor: EditorConfig,
}

impl WizardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With schema compiler
    #[inline]
    #[must_use]
    pub fn with_compiler(mut self, compiler: CommandConfig) -> Self {
        self.compiler = compiler;
        self
    }

    /// With identity-provider plugin
    #[inline]
    #[must_use]
    pub fn with_identity_provider(mut self, provider: CommandConfig) -> Self {
        self.identity_provider = provider;
        self
    }

    /// With fallback editor command
    #[inline]
    #[must_use]
    pub fn with_default_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor.default = Some(editor.into());
        self
    }

    /// Parse from TOML text
    pub fn from_toml(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &raw)
    }

    /// Resolve the config for a project
    ///
    /// An explicit path must exist. Otherwise the project's config file is
    /// used when present, and defaults when not.
    pub fn discover(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = project_root
            .join("amplify")
            .join(".config")
            .join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_full_config() {
        let raw = r#"
            [compiler]
            command = "graphql-transform"
            args = ["compile"]

            [identity_provider]
            command = "auth-plugin"

            [editor]
            default = "code --wait"
        "#;
        let config = WizardConfig::from_toml(Path::new("gqlapi.toml"), raw).unwrap();

        assert_eq!(
            config,
            WizardConfig::new()
                .with_compiler(CommandConfig::new("graphql-transform").with_args(["compile"]))
                .with_identity_provider(CommandConfig::new("auth-plugin"))
                .with_default_editor("code --wait")
        );
    }

    #[test]
    fn empty_config_is_default() {
        let config = WizardConfig::from_toml(Path::new("gqlapi.toml"), "").unwrap();
        assert_eq!(config, WizardConfig::default());
        assert!(config.compiler.command.is_none());
    }

    #[test]
    fn parse_error_names_file() {
        let err = WizardConfig::from_toml(Path::new("broken.toml"), "[compiler").unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn discover_prefers_project_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            WizardConfig::discover(dir.path(), None).unwrap(),
            WizardConfig::default()
        );

        let config_dir = dir.path().join("amplify").join(".config");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join(CONFIG_FILE_NAME),
            "[compiler]\ncommand = \"tx\"\n",
        )
        .unwrap();

        let config = WizardConfig::discover(dir.path(), None).unwrap();
        assert_eq!(config.compiler.command.as_deref(), Some("tx"));
    }

    #[test]
    fn discover_explicit_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = WizardConfig::discover(dir.path(), Some(&dir.path().join("nope.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
