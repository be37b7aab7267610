//! Collaborators shared by the walkthroughs

use crate::auth::{AuthSelector, IdentityProvider};
use crate::compiler::SchemaCompiler;
use crate::editor::Editor;
use crate::prompt::Terminal;
use crate::question::{ServiceDefaults, ServiceInputs};
use gqlapi_project::Project;
use std::path::PathBuf;

/// Everything a walkthrough talks to
pub struct WalkthroughContext<'a> {
    /// Project being modified
    pub project: &'a Project,
    /// Operator terminal
    pub terminal: &'a dyn Terminal,
    /// Schema compiler
    pub compiler: &'a dyn SchemaCompiler,
    /// Identity-provider plugin
    pub identity: &'a dyn IdentityProvider,
    /// Editor launcher
    pub editor: &'a dyn Editor,
    /// Question catalogue
    pub inputs: ServiceInputs,
    /// Base for relative paths typed by the operator
    pub working_dir: PathBuf,
}

impl<'a> WalkthroughContext<'a> {
    /// Create context with the AppSync question catalogue
    #[must_use]
    pub fn new(
        project: &'a Project,
        terminal: &'a dyn Terminal,
        compiler: &'a dyn SchemaCompiler,
        identity: &'a dyn IdentityProvider,
        editor: &'a dyn Editor,
    ) -> Self {
        let working_dir =
            std::env::current_dir().unwrap_or_else(|_| project.root().to_path_buf());
        Self {
            project,
            terminal,
            compiler,
            identity,
            editor,
            inputs: ServiceInputs::appsync(),
            working_dir,
        }
    }

    /// With a different base for relative paths
    #[inline]
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Authorization selector bound to this context
    #[must_use]
    pub fn auth_selector(&self) -> AuthSelector<'a> {
        AuthSelector::new(self.project, self.terminal, self.identity)
    }

    /// Defaults derived from the project
    #[must_use]
    pub fn defaults(&self) -> ServiceDefaults {
        ServiceDefaults::for_project(self.project.name())
    }
}
