//! Error types for the walkthroughs
//!
//! Provides error handling for:
//! - Prompting (operator input closed, terminal IO)
//! - Schema compilation (external compiler failures)
//! - Identity provider creation (plugin missing or failing)
//! - Editor invocation (non-fatal, reported to the operator)

use gqlapi_project::ProjectError;
use std::path::PathBuf;

/// Errors from the operator terminal
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input ended before a question was answered
    #[error("input closed while waiting for an answer to '{0}'")]
    Closed(String),

    /// Terminal IO failed
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the schema compiler
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// Compiler could not be launched
    #[error("failed to run schema compiler '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Launch error
        #[source]
        source: std::io::Error,
    },

    /// Compiler ran and reported failure
    #[error("schema compiler exited with {status}")]
    Failed {
        /// Exit status as reported by the OS
        status: String,
    },

    /// Persisting compiler inputs failed
    #[error("project error: {0}")]
    Project(#[from] ProjectError),
}

/// Errors from the identity-provider plugin
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Plugin is not available
    #[error("identity provider plugin not installed")]
    NotInstalled,

    /// Plugin ran but did not produce a resource
    #[error("identity provider failed: {0}")]
    Failed(String),
}

/// Errors opening the schema in an editor
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// No editor could be resolved or launched
    #[error("editor not found: {0}")]
    NotFound(String),

    /// Editor exited unsuccessfully
    #[error("editor exited with {0}")]
    Exited(String),

    /// IO error launching the editor
    #[error("editor io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Combined walkthrough error
#[derive(Debug, thiserror::Error)]
pub enum WalkthroughError {
    /// Question could not be answered
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Project files could not be read or written
    #[error("project error: {0}")]
    Project(#[from] ProjectError),

    /// Schema compilation failed
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// IO error placing the schema file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Operator picked a template that is not bundled
    #[error("unknown schema template: {0}")]
    UnknownTemplate(String),

    /// Operator picked an authorization mode that is not offered
    #[error("unknown authorization type: {0}")]
    UnknownAuthMode(String),
}

impl WalkthroughError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for walkthrough operations
pub type WalkthroughResult<T> = Result<T, WalkthroughError>;
