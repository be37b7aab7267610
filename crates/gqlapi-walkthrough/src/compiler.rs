//! Schema compilation seam

use crate::error::CompileError;
use gqlapi_project::ResourceParameters;
use std::path::PathBuf;

/// Inputs handed to the schema compiler
#[derive(Debug, Clone, PartialEq)]
pub struct CompileRequest {
    /// Resource directory holding `schema.graphql`
    pub resource_dir: PathBuf,
    /// Parameters to persist alongside the compiled output
    pub parameters: ResourceParameters,
    /// Compile without a transform config (bare base schema)
    pub no_config: bool,
}

impl CompileRequest {
    /// Create request
    #[inline]
    #[must_use]
    pub fn new(resource_dir: impl Into<PathBuf>, parameters: ResourceParameters) -> Self {
        Self {
            resource_dir: resource_dir.into(),
            parameters,
            no_config: false,
        }
    }

    /// Mark as no-config compilation
    #[inline]
    #[must_use]
    pub fn without_config(mut self) -> Self {
        self.no_config = true;
        self
    }
}

/// External schema compiler
///
/// Implementations persist the parameter set into the resource directory.
#[async_trait::async_trait]
pub trait SchemaCompiler: Send + Sync {
    /// Compile the schema in `request.resource_dir`
    async fn compile(&self, request: CompileRequest) -> Result<(), CompileError>;
}
