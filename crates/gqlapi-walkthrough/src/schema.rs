//! Bundled schema templates

use crate::error::{WalkthroughError, WalkthroughResult};
use crate::question::{MANY_RELATIONSHIP_TEMPLATE, SINGLE_OBJECT_TEMPLATE};
use gqlapi_project::paths::SCHEMA_FILE_NAME;
use std::path::{Path, PathBuf};

/// Schema written when guided creation is declined
pub const BASIC_TEMPLATE: &str = "basic-schema.graphql";

/// A schema shipped with the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTemplate {
    /// Single `Todo` type
    Basic,
    /// Single object with fields
    SingleObject,
    /// Blog → Post → Comment
    ManyRelationship,
}

impl SchemaTemplate {
    /// Template for a bundled file name
    pub fn from_file_name(name: &str) -> WalkthroughResult<Self> {
        match name {
            BASIC_TEMPLATE => Ok(Self::Basic),
            SINGLE_OBJECT_TEMPLATE => Ok(Self::SingleObject),
            MANY_RELATIONSHIP_TEMPLATE => Ok(Self::ManyRelationship),
            other => Err(WalkthroughError::UnknownTemplate(other.to_string())),
        }
    }

    /// Bundled file name
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Basic => BASIC_TEMPLATE,
            Self::SingleObject => SINGLE_OBJECT_TEMPLATE,
            Self::ManyRelationship => MANY_RELATIONSHIP_TEMPLATE,
        }
    }

    /// Schema text
    #[must_use]
    pub const fn contents(self) -> &'static str {
        match self {
            Self::Basic => include_str!("../schemas/basic-schema.graphql"),
            Self::SingleObject => include_str!("../schemas/single-object-schema.graphql"),
            Self::ManyRelationship => include_str!("../schemas/many-relationship-schema.graphql"),
        }
    }

    /// Write into `resource_dir` as `schema.graphql`
    pub fn install(self, resource_dir: &Path) -> WalkthroughResult<PathBuf> {
        let target = prepare_target(resource_dir)?;
        std::fs::write(&target, self.contents())
            .map_err(|e| WalkthroughError::io_error(&target, e))?;
        tracing::debug!("Wrote {} to {}", self.file_name(), target.display());
        Ok(target)
    }
}

/// Copy an operator-supplied schema into `resource_dir` as `schema.graphql`
pub fn copy_schema(source: &Path, resource_dir: &Path) -> WalkthroughResult<PathBuf> {
    let target = prepare_target(resource_dir)?;
    std::fs::copy(source, &target).map_err(|e| WalkthroughError::io_error(source, e))?;
    tracing::debug!("Copied {} to {}", source.display(), target.display());
    Ok(target)
}

fn prepare_target(resource_dir: &Path) -> WalkthroughResult<PathBuf> {
    std::fs::create_dir_all(resource_dir)
        .map_err(|e| WalkthroughError::io_error(resource_dir, e))?;
    Ok(resource_dir.join(SCHEMA_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_by_name() {
        for template in [
            SchemaTemplate::Basic,
            SchemaTemplate::SingleObject,
            SchemaTemplate::ManyRelationship,
        ] {
            assert_eq!(
                SchemaTemplate::from_file_name(template.file_name()).unwrap(),
                template
            );
            assert!(template.contents().contains("@model"));
        }
        assert!(SchemaTemplate::from_file_name("custom.graphql").is_err());
    }

    #[test]
    fn install_creates_resource_dir() {
        let dir = tempfile::tempdir().unwrap();
        let resource_dir = dir.path().join("api").join("todo");

        let target = SchemaTemplate::ManyRelationship.install(&resource_dir).unwrap();
        assert_eq!(target, resource_dir.join("schema.graphql"));
        assert!(std::fs::read_to_string(target).unwrap().contains("type Comment"));
    }

    #[test]
    fn copy_missing_source_reports_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.graphql");
        let err = copy_schema(&missing, &dir.path().join("res")).unwrap_err();
        assert!(err.to_string().contains("nope.graphql"));
    }
}
