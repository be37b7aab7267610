//! Fixed locations inside a project

use std::path::{Path, PathBuf};

const AMPLIFY_DIR: &str = "amplify";
const BACKEND_DIR: &str = "backend";
const CONFIG_DIR: &str = ".config";
const META_FILE_NAME: &str = "amplify-meta.json";
const PROJECT_CONFIG_FILE_NAME: &str = "project-config.json";

/// Name of the parameters file inside a resource directory
pub const PARAMETERS_FILE_NAME: &str = "parameters.json";

/// Name of the schema file inside a resource directory
pub const SCHEMA_FILE_NAME: &str = "schema.graphql";

/// Path resolver rooted at a project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Create resolver for project root
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/amplify/backend`
    #[must_use]
    pub fn backend_dir(&self) -> PathBuf {
        self.root.join(AMPLIFY_DIR).join(BACKEND_DIR)
    }

    /// `<root>/amplify/.config`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(AMPLIFY_DIR).join(CONFIG_DIR)
    }

    /// `<root>/amplify/backend/amplify-meta.json`
    #[must_use]
    pub fn meta_file(&self) -> PathBuf {
        self.backend_dir().join(META_FILE_NAME)
    }

    /// `<root>/amplify/.config/project-config.json`
    #[must_use]
    pub fn project_config_file(&self) -> PathBuf {
        self.config_dir().join(PROJECT_CONFIG_FILE_NAME)
    }

    /// `<root>/amplify/backend/<category>/<resource>`
    #[must_use]
    pub fn resource_dir(&self, category: &str, resource: &str) -> PathBuf {
        self.backend_dir().join(category).join(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout() {
        let paths = ProjectPaths::new("/app");
        assert_eq!(paths.backend_dir(), PathBuf::from("/app/amplify/backend"));
        assert_eq!(
            paths.meta_file(),
            PathBuf::from("/app/amplify/backend/amplify-meta.json")
        );
        assert_eq!(
            paths.project_config_file(),
            PathBuf::from("/app/amplify/.config/project-config.json")
        );
        assert_eq!(
            paths.resource_dir("api", "todo").join(PARAMETERS_FILE_NAME),
            PathBuf::from("/app/amplify/backend/api/todo/parameters.json")
        );
    }
}
