//! Handle on a project directory

use crate::config::ProjectConfig;
use crate::error::{ProjectError, ProjectResult};
use crate::meta::ProjectMeta;
use crate::paths::ProjectPaths;
use std::path::{Path, PathBuf};

/// An opened project
///
/// Holds paths and the project config. The meta registry is read fresh on
/// every call because external plugins may rewrite it between prompts.
#[derive(Debug, Clone)]
pub struct Project {
    paths: ProjectPaths,
    config: ProjectConfig,
}

impl Project {
    /// Open the project rooted at `root`
    ///
    /// A missing `project-config.json` is tolerated; the project name then
    /// falls back to the directory name.
    pub fn open(root: impl Into<PathBuf>) -> ProjectResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ProjectError::NotADirectory(root));
        }
        let paths = ProjectPaths::new(root);

        let config = match ProjectConfig::load_optional(&paths.project_config_file())? {
            Some(config) => config,
            None => {
                let name = paths
                    .root()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::debug!("No project config, using directory name '{}'", name);
                ProjectConfig::new(name)
            }
        };

        Ok(Self { paths, config })
    }

    /// Build from parts, without touching disk
    #[inline]
    #[must_use]
    pub fn from_parts(paths: ProjectPaths, config: ProjectConfig) -> Self {
        Self { paths, config }
    }

    /// Path resolver
    #[inline]
    #[must_use]
    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Project root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Project config
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Project name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.project_name
    }

    /// Read the meta registry; missing file means empty
    pub fn load_meta(&self) -> ProjectResult<ProjectMeta> {
        ProjectMeta::load_or_default(&self.paths.meta_file())
    }

    /// Write the meta registry
    pub fn save_meta(&self, meta: &ProjectMeta) -> ProjectResult<()> {
        meta.save(&self.paths.meta_file())
    }

    /// Directory of a resource
    #[must_use]
    pub fn resource_dir(&self, category: &str, resource: &str) -> PathBuf {
        self.paths.resource_dir(category, resource)
    }
}
