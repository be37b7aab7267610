//! Project-level configuration (`project-config.json`)

use crate::error::{read_json, ProjectResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Settings shared by every category of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Human name of the project
    #[serde(default)]
    pub project_name: String,
    /// Everything else
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectConfig {
    /// Create config with a project name
    #[inline]
    #[must_use]
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            extra: Map::new(),
        }
    }

    /// Load from `path`; a missing file yields `None`
    pub fn load_optional(path: &Path) -> ProjectResult<Option<Self>> {
        match read_json(path) {
            Ok(config) => Ok(Some(config)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
