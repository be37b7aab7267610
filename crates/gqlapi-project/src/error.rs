//! Error types for the project model
//!
//! Every filesystem or JSON failure carries the path it happened on so the
//! operator can see which file is broken.

use std::path::PathBuf;

/// Errors reading or writing project files
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// IO error on a project file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed or unserializable JSON
    #[error("invalid json in {path}: {source}")]
    Json {
        /// File being parsed or written
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Resource not present in the project meta
    #[error("resource not found: {category}/{resource}")]
    ResourceNotFound {
        /// Category looked in
        category: String,
        /// Missing resource name
        resource: String,
    },

    /// Project root does not exist or is not a directory
    #[error("not a project directory: {0}")]
    NotADirectory(PathBuf),
}

impl ProjectError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create JSON error for path
    pub fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create resource-not-found error
    pub fn resource_not_found(category: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            category: category.into(),
            resource: resource.into(),
        }
    }

    /// Whether the underlying cause is a missing file
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for project operations
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Write `value` as JSON, indented with the given bytes, to `path`
pub(crate) fn write_json<T: serde::Serialize>(
    path: &std::path::Path,
    value: &T,
    indent: &[u8],
) -> ProjectResult<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| ProjectError::json_error(path, e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ProjectError::io_error(parent, e))?;
    }
    std::fs::write(path, buf).map_err(|e| ProjectError::io_error(path, e))
}

/// Read and deserialize JSON from `path`
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> ProjectResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|e| ProjectError::io_error(path, e))?;
    serde_json::from_str(&raw).map_err(|e| ProjectError::json_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = ProjectError::io_error(
            "/tmp/x.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/x.json"));
        assert!(err.is_not_found());
    }

    #[test]
    fn resource_not_found_display() {
        let err = ProjectError::resource_not_found("api", "todo");
        assert_eq!(err.to_string(), "resource not found: api/todo");
        assert!(!err.is_not_found());
    }
}
