//! gqlapi Project Model
//!
//! Everything the wizard knows about a scaffolded project on disk:
//!
//! - **Paths**: backend directory, meta file and per-resource directories
//! - **Meta**: the category → resource → descriptor registry (`amplify-meta.json`)
//! - **Parameters**: per-resource `parameters.json` with deferred references
//! - **Config**: project-level settings such as the project name
//!
//! # Layout
//!
//! ```text
//! <root>/amplify/.config/project-config.json
//! <root>/amplify/backend/amplify-meta.json
//! <root>/amplify/backend/<category>/<resource>/parameters.json
//! <root>/amplify/backend/<category>/<resource>/schema.graphql
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use gqlapi_project::{Project, API_CATEGORY, APPSYNC_SERVICE};
//!
//! let project = Project::open("/path/to/app")?;
//! let meta = project.load_meta()?;
//! if let Some(name) = meta.find_first(API_CATEGORY, APPSYNC_SERVICE) {
//!     println!("api resource: {name}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod meta;
pub mod parameters;
pub mod paths;
pub mod project;

pub use config::ProjectConfig;
pub use error::{ProjectError, ProjectResult};
pub use meta::{ProjectMeta, ResourceDescriptor};
pub use parameters::{CrossResourceRef, ResourceParameters, UserPoolId};
pub use paths::ProjectPaths;
pub use project::Project;

/// Category holding GraphQL API resources
pub const API_CATEGORY: &str = "api";

/// Service type of the managed GraphQL API
pub const APPSYNC_SERVICE: &str = "AppSync";

/// Category holding identity providers
pub const AUTH_CATEGORY: &str = "auth";

/// Service type of the user-pool identity provider
pub const COGNITO_SERVICE: &str = "Cognito";

/// Provider plugin recorded on resources created by the wizard
pub const PROVIDER_PLUGIN: &str = "awscloudformation";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
