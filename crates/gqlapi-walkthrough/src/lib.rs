//! gqlapi Walkthroughs
//!
//! Interactive flows that create and update the project's managed GraphQL
//! API resource.
//!
//! # Flows
//!
//! - **Add**: API name → authorization → schema source → compile
//! - **Update**: authorization → project meta → compile
//!
//! Both share the [`AuthSelector`], which keeps the parameter set in step
//! with the chosen authorization mode.
//!
//! # Collaborators
//!
//! ```text
//! Terminal ──► walkthrough ──► SchemaCompiler
//!                  │  └──────► IdentityProvider
//!                  └─────────► Editor
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use gqlapi_walkthrough::{service_walkthrough, AddOutcome, WalkthroughContext};
//!
//! # async fn example(ctx: WalkthroughContext<'_>) -> Result<(), Box<dyn std::error::Error>> {
//! match service_walkthrough(&ctx).await? {
//!     AddOutcome::Created(result) => result.register(ctx.project)?,
//!     AddOutcome::AlreadyExists { .. } => {}
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod auth;
pub mod compiler;
pub mod context;
pub mod editor;
pub mod error;
pub mod prompt;
pub mod question;
pub mod schema;
pub mod service;
pub mod update;

pub use auth::{AuthMode, AuthSelector, IdentityProvider};
pub use compiler::{CompileRequest, SchemaCompiler};
pub use context::WalkthroughContext;
pub use editor::{Editor, EditorChoice};
pub use error::{
    CompileError, EditorError, PromptError, ProviderError, WalkthroughError, WalkthroughResult,
};
pub use prompt::{Notice, Terminal};
pub use question::{Choice, Question, ServiceDefaults, ServiceInputs};
pub use schema::SchemaTemplate;
pub use service::{service_walkthrough, AddOutcome, AddResult, ResourceAnswers, ResourceOutput};
pub use update::{update_walkthrough, UpdateOutcome};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a walkthrough
    pub use crate::{
        service_walkthrough, update_walkthrough, AddOutcome, AuthMode, CompileRequest, Editor,
        EditorChoice, IdentityProvider, SchemaCompiler, Terminal, UpdateOutcome,
        WalkthroughContext,
    };
    pub use gqlapi_project::{Project, ResourceParameters};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
