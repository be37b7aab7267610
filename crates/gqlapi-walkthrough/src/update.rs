//! Update walkthrough
//!
//! Re-asks the authorization question for the existing API resource,
//! records the new mode in the project meta and recompiles.

use crate::auth::AuthMode;
use crate::compiler::CompileRequest;
use crate::context::WalkthroughContext;
use crate::error::WalkthroughResult;
use crate::service::SECURITY_TYPE_KEY;
use gqlapi_project::paths::PARAMETERS_FILE_NAME;
use gqlapi_project::{ProjectError, ResourceParameters, API_CATEGORY, APPSYNC_SERVICE};

/// Shown when there is nothing to update
pub const NO_RESOURCE_MESSAGE: &str = "No appsync resource to update. \
     Please use \"gqlapi add\" command to create an AppSync API";

/// How an update walkthrough ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Resource updated and recompiled
    Updated {
        /// Resource that was updated
        resource_name: String,
        /// Mode now in effect
        auth_mode: AuthMode,
    },
    /// Project has no API resource
    NoResource,
}

/// Run the update walkthrough
pub async fn update_walkthrough(ctx: &WalkthroughContext<'_>) -> WalkthroughResult<UpdateOutcome> {
    let Some(resource_name) = ctx
        .project
        .load_meta()?
        .find_first(API_CATEGORY, APPSYNC_SERVICE)
        .map(str::to_string)
    else {
        return Ok(UpdateOutcome::NoResource);
    };

    let resource_dir = ctx.project.resource_dir(API_CATEGORY, &resource_name);
    let parameters_path = resource_dir.join(PARAMETERS_FILE_NAME);

    // Malformed JSON is fatal so the file is never overwritten with defaults.
    let mut parameters = match ResourceParameters::load(&parameters_path) {
        Ok(parameters) => parameters,
        Err(e @ ProjectError::Io { .. }) => {
            ctx.terminal.error("Parameters file not found");
            tracing::info!("{}", e);
            ResourceParameters::default()
        }
        Err(e) => return Err(e.into()),
    };

    let auth_mode = ctx.auth_selector().select(&mut parameters).await?;

    // The selector may have added an identity provider, so reload.
    let mut meta = ctx.project.load_meta()?;
    meta.set_output(
        API_CATEGORY,
        &resource_name,
        SECURITY_TYPE_KEY,
        auth_mode.as_str(),
    )?;
    ctx.project.save_meta(&meta)?;

    tracing::info!("Compiling schema in {}", resource_dir.display());
    ctx.compiler
        .compile(CompileRequest::new(resource_dir, parameters))
        .await?;

    Ok(UpdateOutcome::Updated {
        resource_name,
        auth_mode,
    })
}
