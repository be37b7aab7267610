//! Add walkthrough
//!
//! Creates the project's GraphQL API resource:
//! 1. Refuse if the project already has one
//! 2. Ask for the API name and authorization mode
//! 3. Place a schema (operator file, basic schema, or guided template)
//! 4. Hand the resource directory to the schema compiler

use crate::auth::AuthMode;
use crate::compiler::CompileRequest;
use crate::context::WalkthroughContext;
use crate::editor::EditorChoice;
use crate::error::WalkthroughResult;
use crate::prompt::{ask_confirm, ask_select, ask_text};
use crate::schema::{copy_schema, SchemaTemplate};
use gqlapi_project::{
    Project, ResourceDescriptor, ResourceParameters, API_CATEGORY, APPSYNC_SERVICE,
    PROVIDER_PLUGIN,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Shown when the project already has an API resource
pub const ALREADY_EXISTS_MESSAGE: &str = "You already have an appsync API in your project. \
     Please use \"gqlapi update\" command to update your existing AppSync API";

/// Output key recording the authorization mode
pub const SECURITY_TYPE_KEY: &str = "securityType";

/// Answers collected for the new resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAnswers {
    /// Resource name (same as the API name)
    pub resource_name: String,
    /// API name
    pub api_name: String,
}

/// Outputs recorded for the new resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOutput {
    /// Chosen authorization mode
    pub security_type: AuthMode,
}

/// Result of a completed add walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResult {
    /// Answers
    pub answers: ResourceAnswers,
    /// Outputs
    pub output: ResourceOutput,
    /// The compiler produced the stack; no separate template to write
    pub no_cfn_file: bool,
}

impl AddResult {
    fn new(answers: ResourceAnswers, security_type: AuthMode) -> Self {
        Self {
            answers,
            output: ResourceOutput { security_type },
            no_cfn_file: true,
        }
    }

    /// Record the new resource in the project meta
    pub fn register(&self, project: &Project) -> WalkthroughResult<()> {
        let mut meta = project.load_meta()?;
        meta.insert_resource(
            API_CATEGORY,
            self.answers.resource_name.clone(),
            ResourceDescriptor::new(APPSYNC_SERVICE)
                .with_provider_plugin(PROVIDER_PLUGIN)
                .with_output(SECURITY_TYPE_KEY, self.output.security_type.as_str()),
        );
        project.save_meta(&meta)?;
        tracing::info!(
            "Registered {}/{} in project meta",
            API_CATEGORY,
            self.answers.resource_name
        );
        Ok(())
    }
}

/// How an add walkthrough ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Resource created
    Created(AddResult),
    /// Project already has an API resource; nothing was asked or written
    AlreadyExists {
        /// Name of the existing resource
        resource_name: String,
    },
}

/// Run the add walkthrough
pub async fn service_walkthrough(ctx: &WalkthroughContext<'_>) -> WalkthroughResult<AddOutcome> {
    if let Some(existing) = ctx
        .project
        .load_meta()?
        .find_last(API_CATEGORY, APPSYNC_SERVICE)
    {
        tracing::info!("API resource {} already exists", existing);
        return Ok(AddOutcome::AlreadyExists {
            resource_name: existing.to_string(),
        });
    }

    let inputs = &ctx.inputs;
    let defaults = ctx.defaults();
    let terminal = ctx.terminal;

    let api_name = ask_text(terminal, &inputs.api_name, Some(&defaults.api_name)).await?;
    let answers = ResourceAnswers {
        resource_name: api_name.clone(),
        api_name: api_name.clone(),
    };
    let mut parameters = ResourceParameters::for_api(api_name);

    let auth_mode = ctx.auth_selector().select(&mut parameters).await?;

    let resource_dir = ctx.project.resource_dir(API_CATEGORY, &answers.resource_name);
    let result = AddResult::new(answers, auth_mode);

    if ask_confirm(terminal, &inputs.schema_file, defaults.schema_file).await? {
        let source = ask_text(terminal, &inputs.schema_file_path, None).await?;
        copy_schema(&resolve(&ctx.working_dir, &source), &resource_dir)?;
        compile(ctx, CompileRequest::new(&resource_dir, parameters)).await?;
        return Ok(AddOutcome::Created(result));
    }

    if !terminal
        .confirm("Do you want a guided schema creation?", true)
        .await?
    {
        terminal.info("Creating a base schema for you...");
        SchemaTemplate::Basic.install(&resource_dir)?;
        compile(
            ctx,
            CompileRequest::new(&resource_dir, parameters).without_config(),
        )
        .await?;
        return Ok(AddOutcome::Created(result));
    }

    let template = ask_select(terminal, &inputs.template_selection).await?;
    let template = SchemaTemplate::from_file_name(&template.value)?;
    let edit = ask_confirm(terminal, &inputs.edit_schema_choice, defaults.edit_schema_choice).await?;

    let schema_path = template.install(&resource_dir)?;
    if edit {
        edit_schema(ctx, &schema_path).await?;
    }

    compile(ctx, CompileRequest::new(&resource_dir, parameters)).await?;
    Ok(AddOutcome::Created(result))
}

async fn edit_schema(ctx: &WalkthroughContext<'_>, schema_path: &Path) -> WalkthroughResult<()> {
    let choice = ask_select(ctx.terminal, &ctx.inputs.editor_selection).await?;
    let editor = EditorChoice::from_id(&choice.value).unwrap_or(EditorChoice::None);

    match ctx.editor.open(schema_path, editor).await {
        Ok(()) => {
            ctx.terminal.input("Press enter to continue", None).await?;
        }
        Err(e) => {
            tracing::warn!("Editor {} failed: {}", editor.as_str(), e);
            ctx.terminal.error(&format!(
                "Something went wrong: {e}. Please manually edit the graphql schema at {}",
                schema_path.display()
            ));
        }
    }
    Ok(())
}

async fn compile(ctx: &WalkthroughContext<'_>, request: CompileRequest) -> WalkthroughResult<()> {
    tracing::info!("Compiling schema in {}", request.resource_dir.display());
    ctx.compiler.compile(request).await?;
    Ok(())
}

/// Relative schema paths are taken from the operator's working directory
fn resolve(base: &Path, source: &str) -> PathBuf {
    let path = Path::new(source);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_against_working_dir() {
        assert_eq!(
            resolve(Path::new("/home/me"), "schema/mine.graphql"),
            PathBuf::from("/home/me/schema/mine.graphql")
        );
        assert_eq!(
            resolve(Path::new("/home/me"), "/abs/mine.graphql"),
            PathBuf::from("/abs/mine.graphql")
        );
    }

    #[test]
    fn result_serializes_like_plugin_output() {
        let result = AddResult::new(
            ResourceAnswers {
                resource_name: "todo".to_string(),
                api_name: "todo".to_string(),
            },
            AuthMode::ApiKey,
        );
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "answers": { "resourceName": "todo", "apiName": "todo" },
                "output": { "securityType": "API_KEY" },
                "noCfnFile": true
            })
        );
    }
}
