use gqlapi_project::{CrossResourceRef, ResourceParameters};
use gqlapi_test_utils::{Answer, FakeIdentityProvider, Fixture, RecordingEditor, TestProject};
use gqlapi_walkthrough::prelude::*;
use gqlapi_walkthrough::{Notice, SchemaTemplate};
use pretty_assertions::assert_eq;
use serde_json::json;

const API_KEY: &str = "API_KEY";
const USER_POOLS: &str = "AMAZON_COGNITO_USER_POOLS";

fn created(outcome: AddOutcome) -> gqlapi_walkthrough::AddResult {
    match outcome {
        AddOutcome::Created(result) => result,
        other => panic!("expected a created resource, got {other:?}"),
    }
}

#[tokio::test]
async fn test_existing_api_short_circuits() {
    let fixture = Fixture::new(TestProject::new("notes").with_api("notes", API_KEY), Vec::<Answer>::new());

    let outcome = service_walkthrough(&fixture.ctx()).await.unwrap();

    assert_eq!(
        outcome,
        AddOutcome::AlreadyExists {
            resource_name: "notes".to_string()
        }
    );
    assert!(fixture.terminal.asked().is_empty());
    assert!(fixture.compiler.requests().is_empty());
}

#[tokio::test]
async fn test_annotated_schema_is_copied() {
    let project = TestProject::new("notes");
    std::fs::write(project.root().join("mine.graphql"), "type Note @model { id: ID! }").unwrap();

    let fixture = Fixture::new(
        project,
        [
            Answer::text("notes"),
            Answer::pick(API_KEY),
            Answer::Yes,
            Answer::text("mine.graphql"),
        ],
    );

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert_eq!(result.answers.resource_name, "notes");
    assert_eq!(result.answers.api_name, "notes");
    assert_eq!(result.output.security_type, AuthMode::ApiKey);
    assert!(result.no_cfn_file);

    let resource_dir = fixture.project.project().resource_dir("api", "notes");
    assert_eq!(
        std::fs::read_to_string(resource_dir.join("schema.graphql")).unwrap(),
        "type Note @model { id: ID! }"
    );

    let requests = fixture.compiler.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].resource_dir, resource_dir);
    assert!(!requests[0].no_config);
    assert_eq!(requests[0].parameters, ResourceParameters::for_api("notes"));
}

#[tokio::test]
async fn test_relative_schema_path_uses_working_dir() {
    let shell_dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(shell_dir.path().join("schemas")).unwrap();
    std::fs::write(
        shell_dir.path().join("schemas").join("mine.graphql"),
        "type Shell @model { id: ID! }",
    )
    .unwrap();

    let project = TestProject::new("notes");
    std::fs::write(project.root().join("mine.graphql"), "type Wrong @model { id: ID! }").unwrap();

    let fixture = Fixture::new(
        project,
        [
            Answer::text("notes"),
            Answer::pick(API_KEY),
            Answer::Yes,
            Answer::text("schemas/mine.graphql"),
        ],
    );
    let ctx = fixture.ctx().with_working_dir(shell_dir.path());

    created(service_walkthrough(&ctx).await.unwrap());

    let resource_dir = fixture.project.project().resource_dir("api", "notes");
    assert_eq!(
        std::fs::read_to_string(resource_dir.join("schema.graphql")).unwrap(),
        "type Shell @model { id: ID! }"
    );
}

#[tokio::test]
async fn test_base_schema_without_guidance() {
    let fixture = Fixture::new(
        TestProject::new("my-notes"),
        [
            Answer::Enter,
            Answer::pick(API_KEY),
            Answer::Enter,
            Answer::No,
        ],
    );

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert_eq!(result.answers.api_name, "mynotes");

    let schema = std::fs::read_to_string(
        fixture
            .project
            .project()
            .resource_dir("api", "mynotes")
            .join("schema.graphql"),
    )
    .unwrap();
    assert_eq!(schema, SchemaTemplate::Basic.contents());
    assert!(fixture
        .terminal
        .has_notice(Notice::Info, "Creating a base schema for you"));

    let requests = fixture.compiler.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].no_config);
}

#[tokio::test]
async fn test_guided_schema_with_editor() {
    let fixture = Fixture::new(
        TestProject::new("blog"),
        [
            Answer::text("blog"),
            Answer::pick(USER_POOLS),
            Answer::No,
            Answer::Yes,
            Answer::pick("many-relationship-schema.graphql"),
            Answer::Yes,
            Answer::pick("code"),
            Answer::Enter,
        ],
    );

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert_eq!(result.output.security_type, AuthMode::UserPools);
    assert_eq!(fixture.terminal.remaining(), 0);
    assert_eq!(fixture.identity.calls(), 1);

    let schema_path = fixture
        .project
        .project()
        .resource_dir("api", "blog")
        .join("schema.graphql");
    assert_eq!(
        fixture.editor.opened(),
        vec![(schema_path.clone(), EditorChoice::VsCode)]
    );
    assert!(std::fs::read_to_string(schema_path)
        .unwrap()
        .contains("type Blog"));

    let params = fixture.project.read_parameters("blog");
    assert_eq!(
        params.user_pool_reference(),
        Some(&CrossResourceRef::user_pool_id("cognitopool"))
    );
}

#[tokio::test]
async fn test_editor_failure_is_reported_and_compiles() {
    let fixture = Fixture::new(
        TestProject::new("blog"),
        [
            Answer::text("blog"),
            Answer::pick(API_KEY),
            Answer::No,
            Answer::Yes,
            Answer::pick("single-object-schema.graphql"),
            Answer::Yes,
            Answer::pick("vim"),
        ],
    )
    .with_editor(RecordingEditor::failing());

    created(service_walkthrough(&fixture.ctx()).await.unwrap());

    assert!(fixture
        .terminal
        .has_notice(Notice::Error, "Please manually edit the graphql schema"));
    assert_eq!(fixture.compiler.requests().len(), 1);
}

#[tokio::test]
async fn test_guided_schema_without_editing() {
    let fixture = Fixture::new(
        TestProject::new("todo"),
        [
            Answer::text("todo"),
            Answer::pick(API_KEY),
            Answer::No,
            Answer::Yes,
            Answer::pick("single-object-schema.graphql"),
            Answer::No,
        ],
    );

    created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert!(fixture.editor.opened().is_empty());
    assert_eq!(fixture.compiler.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_api_name_is_reasked() {
    let fixture = Fixture::new(
        TestProject::new("todo"),
        [
            Answer::text("my api!"),
            Answer::text("myapi"),
            Answer::pick(API_KEY),
            Answer::Enter,
            Answer::No,
        ],
    );

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert_eq!(result.answers.api_name, "myapi");
    assert!(fixture
        .terminal
        .has_notice(Notice::Error, "Resource name should be alphanumeric"));
}

#[tokio::test]
async fn test_missing_identity_plugin_still_creates() {
    let fixture = Fixture::new(
        TestProject::new("todo"),
        [
            Answer::text("todo"),
            Answer::pick(USER_POOLS),
            Answer::Enter,
            Answer::No,
        ],
    )
    .with_identity(FakeIdentityProvider::missing());

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    assert_eq!(result.output.security_type, AuthMode::UserPools);
    assert!(!fixture.project.read_parameters("todo").has_user_pool());
    assert!(fixture
        .terminal
        .has_notice(Notice::Error, "Auth plugin not installed"));
}

#[tokio::test]
async fn test_closed_input_is_an_error() {
    let fixture = Fixture::new(TestProject::new("todo"), [Answer::text("todo")]);

    let err = service_walkthrough(&fixture.ctx()).await.unwrap_err();
    assert!(matches!(
        err,
        gqlapi_walkthrough::WalkthroughError::Prompt(gqlapi_walkthrough::PromptError::Closed(_))
    ));
    assert!(fixture.compiler.requests().is_empty());
}

#[tokio::test]
async fn test_register_records_resource() {
    let fixture = Fixture::new(
        TestProject::new("todo"),
        [
            Answer::text("todo"),
            Answer::pick(USER_POOLS),
            Answer::Enter,
            Answer::No,
        ],
    );

    let result = created(service_walkthrough(&fixture.ctx()).await.unwrap());
    result.register(fixture.project.project()).unwrap();

    let meta = fixture.project.meta_json();
    assert_eq!(
        meta["api"]["todo"],
        json!({
            "service": "AppSync",
            "providerPlugin": "awscloudformation",
            "output": { "securityType": "AMAZON_COGNITO_USER_POOLS" }
        })
    );
    assert_eq!(meta["auth"]["cognitopool"]["service"], json!("Cognito"));
}
