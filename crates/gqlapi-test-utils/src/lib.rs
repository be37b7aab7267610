//! Testing utilities for gqlapi workspace
//!
//! Shared test helpers: a scripted terminal, recording collaborators and a
//! temporary project fixture.

#![allow(missing_docs)]

use gqlapi_project::paths::PARAMETERS_FILE_NAME;
use gqlapi_project::{
    Project, ProjectConfig, ProjectPaths, ResourceDescriptor, ResourceParameters, API_CATEGORY,
    APPSYNC_SERVICE, AUTH_CATEGORY, COGNITO_SERVICE,
};
use gqlapi_walkthrough::{
    Choice, CompileError, CompileRequest, Editor, EditorChoice, EditorError, IdentityProvider,
    Notice, PromptError, ProviderError, SchemaCompiler, Terminal, WalkthroughContext,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One scripted operator answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Typed text
    Text(String),
    /// Just press enter
    Enter,
    Yes,
    No,
    /// Pick the choice whose value matches
    Pick(String),
    /// Pick by index, valid or not
    Index(usize),
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn pick(value: impl Into<String>) -> Self {
        Self::Pick(value.into())
    }
}

/// Terminal replaying a fixed list of answers
///
/// Running out of answers yields `PromptError::Closed`; an answer of the
/// wrong kind panics so the broken script is obvious.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    answers: Mutex<VecDeque<Answer>>,
    notices: Mutex<Vec<(Notice, String)>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedTerminal {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    fn next(&self, message: &str) -> Result<Answer, PromptError> {
        self.asked.lock().push(message.to_string());
        self.answers
            .lock()
            .pop_front()
            .ok_or_else(|| PromptError::Closed(message.to_string()))
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().len()
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().clone()
    }

    pub fn notices(&self) -> Vec<(Notice, String)> {
        self.notices.lock().clone()
    }

    /// Whether a notice of `level` containing `needle` was shown
    pub fn has_notice(&self, level: Notice, needle: &str) -> bool {
        self.notices
            .lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

#[async_trait::async_trait]
impl Terminal for ScriptedTerminal {
    async fn input(&self, message: &str, _default: Option<&str>) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Text(s) => Ok(s),
            Answer::Enter => Ok(String::new()),
            other => panic!("expected text for '{message}', script has {other:?}"),
        }
    }

    async fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        match self.next(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Enter => Ok(default),
            other => panic!("expected yes/no for '{message}', script has {other:?}"),
        }
    }

    async fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
        match self.next(message)? {
            Answer::Index(i) => Ok(i),
            Answer::Pick(value) => Ok(choices
                .iter()
                .position(|c| c.value == value)
                .unwrap_or_else(|| panic!("no choice '{value}' for '{message}'"))),
            other => panic!("expected a pick for '{message}', script has {other:?}"),
        }
    }

    fn notify(&self, level: Notice, message: &str) {
        self.notices.lock().push((level, message.to_string()));
    }
}

/// Compiler that records requests and persists parameters like the real one
#[derive(Debug, Default)]
pub struct RecordingCompiler {
    requests: Mutex<Vec<CompileRequest>>,
}

impl RecordingCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<CompileRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait::async_trait]
impl SchemaCompiler for RecordingCompiler {
    async fn compile(&self, request: CompileRequest) -> Result<(), CompileError> {
        request
            .parameters
            .save(&request.resource_dir.join(PARAMETERS_FILE_NAME))?;
        self.requests.lock().push(request);
        Ok(())
    }
}

/// Identity provider that registers a `Cognito` resource, or is missing
#[derive(Debug)]
pub struct FakeIdentityProvider {
    name: Option<String>,
    calls: Mutex<usize>,
}

impl FakeIdentityProvider {
    /// Creates `name` when asked
    pub fn creating(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            calls: Mutex::new(0),
        }
    }

    /// Plugin not installed
    pub fn missing() -> Self {
        Self {
            name: None,
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn add(&self, project: &Project) -> Result<String, ProviderError> {
        *self.calls.lock() += 1;
        let name = self.name.clone().ok_or(ProviderError::NotInstalled)?;

        let mut meta = project
            .load_meta()
            .map_err(|e| ProviderError::Failed(e.to_string()))?;
        meta.insert_resource(AUTH_CATEGORY, name.clone(), ResourceDescriptor::new(COGNITO_SERVICE));
        project
            .save_meta(&meta)
            .map_err(|e| ProviderError::Failed(e.to_string()))?;
        Ok(name)
    }
}

/// Editor that records what it opened
#[derive(Debug, Default)]
pub struct RecordingEditor {
    fail: bool,
    opened: Mutex<Vec<(PathBuf, EditorChoice)>>,
}

impl RecordingEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor that cannot be found
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<(PathBuf, EditorChoice)> {
        self.opened.lock().clone()
    }
}

#[async_trait::async_trait]
impl Editor for RecordingEditor {
    async fn open(&self, path: &Path, choice: EditorChoice) -> Result<(), EditorError> {
        self.opened.lock().push((path.to_path_buf(), choice));
        if self.fail {
            Err(EditorError::NotFound(choice.as_str().to_string()))
        } else {
            Ok(())
        }
    }
}

/// Project in a temporary directory
#[derive(Debug)]
pub struct TestProject {
    _dir: TempDir,
    project: Project,
}

impl TestProject {
    /// Empty project named `name`
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::from_parts(ProjectPaths::new(dir.path()), ProjectConfig::new(name));
        Self { _dir: dir, project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn root(&self) -> &Path {
        self.project.root()
    }

    /// Add an existing API resource
    pub fn with_api(self, name: &str, security_type: &str) -> Self {
        self.insert(
            API_CATEGORY,
            name,
            ResourceDescriptor::new(APPSYNC_SERVICE).with_output("securityType", security_type),
        )
    }

    /// Add an existing identity provider
    pub fn with_auth(self, name: &str) -> Self {
        self.insert(AUTH_CATEGORY, name, ResourceDescriptor::new(COGNITO_SERVICE))
    }

    fn insert(self, category: &str, name: &str, descriptor: ResourceDescriptor) -> Self {
        let mut meta = self.project.load_meta().unwrap();
        meta.insert_resource(category, name, descriptor);
        self.project.save_meta(&meta).unwrap();
        self
    }

    /// Write `parameters.json` for an API resource
    pub fn with_parameters(self, api: &str, parameters: &ResourceParameters) -> Self {
        parameters.save(&self.parameters_path(api)).unwrap();
        self
    }

    pub fn parameters_path(&self, api: &str) -> PathBuf {
        self.project
            .resource_dir(API_CATEGORY, api)
            .join(PARAMETERS_FILE_NAME)
    }

    pub fn read_parameters(&self, api: &str) -> ResourceParameters {
        ResourceParameters::load(&self.parameters_path(api)).unwrap()
    }

    /// Raw bytes of `parameters.json`
    pub fn parameters_bytes(&self, api: &str) -> Vec<u8> {
        std::fs::read(self.parameters_path(api)).unwrap()
    }

    /// Meta file as a JSON value
    pub fn meta_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.project.paths().meta_file()).unwrap();
        serde_json::from_str(&raw).unwrap()
    }
}

/// Project plus every collaborator, ready to run a walkthrough
#[derive(Debug)]
pub struct Fixture {
    pub project: TestProject,
    pub terminal: ScriptedTerminal,
    pub compiler: RecordingCompiler,
    pub identity: FakeIdentityProvider,
    pub editor: RecordingEditor,
}

impl Fixture {
    pub fn new(project: TestProject, answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            project,
            terminal: ScriptedTerminal::new(answers),
            compiler: RecordingCompiler::new(),
            identity: FakeIdentityProvider::creating("cognitopool"),
            editor: RecordingEditor::new(),
        }
    }

    pub fn with_identity(mut self, identity: FakeIdentityProvider) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_editor(mut self, editor: RecordingEditor) -> Self {
        self.editor = editor;
        self
    }

    pub fn ctx(&self) -> WalkthroughContext<'_> {
        WalkthroughContext::new(
            self.project.project(),
            &self.terminal,
            &self.compiler,
            &self.identity,
            &self.editor,
        )
        .with_working_dir(self.project.root())
    }
}
