//! Question catalogue of the GraphQL API service
//!
//! The walkthrough asks a fixed, ordered set of questions. Each carries its
//! answer key, the text shown to the operator, and the validation the
//! prompt layer enforces before accepting an answer.

use regex::Regex;

/// One selectable option of a list question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Label shown to the operator
    pub name: String,
    /// Value returned when selected
    pub value: String,
}

impl Choice {
    /// Create choice
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Kind of answer a question expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free text
    Input,
    /// Yes/no
    Confirm,
    /// One of a fixed list
    List(Vec<Choice>),
}

/// Rule an answer must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Answer must fully match the pattern
    Regex(String),
    /// Answer must not be blank
    NonEmpty,
}

/// Validation attached to a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValidation {
    /// The rule
    pub rule: Rule,
    /// Message shown when the rule fails
    pub on_error: String,
}

impl InputValidation {
    /// Regex validation
    #[must_use]
    pub fn regex(pattern: impl Into<String>, on_error: impl Into<String>) -> Self {
        Self {
            rule: Rule::Regex(pattern.into()),
            on_error: on_error.into(),
        }
    }

    /// Non-empty validation
    #[must_use]
    pub fn non_empty(on_error: impl Into<String>) -> Self {
        Self {
            rule: Rule::NonEmpty,
            on_error: on_error.into(),
        }
    }

    /// Check an answer, returning the error message on failure
    pub fn check(&self, answer: &str) -> Result<(), String> {
        let ok = match &self.rule {
            Rule::NonEmpty => !answer.trim().is_empty(),
            Rule::Regex(pattern) => match Regex::new(pattern) {
                Ok(re) => re.is_match(answer),
                Err(e) => {
                    tracing::error!("Invalid validation pattern '{}': {}", pattern, e);
                    false
                }
            },
        };
        if ok {
            Ok(())
        } else {
            Err(self.on_error.clone())
        }
    }
}

/// A single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Answer key
    pub key: &'static str,
    /// Text shown to the operator
    pub message: String,
    /// Expected answer
    pub kind: QuestionKind,
    /// Optional validation
    pub validation: Option<InputValidation>,
}

impl Question {
    /// Free-text question
    #[must_use]
    pub fn input(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Input,
            validation: None,
        }
    }

    /// Yes/no question
    #[must_use]
    pub fn confirm(key: &'static str, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Confirm,
            validation: None,
        }
    }

    /// Single-choice question
    #[must_use]
    pub fn list(key: &'static str, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::List(choices),
            validation: None,
        }
    }

    /// With validation
    #[must_use]
    pub fn with_validation(mut self, validation: InputValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Choices of a list question; empty for other kinds
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            QuestionKind::List(choices) => choices,
            _ => &[],
        }
    }
}

/// Schema file bundled for guided creation
pub const SINGLE_OBJECT_TEMPLATE: &str = "single-object-schema.graphql";

/// Schema file bundled for the one-to-many example
pub const MANY_RELATIONSHIP_TEMPLATE: &str = "many-relationship-schema.graphql";

/// The ordered inputs of the GraphQL API service
#[derive(Debug, Clone)]
pub struct ServiceInputs {
    /// Resource name; filled from the API name, never asked directly
    pub resource_name: Question,
    /// API name
    pub api_name: Question,
    /// Whether the operator already has an annotated schema
    pub schema_file: Question,
    /// Path to that schema
    pub schema_file_path: Question,
    /// Template for guided creation
    pub template_selection: Question,
    /// Whether to edit the schema now
    pub edit_schema_choice: Question,
    /// Editor to open the schema in
    pub editor_selection: Question,
}

impl ServiceInputs {
    /// Inputs of the AppSync service
    #[must_use]
    pub fn appsync() -> Self {
        let alphanumeric =
            InputValidation::regex("^[a-zA-Z0-9]+$", "Resource name should be alphanumeric");

        Self {
            resource_name: Question::input("resourceName", "Please provide a friendly name for your resource")
                .with_validation(alphanumeric.clone()),
            api_name: Question::input("apiName", "Please provide API name:")
                .with_validation(alphanumeric),
            schema_file: Question::confirm("schemaFile", "Do you have an annotated GraphQL schema?"),
            schema_file_path: Question::input("schemaFilePath", "Provide your schema file path:")
                .with_validation(InputValidation::non_empty("Schema file path cannot be empty")),
            template_selection: Question::list(
                "templateSelection",
                "Choose a schema template:",
                vec![
                    Choice::new(
                        "Single object with fields (e.g., “Todo” with ID, name, description)",
                        SINGLE_OBJECT_TEMPLATE,
                    ),
                    Choice::new(
                        "One-to-many relationship (e.g., “Blogs” with “Posts” and “Comments”)",
                        MANY_RELATIONSHIP_TEMPLATE,
                    ),
                ],
            ),
            edit_schema_choice: Question::confirm(
                "editSchemaChoice",
                "Do you want to edit the schema now?",
            ),
            editor_selection: Question::list(
                "editorSelection",
                "Choose your default editor:",
                crate::editor::EditorChoice::ALL
                    .iter()
                    .map(|e| Choice::new(e.label(), e.as_str()))
                    .collect(),
            ),
        }
    }
}

impl Default for ServiceInputs {
    fn default() -> Self {
        Self::appsync()
    }
}

/// Default answers derived from project details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefaults {
    /// Default API name
    pub api_name: String,
    /// Default for "do you have an annotated schema"
    pub schema_file: bool,
    /// Default for "edit the schema now"
    pub edit_schema_choice: bool,
}

/// API name used when the project name has no usable characters
pub const FALLBACK_API_NAME: &str = "graphqlapi";

impl ServiceDefaults {
    /// Defaults for a project
    #[must_use]
    pub fn for_project(project_name: &str) -> Self {
        let cleaned: String = project_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let api_name = if cleaned.is_empty() {
            FALLBACK_API_NAME.to_string()
        } else {
            cleaned
        };
        Self {
            api_name,
            schema_file: false,
            edit_schema_choice: true,
        }
    }
}
