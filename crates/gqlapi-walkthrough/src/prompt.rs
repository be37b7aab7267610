//! Operator prompting
//!
//! [`Terminal`] is the raw question/answer seam. The `ask_*` helpers layer
//! defaults and validation on top, re-asking until an answer is accepted.

use crate::error::PromptError;
use crate::question::{Choice, Question};

/// Severity of an operator-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// Informational
    Info,
    /// Something the operator should look at
    Warning,
    /// A failure; the flow may still continue
    Error,
}

/// Raw interactive terminal
#[async_trait::async_trait]
pub trait Terminal: Send + Sync {
    /// Ask for free text; returns the trimmed answer, possibly empty
    async fn input(&self, message: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask a yes/no question; an empty answer yields `default`
    async fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask to pick one of `choices`; returns the chosen index
    async fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError>;

    /// Show a notice
    fn notify(&self, level: Notice, message: &str);

    /// Informational notice
    fn info(&self, message: &str) {
        self.notify(Notice::Info, message);
    }

    /// Warning notice
    fn warning(&self, message: &str) {
        self.notify(Notice::Warning, message);
    }

    /// Error notice
    fn error(&self, message: &str) {
        self.notify(Notice::Error, message);
    }
}

/// Ask a text question, applying `default` to empty answers and re-asking
/// until the question's validation passes
pub async fn ask_text(
    terminal: &dyn Terminal,
    question: &Question,
    default: Option<&str>,
) -> Result<String, PromptError> {
    loop {
        let raw = terminal.input(&question.message, default).await?;
        let answer = match (raw.is_empty(), default) {
            (true, Some(d)) => d.to_string(),
            _ => raw,
        };

        match question.validation.as_ref().map(|v| v.check(&answer)) {
            Some(Err(message)) => {
                tracing::debug!("Rejected answer for {}: {}", question.key, message);
                terminal.error(&message);
            }
            _ => return Ok(answer),
        }
    }
}

/// Ask a yes/no question
pub async fn ask_confirm(
    terminal: &dyn Terminal,
    question: &Question,
    default: bool,
) -> Result<bool, PromptError> {
    terminal.confirm(&question.message, default).await
}

/// Ask a list question and return the selected choice
pub async fn ask_select<'q>(
    terminal: &dyn Terminal,
    question: &'q Question,
) -> Result<&'q Choice, PromptError> {
    let choices = question.choices();
    loop {
        let index = terminal.select(&question.message, choices).await?;
        if let Some(choice) = choices.get(index) {
            return Ok(choice);
        }
        if choices.is_empty() {
            return Err(PromptError::Closed(question.key.to_string()));
        }
        terminal.error(&format!("Please pick a number between 1 and {}", choices.len()));
    }
}
