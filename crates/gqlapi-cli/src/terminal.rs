//! Line-editing terminal over stdin/stdout
//!
//! Answers are read with rustyline on a blocking thread. On a tty rustyline
//! reads keystrokes unbuffered, so a child process inheriting stdin (the
//! identity-provider command) sees every byte typed after the question it
//! asks. When stdin is a pipe, std's stdin buffer may read ahead past the
//! current answer; answers meant for a child cannot be piped in the same
//! stream.

use gqlapi_walkthrough::{Choice, Notice, PromptError, Terminal};
use parking_lot::Mutex;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::Arc;

/// Interactive terminal reading answers line by line
pub struct StdioTerminal {
    editor: Arc<Mutex<DefaultEditor>>,
}

impl StdioTerminal {
    /// Terminal on the process's stdin/stdout
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(|e| readline_error(e, "terminal"))?;
        Ok(Self {
            editor: Arc::new(Mutex::new(editor)),
        })
    }

    async fn ask(&self, prompt: String, key: &str) -> Result<String, PromptError> {
        let editor = Arc::clone(&self.editor);
        let line = tokio::task::spawn_blocking(move || editor.lock().readline(&prompt))
            .await
            .map_err(|e| PromptError::Io(std::io::Error::other(e)))?;

        match line {
            Ok(line) => Ok(line.trim().to_string()),
            Err(e) => Err(readline_error(e, key)),
        }
    }
}

/// End of input or Ctrl-C closes the question; anything else is IO
fn readline_error(error: ReadlineError, key: &str) -> PromptError {
    match error {
        ReadlineError::Eof | ReadlineError::Interrupted => PromptError::Closed(key.to_string()),
        ReadlineError::Io(e) => PromptError::Io(e),
        other => PromptError::Io(std::io::Error::other(other)),
    }
}

/// `? message (default) `
fn input_prompt(message: &str, default: Option<&str>) -> String {
    match default {
        Some(d) if !d.is_empty() => format!("? {message} ({d}) "),
        _ => format!("? {message} "),
    }
}

/// `? message (Y/n) `
fn confirm_prompt(message: &str, default: bool) -> String {
    let hint = if default { "Y/n" } else { "y/N" };
    format!("? {message} ({hint}) ")
}

/// Question and numbered choices, printed above the answer line
fn select_listing(message: &str, choices: &[Choice]) -> String {
    let mut out = format!("? {message}");
    for (i, choice) in choices.iter().enumerate() {
        out.push_str(&format!("\n  {}) {}", i + 1, choice.name));
    }
    out
}

/// `  Answer [1-n]: `
fn select_prompt(count: usize) -> String {
    format!("  Answer [1-{count}]: ")
}

/// Yes/no answer, `None` if unrecognised
fn parse_confirm(answer: &str, default: bool) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// One-based selection to index; anything unparsable is out of range
fn parse_selection(answer: &str) -> usize {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .unwrap_or(usize::MAX)
}

#[async_trait::async_trait]
impl Terminal for StdioTerminal {
    async fn input(&self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        self.ask(input_prompt(message, default), message).await
    }

    async fn confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        let prompt = confirm_prompt(message, default);
        loop {
            let answer = self.ask(prompt.clone(), message).await?;
            match parse_confirm(&answer, default) {
                Some(yes) => return Ok(yes),
                None => self.error("Please answer y or n"),
            }
        }
    }

    async fn select(&self, message: &str, choices: &[Choice]) -> Result<usize, PromptError> {
        println!("{}", select_listing(message, choices));
        let answer = self.ask(select_prompt(choices.len()), message).await?;
        Ok(parse_selection(&answer))
    }

    fn notify(&self, level: Notice, message: &str) {
        match level {
            Notice::Info => println!("{message}"),
            Notice::Warning => eprintln!("Warning: {message}"),
            Notice::Error => eprintln!("Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompts_render() {
        assert_eq!(input_prompt("API name:", Some("todo")), "? API name: (todo) ");
        assert_eq!(input_prompt("Path:", None), "? Path: ");
        assert_eq!(confirm_prompt("Edit?", false), "? Edit? (y/N) ");
        assert_eq!(
            select_listing("Pick", &[Choice::new("A", "a"), Choice::new("B", "b")]),
            "? Pick\n  1) A\n  2) B"
        );
        assert_eq!(select_prompt(2), "  Answer [1-2]: ");
    }

    #[test]
    fn confirm_answers() {
        assert_eq!(parse_confirm("", true), Some(true));
        assert_eq!(parse_confirm("YES", false), Some(true));
        assert_eq!(parse_confirm("n", true), Some(false));
        assert_eq!(parse_confirm("maybe", true), None);
    }

    #[test]
    fn selection_answers() {
        assert_eq!(parse_selection("1"), 0);
        assert_eq!(parse_selection("3"), 2);
        assert_eq!(parse_selection("0"), usize::MAX);
        assert_eq!(parse_selection("two"), usize::MAX);
    }

    #[test]
    fn end_of_input_closes_the_question() {
        assert!(matches!(
            readline_error(ReadlineError::Eof, "apiName"),
            PromptError::Closed(key) if key == "apiName"
        ));
        assert!(matches!(
            readline_error(ReadlineError::Interrupted, "authType"),
            PromptError::Closed(_)
        ));
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(
            readline_error(ReadlineError::Io(io), "x"),
            PromptError::Io(_)
        ));
    }
}
