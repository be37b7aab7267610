//! Editor seam

use crate::error::EditorError;
use std::path::Path;

/// Editors offered to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorChoice {
    /// Sublime Text (`subl`)
    Sublime,
    /// Visual Studio Code (`code`)
    VsCode,
    /// Atom (`atom`)
    Atom,
    /// IntelliJ IDEA 14 CE (`idea`)
    Idea14Ce,
    /// Vim
    Vim,
    /// Emacs
    Emacs,
    /// WebStorm
    WebStorm,
    /// Fall back to the environment (`$VISUAL`, `$EDITOR`)
    None,
}

impl EditorChoice {
    /// Every choice, in prompt order
    pub const ALL: [EditorChoice; 8] = [
        Self::Sublime,
        Self::VsCode,
        Self::Atom,
        Self::Idea14Ce,
        Self::Vim,
        Self::Emacs,
        Self::WebStorm,
        Self::None,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sublime => "sublime",
            Self::VsCode => "code",
            Self::Atom => "atom",
            Self::Idea14Ce => "idea14ce",
            Self::Vim => "vim",
            Self::Emacs => "emacs",
            Self::WebStorm => "webstorm",
            Self::None => "none",
        }
    }

    /// Label shown to the operator
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sublime => "Sublime Text",
            Self::VsCode => "Visual Studio Code",
            Self::Atom => "Atom Editor",
            Self::Idea14Ce => "IDEA 14 CE",
            Self::Vim => "Vim (via Terminal, Mac OS only)",
            Self::Emacs => "Emacs (via Terminal, Mac OS only)",
            Self::WebStorm => "WebStorm",
            Self::None => "None",
        }
    }

    /// Executable launched for this editor; `None` defers to the environment
    #[must_use]
    pub const fn program(self) -> Option<&'static str> {
        match self {
            Self::Sublime => Some("subl"),
            Self::VsCode => Some("code"),
            Self::Atom => Some("atom"),
            Self::Idea14Ce => Some("idea"),
            Self::Vim => Some("vim"),
            Self::Emacs => Some("emacs"),
            Self::WebStorm => Some("webstorm"),
            Self::None => None,
        }
    }

    /// Look up by identifier
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == id)
    }
}

/// Opens files for the operator to edit
#[async_trait::async_trait]
pub trait Editor: Send + Sync {
    /// Open `path` and return once the operator is done with it
    async fn open(&self, path: &Path, choice: EditorChoice) -> Result<(), EditorError>;
}
