//! gqlapi command line
//!
//! Wires the walkthroughs to real collaborators:
//!
//! - [`StdioTerminal`](terminal::StdioTerminal) for prompts
//! - [`CommandCompiler`](compiler::CommandCompiler) for schema compilation
//! - [`CommandIdentityProvider`](provider::CommandIdentityProvider) for user pools
//! - [`CommandEditor`](editor::CommandEditor) for schema editing
//!
//! External commands come from [`WizardConfig`](config::WizardConfig).

#![warn(unreachable_pub)]

pub mod app;
pub mod compiler;
pub mod config;
pub mod editor;
pub mod provider;
pub mod telemetry;
pub mod terminal;

pub use app::{cli, run, run_with, Action, Invocation};
pub use config::{CommandConfig, ConfigError, WizardConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
