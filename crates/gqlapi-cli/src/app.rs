//! Command line definition and dispatch

use crate::compiler::CommandCompiler;
use crate::config::WizardConfig;
use crate::editor::CommandEditor;
use crate::provider::CommandIdentityProvider;
use crate::terminal::StdioTerminal;
use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use gqlapi_project::Project;
use gqlapi_walkthrough::service::ALREADY_EXISTS_MESSAGE;
use gqlapi_walkthrough::update::NO_RESOURCE_MESSAGE;
use gqlapi_walkthrough::{
    service_walkthrough, update_walkthrough, AddOutcome, Terminal, UpdateOutcome,
    WalkthroughContext,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build the `gqlapi` command
#[must_use]
pub fn cli() -> Command {
    Command::new("gqlapi")
        .version(crate::VERSION)
        .about("Set up and update the project's managed GraphQL API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("project-dir")
                .long("project-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Project root (defaults to the current directory)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Wizard config file (defaults to amplify/.config/gqlapi.toml)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(Command::new("add").about("Add a GraphQL API resource to the project"))
        .subcommand(
            Command::new("update").about("Change the authorization of the existing GraphQL API"),
        )
}

/// Which walkthrough to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add walkthrough
    Add,
    /// Update walkthrough
    Update,
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Walkthrough to run
    pub action: Action,
    /// Project root
    pub project_dir: Option<PathBuf>,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Debug logging
    pub verbose: bool,
}

impl Invocation {
    /// Extract from clap matches
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let (action, sub) = match matches.subcommand() {
            Some(("add", sub)) => (Action::Add, sub),
            Some(("update", sub)) => (Action::Update, sub),
            _ => anyhow::bail!("expected a subcommand: add or update"),
        };

        Ok(Self {
            action,
            project_dir: sub.get_one::<PathBuf>("project-dir").cloned(),
            config: sub.get_one::<PathBuf>("config").cloned(),
            verbose: sub.get_flag("verbose"),
        })
    }
}

/// Run a walkthrough against the real terminal and configured collaborators
pub async fn run(invocation: &Invocation) -> anyhow::Result<ExitCode> {
    let terminal = StdioTerminal::new().context("cannot open the terminal")?;
    run_with(invocation, &terminal).await
}

/// Run a walkthrough, asking questions on `terminal`
///
/// "Nothing to do" outcomes are reported on the terminal and still exit 0.
pub async fn run_with(
    invocation: &Invocation,
    terminal: &dyn Terminal,
) -> anyhow::Result<ExitCode> {
    let root = match &invocation.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let config = WizardConfig::discover(&root, invocation.config.as_deref())?;
    let project = Project::open(&root)?;
    tracing::debug!("Opened project '{}' at {}", project.name(), root.display());

    let compiler = CommandCompiler::new(config.compiler.clone());
    let identity = CommandIdentityProvider::new(config.identity_provider.clone());
    let editor = CommandEditor::new(config.editor.default.clone());
    let ctx = WalkthroughContext::new(&project, terminal, &compiler, &identity, &editor);

    match invocation.action {
        Action::Add => add(&ctx).await,
        Action::Update => update(&ctx).await,
    }
}

async fn add(ctx: &WalkthroughContext<'_>) -> anyhow::Result<ExitCode> {
    match service_walkthrough(ctx).await? {
        AddOutcome::Created(result) => {
            result.register(ctx.project)?;
            ctx.terminal.info(&format!(
                "Successfully added resource {} locally",
                result.answers.resource_name
            ));
        }
        AddOutcome::AlreadyExists { .. } => ctx.terminal.warning(ALREADY_EXISTS_MESSAGE),
    }
    Ok(ExitCode::SUCCESS)
}

async fn update(ctx: &WalkthroughContext<'_>) -> anyhow::Result<ExitCode> {
    match update_walkthrough(ctx).await? {
        UpdateOutcome::Updated {
            resource_name,
            auth_mode,
        } => ctx.terminal.info(&format!(
            "Successfully updated resource {resource_name} to use {auth_mode}"
        )),
        UpdateOutcome::NoResource => ctx.terminal.error(NO_RESOURCE_MESSAGE),
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Invocation {
        let matches = cli().try_get_matches_from(args).unwrap();
        Invocation::from_matches(&matches).unwrap()
    }

    #[test]
    fn add_with_globals_after_subcommand() {
        let inv = parse(&["gqlapi", "add", "--project-dir", "/app", "-v"]);
        assert_eq!(inv.action, Action::Add);
        assert_eq!(inv.project_dir, Some(PathBuf::from("/app")));
        assert!(inv.verbose);
        assert_eq!(inv.config, None);
    }

    #[test]
    fn update_with_config_before_subcommand() {
        let inv = parse(&["gqlapi", "--config", "/etc/gqlapi.toml", "update"]);
        assert_eq!(inv.action, Action::Update);
        assert_eq!(inv.config, Some(PathBuf::from("/etc/gqlapi.toml")));
        assert!(!inv.verbose);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(cli().try_get_matches_from(["gqlapi"]).is_err());
        assert!(cli().try_get_matches_from(["gqlapi", "remove"]).is_err());
    }

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }
}
