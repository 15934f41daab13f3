//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{RebuildService, TokenMode};
use crate::cli::args::{Cli, Commands, ConfigCommands, OutputFormat, TraversalArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::SubtreePolicy;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Build {
            input,
            policy,
            format,
        } => {
            let settings = load_settings(cli, input, *policy)?;
            _build(settings, input, *format)
        }
        Commands::Check { input } => {
            let settings = load_settings(cli, input, None)?;
            _check(settings, input)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(cli),
            ConfigCommands::Path => _config_path(),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli, input: &TraversalArgs, policy: Option<SubtreePolicy>) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        policy,
        input.tokens,
        input.separator.clone(),
    );
    if settings.tokens == TokenMode::Chars && input.separator.is_some() {
        return Err(CliError::InvalidArgs(
            "--separator only applies to words mode".to_string(),
        ));
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

#[instrument(skip(settings))]
fn _build(settings: Settings, input: &TraversalArgs, format: OutputFormat) -> CliResult<()> {
    let service = RebuildService::new(settings);
    let tree = service.rebuild(&input.preorder, &input.inorder)?;

    match format {
        OutputFormat::Tree => output::info(&tree.to_tree_string()),
        OutputFormat::Traversals => {
            output::action("preorder", &tree.preorder().iter().join(" "));
            output::action("inorder", &tree.inorder().iter().join(" "));
        }
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _check(settings: Settings, input: &TraversalArgs) -> CliResult<()> {
    let service = RebuildService::new(settings);
    let count = service.check(&input.preorder, &input.inorder)?;
    output::success(&format!("traversals are consistent ({} values)", count));
    Ok(())
}

#[instrument(skip(cli))]
fn _config_show(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::info(&path.display()),
        None => output::info("no config directory available"),
    }
    Ok(())
}
