//! Tests for CLI argument parsing and command execution

use clap::Parser;

use retree::application::TokenMode;
use retree::cli::args::{Commands, ConfigCommands, OutputFormat};
use retree::cli::{execute_command, Cli, CliError};
use retree::domain::SubtreePolicy;
use retree::exitcode;

#[test]
fn given_build_args_when_parsing_then_fills_traversals_and_overrides() {
    let cli = Cli::try_parse_from([
        "retree",
        "-d",
        "-d",
        "build",
        "--preorder",
        "F B A",
        "--inorder",
        "A B F",
        "--policy",
        "leaf-truncation",
        "--tokens",
        "chars",
        "--format",
        "traversals",
    ])
    .unwrap();

    assert_eq!(cli.debug, 2);
    match cli.command {
        Commands::Build {
            input,
            policy,
            format,
        } => {
            assert_eq!(input.preorder, "F B A");
            assert_eq!(input.inorder, "A B F");
            assert_eq!(input.tokens, Some(TokenMode::Chars));
            assert_eq!(policy, Some(SubtreePolicy::LeafTruncation));
            assert_eq!(format, OutputFormat::Traversals);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn given_build_without_format_when_parsing_then_defaults_to_tree() {
    let cli = Cli::try_parse_from(["retree", "build", "-p", "A", "-i", "A"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Build {
            format: OutputFormat::Tree,
            policy: None,
            ..
        }
    ));
}

#[test]
fn given_missing_inorder_when_parsing_then_fails() {
    assert!(Cli::try_parse_from(["retree", "check", "-p", "A"]).is_err());
}

#[test]
fn given_config_path_when_parsing_then_selects_subcommand() {
    let cli = Cli::try_parse_from(["retree", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Path
        }
    ));
}

#[test]
fn given_separator_in_chars_mode_when_executing_then_invalid_args() {
    let cli = Cli::try_parse_from([
        "retree", "check", "-p", "AB", "-i", "BA", "-t", "chars", "-s", ";",
    ])
    .unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert!(matches!(err, CliError::InvalidArgs(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_invalid_traversals_when_executing_then_dataerr() {
    let cli = Cli::try_parse_from(["retree", "build", "-p", "A B", "-i", "A"]).unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_consistent_traversals_when_checking_then_succeeds() {
    let cli = Cli::try_parse_from(["retree", "check", "-p", "B A C", "-i", "A B C"]).unwrap();

    assert!(execute_command(&cli).is_ok());
}
