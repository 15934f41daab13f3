//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::application::TokenMode;
use crate::domain::SubtreePolicy;

/// Rebuild binary trees from their preorder and inorder traversals
#[derive(Parser, Debug)]
#[command(name = "retree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d -d -d)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/retree/retree.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild and print the tree
    Build {
        #[command(flatten)]
        input: TraversalArgs,

        /// Handling of nodes with a single non-empty side
        #[arg(long, value_enum)]
        policy: Option<SubtreePolicy>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },

    /// Validate traversals without building a tree
    Check {
        #[command(flatten)]
        input: TraversalArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Traversal input shared by `build` and `check`.
#[derive(Args, Debug)]
pub struct TraversalArgs {
    /// Preorder traversal, e.g. "F B A D C E G I H"
    #[arg(short, long, allow_hyphen_values = true)]
    pub preorder: String,

    /// Inorder traversal, e.g. "A B C D E F G H I"
    #[arg(short, long, allow_hyphen_values = true)]
    pub inorder: String,

    /// How the traversal text is split into values
    #[arg(short, long, value_enum)]
    pub tokens: Option<TokenMode>,

    /// Value separator in words mode
    #[arg(short, long)]
    pub separator: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file path
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree
    #[default]
    Tree,
    /// Preorder and inorder of the rebuilt tree
    Traversals,
}
