//! CLI parse: clap types for Statue. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Statue CLI - run static code analysis commands in configured contexts
#[derive(Parser)]
#[command(name = "statue")]
#[command(about = "Run static code analysis commands, selected and tuned by context")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (default: <workspace>/statue.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Context and allow/deny selection shared by run, plan and command
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Context name or alias (repeatable, in priority order)
    #[arg(short = 'c', long = "context")]
    pub contexts: Vec<String>,

    /// Run only these commands (repeatable)
    #[arg(short = 'a', long = "allow")]
    pub allow: Vec<String>,

    /// Never run these commands (repeatable)
    #[arg(short = 'd', long = "deny")]
    pub deny: Vec<String>,
}

/// How much `run` prints while commands execute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    /// Each command's output
    #[default]
    Normal,
    /// Each command's invocation and output
    Verbose,
    /// Only the summary
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run commands on sources
    ///
    /// Without SOURCES, every source configured in statue.toml is checked.
    Run {
        /// Paths to check
        sources: Vec<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Number of commands to run at the same time
        #[arg(short = 'j', long, default_value_t = 1)]
        jobs: usize,

        /// Install missing commands before running
        #[arg(short = 'i', long)]
        install: bool,

        /// Run output verbosity
        #[arg(long, value_enum, default_value_t = Verbosity::Normal)]
        verbosity: Verbosity,

        /// Print only the summary (same as --verbosity silent)
        #[arg(long, conflicts_with = "verbosity")]
        silent: bool,
    },
    /// Show what would run, without running it
    Plan {
        /// Paths to plan for (default: configured sources)
        sources: Vec<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Inspect contexts
    Context {
        #[command(subcommand)]
        command: ContextCommands,
    },
    /// Inspect commands
    Command {
        #[command(subcommand)]
        command: CommandCommands,
    },
    /// Inspect past evaluations
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Manage the workspace configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ContextCommands {
    /// List all contexts
    List,
    /// Show one context
    Show {
        /// Context name or alias
        name: String,
    },
}

#[derive(Subcommand)]
pub enum CommandCommands {
    /// List commands selected by the given contexts
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Show one command with its arguments resolved for the given contexts
    Show {
        /// Command name
        name: String,

        /// Context name or alias (repeatable)
        #[arg(short = 'c', long = "context")]
        contexts: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent evaluations, newest first
    List {
        /// Show only the N most recent evaluations
        #[arg(long)]
        head: Option<usize>,
    },
    /// Show a past evaluation
    Show {
        /// N-th most recent evaluation
        #[arg(short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Discover sources and write statue.toml
    Init {
        /// Overwrite an existing statue.toml without asking
        #[arg(long)]
        force: bool,
    },
}
