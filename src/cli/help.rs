//! CLI command-name contract for logging and routing.

use crate::cli::parse::{
    CommandCommands, Commands, ConfigCommands, ContextCommands, HistoryCommands,
};

/// Command name string for log events (e.g. "context.list", "history.show").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Run { .. } => "run".to_string(),
        Commands::Plan { .. } => "plan".to_string(),
        Commands::Context { command } => format!("context.{}", context_command_name(command)),
        Commands::Command { command } => format!("command.{}", command_command_name(command)),
        Commands::History { command } => format!("history.{}", history_command_name(command)),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn context_command_name(command: &ContextCommands) -> &'static str {
    match command {
        ContextCommands::List => "list",
        ContextCommands::Show { .. } => "show",
    }
}

pub fn command_command_name(command: &CommandCommands) -> &'static str {
    match command {
        CommandCommands::List { .. } => "list",
        CommandCommands::Show { .. } => "show",
    }
}

pub fn history_command_name(command: &HistoryCommands) -> &'static str {
    match command {
        HistoryCommands::List { .. } => "list",
        HistoryCommands::Show { .. } => "show",
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Init { .. } => "init",
    }
}
