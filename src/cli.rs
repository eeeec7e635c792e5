//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{
    Cli, CommandCommands, Commands, ConfigCommands, ContextCommands, HistoryCommands,
    OutputFormat, SelectionArgs, Verbosity,
};
pub use presentation::{
    format_command_evaluation, format_command_list, format_command_show, format_context_list,
    format_context_show, format_history_list, format_history_show, format_init_summary,
    format_install_reports, format_invocation, format_plan_json, format_plan_text,
    format_run_summary, format_section_heading, format_source_heading, format_status,
};
pub use route::{CommandOutput, RunContext};
