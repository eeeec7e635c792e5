//! CLI presentation: text and json formatters per command family.

mod command;
mod context;
mod evaluation;
mod init;
mod plan;
mod shared;

pub use command::{format_command_list, format_command_show};
pub use context::{format_context_list, format_context_show};
pub use evaluation::{
    format_command_evaluation, format_history_list, format_history_show, format_install_reports,
    format_invocation, format_run_summary, format_source_heading,
};
pub use init::format_init_summary;
pub use plan::{format_plan_json, format_plan_text};
pub use shared::{format_section_heading, format_status};
