//! Command presentation: selected commands and single-command detail.

use super::shared::{format_args, format_list, format_section_heading};
use crate::command::{Command, CommandCatalog};
use crate::plan::{InvocationPlan, PlanEntry};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_command_list(plan: &InvocationPlan, catalog: &CommandCatalog) -> String {
    let mut out = format!(
        "{}\n  Active contexts: {}\n\n",
        format_section_heading("Commands"),
        format_list(&plan.active_contexts)
    );
    if plan.is_empty() {
        out.push_str("No commands selected.");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Command", "Arguments", "Help"]);
    for entry in &plan.entries {
        let help = catalog
            .get(&entry.command_name)
            .map(|command| command.help.clone())
            .unwrap_or_default();
        table.add_row(vec![
            entry.command_name.clone(),
            format_args(&entry.resolved_args),
            help,
        ]);
    }
    out.push_str(&table.to_string());
    out
}

/// `entry` is the command resolved for `active_contexts`.
pub fn format_command_show(command: &Command, entry: &PlanEntry, active_contexts: &[String]) -> String {
    let mut out = format!("{}\n", format_section_heading(&command.name));
    out.push_str(&format!("  Help: {}\n", command.help));
    out.push_str(&format!("  Active contexts: {}\n", format_list(active_contexts)));
    out.push_str(&format!("  Arguments: {}\n", format_args(&entry.resolved_args)));
    if entry.source_contexts.is_empty() {
        out.push_str("  Selected by: not selected");
    } else {
        out.push_str(&format!(
            "  Selected by: {}",
            format_list(&entry.source_contexts)
        ));
    }
    out
}
