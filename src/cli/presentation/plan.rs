//! Plan presentation: text and json formatters.

use super::shared::{format_args, format_list, format_section_heading};
use crate::error::StatueError;
use crate::sources::SourcePlan;

pub fn format_plan_text(plans: &[SourcePlan]) -> String {
    let mut out = format!("{}\n", format_section_heading("Plan"));
    for source_plan in plans {
        out.push_str(&format!("\n{}\n", source_plan.source));
        out.push_str(&format!(
            "  Active contexts: {}\n",
            format_list(&source_plan.plan.active_contexts)
        ));
        if source_plan.plan.is_empty() {
            out.push_str("  No commands selected.\n");
            continue;
        }
        for (i, entry) in source_plan.plan.entries.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} {}\n",
                i + 1,
                entry.command_name,
                format_args(&entry.resolved_args)
            ));
        }
    }
    out.trim_end().to_string()
}

pub fn format_plan_json(plans: &[SourcePlan]) -> Result<String, StatueError> {
    Ok(serde_json::to_string_pretty(plans)?)
}
