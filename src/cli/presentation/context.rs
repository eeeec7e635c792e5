//! Context presentation: registry listing and single-context detail.

use super::shared::{format_list, format_section_heading};
use crate::context::{Context, ContextRegistry};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_context_list(registry: &ContextRegistry) -> String {
    if registry.is_empty() {
        return "No contexts configured.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Context", "Aliases", "Parent", "Default", "Help"]);
    for context in registry.list_all() {
        table.add_row(vec![
            context.name.clone(),
            format_list(&context.aliases),
            context.parent.clone().unwrap_or_else(|| "-".to_string()),
            if context.is_default { "yes" } else { "" }.to_string(),
            context.help.clone(),
        ]);
    }
    format!("{}\n\n{}", format_section_heading("Contexts"), table)
}

/// `ancestors` is the parent chain, nearest first.
pub fn format_context_show(context: &Context, ancestors: &[&Context]) -> String {
    let chain: Vec<&str> = std::iter::once(context)
        .chain(ancestors.iter().copied())
        .map(|c| c.name.as_str())
        .collect();
    let mut out = format!("{}\n", format_section_heading(&context.name));
    out.push_str(&format!("  Aliases: {}\n", format_list(&context.aliases)));
    out.push_str(&format!("  Parent chain: {}\n", chain.join(" -> ")));
    out.push_str(&format!(
        "  Default: {}\n",
        if context.is_default { "yes" } else { "no" }
    ));
    out.push_str(&format!("  Help: {}", context.help));
    out
}
