//! Init presentation: summary of `config init`.

use super::shared::format_list;
use crate::init::InitSummary;

pub fn format_init_summary(summary: &InitSummary) -> String {
    let action = if summary.overwritten {
        "Overwrote"
    } else {
        "Created"
    };
    let mut out = format!("{} {}\n", action, summary.config_path.display());
    if summary.sources.is_empty() {
        out.push_str("No Python sources found.");
        return out;
    }
    out.push_str(&format!("Sources ({}):", summary.sources.len()));
    for (source, config) in &summary.sources {
        out.push_str(&format!(
            "\n  {} (contexts: {})",
            source,
            format_list(&config.contexts)
        ));
    }
    out
}
