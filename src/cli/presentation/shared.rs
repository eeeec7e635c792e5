//! Shared presentation helpers.

use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// "Success" in green or "Failure" in red.
pub fn format_status(success: bool) -> String {
    if success {
        format!("{}", "Success".green())
    } else {
        format!("{}", "Failure".red())
    }
}

/// Comma-separated list, or "-" when empty.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Arguments as they would appear on a command line, or "(none)".
pub fn format_args(args: &[String]) -> String {
    if args.is_empty() {
        "(none)".to_string()
    } else {
        args.join(" ")
    }
}
