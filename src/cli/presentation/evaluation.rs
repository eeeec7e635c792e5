//! Evaluation presentation: run output, run summary and history.

use super::shared::{format_section_heading, format_status};
use crate::cache::evaluation_datetime;
use crate::evaluation::{CommandEvaluation, Evaluation};
use crate::runner::{InstallOutcome, InstallReport};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_source_heading(source: &str) -> String {
    format!("Evaluating {}", source)
}

/// `<command> <source> <args...>`, as spawned.
pub fn format_invocation(source: &str, evaluation: &CommandEvaluation) -> String {
    std::iter::once(evaluation.command.as_str())
        .chain(std::iter::once(source))
        .chain(evaluation.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One command's section in the run output. With `source`, the invocation
/// is printed above the output.
pub fn format_command_evaluation(evaluation: &CommandEvaluation, source: Option<&str>) -> String {
    let mut out = format!("{}\n{}\n", evaluation.command, "-".repeat(evaluation.command.len()));
    if let Some(source) = source {
        out.push_str(&format!("{}\n", format_invocation(source, evaluation).dimmed()));
    }
    for line in &evaluation.captured_output {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Installation results. Commands that were already there are listed only
/// when `verbose`.
pub fn format_install_reports(reports: &[InstallReport], verbose: bool) -> String {
    reports
        .iter()
        .filter_map(|report| match &report.outcome {
            InstallOutcome::AlreadyInstalled if verbose => {
                Some(format!("{} is already installed", report.command))
            }
            InstallOutcome::AlreadyInstalled => None,
            InstallOutcome::Installed => Some(format!("Installed {}", report.command.green())),
            InstallOutcome::Failed(reason) => Some(format!(
                "Failed to install {}: {}",
                report.command.red(),
                reason
            )),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_run_summary(evaluation: &Evaluation) -> String {
    let mut out = format!("{}\n\n", format_section_heading("Summary"));
    let failed = evaluation.failed_commands();
    if failed.is_empty() {
        out.push_str("Statue finished successfully!");
        return out;
    }
    out.push_str("Statue has failed on the following commands:\n");
    for (source, commands) in failed {
        out.push_str(&format!("\n{}:\n\t{}", source, commands.join(", ")));
    }
    out
}

fn format_timestamp(path: &Path) -> String {
    let when = evaluation_datetime(path)
        .map(|dt| dt.format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| "unknown time".to_string());
    format!("{}", when.yellow())
}

fn format_ratio(evaluation: &Evaluation) -> String {
    format!(
        "{}/{} successful",
        evaluation.successful_commands_number(),
        evaluation.commands_number()
    )
}

/// Numbered list, newest first.
pub fn format_history_list(entries: &[(PathBuf, Evaluation)]) -> String {
    if entries.is_empty() {
        return "No previous evaluations.".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, (path, evaluation))| {
            format!(
                "{}) {} - {} ({})",
                i + 1,
                format_timestamp(path),
                format_status(evaluation.success()),
                format_ratio(evaluation)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_history_show(path: &Path, evaluation: &Evaluation) -> String {
    let mut out = format!(
        "{} - {} ({})",
        format_timestamp(path),
        format_status(evaluation.success()),
        format_ratio(evaluation)
    );
    for (source, source_evaluation) in evaluation.iter() {
        out.push_str(&format!("\n{}:", source));
        for command_evaluation in &source_evaluation.commands_evaluations {
            out.push_str(&format!(
                "\n\t{} - {}",
                command_evaluation.command,
                format_status(command_evaluation.success)
            ));
        }
    }
    out
}
