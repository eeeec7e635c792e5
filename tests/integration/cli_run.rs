//! Integration tests for `statue run` through the CLI route table
//!
//! Commands are ordinary Unix utilities invoked as `<command> <source> <args...>`.

#![cfg(unix)]

use clap::Parser;
use statue::cache::Cache;
use statue::cli::{Cli, CommandOutput, RunContext};
use statue::StatueError;
use std::path::Path;

use crate::integration::workspace_with_config;

const UNIX_TOOLS: &str = r#"
[statue]
override = true
history_size = 2

[contexts.standard]
help = "Standard"
is_default = true

[contexts.broken]
help = "Includes a failing command"

[commands.ls]
help = "Lists the source"

[commands.false]
help = "Always fails"
standard = false
broken = true

[sources."pkg"]
contexts = []
"#;

fn run(workspace: &Path, args: &[&str]) -> Result<CommandOutput, StatueError> {
    let mut argv = vec!["statue", "run", "--silent"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    RunContext::new(workspace.to_path_buf(), None)?.execute(&cli.command)
}

#[test]
fn test_run_configured_sources_succeeds() {
    let workspace = workspace_with_config(UNIX_TOOLS);
    std::fs::create_dir(workspace.path().join("pkg")).unwrap();

    let output = run(workspace.path(), &[]).unwrap();
    assert!(output.success, "{}", output.text);
    assert!(output.text.contains("Statue finished successfully!"));

    let evaluation = Cache::new(workspace.path(), 2).recent_evaluation().unwrap();
    assert_eq!(evaluation.commands_number(), 1);
    let pkg = evaluation.get("pkg").unwrap();
    assert_eq!(pkg.commands_evaluations[0].command, "ls");
    assert_eq!(pkg.commands_evaluations[0].exit_code, Some(0));
}

#[test]
fn test_run_reports_failures() {
    let workspace = workspace_with_config(UNIX_TOOLS);

    let output = run(workspace.path(), &["missing", "-c", "broken", "-c", "standard"]).unwrap();
    assert!(!output.success);
    assert!(output.text.contains("missing:\n\tls, false"));

    let evaluation = Cache::new(workspace.path(), 2).recent_evaluation().unwrap();
    assert_eq!(evaluation.failed_commands()["missing"], vec!["ls", "false"]);
}

#[test]
fn test_run_with_missing_tool_fails_without_crashing() {
    let workspace = workspace_with_config(
        r#"
[statue]
override = true

[contexts.standard]
help = "Standard"
is_default = true

[commands.statue-no-such-tool]
help = "Not installed"
"#,
    );
    let output = run(workspace.path(), &["src"]).unwrap();
    assert!(!output.success);

    let evaluation = Cache::new(workspace.path(), 10).recent_evaluation().unwrap();
    let command = &evaluation.get("src").unwrap().commands_evaluations[0];
    assert_eq!(command.exit_code, None);
    assert!(command.captured_output[0].contains("statue-no-such-tool"));
}

#[test]
fn test_run_deny_list_skips_commands() {
    let workspace = workspace_with_config(UNIX_TOOLS);
    let output = run(
        workspace.path(),
        &["missing", "-c", "broken", "-d", "false", "--jobs", "2"],
    )
    .unwrap();
    // "broken" alone selects only `false`, which is denied
    assert!(output.success);
    let evaluation = Cache::new(workspace.path(), 2).recent_evaluation().unwrap();
    assert_eq!(evaluation.commands_number(), 0);
}

const MISSING_TOOL: &str = r#"
[statue]
override = true
install_command = ["false"]

[contexts.standard]
help = "Standard"
is_default = true

[commands.statue-no-such-tool]
help = "Not installed"

[commands.ls]
help = "Lists the source"
"#;

#[test]
fn test_run_install_failure_does_not_stop_the_run() {
    let workspace = workspace_with_config(MISSING_TOOL);
    std::fs::create_dir(workspace.path().join("pkg")).unwrap();

    let output = run(workspace.path(), &["pkg", "--install"]).unwrap();
    assert!(!output.success);

    let evaluation = Cache::new(workspace.path(), 10).recent_evaluation().unwrap();
    let pkg = evaluation.get("pkg").unwrap();
    assert_eq!(pkg.failed_commands(), vec!["statue-no-such-tool"]);
    assert!(pkg.commands_evaluations[1].success);
}

#[test]
fn test_run_verbosity_levels() {
    let workspace = workspace_with_config(UNIX_TOOLS);
    std::fs::create_dir(workspace.path().join("pkg")).unwrap();

    for verbosity in ["normal", "verbose", "silent"] {
        let cli = Cli::try_parse_from(["statue", "run", "pkg", "--verbosity", verbosity]).unwrap();
        let output = RunContext::new(workspace.path().to_path_buf(), None)
            .unwrap()
            .execute(&cli.command)
            .unwrap();
        assert!(output.success, "{}", output.text);
    }

    assert!(Cli::try_parse_from(["statue", "run", "--silent", "--verbosity", "verbose"]).is_err());
}

#[test]
fn test_run_repeated_source_is_checked_once() {
    let workspace = workspace_with_config(UNIX_TOOLS);
    let output = run(
        workspace.path(),
        &["missing", "other", "missing", "-c", "broken"],
    )
    .unwrap();
    assert!(!output.success);

    let evaluation = Cache::new(workspace.path(), 2).recent_evaluation().unwrap();
    assert_eq!(evaluation.commands_number(), 2);
    let sources: Vec<&String> = evaluation.iter().map(|(source, _)| source).collect();
    assert_eq!(sources, vec!["missing", "other"]);
}
