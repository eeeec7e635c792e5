//! Integration tests for `statue config init`

use clap::Parser;
use statue::cli::{Cli, RunContext};
use statue::init;
use statue::{CommandFilter, ConfigLoader};
use statue::sources::SourcePlanner;
use std::fs;

use crate::integration::{empty_workspace, strings, touch};

#[test]
fn test_init_then_plan_configured_sources() {
    let workspace = empty_workspace();
    touch(workspace.path(), "setup.py");
    touch(workspace.path(), "mylib/__init__.py");
    touch(workspace.path(), "tests/test_mylib.py");
    touch(workspace.path(), ".venv/lib/site.py");
    touch(workspace.path(), "docs/conf.txt");

    let summary = init::initialize(workspace.path(), false).unwrap();
    assert_eq!(
        summary.sources.keys().collect::<Vec<_>>(),
        vec!["mylib", "setup.py", "tests"]
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    let planner = config.build_planner().unwrap();
    let plans = SourcePlanner::new(&planner, &config.sources)
        .build::<&str>(&[], &[], &CommandFilter::default())
        .unwrap()
        .unwrap();

    let sources: Vec<&str> = plans.iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources, vec!["mylib", "setup.py", "tests"]);
    assert_eq!(plans[0].plan.len(), 7);
    assert_eq!(
        plans[1].plan.command_names(),
        vec!["black", "isort", "flake8"]
    );
    assert_eq!(plans[2].plan.active_contexts, strings(&["test", "standard"]));
}

#[test]
fn test_cli_init_force_overwrites() {
    let workspace = empty_workspace();
    touch(workspace.path(), "app.py");
    let config_path = ConfigLoader::configuration_path(workspace.path());
    fs::write(&config_path, "[sources.\"old\"]\n").unwrap();

    let cli = Cli::try_parse_from(["statue", "config", "init", "--force"]).unwrap();
    let output = RunContext::new(workspace.path().to_path_buf(), None)
        .unwrap()
        .execute(&cli.command)
        .unwrap();
    assert!(output.success);
    assert!(output.text.contains("app.py (contexts: -)"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[sources.\"app.py\"]"));
    assert!(!written.contains("old"));
}
