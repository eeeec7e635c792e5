//! Integration tests for configuration loading and merging

use statue::config::ValidationError;
use statue::{ConfigLoader, StatueError};

use crate::integration::{strings, workspace_with_config};

#[test]
fn test_workspace_commands_patch_defaults() {
    let workspace = workspace_with_config(
        r#"
[commands.black]
args = ["--diff"]

[commands.mypy]
add_args = ["--no-warn-unused-ignores"]

[commands.bandit]
clear_args = true

[commands.pylint]
fast = true

[commands.ruff]
help = "An extremely fast Python linter"
args = ["check"]
fast = true
"#,
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    let planner = config.build_planner().unwrap();

    let plan = planner.plan::<&str>(&[]).unwrap();
    assert_eq!(
        plan.command_names(),
        vec!["black", "isort", "flake8", "pylint", "mypy", "pydocstyle", "bandit", "ruff"]
    );
    assert_eq!(plan.get("black").unwrap().resolved_args, strings(&["--diff"]));
    assert_eq!(
        plan.get("mypy").unwrap().resolved_args,
        strings(&["--ignore-missing-imports", "--no-warn-unused-ignores"])
    );
    assert!(plan.get("bandit").unwrap().resolved_args.is_empty());

    // Patched membership keeps the built-in override rules
    let fast = planner.plan(&["fast"]).unwrap();
    assert_eq!(
        fast.command_names(),
        vec!["black", "isort", "flake8", "pylint", "ruff"]
    );
    let test = planner.plan(&["test"]).unwrap();
    assert_eq!(
        test.get("pylint").unwrap().resolved_args,
        strings(&["--disable=missing-function-docstring,redefined-outer-name"])
    );
}

#[test]
fn test_workspace_contexts_extend_defaults() {
    let workspace = workspace_with_config(
        r#"
[contexts.ci]
help = "Continuous integration"
parent = "strict"

[commands.bandit]
ci = false
"#,
    );
    let planner = ConfigLoader::load(workspace.path())
        .unwrap()
        .build_planner()
        .unwrap();
    let plan = planner.plan(&["ci"]).unwrap();
    assert_eq!(plan.active_contexts, strings(&["ci", "strict", "standard"]));
    assert!(plan.get("bandit").is_none());
    assert_eq!(
        plan.get("mypy").unwrap().resolved_args,
        strings(&["--ignore-missing-imports", "--strict"])
    );
}

#[test]
fn test_redefining_builtin_context_is_rejected() {
    let workspace = workspace_with_config(
        r#"
[contexts.fast]
help = "My fast"
"#,
    );
    let err = ConfigLoader::load(workspace.path()).unwrap_err();
    assert!(matches!(err, StatueError::ConfigError(_)));
    assert!(err.to_string().contains("\"fast\" is a predefined context"));
}

#[test]
fn test_override_uses_workspace_alone() {
    let workspace = workspace_with_config(
        r#"
[statue]
override = true

[contexts.all]
help = "Everything"
is_default = true

[commands.ruff]
help = "Linter"
args = ["check"]
"#,
    );
    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.contexts.len(), 1);
    assert_eq!(config.commands.len(), 1);

    let plan = config.build_planner().unwrap().plan::<&str>(&[]).unwrap();
    assert_eq!(plan.command_names(), vec!["ruff"]);
    assert_eq!(plan.active_contexts, strings(&["all"]));
}

#[test]
fn test_invalid_workspace_reports_every_problem() {
    let workspace = workspace_with_config(
        r#"
[contexts.ci]
help = "CI"
parent = "nightly"
aliases = ["docs"]

[commands.ruff]
args = ["check"]
speed = true
"#,
    );
    let config = ConfigLoader::load(workspace.path()).unwrap();
    let errors = config.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::AmbiguousAlias {
        alias: "docs".to_string(),
        first: "documentation".to_string(),
        second: "ci".to_string(),
    }));
    assert!(errors.contains(&ValidationError::Context(
        "ci".to_string(),
        "Unknown parent context 'nightly'".to_string()
    )));
    assert!(errors.contains(&ValidationError::Command(
        "ruff".to_string(),
        "Missing help text".to_string()
    )));
    assert!(errors.contains(&ValidationError::Command(
        "ruff".to_string(),
        "'speed' is an alias of 'fast'; use the context name".to_string()
    )));

    let err = config.build_planner().unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Configuration validation failed:"));
}

#[test]
fn test_explicit_config_file_path() {
    let workspace = workspace_with_config("");
    let other = workspace.path().join("custom.toml");
    std::fs::write(
        &other,
        r#"
[sources."src"]
contexts = ["strict"]
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&other).unwrap();
    assert_eq!(config.sources["src"].contexts, strings(&["strict"]));
    assert!(config.contexts.contains_key("standard"));
}

#[test]
fn test_names_keep_their_case() {
    let workspace = workspace_with_config(
        r#"
[contexts.CI]
help = "Continuous integration"
parent = "standard"

[commands.myTool]
help = "In-house checker"
args = ["--Mode=Full"]
CI = true

[sources."Src/Pkg.py"]
contexts = ["CI"]
"#,
    );
    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.contexts.last().map(|(k, _)| k.as_str()), Some("CI"));
    assert_eq!(config.commands.last().map(|(k, _)| k.as_str()), Some("myTool"));

    let planner = config.build_planner().unwrap();
    let plans = statue::sources::SourcePlanner::new(&planner, &config.sources)
        .build::<&str>(&[], &[], &statue::CommandFilter::default())
        .unwrap()
        .unwrap();
    assert_eq!(plans[0].source, "Src/Pkg.py");
    assert_eq!(plans[0].plan.active_contexts, strings(&["CI", "standard"]));
    let tool = plans[0].plan.get("myTool").unwrap();
    assert_eq!(tool.resolved_args, strings(&["--Mode=Full"]));
    assert!(planner.plan(&["ci"]).is_err());
}

#[test]
fn test_patch_fields_on_new_command_are_rejected() {
    let workspace = workspace_with_config(
        r#"
[commands.ruff]
help = "An extremely fast Python linter"
add_args = ["check"]
"#,
    );
    let errors = ConfigLoader::load(workspace.path())
        .unwrap()
        .validate()
        .unwrap_err();
    assert_eq!(
        errors,
        vec![ValidationError::Command(
            "ruff".to_string(),
            "add_args and clear_args only patch a built-in command; use args".to_string()
        )]
    );
}
