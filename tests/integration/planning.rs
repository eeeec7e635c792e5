//! Integration tests for planning over the built-in defaults

use statue::{CommandFilter, ResolveError};

use crate::integration::{default_planner, strings};

#[test]
fn test_default_plan_runs_every_standard_command() {
    let planner = default_planner();
    let plan = planner.plan::<&str>(&[]).unwrap();

    assert_eq!(plan.active_contexts, strings(&["standard"]));
    assert_eq!(
        plan.command_names(),
        vec!["black", "isort", "flake8", "pylint", "mypy", "pydocstyle", "bandit"]
    );
    assert_eq!(plan.get("black").unwrap().resolved_args, strings(&["--check"]));
    assert!(plan.get("pylint").unwrap().resolved_args.is_empty());
    assert_eq!(plan, planner.plan(&["standard"]).unwrap());
}

#[test]
fn test_test_context_inherits_standard() {
    let plan = default_planner().plan(&["test"]).unwrap();

    assert_eq!(plan.active_contexts, strings(&["test", "standard"]));
    assert_eq!(
        plan.command_names(),
        vec!["black", "isort", "flake8", "pylint", "mypy"]
    );
    assert_eq!(
        plan.get("flake8").unwrap().resolved_args,
        strings(&["--max-line-length=88", "--extend-ignore=S101"])
    );
    assert_eq!(
        plan.get("flake8").unwrap().source_contexts,
        strings(&["test"])
    );
    assert_eq!(
        plan.get("mypy").unwrap().source_contexts,
        strings(&["standard"])
    );
}

#[test]
fn test_strict_appends_to_mypy() {
    let plan = default_planner().plan(&["strict"]).unwrap();
    assert_eq!(plan.active_contexts, strings(&["strict", "standard"]));
    assert_eq!(plan.len(), 7);
    assert_eq!(
        plan.get("mypy").unwrap().resolved_args,
        strings(&["--ignore-missing-imports", "--strict"])
    );
}

#[test]
fn test_format_clears_and_replaces() {
    let plan = default_planner().plan(&["format"]).unwrap();
    assert_eq!(plan.command_names(), vec!["black", "isort"]);
    assert!(plan.get("black").unwrap().resolved_args.is_empty());
    assert_eq!(
        plan.get("isort").unwrap().resolved_args,
        strings(&["--profile=black"])
    );
}

#[test]
fn test_aliases_plan_like_names() {
    let planner = default_planner();
    assert_eq!(
        planner.plan(&["docs"]).unwrap(),
        planner.plan(&["documentation"]).unwrap()
    );
    assert_eq!(
        planner.plan(&["speed"]).unwrap().command_names(),
        vec!["black", "isort", "flake8"]
    );
}

#[test]
fn test_combined_contexts_follow_request_order() {
    let plan = default_planner().plan(&["fast", "test"]).unwrap();
    assert_eq!(plan.active_contexts, strings(&["fast", "test", "standard"]));
    assert_eq!(
        plan.command_names(),
        vec!["black", "isort", "flake8", "pylint", "mypy"]
    );
}

#[test]
fn test_unknown_context_fails_whole_plan() {
    let err = default_planner()
        .plan(&["fast", "doesnotexist"])
        .unwrap_err();
    assert_eq!(err, ResolveError::UnknownContext("doesnotexist".to_string()));
}

#[test]
fn test_allow_and_deny_lists() {
    let planner = default_planner();
    let filter = CommandFilter::new(strings(&["black", "mypy", "bandit"]), strings(&["mypy"]));
    let plan = planner.plan_filtered(&["test"], &filter).unwrap();
    assert_eq!(plan.command_names(), vec!["black"]);
}

#[test]
fn test_resolve_single_command() {
    let planner = default_planner();
    let entry = planner.resolve_command("pydocstyle", &["test"]).unwrap();
    assert!(entry.source_contexts.is_empty());

    let err = planner.resolve_command("ruff", &["test"]).unwrap_err();
    assert_eq!(err, ResolveError::UnknownCommand("ruff".to_string()));
}
