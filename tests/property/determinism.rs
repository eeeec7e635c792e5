//! Property-based tests for planning guarantees

use proptest::prelude::*;
use statue::{Command, CommandCatalog, Context, ContextRegistry, OverrideRule, Planner};

const CONTEXTS: &[&str] = &["standard", "strict", "test", "fast", "docs", "format"];

/// Context forest: "standard" is the only default, some contexts inherit from it.
fn registry() -> ContextRegistry {
    ContextRegistry::from_contexts([
        Context::new("standard", "Standard").as_default(),
        Context::new("strict", "Strict").with_parent("standard"),
        Context::new("test", "Test").with_parent("standard"),
        Context::new("fast", "Fast").with_aliases(["speed"]),
        Context::new("docs", "Docs").with_aliases(["documentation"]),
        Context::new("format", "Format").with_parent("fast"),
    ])
}

fn arg() -> impl Strategy<Value = String> {
    "--[a-z]{1,6}"
}

fn rule() -> impl Strategy<Value = OverrideRule> {
    (
        any::<bool>(),
        prop::option::of(prop::collection::vec(arg(), 0..3)),
        prop::option::of(prop::collection::vec(arg(), 0..3)),
    )
        .prop_map(|(clear_args, args, add_args)| OverrideRule {
            clear_args,
            args,
            add_args,
        })
}

fn command(index: usize) -> impl Strategy<Value = Command> {
    (
        prop::collection::vec(arg(), 0..4),
        prop::collection::vec((0..CONTEXTS.len(), any::<bool>()), 0..4),
        prop::collection::vec((0..CONTEXTS.len(), rule()), 0..3),
    )
        .prop_map(move |(base_args, membership, overrides)| {
            let mut command = Command::new(format!("cmd{}", index), "Generated").with_args(base_args);
            for (context, selected) in membership {
                command = command.with_membership(CONTEXTS[context], selected);
            }
            for (context, rule) in overrides {
                command = command.with_override(CONTEXTS[context], rule);
            }
            command
        })
}

fn catalog() -> impl Strategy<Value = CommandCatalog> {
    (0usize..8)
        .prop_flat_map(|count| (0..count).map(command).collect::<Vec<_>>())
        .prop_map(|commands| CommandCatalog::from_commands(commands))
}

fn request() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(CONTEXTS).prop_map(str::to_string),
        0..4,
    )
}

proptest! {
    #[test]
    fn test_plan_is_deterministic(catalog in catalog(), requested in request()) {
        let planner = Planner::new(registry(), catalog);
        let first = planner.plan(&requested).unwrap();
        let second = planner.plan(&requested).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_empty_request_means_defaults(catalog in catalog()) {
        let planner = Planner::new(registry(), catalog);
        prop_assert_eq!(
            planner.plan::<&str>(&[]).unwrap(),
            planner.plan(&["standard"]).unwrap()
        );
    }

    #[test]
    fn test_alias_plans_like_name(catalog in catalog(), before in request()) {
        let planner = Planner::new(registry(), catalog);
        let mut by_alias = before.clone();
        by_alias.push("speed".to_string());
        let mut by_name = before;
        by_name.push("fast".to_string());
        prop_assert_eq!(planner.plan(&by_alias).unwrap(), planner.plan(&by_name).unwrap());
    }

    #[test]
    fn test_plan_follows_catalog_order(catalog in catalog(), requested in request()) {
        let order: Vec<String> = catalog.all_commands().iter().map(|c| c.name.clone()).collect();
        let planner = Planner::new(registry(), catalog);
        let plan = planner.plan(&requested).unwrap();
        let positions: Vec<usize> = plan
            .entries
            .iter()
            .map(|entry| order.iter().position(|name| *name == entry.command_name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_active_order_has_no_duplicates(requested in request()) {
        let planner = Planner::new(registry(), CommandCatalog::new());
        let plan = planner.plan(&requested).unwrap();
        let mut seen = std::collections::HashSet::new();
        prop_assert!(plan.active_contexts.iter().all(|name| seen.insert(name.clone())));
        for identifier in &requested {
            prop_assert!(plan.active_contexts.contains(identifier));
        }
    }

    #[test]
    fn test_replace_then_append(
        base in prop::collection::vec(arg(), 0..4),
        replacement in prop::collection::vec(arg(), 0..3),
        appended in prop::collection::vec(arg(), 0..3),
    ) {
        let mut working = base;
        OverrideRule {
            clear_args: false,
            args: Some(replacement.clone()),
            add_args: Some(appended.clone()),
        }
        .apply(&mut working);
        let expected: Vec<String> = replacement.into_iter().chain(appended).collect();
        prop_assert_eq!(working, expected);
    }

    #[test]
    fn test_clear_alone_empties(base in prop::collection::vec(arg(), 0..4)) {
        let mut working = base;
        OverrideRule::clear().apply(&mut working);
        prop_assert!(working.is_empty());
    }
}
