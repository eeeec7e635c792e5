//! Merge rules: defaults, override order, conflict handling.

use crate::config::{CommandConfig, StatueConfig};
use crate::error::StatueError;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with defaults for the fixed-key settings tables.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("statue.override", false)?
        .set_default("statue.history_size", 100)?
        .set_default("logging.enabled", true)
}

/// Merge a workspace configuration on top of the built-in defaults.
///
/// - `[statue] override = true` keeps the workspace configuration alone.
/// - Commands present in both are combined with [`combine_command`]; new
///   commands follow the defaults in declaration order.
/// - Predefined contexts cannot be redefined; new contexts follow the defaults.
/// - General settings, sources and logging come from the workspace.
pub fn merge_configurations(
    defaults: StatueConfig,
    workspace: StatueConfig,
) -> Result<StatueConfig, StatueError> {
    if workspace.statue.override_defaults {
        return Ok(workspace);
    }

    let mut commands = defaults.commands;
    for (name, patch) in workspace.commands {
        let merged = match commands.get(&name) {
            Some(base) => combine_command(base, &patch),
            None => patch,
        };
        commands.insert(name, merged);
    }

    let mut contexts = defaults.contexts;
    for (name, context) in workspace.contexts {
        if contexts.contains_key(&name) {
            return Err(StatueError::ConfigError(format!(
                "\"{}\" is a predefined context and cannot be overridden",
                name
            )));
        }
        contexts.insert(name, context);
    }

    Ok(StatueConfig {
        statue: workspace.statue,
        contexts,
        commands,
        sources: workspace.sources,
        logging: workspace.logging,
    })
}

/// Combine a command definition with a patch on top of it.
///
/// Arguments: the patch's `args` replace; otherwise its `add_args` extend the
/// base `args`; otherwise `clear_args` drops them; otherwise the base `args`
/// stay. Help text and context entries from the patch replace the base entry
/// of the same key; new context entries are appended.
pub fn combine_command(base: &CommandConfig, patch: &CommandConfig) -> CommandConfig {
    let mut contexts = base.contexts.clone();
    for (context, setting) in &patch.contexts {
        contexts.insert(context.clone(), setting.clone());
    }

    CommandConfig {
        help: patch.help.clone().or_else(|| base.help.clone()),
        args: combine_args(base.args.as_deref(), patch),
        add_args: None,
        clear_args: false,
        contexts,
    }
}

fn combine_args(base_args: Option<&[String]>, patch: &CommandConfig) -> Option<Vec<String>> {
    let base_args = base_args.unwrap_or_default();
    if let Some(args) = &patch.args {
        return Some(args.clone());
    }
    if let Some(add_args) = &patch.add_args {
        return Some(base_args.iter().chain(add_args).cloned().collect());
    }
    if patch.clear_args || base_args.is_empty() {
        return None;
    }
    Some(base_args.to_vec())
}
