//! Override Resolver
//!
//! Computes a command's effective argument list by folding the command's override
//! rules over an active context order. The order is supplied by the planner and
//! already contains every requested context followed by its ancestors, nearest
//! first, deduplicated. Rules apply strictly in that order: later rules see the
//! arguments left by earlier ones, and there is no separate merge pass.

use crate::command::Command;
use crate::context::Context;
use tracing::trace;

/// Effective arguments of `command` under `active_contexts`.
///
/// Starts from the command's base arguments and applies the rule of every active
/// context that has one. Pure: identical inputs give identical output.
pub fn effective_args(command: &Command, active_contexts: &[&Context]) -> Vec<String> {
    active_contexts
        .iter()
        .filter_map(|context| {
            command
                .override_for(&context.name)
                .map(|rule| (context, rule))
        })
        .fold(command.base_args.clone(), |mut working, (context, rule)| {
            trace!(
                command = %command.name,
                context = %context.name,
                "Applying override rule"
            );
            rule.apply(&mut working);
            working
        })
}
