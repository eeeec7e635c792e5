//! Selection Engine
//!
//! Turns requested context identifiers into an [`InvocationPlan`]: the ordered
//! list of commands to run with their resolved arguments. Planning is pure; it
//! never spawns processes and never returns a partial plan.

use crate::command::{Command, CommandCatalog};
use crate::context::{Context, ContextRegistry};
use crate::error::ResolveError;
use crate::resolve::effective_args;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One planned command invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub command_name: String,
    pub resolved_args: Vec<String>,
    /// Active contexts that selected this command (diagnostics only)
    pub source_contexts: Vec<String>,
}

/// Ordered plan handed to the execution layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationPlan {
    /// Active context order used for selection and override application
    pub active_contexts: Vec<String>,
    /// Entries in catalog declaration order
    pub entries: Vec<PlanEntry>,
}

impl InvocationPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, command_name: &str) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.command_name == command_name)
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.command_name.as_str()).collect()
    }
}

/// Allow/deny restriction applied after selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFilter {
    /// When non-empty, only these commands may run
    #[serde(default)]
    pub allow_list: Vec<String>,
    /// Commands that never run
    #[serde(default)]
    pub deny_list: Vec<String>,
}

impl CommandFilter {
    pub fn new(allow_list: Vec<String>, deny_list: Vec<String>) -> Self {
        Self {
            allow_list,
            deny_list,
        }
    }

    pub fn permits(&self, command_name: &str) -> bool {
        if self.deny_list.iter().any(|name| name == command_name) {
            return false;
        }
        self.allow_list.is_empty() || self.allow_list.iter().any(|name| name == command_name)
    }

    /// This filter's lists extended by `other`'s.
    pub fn combined(&self, other: &CommandFilter) -> CommandFilter {
        CommandFilter {
            allow_list: self
                .allow_list
                .iter()
                .chain(&other.allow_list)
                .cloned()
                .collect(),
            deny_list: self
                .deny_list
                .iter()
                .chain(&other.deny_list)
                .cloned()
                .collect(),
        }
    }
}

/// Planning entry point over an immutable registry and catalog
#[derive(Debug, Clone, Default)]
pub struct Planner {
    registry: ContextRegistry,
    catalog: CommandCatalog,
}

impl Planner {
    pub fn new(registry: ContextRegistry, catalog: CommandCatalog) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    /// Plan the commands for `requested` context names or aliases.
    pub fn plan<S: AsRef<str>>(&self, requested: &[S]) -> Result<InvocationPlan, ResolveError> {
        self.plan_filtered(requested, &CommandFilter::default())
    }

    /// Plan, then drop commands rejected by `filter`.
    pub fn plan_filtered<S: AsRef<str>>(
        &self,
        requested: &[S],
        filter: &CommandFilter,
    ) -> Result<InvocationPlan, ResolveError> {
        let active = self.active_contexts(requested)?;

        let mut entries = Vec::new();
        for command in self.catalog.all_commands() {
            let source_contexts = self.selecting_contexts(command, &active);
            if source_contexts.is_empty() || !filter.permits(&command.name) {
                continue;
            }
            entries.push(PlanEntry {
                command_name: command.name.clone(),
                resolved_args: effective_args(command, &active),
                source_contexts,
            });
        }

        let plan = InvocationPlan {
            active_contexts: active.iter().map(|c| c.name.clone()).collect(),
            entries,
        };
        debug!(
            active_contexts = ?plan.active_contexts,
            commands = ?plan.command_names(),
            "Built invocation plan"
        );
        Ok(plan)
    }

    /// Resolve a single command under `requested`, whether or not it is selected.
    ///
    /// An empty `source_contexts` means the command would not run.
    pub fn resolve_command<S: AsRef<str>>(
        &self,
        command_name: &str,
        requested: &[S],
    ) -> Result<PlanEntry, ResolveError> {
        let command = self.catalog.get_or_error(command_name)?;
        let active = self.active_contexts(requested)?;
        Ok(PlanEntry {
            command_name: command.name.clone(),
            resolved_args: effective_args(command, &active),
            source_contexts: self.selecting_contexts(command, &active),
        })
    }

    /// Active context order for `requested`.
    ///
    /// An empty request means every default context in declaration order. Each
    /// requested context is followed by its ancestors, nearest first; a context
    /// already emitted is skipped. Every identifier is resolved before anything
    /// is expanded, so an unknown one fails the whole call.
    pub fn active_contexts<S: AsRef<str>>(
        &self,
        requested: &[S],
    ) -> Result<Vec<&Context>, ResolveError> {
        let roots: Vec<&Context> = if requested.is_empty() {
            self.registry.defaults()
        } else {
            requested
                .iter()
                .map(|identifier| self.registry.resolve(identifier.as_ref()))
                .collect::<Result<_, _>>()?
        };

        let mut emitted: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        for root in roots {
            let chain = std::iter::once(root).chain(self.registry.ancestors(root)?);
            for context in chain {
                if emitted.insert(context.name.as_str()) {
                    order.push(context);
                }
            }
        }
        Ok(order)
    }

    /// Active contexts that select `command`.
    ///
    /// A context selects a command through an explicit `true` membership flag. A
    /// default context also selects every command that declares no membership
    /// entry for any active context.
    fn selecting_contexts(&self, command: &Command, active: &[&Context]) -> Vec<String> {
        let declares_membership = active
            .iter()
            .any(|context| command.membership_for(&context.name).is_some());

        active
            .iter()
            .filter(|context| {
                self.catalog.is_selected(command, context)
                    || (context.is_default && !declares_membership)
            })
            .map(|context| context.name.clone())
            .collect()
    }
}
