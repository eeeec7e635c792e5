//! Command domain: external tool invocations and their per-context patches.

pub mod catalog;

pub use catalog::CommandCatalog;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Context-scoped patch to a command's argument list
///
/// Effects apply in a fixed order: clear, then replace, then append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    /// Discard the working arguments before this rule's own `args`/`add_args`
    #[serde(default, skip_serializing_if = "is_false")]
    pub clear_args: bool,

    /// Replace the working arguments outright
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Append to the working arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_args: Option<Vec<String>>,
}

impl OverrideRule {
    pub fn clear() -> Self {
        Self {
            clear_args: true,
            ..Self::default()
        }
    }

    pub fn replace<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: Some(args.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn append<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            add_args: Some(args.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Apply this rule to `working` in place.
    pub fn apply(&self, working: &mut Vec<String>) {
        if self.clear_args {
            working.clear();
        }
        if let Some(args) = &self.args {
            working.clone_from(args);
        }
        if let Some(add_args) = &self.add_args {
            working.extend(add_args.iter().cloned());
        }
    }
}

/// A named external tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Executable name, unique in the catalog
    pub name: String,

    /// Arguments used when no override applies
    #[serde(default)]
    pub base_args: Vec<String>,

    pub help: String,

    /// Explicit per-context selection flags
    #[serde(default)]
    pub membership: IndexMap<String, bool>,

    /// Per-context argument patches
    #[serde(default)]
    pub overrides: IndexMap<String, OverrideRule>,
}

impl Command {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_args: Vec::new(),
            help: help.into(),
            membership: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_membership(mut self, context: impl Into<String>, selected: bool) -> Self {
        self.membership.insert(context.into(), selected);
        self
    }

    pub fn with_override(mut self, context: impl Into<String>, rule: OverrideRule) -> Self {
        self.overrides.insert(context.into(), rule);
        self
    }

    /// Explicit membership flag for a context, if declared
    pub fn membership_for(&self, context: &str) -> Option<bool> {
        self.membership.get(context).copied()
    }

    pub fn override_for(&self, context: &str) -> Option<&OverrideRule> {
        self.overrides.get(context)
    }
}
