//! Configuration System
//!
//! Raw configuration model for `statue.toml` and the built-in defaults, the merge
//! between them, validation, and conversion into the planning engine's registry
//! and catalog. The engine assumes well-formed input; everything it cannot check
//! cheaply is rejected here.

use crate::command::{Command, CommandCatalog, OverrideRule};
use crate::context::{Context, ContextRegistry};
use crate::error::StatueError;
use crate::logging::LoggingConfig;
use crate::plan::Planner;
use crate::runner::installer::DEFAULT_INSTALL_COMMAND;
use crate::sources::SourceConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::{combine_command, merge_configurations};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatueConfig {
    /// General settings (`[statue]`)
    #[serde(default)]
    pub statue: GeneralSettings,

    /// Context definitions, in declaration order
    #[serde(default)]
    pub contexts: IndexMap<String, ContextConfig>,

    /// Command definitions, in declaration order
    #[serde(default)]
    pub commands: IndexMap<String, CommandConfig>,

    /// Source path -> per-source selection
    #[serde(default)]
    pub sources: IndexMap<String, SourceConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[statue]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Ignore the built-in defaults and use the workspace file alone
    #[serde(rename = "override", default)]
    pub override_defaults: bool,

    /// Number of evaluations kept in the history
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Program and leading arguments used by `run --install`; the command name
    /// is appended
    #[serde(default = "default_install_command")]
    pub install_command: Vec<String>,
}

fn default_history_size() -> usize {
    100
}

fn default_install_command() -> Vec<String> {
    DEFAULT_INSTALL_COMMAND.iter().map(|s| s.to_string()).collect()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            override_defaults: false,
            history_size: default_history_size(),
            install_command: default_install_command(),
        }
    }
}

/// `[contexts.<name>]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default)]
    pub help: String,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default, alias = "default")]
    pub is_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// `[commands.<name>]` table
///
/// Keys other than the command fields name contexts: a boolean is a membership
/// flag, a table is an override rule that also opts the command in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    /// Only meaningful when patching a built-in command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_args: Option<Vec<String>>,

    /// Only meaningful when patching a built-in command
    #[serde(default)]
    pub clear_args: bool,

    #[serde(flatten)]
    pub contexts: IndexMap<String, ContextSetting>,
}

/// Per-context entry inside a command table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextSetting {
    Flag(bool),
    Rule(OverrideRule),
}

impl ContextConfig {
    pub fn to_context(&self, name: &str) -> Context {
        Context {
            name: name.to_string(),
            aliases: self.aliases.clone(),
            help: self.help.clone(),
            is_default: self.is_default,
            parent: self.parent.clone(),
        }
    }
}

impl CommandConfig {
    pub fn to_command(&self, name: &str) -> Command {
        let mut command = Command::new(name, self.help.clone().unwrap_or_default())
            .with_args(self.args.clone().unwrap_or_default());
        for (context, setting) in &self.contexts {
            match setting {
                ContextSetting::Flag(selected) => {
                    command.membership.insert(context.clone(), *selected);
                }
                ContextSetting::Rule(rule) => {
                    command.membership.insert(context.clone(), true);
                    command.overrides.insert(context.clone(), rule.clone());
                }
            }
        }
        command
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Context(String, String),
    Command(String, String),
    Source(String, String),
    AmbiguousAlias {
        alias: String,
        first: String,
        second: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Context(name, msg) => write!(f, "Context '{}': {}", name, msg),
            ValidationError::Command(name, msg) => write!(f, "Command '{}': {}", name, msg),
            ValidationError::Source(path, msg) => write!(f, "Source '{}': {}", path, msg),
            ValidationError::AmbiguousAlias {
                alias,
                first,
                second,
            } => write!(
                f,
                "Alias '{}' is claimed by both '{}' and '{}'",
                alias, first, second
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StatueConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Identifier ownership: names first, then aliases
        let mut owners: HashMap<&str, &str> = self
            .contexts
            .keys()
            .map(|name| (name.as_str(), name.as_str()))
            .collect();
        for (name, context) in &self.contexts {
            for alias in context.aliases.iter().filter(|alias| *alias != name) {
                match owners.get(alias.as_str()) {
                    Some(owner) if *owner != name.as_str() => errors.push(ValidationError::AmbiguousAlias {
                        alias: alias.clone(),
                        first: owner.to_string(),
                        second: name.clone(),
                    }),
                    Some(_) => {}
                    None => {
                        owners.insert(alias.as_str(), name.as_str());
                    }
                }
            }
        }

        for (name, context) in &self.contexts {
            if let Some(parent) = &context.parent {
                if !self.contexts.contains_key(parent) {
                    errors.push(ValidationError::Context(
                        name.clone(),
                        format!("Unknown parent context '{}'", parent),
                    ));
                }
            }
            if let Some(cycle) = self.parent_cycle(name) {
                errors.push(ValidationError::Context(
                    name.clone(),
                    format!("Cyclic parent chain: {}", cycle.join(" -> ")),
                ));
            }
        }

        for (name, command) in &self.commands {
            if command.help.as_deref().map_or(true, |help| help.trim().is_empty()) {
                errors.push(ValidationError::Command(
                    name.clone(),
                    "Missing help text".to_string(),
                ));
            }
            if command.add_args.is_some() || command.clear_args {
                errors.push(ValidationError::Command(
                    name.clone(),
                    "add_args and clear_args only patch a built-in command; use args".to_string(),
                ));
            }
            for context in command.contexts.keys() {
                if self.contexts.contains_key(context) {
                    continue;
                }
                let msg = match owners.get(context.as_str()) {
                    Some(owner) => format!(
                        "'{}' is an alias of '{}'; use the context name",
                        context, owner
                    ),
                    None => format!("Unknown context '{}'", context),
                };
                errors.push(ValidationError::Command(name.clone(), msg));
            }
        }

        for (path, source) in &self.sources {
            for identifier in &source.contexts {
                if !owners.contains_key(identifier.as_str()) {
                    errors.push(ValidationError::Source(
                        path.clone(),
                        format!("Unknown context '{}'", identifier),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parent chain starting and ending at `start`, if `start` sits on a cycle.
    fn parent_cycle(&self, start: &str) -> Option<Vec<String>> {
        let mut chain = vec![start.to_string()];
        let mut visited: HashSet<&str> = HashSet::from([start]);
        let mut current = start;

        while let Some(parent) = self
            .contexts
            .get(current)
            .and_then(|context| context.parent.as_deref())
        {
            chain.push(parent.to_string());
            if parent == start {
                return Some(chain);
            }
            if !visited.insert(parent) {
                // Feeds into a cycle that does not pass through `start`
                return None;
            }
            current = parent;
        }
        None
    }

    /// Context registry in declaration order. Does not validate.
    pub fn context_registry(&self) -> ContextRegistry {
        ContextRegistry::from_contexts(
            self.contexts
                .iter()
                .map(|(name, context)| context.to_context(name)),
        )
    }

    /// Command catalog in declaration order. Does not validate.
    pub fn command_catalog(&self) -> CommandCatalog {
        CommandCatalog::from_commands(
            self.commands
                .iter()
                .map(|(name, command)| command.to_command(name)),
        )
    }

    /// Validate and build the planning engine
    pub fn build_planner(&self) -> Result<Planner, StatueError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            StatueError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Planner::new(self.context_registry(), self.command_catalog()))
    }
}
