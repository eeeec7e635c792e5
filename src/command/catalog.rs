//! Command catalog: commands in declaration order.

use crate::command::Command;
use crate::context::Context;
use crate::error::ResolveError;

/// Catalog of commands in declaration order
///
/// Plan output follows catalog order, so iteration order must stay stable.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    commands: Vec<Command>,
}

impl CommandCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut catalog = Self::new();
        for command in commands {
            catalog.register(command);
        }
        catalog
    }

    /// Register a command. Re-registering a name replaces it in place.
    pub fn register(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    /// All commands in declaration order
    pub fn all_commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Get a command by name or return an error
    pub fn get_or_error(&self, name: &str) -> Result<&Command, ResolveError> {
        self.get(name)
            .ok_or_else(|| ResolveError::UnknownCommand(name.to_string()))
    }

    /// Explicit membership of `command` in `context`; absent entries are `false`.
    ///
    /// Default-context inclusion is a planning policy and lives in the planner.
    pub fn is_selected(&self, command: &Command, context: &Context) -> bool {
        command.membership_for(&context.name).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
