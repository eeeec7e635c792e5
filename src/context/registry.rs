//! Context registry: immutable lookup over loaded context definitions.

use crate::context::Context;
use crate::error::ResolveError;
use std::collections::{HashMap, HashSet};

/// Registry of contexts in declaration order
///
/// Identifiers (names and aliases) map to a slot in declaration order. Names take
/// precedence over aliases if a malformed configuration lets them collide.
#[derive(Debug, Clone, Default)]
pub struct ContextRegistry {
    contexts: Vec<Context>,
    lookup: HashMap<String, usize>,
}

impl ContextRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from contexts in declaration order
    pub fn from_contexts(contexts: impl IntoIterator<Item = Context>) -> Self {
        let mut registry = Self::new();
        for context in contexts {
            registry.register(context);
        }
        registry
    }

    /// Register a context. Re-registering a name replaces it in place, along
    /// with its aliases.
    pub fn register(&mut self, context: Context) {
        let existing = self
            .get(&context.name)
            .map(|_| self.lookup[&context.name]);
        match existing {
            Some(slot) => {
                self.contexts[slot] = context;
                self.rebuild_lookup();
            }
            None => {
                self.contexts.push(context);
                let slot = self.contexts.len() - 1;
                let context = &self.contexts[slot];
                self.lookup.insert(context.name.clone(), slot);
                for alias in &context.aliases {
                    self.lookup.entry(alias.clone()).or_insert(slot);
                }
            }
        }
    }

    /// Names first, then aliases in declaration order.
    fn rebuild_lookup(&mut self) {
        self.lookup.clear();
        for (slot, context) in self.contexts.iter().enumerate() {
            self.lookup.insert(context.name.clone(), slot);
        }
        for (slot, context) in self.contexts.iter().enumerate() {
            for alias in &context.aliases {
                self.lookup.entry(alias.clone()).or_insert(slot);
            }
        }
    }

    /// Get a context by canonical name
    pub fn get(&self, name: &str) -> Option<&Context> {
        self.lookup
            .get(name)
            .map(|&slot| &self.contexts[slot])
            .filter(|context| context.name == name)
    }

    /// Look up a context by exact name or alias
    pub fn resolve(&self, identifier: &str) -> Result<&Context, ResolveError> {
        self.lookup
            .get(identifier)
            .map(|&slot| &self.contexts[slot])
            .ok_or_else(|| ResolveError::UnknownContext(identifier.to_string()))
    }

    /// Walk parent links from `context` up to its root, nearest first.
    ///
    /// The loader rejects cycles and dangling parents; both are still checked here
    /// so a traversal always terminates.
    pub fn ancestors<'a>(&'a self, context: &'a Context) -> Result<Vec<&'a Context>, ResolveError> {
        let mut chain = Vec::new();
        let mut visited: HashSet<&str> = HashSet::from([context.name.as_str()]);
        let mut current = context;

        while let Some(parent_name) = current.parent.as_deref() {
            if !visited.insert(parent_name) {
                return Err(ResolveError::CyclicContext(parent_name.to_string()));
            }
            let parent = self
                .get(parent_name)
                .ok_or_else(|| ResolveError::UnknownContext(parent_name.to_string()))?;
            chain.push(parent);
            current = parent;
        }

        Ok(chain)
    }

    /// Every context flagged as default, in declaration order
    pub fn defaults(&self) -> Vec<&Context> {
        self.contexts.iter().filter(|context| context.is_default).collect()
    }

    /// All contexts in declaration order
    pub fn list_all(&self) -> &[Context] {
        &self.contexts
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
