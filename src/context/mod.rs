//! Context domain: named execution profiles and the registry that resolves them.
//!
//! A context selects a subset of commands and may patch their arguments. Contexts
//! form a forest through single-parent links; the registry owns lookup by name or
//! alias and materializes ancestor chains.

pub mod registry;

pub use registry::ContextRegistry;

use serde::{Deserialize, Serialize};

/// A named execution profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Canonical, registry-unique name
    pub name: String,
    /// Alternate identifiers, unique across the registry
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Informational description
    #[serde(default)]
    pub help: String,
    /// Active whenever the caller requests an empty context selection
    #[serde(default)]
    pub is_default: bool,
    /// Name of the parent context, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Context {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            help: help.into(),
            is_default: false,
            parent: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// True if `identifier` is this context's name or one of its aliases.
    pub fn matches(&self, identifier: &str) -> bool {
        self.name == identifier || self.aliases.iter().any(|alias| alias == identifier)
    }
}
