//! Configuration sources: built-in defaults and the workspace file.
//!
//! Context, command and source names are user data and keep their case, so the
//! named tables are read with `toml` directly. Only the fixed-key settings
//! tables go through the `config` builder, which lowercases keys.

pub mod defaults;
pub mod workspace_file;

use crate::config::StatueConfig;
use crate::error::StatueError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::{File, FileFormat};

/// One TOML configuration document and where it came from
#[derive(Debug, Clone)]
pub struct Document {
    pub origin: String,
    pub text: String,
}

impl Document {
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Deserialize the whole document, names untouched.
    pub fn tables(&self) -> Result<StatueConfig, StatueError> {
        toml::from_str(&self.text).map_err(|e| {
            StatueError::ConfigError(format!("Failed to parse {}: {}", self.origin, e))
        })
    }

    /// Add the document to builder as a TOML source.
    pub fn add_to_builder(&self, builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(File::from_str(&self.text, FileFormat::Toml))
    }
}
