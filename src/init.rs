//! Workspace initialization for `statue config init`
//!
//! Discovers the workspace's Python sources and writes them to `statue.toml`.
//! Contexts and commands are left to the built-in defaults.

use crate::config::ConfigLoader;
use crate::error::StatueError;
use crate::sources::{discover_sources, SourceConfig};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of initialization
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub config_path: PathBuf,
    pub sources: IndexMap<String, SourceConfig>,
    /// An existing configuration file was replaced
    pub overwritten: bool,
}

#[derive(Serialize)]
struct InitDocument<'a> {
    sources: &'a IndexMap<String, SourceConfig>,
}

/// Render the `[sources]` document written by `config init`.
pub fn render_configuration(sources: &IndexMap<String, SourceConfig>) -> Result<String, StatueError> {
    toml::to_string(&InitDocument { sources }).map_err(|e| {
        StatueError::ConfigError(format!("Failed to serialize configuration: {}", e))
    })
}

/// Discover sources and write `statue.toml`.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn initialize(workspace_root: &Path, overwrite: bool) -> Result<InitSummary, StatueError> {
    let config_path = ConfigLoader::configuration_path(workspace_root);
    let exists = config_path.exists();
    if exists && !overwrite {
        return Err(StatueError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    let sources = discover_sources(workspace_root)?;
    std::fs::write(&config_path, render_configuration(&sources)?)?;
    info!(
        config_path = %config_path.display(),
        sources = sources.len(),
        "Wrote workspace configuration"
    );

    Ok(InitSummary {
        config_path,
        sources,
        overwritten: exists,
    })
}
