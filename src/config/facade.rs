//! Configuration loader: reads the built-in defaults and an optional workspace
//! file, layers the settings tables through the `config` crate, then applies
//! the merge policy.

use crate::config::merge::merge_policy::{builder_with_defaults, merge_configurations};
use crate::config::sources::{defaults, workspace_file, Document};
use crate::config::StatueConfig;
use crate::error::StatueError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Entry point for loading configuration
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of `statue.toml` inside `workspace_root`
    pub fn configuration_path(workspace_root: &Path) -> PathBuf {
        workspace_file::workspace_config_path(workspace_root)
    }

    /// Built-in defaults alone
    pub fn defaults() -> Result<StatueConfig, StatueError> {
        Self::read(&defaults::document())
    }

    /// Load the workspace configuration merged over the defaults.
    ///
    /// Without a `statue.toml` in `workspace_root` the defaults are used alone.
    pub fn load(workspace_root: &Path) -> Result<StatueConfig, StatueError> {
        let config_path = Self::configuration_path(workspace_root);
        if !config_path.exists() {
            debug!(
                config_path = %config_path.display(),
                "No workspace configuration found, using built-in defaults"
            );
            return Self::defaults();
        }
        Self::load_from_file(&config_path)
    }

    /// Load an explicit configuration file merged over the defaults.
    pub fn load_from_file(config_path: &Path) -> Result<StatueConfig, StatueError> {
        let workspace = Self::read(&workspace_file::read(config_path)?)?;
        debug!(
            config_path = %config_path.display(),
            override_defaults = workspace.statue.override_defaults,
            "Loaded workspace configuration"
        );
        merge_configurations(Self::defaults()?, workspace)
    }

    /// Named tables as written; `[statue]` and `[logging]` with their defaults.
    fn read(document: &Document) -> Result<StatueConfig, StatueError> {
        let mut config = document.tables()?;
        let settings = document.add_to_builder(builder_with_defaults()?).build()?;
        config.statue = settings.get("statue")?;
        config.logging = settings.get("logging")?;
        Ok(config)
    }
}
