//! Workspace config file source: statue.toml at the workspace root.

use crate::config::sources::Document;
use crate::error::StatueError;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace configuration file name
pub const CONFIGURATION_FILE_NAME: &str = "statue.toml";

/// Path of the workspace configuration file.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(CONFIGURATION_FILE_NAME)
}

/// Read a configuration file. The file must exist.
pub fn read(config_path: &Path) -> Result<Document, StatueError> {
    if !config_path.exists() {
        return Err(StatueError::ConfigError(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }
    let text = fs::read_to_string(config_path)?;
    Ok(Document::new(config_path.display().to_string(), text))
}
