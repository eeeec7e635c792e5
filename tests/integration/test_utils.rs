//! Shared test utilities for integration tests
//!
//! Workspaces are temporary directories; nothing touches the process
//! environment, so tests can run in parallel.

use statue::{ConfigLoader, Planner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Empty workspace
pub fn empty_workspace() -> TempDir {
    TempDir::new().unwrap()
}

/// Workspace with `content` as its statue.toml
pub fn workspace_with_config(content: &str) -> TempDir {
    let workspace = TempDir::new().unwrap();
    fs::write(ConfigLoader::configuration_path(workspace.path()), content).unwrap();
    workspace
}

/// Create an empty file at `relative`, with parent directories
pub fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "").unwrap();
}

/// Planner over the built-in defaults
pub fn default_planner() -> Planner {
    ConfigLoader::defaults().unwrap().build_planner().unwrap()
}

/// Owned strings from literals
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
