//! Source discovery for `config init`

use crate::sources::SourceConfig;
use indexmap::IndexMap;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Directory names never treated as sources
const IGNORED_DIRECTORIES: &[&str] = &[
    "venv",
    "env",
    "build",
    "dist",
    "node_modules",
    "target",
    "__pycache__",
];

const TEST_DIRECTORIES: &[&str] = &["test", "tests"];
const SETUP_FILE: &str = "setup.py";

/// Scan the top level of `workspace_root` for Python sources.
///
/// Keys are POSIX-style paths relative to the root, in name order.
pub fn discover_sources(workspace_root: &Path) -> std::io::Result<IndexMap<String, SourceConfig>> {
    let mut sources = IndexMap::new();

    let top_level = WalkDir::new(workspace_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry));

    for entry in top_level {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_source = if entry.file_type().is_dir() {
            contains_python(entry.path())
        } else {
            is_python_file(entry.path())
        };
        if !is_source {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let contexts = if TEST_DIRECTORIES.contains(&name.as_str()) {
            vec!["test".to_string()]
        } else if name == SETUP_FILE {
            vec!["fast".to_string()]
        } else {
            Vec::new()
        };

        let relative = entry
            .path()
            .strip_prefix(workspace_root)
            .unwrap_or_else(|_| entry.path());
        sources.insert(
            posix_path(relative),
            SourceConfig {
                contexts,
                ..SourceConfig::default()
            },
        );
    }

    debug!(
        workspace = %workspace_root.display(),
        sources = ?sources.keys().collect::<Vec<_>>(),
        "Discovered sources"
    );
    Ok(sources)
}

fn is_ignored(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir()
        && (IGNORED_DIRECTORIES.contains(&name.as_ref()) || name.ends_with(".egg-info"))
}

fn is_python_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("py"))
}

fn contains_python(directory: &Path) -> bool {
    WalkDir::new(directory)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored(entry))
        .filter_map(Result::ok)
        .any(|entry| entry.file_type().is_file() && is_python_file(entry.path()))
}

fn posix_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
