//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::StatueError;

/// Map domain/service errors to a string for stderr.
/// Configuration validation failures list one problem per line.
pub fn map_error(e: &StatueError) -> String {
    e.to_string()
}
