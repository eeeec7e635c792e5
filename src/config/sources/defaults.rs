//! Built-in defaults source: resources/defaults.toml, embedded at compile time.

use crate::config::sources::Document;

/// Default configuration document embedded in the binary
pub const DEFAULT_CONFIGURATION: &str = include_str!("../../../resources/defaults.toml");

/// The embedded defaults as a document.
pub fn document() -> Document {
    Document::new("built-in defaults", DEFAULT_CONFIGURATION)
}
