//! Merge rules between the built-in defaults and a workspace file.

pub mod merge_policy;
