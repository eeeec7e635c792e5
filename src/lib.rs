//! Statue: context-driven static code analysis
//!
//! Resolves which analysis commands to run, and with which arguments, from a
//! set of named contexts. Contexts inherit from a parent, commands opt in or
//! out of contexts, and each context may rewrite a command's arguments. The
//! resolved [`plan::InvocationPlan`] is then executed per source by the
//! [`runner`] and kept in the evaluation history.

pub mod cache;
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod init;
pub mod logging;
pub mod plan;
pub mod resolve;
pub mod runner;
pub mod sources;

pub use command::{Command, CommandCatalog, OverrideRule};
pub use config::{ConfigLoader, StatueConfig};
pub use context::{Context, ContextRegistry};
pub use error::{ResolveError, StatueError};
pub use plan::{CommandFilter, InvocationPlan, PlanEntry, Planner};
