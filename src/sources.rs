//! Source Plans
//!
//! Maps the paths to check onto invocation plans. A workspace may attach
//! extra contexts and allow/deny lists to a source path; those are combined
//! with what the command line asks for.

pub mod discovery;

pub use discovery::discover_sources;

use crate::error::ResolveError;
use crate::plan::{CommandFilter, InvocationPlan, Planner};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// `[sources."<path>"]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub contexts: Vec<String>,

    #[serde(default)]
    pub allow_list: Vec<String>,

    #[serde(default)]
    pub deny_list: Vec<String>,
}

impl SourceConfig {
    pub fn filter(&self) -> CommandFilter {
        CommandFilter::new(self.allow_list.clone(), self.deny_list.clone())
    }
}

/// Plan for one source path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePlan {
    pub source: String,
    pub plan: InvocationPlan,
}

/// Builds per-source plans from the configured sources and command line input
pub struct SourcePlanner<'a> {
    planner: &'a Planner,
    sources: &'a IndexMap<String, SourceConfig>,
}

impl<'a> SourcePlanner<'a> {
    pub fn new(planner: &'a Planner, sources: &'a IndexMap<String, SourceConfig>) -> Self {
        Self { planner, sources }
    }

    /// Configuration of the first configured path that contains `source`.
    pub fn lookup(&self, source: &str) -> Option<&'a SourceConfig> {
        let source = Path::new(source);
        self.sources
            .iter()
            .find(|(path, _)| source.starts_with(path.as_str()))
            .map(|(_, config)| config)
    }

    /// Plan every source.
    ///
    /// Explicit `sources` use the command line contexts and filter as given;
    /// a repeated source is planned once, at its first position. Otherwise every configured source is planned with the command line
    /// contexts followed by its own, and the command line lists extended by
    /// its own. Returns `None` when there is nothing to check.
    pub fn build<S: AsRef<str>>(
        &self,
        sources: &[S],
        contexts: &[String],
        filter: &CommandFilter,
    ) -> Result<Option<Vec<SourcePlan>>, ResolveError> {
        if !sources.is_empty() {
            let unique: IndexSet<&str> = sources.iter().map(|source| source.as_ref()).collect();
            return unique
                .into_iter()
                .map(|source| {
                    Ok(SourcePlan {
                        source: source.to_string(),
                        plan: self.planner.plan_filtered(contexts, filter)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some);
        }

        if self.sources.is_empty() {
            debug!("No sources given and none configured");
            return Ok(None);
        }

        let mut plans = Vec::with_capacity(self.sources.len());
        for (source, config) in self.sources {
            let source_contexts: Vec<String> = contexts
                .iter()
                .chain(&config.contexts)
                .cloned()
                .collect();
            let source_filter = filter.combined(&config.filter());
            plans.push(SourcePlan {
                source: source.clone(),
                plan: self.planner.plan_filtered(&source_contexts, &source_filter)?,
            });
        }
        Ok(Some(plans))
    }
}
