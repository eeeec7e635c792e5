//! Evaluation results
//!
//! What happened when a plan ran: per source, per command, in plan order.
//! Evaluations are stored as JSON in the history.

use crate::error::StatueError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Result of running one command on one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEvaluation {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub success: bool,
    /// `None` when the process never started or was killed by a signal
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub captured_output: Vec<String>,
}

impl CommandEvaluation {
    /// Evaluation for a command that could not be started.
    pub fn spawn_failure(command: &str, args: &[String], reason: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            args: args.to_vec(),
            success: false,
            exit_code: None,
            captured_output: vec![reason.into()],
        }
    }
}

/// Results for one source, in plan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEvaluation {
    pub commands_evaluations: Vec<CommandEvaluation>,
}

impl SourceEvaluation {
    pub fn success(&self) -> bool {
        self.commands_evaluations.iter().all(|e| e.success)
    }

    pub fn commands_number(&self) -> usize {
        self.commands_evaluations.len()
    }

    pub fn successful_commands_number(&self) -> usize {
        self.commands_evaluations.iter().filter(|e| e.success).count()
    }

    pub fn failed_commands(&self) -> Vec<&str> {
        self.commands_evaluations
            .iter()
            .filter(|e| !e.success)
            .map(|e| e.command.as_str())
            .collect()
    }
}

/// Results for a whole run: source -> results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluation {
    sources: IndexMap<String, SourceEvaluation>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a source's results. A repeated source replaces the earlier entry
    /// but keeps its position.
    pub fn insert(&mut self, source: impl Into<String>, evaluation: SourceEvaluation) {
        self.sources.insert(source.into(), evaluation);
    }

    pub fn get(&self, source: &str) -> Option<&SourceEvaluation> {
        self.sources.get(source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SourceEvaluation)> {
        self.sources.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn success(&self) -> bool {
        self.sources.values().all(SourceEvaluation::success)
    }

    pub fn commands_number(&self) -> usize {
        self.sources.values().map(SourceEvaluation::commands_number).sum()
    }

    pub fn successful_commands_number(&self) -> usize {
        self.sources
            .values()
            .map(SourceEvaluation::successful_commands_number)
            .sum()
    }

    /// Sources with at least one failed command, with the failed command names.
    pub fn failed_commands(&self) -> IndexMap<&str, Vec<&str>> {
        self.sources
            .iter()
            .filter(|(_, evaluation)| !evaluation.success())
            .map(|(source, evaluation)| (source.as_str(), evaluation.failed_commands()))
            .collect()
    }

    pub fn save_as_json(&self, path: &Path) -> Result<(), StatueError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, StatueError> {
        let content = fs::read_to_string(path).map_err(|e| {
            StatueError::CacheError(format!(
                "Failed to read evaluation {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
