//! Evaluation history
//!
//! Evaluations live under `<workspace>/.statue/evaluations/` as
//! `evaluation-<unix seconds>.json`. Newest first everywhere.

use crate::error::StatueError;
use crate::evaluation::Evaluation;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CACHE_DIRECTORY: &str = ".statue";
const EVALUATIONS_DIRECTORY: &str = "evaluations";
const EVALUATION_PREFIX: &str = "evaluation-";
const EVALUATION_EXTENSION: &str = "json";

/// History store rooted at a workspace
#[derive(Debug, Clone)]
pub struct Cache {
    evaluations_dir: PathBuf,
    history_size: usize,
}

impl Cache {
    /// A `history_size` below 1 keeps one evaluation: the one just saved.
    pub fn new(workspace_root: &Path, history_size: usize) -> Self {
        Self {
            evaluations_dir: workspace_root
                .join(CACHE_DIRECTORY)
                .join(EVALUATIONS_DIRECTORY),
            history_size: history_size.max(1),
        }
    }

    pub fn evaluations_dir(&self) -> &Path {
        &self.evaluations_dir
    }

    /// Stored evaluation files, most recent first.
    pub fn all_evaluation_paths(&self) -> Result<Vec<PathBuf>, StatueError> {
        if !self.evaluations_dir.exists() {
            return Ok(Vec::new());
        }
        let mut stamped = Vec::new();
        for entry in fs::read_dir(&self.evaluations_dir)? {
            let path = entry?.path();
            if let Some(timestamp) = evaluation_timestamp(&path) {
                stamped.push((timestamp, path));
            }
        }
        stamped.sort_by(|a, b| b.cmp(a));
        Ok(stamped.into_iter().map(|(_, path)| path).collect())
    }

    /// The n-th most recent evaluation file (0-based).
    pub fn evaluation_path(&self, n: usize) -> Result<PathBuf, StatueError> {
        let paths = self.all_evaluation_paths()?;
        let available = paths.len();
        paths.into_iter().nth(n).ok_or_else(|| {
            StatueError::CacheError(format!(
                "Could not find evaluation number {} ({} stored)",
                n + 1,
                available
            ))
        })
    }

    pub fn recent_evaluation(&self) -> Result<Evaluation, StatueError> {
        Evaluation::load_from_file(&self.evaluation_path(0)?)
    }

    /// Store `evaluation` stamped with `at`, then drop evaluations beyond the
    /// history size.
    pub fn save_evaluation(
        &self,
        evaluation: &Evaluation,
        at: DateTime<Utc>,
    ) -> Result<PathBuf, StatueError> {
        let mut timestamp = at.timestamp();
        let mut path = self.path_for(timestamp);
        // Two runs within the same second
        while path.exists() {
            timestamp += 1;
            path = self.path_for(timestamp);
        }
        evaluation.save_as_json(&path)?;
        debug!(path = %path.display(), "Saved evaluation");
        self.prune()?;
        Ok(path)
    }

    fn path_for(&self, timestamp: i64) -> PathBuf {
        self.evaluations_dir.join(format!(
            "{}{}.{}",
            EVALUATION_PREFIX, timestamp, EVALUATION_EXTENSION
        ))
    }

    fn prune(&self) -> Result<(), StatueError> {
        for stale in self
            .all_evaluation_paths()?
            .into_iter()
            .skip(self.history_size)
        {
            if let Err(e) = fs::remove_file(&stale) {
                warn!(path = %stale.display(), error = %e, "Failed to remove old evaluation");
            }
        }
        Ok(())
    }
}

/// Unix timestamp encoded in an evaluation file name.
pub fn evaluation_timestamp(path: &Path) -> Option<i64> {
    if path.extension()? != EVALUATION_EXTENSION {
        return None;
    }
    path.file_stem()?
        .to_str()?
        .strip_prefix(EVALUATION_PREFIX)?
        .parse()
        .ok()
}

/// Local time of an evaluation file, for display.
pub fn evaluation_datetime(path: &Path) -> Option<DateTime<Local>> {
    let timestamp = evaluation_timestamp(path)?;
    Local.timestamp_opt(timestamp, 0).single()
}
