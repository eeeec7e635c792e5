//! Command executors

use crate::evaluation::CommandEvaluation;
use crate::plan::PlanEntry;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{debug, warn};

/// Runs one planned command against one source
#[async_trait]
pub trait Executor: Send + Sync {
    /// Never fails: problems starting the command are reported as a failed
    /// evaluation.
    async fn execute(&self, source: &str, entry: &PlanEntry) -> CommandEvaluation;
}

/// Spawns `<command> <source> <args...>` as a child process
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    working_dir: Option<PathBuf>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands from `working_dir` instead of the current directory.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn execute(&self, source: &str, entry: &PlanEntry) -> CommandEvaluation {
        let mut command = tokio::process::Command::new(&entry.command_name);
        command
            .arg(source)
            .args(&entry.resolved_args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(
            command = %entry.command_name,
            source = %source,
            args = ?entry.resolved_args,
            "Spawning command"
        );

        match command.output().await {
            Ok(output) => {
                let captured_output = String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .chain(String::from_utf8_lossy(&output.stderr).lines())
                    .map(str::to_string)
                    .collect();
                CommandEvaluation {
                    command: entry.command_name.clone(),
                    args: entry.resolved_args.clone(),
                    success: output.status.success(),
                    exit_code: output.status.code(),
                    captured_output,
                }
            }
            Err(e) => {
                warn!(command = %entry.command_name, error = %e, "Failed to spawn command");
                CommandEvaluation::spawn_failure(
                    &entry.command_name,
                    &entry.resolved_args,
                    format!("Failed to run \"{}\": {}", entry.command_name, e),
                )
            }
        }
    }
}
