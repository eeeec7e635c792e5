//! Installing missing commands before a run

use crate::sources::SourcePlan;
use async_trait::async_trait;
use indexmap::IndexSet;
use std::path::PathBuf;
use std::process::Stdio;
use tracing::{debug, info, warn};

/// Installer invocation used when `[statue] install_command` is not set
pub const DEFAULT_INSTALL_COMMAND: &[&str] = &["python3", "-m", "pip", "install", "-U"];

/// Finds and installs analysis commands
#[async_trait]
pub trait Installer: Send + Sync {
    fn is_installed(&self, command: &str) -> bool;

    /// Install `command`. The error is a human readable reason.
    async fn install(&self, command: &str) -> Result<(), String>;
}

/// What happened to one command during installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    AlreadyInstalled,
    Installed,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub command: String,
    pub outcome: InstallOutcome,
}

/// Command names across `plans`, each once, in first-planned order.
pub fn planned_commands(plans: &[SourcePlan]) -> Vec<&str> {
    let names: IndexSet<&str> = plans
        .iter()
        .flat_map(|source_plan| source_plan.plan.entries.iter())
        .map(|entry| entry.command_name.as_str())
        .collect();
    names.into_iter().collect()
}

/// Install every command that is not found. Failures are reported, not raised;
/// the run goes on and the command fails there.
pub async fn install_missing(installer: &dyn Installer, commands: &[&str]) -> Vec<InstallReport> {
    let mut reports = Vec::with_capacity(commands.len());
    for command in commands {
        let outcome = if installer.is_installed(command) {
            debug!(command = %command, "Command already installed");
            InstallOutcome::AlreadyInstalled
        } else {
            info!(command = %command, "Installing command");
            match installer.install(command).await {
                Ok(()) => InstallOutcome::Installed,
                Err(reason) => {
                    warn!(command = %command, reason = %reason, "Installation failed");
                    InstallOutcome::Failed(reason)
                }
            }
        };
        reports.push(InstallReport {
            command: command.to_string(),
            outcome,
        });
    }
    reports
}

/// Looks commands up on `PATH` and installs with an external program,
/// `<install_command...> <command>`
#[derive(Debug, Clone)]
pub struct ProcessInstaller {
    install_command: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessInstaller {
    pub fn new(install_command: Vec<String>) -> Self {
        Self {
            install_command,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }
}

impl Default for ProcessInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_COMMAND.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl Installer for ProcessInstaller {
    fn is_installed(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }

    async fn install(&self, command: &str) -> Result<(), String> {
        let Some((program, args)) = self.install_command.split_first() else {
            return Err("No install command configured".to_string());
        };
        let mut process = tokio::process::Command::new(program);
        process
            .args(args)
            .arg(command)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            process.current_dir(dir);
        }

        let output = process
            .output()
            .await
            .map_err(|e| format!("Failed to run \"{}\": {}", program, e))?;
        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(stderr
                .lines()
                .last()
                .map(str::to_string)
                .unwrap_or_else(|| format!("\"{}\" exited with {}", program, output.status)))
        }
    }
}
