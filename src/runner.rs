//! Runner
//!
//! Executes source plans with bounded concurrency. Results come back in plan
//! order no matter which command finishes first.

pub mod executor;
pub mod installer;

pub use executor::{Executor, ProcessExecutor};
pub use installer::{
    install_missing, planned_commands, InstallOutcome, InstallReport, Installer, ProcessInstaller,
};

use crate::evaluation::{CommandEvaluation, Evaluation, SourceEvaluation};
use crate::sources::SourcePlan;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

/// Drives an [`Executor`] over source plans
pub struct Runner {
    executor: Arc<dyn Executor>,
    jobs: usize,
}

impl Runner {
    pub fn new(executor: Arc<dyn Executor>) -> Self {
        Self { executor, jobs: 1 }
    }

    /// Maximum number of commands in flight; values below 1 mean 1.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    pub async fn run(&self, plans: &[SourcePlan]) -> Evaluation {
        self.run_with_observer(plans, |_, _| {}).await
    }

    /// Run every plan. `observer` sees each result in plan order as soon as
    /// it and everything before it are done.
    pub async fn run_with_observer<F>(&self, plans: &[SourcePlan], mut observer: F) -> Evaluation
    where
        F: FnMut(&str, &CommandEvaluation),
    {
        let tasks = plans.iter().enumerate().flat_map(|(index, source_plan)| {
            source_plan
                .plan
                .entries
                .iter()
                .map(move |entry| (index, source_plan.source.as_str(), entry))
        });

        let total: usize = plans.iter().map(|p| p.plan.len()).sum();
        info!(sources = plans.len(), commands = total, jobs = self.jobs, "Running plans");

        let mut results = stream::iter(tasks)
            .map(|(index, source, entry)| {
                let executor = Arc::clone(&self.executor);
                async move { (index, source, executor.execute(source, entry).await) }
            })
            .buffered(self.jobs);

        let mut by_plan = vec![SourceEvaluation::default(); plans.len()];
        while let Some((index, source, command_evaluation)) = results.next().await {
            debug!(
                source = %source,
                command = %command_evaluation.command,
                success = command_evaluation.success,
                "Command finished"
            );
            observer(source, &command_evaluation);
            by_plan[index].commands_evaluations.push(command_evaluation);
        }

        let mut evaluation = Evaluation::new();
        for (source_plan, source_evaluation) in plans.iter().zip(by_plan) {
            evaluation.insert(source_plan.source.clone(), source_evaluation);
        }
        evaluation
    }
}
