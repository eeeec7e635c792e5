//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cache::Cache;
use crate::config::{ConfigLoader, StatueConfig};
use crate::error::StatueError;
use crate::evaluation::{CommandEvaluation, Evaluation};
use crate::init;
use crate::plan::{CommandFilter, Planner};
use crate::runner::{install_missing, planned_commands, ProcessExecutor, ProcessInstaller, Runner};
use crate::sources::{SourcePlan, SourcePlanner};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{
    CommandCommands, Commands, ConfigCommands, ContextCommands, HistoryCommands, OutputFormat,
    SelectionArgs, Verbosity,
};
use crate::cli::presentation::{
    format_command_evaluation, format_command_list, format_command_show, format_context_list,
    format_context_show, format_history_list, format_history_show, format_init_summary,
    format_install_reports, format_plan_json, format_plan_text, format_run_summary, format_source_heading,
};

/// Source name used when planning with nothing to check configured
const WORKSPACE_SOURCE: &str = ".";

/// Result of a routed command: text for stdout and whether the process
/// should exit successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Runtime context for CLI execution: workspace and config path.
/// Configuration is loaded per command so that `config init` works on a
/// workspace whose statue.toml is broken.
pub struct RunContext {
    workspace_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, StatueError> {
        if !workspace_root.is_dir() {
            return Err(StatueError::ConfigError(format!(
                "Workspace directory not found: {}",
                workspace_root.display()
            )));
        }
        Ok(Self {
            workspace_root,
            config_path,
        })
    }

    pub fn workspace_root(&self) -> &PathBuf {
        &self.workspace_root
    }

    fn load_config(&self) -> Result<StatueConfig, StatueError> {
        match &self.config_path {
            Some(config_path) => ConfigLoader::load_from_file(config_path),
            None => ConfigLoader::load(&self.workspace_root),
        }
    }

    fn cache(&self, config: &StatueConfig) -> Cache {
        Cache::new(&self.workspace_root, config.statue.history_size)
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, StatueError> {
        info!(command = %command_name(command), "Executing command");
        match command {
            Commands::Run {
                sources,
                selection,
                jobs,
                install,
                verbosity,
                silent,
            } => {
                let verbosity = if *silent { Verbosity::Silent } else { *verbosity };
                self.handle_run(sources, selection, *jobs, *install, verbosity)
            }
            Commands::Plan {
                sources,
                selection,
                format,
            } => self.handle_plan(sources, selection, *format).map(Into::into),
            Commands::Context { command } => self.handle_context_command(command).map(Into::into),
            Commands::Command { command } => self.handle_command_command(command).map(Into::into),
            Commands::History { command } => self.handle_history_command(command).map(Into::into),
            Commands::Config { command } => self.handle_config_command(command).map(Into::into),
        }
    }

    fn source_plans(
        &self,
        config: &StatueConfig,
        planner: &Planner,
        sources: &[String],
        selection: &SelectionArgs,
    ) -> Result<Option<Vec<SourcePlan>>, StatueError> {
        let filter = command_filter(selection);
        let plans = SourcePlanner::new(planner, &config.sources).build(
            sources,
            &selection.contexts,
            &filter,
        )?;
        Ok(plans)
    }

    fn handle_run(
        &self,
        sources: &[String],
        selection: &SelectionArgs,
        jobs: usize,
        install: bool,
        verbosity: Verbosity,
    ) -> Result<CommandOutput, StatueError> {
        let config = self.load_config()?;
        let planner = config.build_planner()?;
        let Some(plans) = self.source_plans(&config, &planner, sources, selection)? else {
            return Ok(
                "No sources to check. Pass SOURCES or run `statue config init` to configure them."
                    .to_string()
                    .into(),
            );
        };

        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            StatueError::ExecutionFailed(format!("Failed to create runtime: {}", e))
        })?;

        if install {
            let installer = ProcessInstaller::new(config.statue.install_command.clone())
                .with_working_dir(&self.workspace_root);
            let reports = runtime.block_on(install_missing(&installer, &planned_commands(&plans)));
            let report = format_install_reports(&reports, verbosity == Verbosity::Verbose);
            if verbosity != Verbosity::Silent && !report.is_empty() {
                println!("{}", report);
            }
        }

        let runner = Runner::new(Arc::new(
            ProcessExecutor::new().with_working_dir(&self.workspace_root),
        ))
        .with_jobs(jobs);

        let mut current_source: Option<String> = None;
        let evaluation: Evaluation = runtime.block_on(runner.run_with_observer(
            &plans,
            |source: &str, command_evaluation: &CommandEvaluation| {
                if verbosity == Verbosity::Silent {
                    return;
                }
                if current_source.as_deref() != Some(source) {
                    println!("\n{}", format_source_heading(source));
                    current_source = Some(source.to_string());
                }
                let invocation = (verbosity == Verbosity::Verbose).then_some(source);
                print!("\n{}", format_command_evaluation(command_evaluation, invocation));
            },
        ));

        let path = self.cache(&config).save_evaluation(&evaluation, Utc::now())?;
        debug!(path = %path.display(), "Evaluation stored");

        Ok(CommandOutput {
            text: format!("\n{}", format_run_summary(&evaluation)),
            success: evaluation.success(),
        })
    }

    fn handle_plan(
        &self,
        sources: &[String],
        selection: &SelectionArgs,
        format: OutputFormat,
    ) -> Result<String, StatueError> {
        let config = self.load_config()?;
        let planner = config.build_planner()?;
        let plans = match self.source_plans(&config, &planner, sources, selection)? {
            Some(plans) => plans,
            None => vec![SourcePlan {
                source: WORKSPACE_SOURCE.to_string(),
                plan: planner.plan_filtered(&selection.contexts, &command_filter(selection))?,
            }],
        };
        match format {
            OutputFormat::Text => Ok(format_plan_text(&plans)),
            OutputFormat::Json => format_plan_json(&plans),
        }
    }

    fn handle_context_command(&self, command: &ContextCommands) -> Result<String, StatueError> {
        let planner = self.load_config()?.build_planner()?;
        let registry = planner.registry();
        match command {
            ContextCommands::List => Ok(format_context_list(registry)),
            ContextCommands::Show { name } => {
                let context = registry.resolve(name)?;
                let ancestors = registry.ancestors(context)?;
                Ok(format_context_show(context, &ancestors))
            }
        }
    }

    fn handle_command_command(&self, command: &CommandCommands) -> Result<String, StatueError> {
        let planner = self.load_config()?.build_planner()?;
        match command {
            CommandCommands::List { selection } => {
                let plan = planner.plan_filtered(&selection.contexts, &command_filter(selection))?;
                Ok(format_command_list(&plan, planner.catalog()))
            }
            CommandCommands::Show { name, contexts } => {
                let command = planner.catalog().get_or_error(name)?;
                let entry = planner.resolve_command(name, contexts)?;
                let active: Vec<String> = planner
                    .active_contexts(contexts)?
                    .iter()
                    .map(|context| context.name.clone())
                    .collect();
                Ok(format_command_show(command, &entry, &active))
            }
        }
    }

    fn handle_history_command(&self, command: &HistoryCommands) -> Result<String, StatueError> {
        let cache = self.cache(&self.load_config()?);
        match command {
            HistoryCommands::List { head } => {
                let paths = cache.all_evaluation_paths()?;
                let limit = head.unwrap_or(paths.len());
                let entries = paths
                    .into_iter()
                    .take(limit)
                    .map(|path| Evaluation::load_from_file(&path).map(|e| (path, e)))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format_history_list(&entries))
            }
            HistoryCommands::Show { number } => {
                let index = usize::try_from(number.saturating_sub(1)).map_err(|_| {
                    StatueError::CacheError(format!("Evaluation number out of range: {}", number))
                })?;
                let path = cache.evaluation_path(index)?;
                let evaluation = Evaluation::load_from_file(&path)?;
                Ok(format_history_show(&path, &evaluation))
            }
        }
    }

    fn handle_config_command(&self, command: &ConfigCommands) -> Result<String, StatueError> {
        match command {
            ConfigCommands::Init { force } => self.handle_init(*force),
        }
    }

    fn handle_init(&self, force: bool) -> Result<String, StatueError> {
        let config_path = ConfigLoader::configuration_path(&self.workspace_root);
        if config_path.exists() && !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()
                .map_err(|e| StatueError::ConfigError(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Initialization cancelled".to_string());
            }
        }
        let summary = init::initialize(&self.workspace_root, true)?;
        Ok(format_init_summary(&summary))
    }
}

fn command_filter(selection: &SelectionArgs) -> CommandFilter {
    CommandFilter::new(selection.allow.clone(), selection.deny.clone())
}
