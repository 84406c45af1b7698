//! The scaffolding command.
//!
//! Responsibility: merge flags with the loaded config, validate the name and
//! target directory, call the core scaffold service, and display results.
//! No business logic lives here.

use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use usvc_scaffold_adapters::{BuiltinCatalog, GitCli, LocalFilesystem};
use usvc_scaffold_core::{
    application::{GitOutcome, ScaffoldReport, ScaffoldService},
    domain::{ProjectStructure, Provider, ScaffoldConfig, Variant},
};

use crate::{
    cli::{Cli, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Effective options after applying flag > config file > default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub name: String,
    pub provider: Provider,
    pub lib_source: String,
    pub init_git: bool,
    pub variant: Variant,
    pub dry_run: bool,
}

impl CreateOptions {
    pub fn resolve(name: String, cli: &Cli, config: &AppConfig) -> Self {
        let defaults = &config.defaults;
        Self {
            name,
            provider: cli.provider.map_or(defaults.provider, Provider::from),
            lib_source: cli
                .lib_source
                .clone()
                .unwrap_or_else(|| defaults.lib_source.clone()),
            init_git: !cli.no_git && defaults.init_git,
            variant: cli.variant.map_or(defaults.variant, Variant::from),
            dry_run: cli.dry_run,
        }
    }

    fn scaffold_config(&self, cwd: &Path) -> CliResult<ScaffoldConfig> {
        let config = ScaffoldConfig::builder(self.name.as_str())
            .provider(self.provider)
            .dependency_source(self.lib_source.as_str())
            .init_git(self.init_git)
            .variant(self.variant)
            .build_in(cwd)?;
        Ok(config)
    }
}

/// Execute a scaffold run rooted at `cwd`.
///
/// Dispatch sequence:
/// 1. Normalize and validate the name, derive the target directory
/// 2. Refuse an existing target
/// 3. Early-exit with the planned file list if `--dry-run`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Warn about a failed git step and print next steps
#[instrument(skip_all, fields(project = %options.name))]
pub fn execute(options: CreateOptions, cwd: &Path, output: &OutputManager) -> CliResult<()> {
    // 1. Validate
    let config = options.scaffold_config(cwd)?;
    debug!(
        module = %config.module_name(),
        provider = %config.provider(),
        variant = %config.variant(),
        target = %config.target_dir().display(),
        "Configuration resolved"
    );

    // 2. Check for existing directory
    if config.target_dir().exists() {
        return Err(CliError::ProjectExists {
            path: config.target_dir().to_path_buf(),
        });
    }

    let service = ScaffoldService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new()),
    );

    // 3. Dry run: describe but do not write.
    if options.dry_run {
        let plan = service.plan(&config)?;
        return show_plan(&config, &plan, output);
    }

    // 4. Scaffold
    info!(path = %config.target_dir().display(), "Scaffold started");
    let report = service.create_project(&config)?;

    // 5. Report
    if let GitOutcome::Failed { reason } = &report.git {
        output.warning(&format!("git init failed ({reason}). Skipping."))?;
    }

    show_report(&report, output)
}

fn show_plan(
    config: &ScaffoldConfig,
    plan: &ProjectStructure,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let files: Vec<String> = plan.files().map(|f| f.path.to_string()).collect();
        output.json(&json!({
            "dry_run": true,
            "project_name": config.project_name(),
            "module_name": config.module_name(),
            "target_dir": config.target_dir(),
            "files": files,
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        config.project_name(),
        config.target_dir().display()
    ))?;
    output.print(&format!("  Module:   {}", config.module_name()))?;
    output.print(&format!("  Provider: {}", config.provider()))?;
    output.print(&format!("  Git:      {}", if config.init_git() { "yes" } else { "no" }))?;
    output.print("")?;
    for file in plan.files() {
        output.print(&format!("  {}", file.path))?;
    }
    output.print("  .env (copied from .env.example)")?;
    Ok(())
}

fn show_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    output.print("")?;
    output.success(&format!("Created project: {}", report.project_name))?;
    output.print(&format!("  Directory: {}", report.target_dir.display()))?;
    output.print("")?;
    output.header("Next steps:")?;
    for step in &report.next_steps {
        output.print(&format!("  {step}"))?;
    }
    Ok(())
}
