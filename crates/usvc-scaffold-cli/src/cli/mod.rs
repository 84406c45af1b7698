//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Parser, ValueEnum};

use usvc_scaffold_core::domain::{Provider, Variant};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-microservice",
    bin_name = "create-microservice",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a new usvc-lib microservice project",
    long_about = "create-microservice generates a ready-to-run Python project \
                  built on usvc-lib: package layout, a hello_world action, \
                  tests, environment files and AI assistant instructions.",
    after_help = "EXAMPLES:\n\
        \x20 create-microservice --name my-service\n\
        \x20 create-microservice --name \"Billing Worker\" --provider copilot --no-git\n\
        \x20 create-microservice --name billing-worker --variant worker\n\
        \x20 create-microservice --completions bash > ~/.local/share/bash-completion/completions/create-microservice",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Logging, output and configuration flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project name, e.g. "my-service". Converted to a Python module name.
    #[arg(
        long = "name",
        value_name = "NAME",
        required_unless_present = "completions",
        help = "Project name (e.g. my-service)"
    )]
    pub name: Option<String>,

    /// AI assistant provider whose instruction files are generated.
    #[arg(
        long = "provider",
        value_enum,
        value_name = "PROVIDER",
        help = "AI assistant provider [default: claude]"
    )]
    pub provider: Option<ProviderArg>,

    /// Dependency specifier written into pyproject.toml.
    #[arg(
        long = "lib-source",
        value_name = "SOURCE",
        help = "usvc-lib dependency source",
        long_help = format!(
            "usvc-lib dependency specifier written into pyproject.toml\n\
             [default: {}]",
            usvc_scaffold_core::DEFAULT_DEPENDENCY_SOURCE
        )
    )]
    pub lib_source: Option<String>,

    /// Skip `git init` and the initial commit.
    #[arg(long = "no-git", help = "Skip git initialization")]
    pub no_git: bool,

    /// Directory naming mode.
    #[arg(
        long = "variant",
        value_enum,
        value_name = "VARIANT",
        help = "Directory naming: module name (microservice) or raw name (worker)"
    )]
    pub variant: Option<VariantArg>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Print a shell completion script and exit.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported assistant providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProviderArg {
    /// CLAUDE.md and .claude/settings.json
    Claude,
    /// .github/copilot-instructions.md
    Copilot,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Claude => Provider::Claude,
            ProviderArg::Copilot => Provider::Copilot,
        }
    }
}

/// Supported directory naming modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum VariantArg {
    /// Directory named after the module name (my_service/)
    #[value(alias = "service")]
    Microservice,
    /// Directory named after the project name as given (my-service/)
    Worker,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Microservice => Variant::Microservice,
            VariantArg::Worker => Variant::Worker,
        }
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let cli = Cli::parse_from(["create-microservice", "--name", "my-service"]);
        assert_eq!(cli.name.as_deref(), Some("my-service"));
        assert_eq!(cli.provider, None);
        assert_eq!(cli.variant, None);
        assert!(!cli.no_git);
        assert!(!cli.dry_run);
    }

    #[test]
    fn parse_all_options() {
        let cli = Cli::parse_from([
            "create-microservice",
            "--name",
            "Billing Worker",
            "--provider",
            "copilot",
            "--lib-source",
            "usvc-lib==1.0",
            "--no-git",
            "--variant",
            "worker",
            "--dry-run",
        ]);
        assert_eq!(cli.provider.map(Provider::from), Some(Provider::Copilot));
        assert_eq!(cli.lib_source.as_deref(), Some("usvc-lib==1.0"));
        assert!(cli.no_git);
        assert_eq!(cli.variant.map(Variant::from), Some(Variant::Worker));
        assert!(cli.dry_run);
    }

    #[test]
    fn service_alias_selects_microservice() {
        let cli = Cli::parse_from(["create-microservice", "--name", "x", "--variant", "service"]);
        assert_eq!(cli.variant, Some(VariantArg::Microservice));
    }

    #[test]
    fn name_is_required() {
        let err = Cli::try_parse_from(["create-microservice", "--no-git"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn completions_do_not_need_a_name() {
        let cli = Cli::try_parse_from(["create-microservice", "--completions", "zsh"]).unwrap();
        assert_eq!(cli.completions, Some(Shell::Zsh));
        assert!(cli.name.is_none());
    }

    #[test]
    fn unknown_provider_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["create-microservice", "--name", "x", "--provider", "gemini"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn no_color_flag_sets_true() {
        let cli = Cli::parse_from(["create-microservice", "--name", "x", "--no-color"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-microservice", "--name", "x", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn provider_args_cover_every_provider() {
        let mapped: Vec<Provider> = ProviderArg::value_variants()
            .iter()
            .map(|&p| p.into())
            .collect();
        assert_eq!(mapped, Provider::ALL.to_vec());
    }
}
