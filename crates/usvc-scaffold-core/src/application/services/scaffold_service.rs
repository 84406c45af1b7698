//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Render the base and provider manifests into a `ProjectStructure`
//! 2. Write the structure to the filesystem
//! 3. Copy `.env.example` to `.env`
//! 4. Optionally initialize version control
//!
//! Rendering happens up front, so a template error never leaves a
//! half-written tree behind.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateCatalog, VersionControl},
    domain::{ProjectStructure, RenderContext, ScaffoldConfig},
    error::ScaffoldResult,
};

const ENV_EXAMPLE: &str = ".env.example";
const ENV_FILE: &str = ".env";

/// What happened to version-control initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GitOutcome {
    Skipped,
    Initialized,
    Failed { reason: String },
}

/// Outcome of a successful scaffold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub module_name: String,
    pub target_dir: PathBuf,
    /// Paths relative to `target_dir`, in write order.
    pub files: Vec<PathBuf>,
    pub env_copied: bool,
    pub git: GitOutcome,
    pub next_steps: Vec<String>,
}

impl ScaffoldReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: Box<dyn TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use usvc_scaffold_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(catalog),    // impl TemplateCatalog
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(git),        // impl VersionControl
    /// );
    /// ```
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            vcs,
        }
    }

    /// Render every file the project will contain without touching the
    /// filesystem.
    #[instrument(
        skip_all,
        fields(
            module = %config.module_name(),
            provider = %config.provider()
        )
    )]
    pub fn plan(&self, config: &ScaffoldConfig) -> ScaffoldResult<ProjectStructure> {
        let context = RenderContext::from_config(config);
        let mut structure = ProjectStructure::new(config.target_dir());

        let base = self.catalog.base_manifest();
        let addons = self.catalog.provider_manifest(config.provider());

        for entry in base.iter().chain(addons.iter()) {
            let (path, content) = context.render_entry(entry)?;
            debug!(template = entry.id, path = %path, "Rendered");
            structure.add_file(path, content);
        }

        debug!(files = structure.file_count(), "Plan complete");
        Ok(structure)
    }

    /// Scaffold a new project.
    ///
    /// The caller is responsible for checking that the target directory does
    /// not already exist.
    #[instrument(
        skip_all,
        fields(
            project = %config.project_name(),
            target = %config.target_dir().display()
        )
    )]
    pub fn create_project(&self, config: &ScaffoldConfig) -> ScaffoldResult<ScaffoldReport> {
        info!("Scaffolding {} project", config.variant());

        let structure = self.plan(config)?;
        let mut files = self.write_structure(&structure)?;

        let env_copied = self.copy_env_file(structure.root())?;
        if env_copied {
            files.push(PathBuf::from(ENV_FILE));
        }

        let git = if config.init_git() {
            self.initialize_vcs(structure.root())
        } else {
            debug!("Version control disabled");
            GitOutcome::Skipped
        };

        info!(files = files.len(), "Scaffold completed successfully");

        Ok(ScaffoldReport {
            project_name: config.project_name().to_string(),
            module_name: config.module_name().to_string(),
            target_dir: structure.root().to_path_buf(),
            files,
            env_copied,
            git,
            next_steps: next_steps(config),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all files in order. Stops at the first failure.
    fn write_structure(&self, structure: &ProjectStructure) -> ScaffoldResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(structure.root())?;

        let mut written = Vec::with_capacity(structure.file_count());
        for file in structure.files() {
            let path = structure.root().join(&file.path);

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %file.path, bytes = file.size(), "Wrote file");
            written.push(file.path.as_path().to_path_buf());
        }

        Ok(written)
    }

    fn copy_env_file(&self, root: &Path) -> ScaffoldResult<bool> {
        let example = root.join(ENV_EXAMPLE);
        if !self.filesystem.exists(&example) {
            debug!("No {ENV_EXAMPLE} to copy");
            return Ok(false);
        }

        self.filesystem.copy_file(&example, &root.join(ENV_FILE))?;
        debug!("Copied {ENV_EXAMPLE} to {ENV_FILE}");
        Ok(true)
    }

    fn initialize_vcs(&self, root: &Path) -> GitOutcome {
        match self.vcs.initialize(root) {
            Ok(()) => {
                info!("Initialized git repository");
                GitOutcome::Initialized
            }
            Err(e) => {
                warn!(error = %e, "git init failed, skipping");
                GitOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn next_steps(config: &ScaffoldConfig) -> Vec<String> {
    vec![
        format!("cd {}", config.directory_name()),
        "uv sync".to_string(),
        "# Edit .env as needed".to_string(),
        format!("uv run python -m {}.main", config.module_name()),
        "uv run pytest tests/ -v".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockVersionControl};
    use crate::domain::{DomainError, Manifest, Provider, TemplateEntry, Variant};
    use crate::error::ScaffoldError;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeFilesystem {
        files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
        dirs: Arc<Mutex<Vec<PathBuf>>>,
        fail_on: Option<&'static str>,
    }

    impl FakeFilesystem {
        fn failing_on(name: &'static str) -> Self {
            Self {
                fail_on: Some(name),
                ..Self::default()
            }
        }

        fn read(&self, path: impl AsRef<Path>) -> Option<String> {
            self.files.lock().unwrap().get(path.as_ref()).cloned()
        }

        fn file_count(&self) -> usize {
            self.files.lock().unwrap().len()
        }
    }

    impl Filesystem for FakeFilesystem {
        fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
            if self.fail_on.is_some_and(|name| path.ends_with(name)) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into());
            }
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn copy_file(&self, from: &Path, to: &Path) -> ScaffoldResult<()> {
            let content = self.read(from).ok_or_else(|| ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "not found".into(),
            })?;
            self.write_file(to, &content)
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
                || self.dirs.lock().unwrap().iter().any(|d| d == path)
        }
    }

    const BASE: &[TemplateEntry] = &[
        TemplateEntry::new(
            "pyproject_toml",
            "pyproject.toml",
            "name = \"{{PROJECT_NAME}}\"\ndeps = [\"{{USVC_LIB_DEPENDENCY}}\"]\n",
        ),
        TemplateEntry::new("env_example", ".env.example", "LOG_LEVEL=INFO\n"),
        TemplateEntry::new(
            "main_py",
            "src/{{MODULE_NAME}}/main.py",
            "print(f\"{__name__}\")\n",
        ),
    ];

    const CLAUDE: &[TemplateEntry] = &[TemplateEntry::new("claude_md", "CLAUDE.md", "# {{PROJECT_NAME}}\n")];
    const COPILOT: &[TemplateEntry] = &[TemplateEntry::new(
        "copilot_md",
        ".github/copilot-instructions.md",
        "copilot\n",
    )];

    struct FakeCatalog {
        base: &'static [TemplateEntry],
    }

    impl Default for FakeCatalog {
        fn default() -> Self {
            Self { base: BASE }
        }
    }

    impl TemplateCatalog for FakeCatalog {
        fn base_manifest(&self) -> Manifest {
            Manifest::from(self.base)
        }

        fn provider_manifest(&self, provider: Provider) -> Manifest {
            match provider {
                Provider::Claude => Manifest::from(CLAUDE),
                Provider::Copilot => Manifest::from(COPILOT),
            }
        }
    }

    fn config(provider: Provider, init_git: bool) -> ScaffoldConfig {
        ScaffoldConfig::builder("My Service")
            .provider(provider)
            .dependency_source("usvc-lib==1.0")
            .init_git(init_git)
            .build_in("/work")
            .unwrap()
    }

    fn service(fs: &FakeFilesystem, vcs: MockVersionControl) -> ScaffoldService {
        ScaffoldService::new(
            Box::new(FakeCatalog::default()),
            Box::new(fs.clone()),
            Box::new(vcs),
        )
    }

    fn no_vcs() -> MockVersionControl {
        let mut vcs = MockVersionControl::new();
        vcs.expect_initialize().times(0);
        vcs
    }

    #[test]
    fn plan_renders_base_then_provider_entries() {
        let fs = FakeFilesystem::default();
        let plan = service(&fs, no_vcs())
            .plan(&config(Provider::Claude, false))
            .unwrap();

        let paths: Vec<String> = plan.files().map(|f| f.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "pyproject.toml",
                ".env.example",
                "src/my_service/main.py",
                "CLAUDE.md"
            ]
        );
        assert_eq!(plan.root(), Path::new("/work/my_service"));
        assert_eq!(
            plan.content_of("pyproject.toml"),
            Some("name = \"My Service\"\ndeps = [\"usvc-lib==1.0\"]\n")
        );
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn plan_leaves_non_placeholder_braces_alone() {
        let fs = FakeFilesystem::default();
        let plan = service(&fs, no_vcs())
            .plan(&config(Provider::Claude, false))
            .unwrap();

        assert_eq!(
            plan.content_of("src/my_service/main.py"),
            Some("print(f\"{__name__}\")\n")
        );
    }

    #[test]
    fn create_project_writes_files_and_copies_env() {
        let fs = FakeFilesystem::default();
        let report = service(&fs, no_vcs())
            .create_project(&config(Provider::Claude, false))
            .unwrap();

        assert_eq!(report.git, GitOutcome::Skipped);
        assert!(report.env_copied);
        assert_eq!(report.files.last(), Some(&PathBuf::from(".env")));
        assert_eq!(report.file_count(), 5);
        assert_eq!(
            fs.read("/work/my_service/.env"),
            fs.read("/work/my_service/.env.example")
        );
        assert!(fs.read("/work/my_service/CLAUDE.md").is_some());
        assert!(
            fs.read("/work/my_service/.github/copilot-instructions.md")
                .is_none()
        );
    }

    #[test]
    fn copilot_provider_gets_only_copilot_files() {
        let fs = FakeFilesystem::default();
        service(&fs, no_vcs())
            .create_project(&config(Provider::Copilot, false))
            .unwrap();

        assert!(
            fs.read("/work/my_service/.github/copilot-instructions.md")
                .is_some()
        );
        assert!(fs.read("/work/my_service/CLAUDE.md").is_none());
    }

    #[test]
    fn git_initialized_in_target_dir() {
        let mut vcs = MockVersionControl::new();
        vcs.expect_initialize()
            .withf(|dir| dir == Path::new("/work/my_service"))
            .times(1)
            .returning(|_| Ok(()));

        let fs = FakeFilesystem::default();
        let report = service(&fs, vcs)
            .create_project(&config(Provider::Claude, true))
            .unwrap();

        assert_eq!(report.git, GitOutcome::Initialized);
    }

    #[test]
    fn git_failure_is_recorded_not_fatal() {
        let mut vcs = MockVersionControl::new();
        vcs.expect_initialize().times(1).returning(|_| {
            Err(ApplicationError::VersionControl {
                step: "git init".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let fs = FakeFilesystem::default();
        let report = service(&fs, vcs)
            .create_project(&config(Provider::Claude, true))
            .unwrap();

        assert_eq!(
            report.git,
            GitOutcome::Failed {
                reason: "git init failed: No such file or directory".into()
            }
        );
        assert!(fs.read("/work/my_service/pyproject.toml").is_some());
    }

    #[test]
    fn render_failure_writes_nothing() {
        const BROKEN: &[TemplateEntry] = &[
            TemplateEntry::new("readme", "README.md", "# {{PROJECT_NAME}}\n"),
            TemplateEntry::new("broken", "broken.txt", "{{UNDEFINED}}"),
        ];

        let fs = FakeFilesystem::default();
        let service = ScaffoldService::new(
            Box::new(FakeCatalog { base: BROKEN }),
            Box::new(fs.clone()),
            Box::new(no_vcs()),
        );

        let err = service
            .create_project(&config(Provider::Claude, true))
            .unwrap_err();

        assert_eq!(
            err,
            ScaffoldError::Domain(DomainError::MissingVariable {
                template: "broken".into(),
                variable: "UNDEFINED".into(),
            })
        );
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn write_failure_aborts_without_rollback() {
        let fs = FakeFilesystem::failing_on("main.py");
        let err = service(&fs, no_vcs())
            .create_project(&config(Provider::Claude, true))
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::FilesystemError { .. })
        ));
        // Files before the failure stay on disk.
        assert!(fs.read("/work/my_service/pyproject.toml").is_some());
        assert!(fs.read("/work/my_service/.env").is_none());
    }

    #[test]
    fn next_steps_follow_directory_and_module() {
        let fs = FakeFilesystem::default();
        let worker = ScaffoldConfig::builder("Billing-Worker")
            .variant(Variant::Worker)
            .init_git(false)
            .build_in("/work")
            .unwrap();

        let report = service(&fs, no_vcs()).create_project(&worker).unwrap();

        assert_eq!(report.target_dir, PathBuf::from("/work/Billing-Worker"));
        assert_eq!(
            report.next_steps,
            vec![
                "cd Billing-Worker",
                "uv sync",
                "# Edit .env as needed",
                "uv run python -m billing_worker.main",
                "uv run pytest tests/ -v",
            ]
        );
    }
}
