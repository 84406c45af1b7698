use std::path::{Component, Path, PathBuf};

use crate::domain::{
    error::DomainError,
    name::ModuleName,
    value_objects::{Provider, Variant},
};

/// Default `usvc-lib` dependency reference written into `pyproject.toml`.
///
/// Single source of truth: the CLI help, the config defaults and the
/// builder all read this constant.
pub const DEFAULT_DEPENDENCY_SOURCE: &str =
    "usvc-lib @ git+https://github.com/mcintyjp/microservice-lib.git";

/// Everything one scaffold run needs.
///
/// Immutable once built. The only way to get one is
/// [`ScaffoldConfig::builder`], which validates the module name and derives
/// the target directory before anything touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    project_name: String,
    module_name: ModuleName,
    target_dir: PathBuf,
    provider: Provider,
    dependency_source: String,
    init_git: bool,
    variant: Variant,
}

impl ScaffoldConfig {
    pub fn builder(project_name: impl Into<String>) -> ScaffoldConfigBuilder {
        ScaffoldConfigBuilder::new(project_name)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_name(&self) -> &ModuleName {
        &self.module_name
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn dependency_source(&self) -> &str {
        &self.dependency_source
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Final path component of the target directory, for "cd" hints.
    pub fn directory_name(&self) -> String {
        self.target_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.module_name.to_string())
    }
}

/// Builder for [`ScaffoldConfig`].
#[derive(Debug, Clone)]
pub struct ScaffoldConfigBuilder {
    project_name: String,
    provider: Provider,
    dependency_source: String,
    init_git: bool,
    variant: Variant,
}

impl ScaffoldConfigBuilder {
    fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            provider: Provider::default(),
            dependency_source: DEFAULT_DEPENDENCY_SOURCE.to_string(),
            init_git: true,
            variant: Variant::default(),
        }
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn dependency_source(mut self, source: impl Into<String>) -> Self {
        self.dependency_source = source.into();
        self
    }

    pub fn init_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Validate and place the project under `parent`.
    ///
    /// `parent` should be absolute (the CLI passes the current directory);
    /// the target is always exactly one level below it.
    pub fn build_in(self, parent: impl AsRef<Path>) -> Result<ScaffoldConfig, DomainError> {
        let module_name = ModuleName::from_project_name(&self.project_name)?;

        let dir_name = match self.variant {
            Variant::Microservice => module_name.to_string(),
            Variant::Worker => plain_directory_name(&self.project_name)?,
        };

        Ok(ScaffoldConfig {
            target_dir: parent.as_ref().join(dir_name),
            project_name: self.project_name,
            module_name,
            provider: self.provider,
            dependency_source: self.dependency_source,
            init_git: self.init_git,
            variant: self.variant,
        })
    }
}

/// The raw project name, if it is usable verbatim as one directory name.
fn plain_directory_name(raw: &str) -> Result<String, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if raw.contains('/') || raw.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }

    let mut components = Path::new(raw).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(raw.to_string()),
        _ => Err(invalid("name must be a plain directory name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let cfg = ScaffoldConfig::builder("test-service")
            .build_in("/work")
            .unwrap();
        assert_eq!(cfg.project_name(), "test-service");
        assert_eq!(cfg.module_name().as_str(), "test_service");
        assert_eq!(cfg.target_dir(), Path::new("/work/test_service"));
        assert_eq!(cfg.provider(), Provider::Claude);
        assert_eq!(cfg.dependency_source(), DEFAULT_DEPENDENCY_SOURCE);
        assert!(cfg.init_git());
        assert_eq!(cfg.variant(), Variant::Microservice);
        assert_eq!(cfg.directory_name(), "test_service");
    }

    #[test]
    fn builder_overrides() {
        let cfg = ScaffoldConfig::builder("svc")
            .provider(Provider::Copilot)
            .dependency_source("usvc-lib>=0.1")
            .init_git(false)
            .build_in("/work")
            .unwrap();
        assert_eq!(cfg.provider(), Provider::Copilot);
        assert_eq!(cfg.dependency_source(), "usvc-lib>=0.1");
        assert!(!cfg.init_git());
    }

    #[test]
    fn invalid_names_fail_before_any_path_is_derived() {
        for name in ["...", "123-service", "", "   "] {
            assert!(
                matches!(
                    ScaffoldConfig::builder(name).build_in("/work"),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn traversal_stays_under_parent() {
        let cfg = ScaffoldConfig::builder("../escape").build_in("/work").unwrap();
        assert_eq!(cfg.target_dir(), Path::new("/work/escape"));
    }

    #[test]
    fn worker_variant_keeps_raw_name() {
        let cfg = ScaffoldConfig::builder("test-service")
            .variant(Variant::Worker)
            .build_in("/work")
            .unwrap();
        assert_eq!(cfg.target_dir(), Path::new("/work/test-service"));
        assert_eq!(cfg.module_name().as_str(), "test_service");
        assert_eq!(cfg.directory_name(), "test-service");
    }

    #[test]
    fn worker_variant_rejects_path_like_names() {
        for name in ["../escape", "a/b", "a\\b"] {
            assert!(
                ScaffoldConfig::builder(name)
                    .variant(Variant::Worker)
                    .build_in("/work")
                    .is_err(),
                "accepted: {name:?}"
            );
        }
    }
}
