//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `usvc-scaffold-adapters` crate provides implementations.

use crate::domain::{Manifest, Provider};
use crate::error::ScaffoldResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `usvc_scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `usvc_scaffold_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Copy a file byte-for-byte.
    fn copy_file(&self, from: &Path, to: &Path) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the template set.
///
/// Implemented by `usvc_scaffold_adapters::catalog::BuiltinCatalog`.
pub trait TemplateCatalog: Send + Sync {
    /// Files every project gets.
    fn base_manifest(&self) -> Manifest;

    /// Add-on files for one assistant provider.
    fn provider_manifest(&self, provider: Provider) -> Manifest;
}

/// Port for initializing version control in a fresh project.
///
/// Implemented by `usvc_scaffold_adapters::vcs::GitCli`. Callers treat every
/// error as non-fatal.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Initialize a repository in `dir`, stage everything and commit.
    fn initialize(&self, dir: &Path) -> ScaffoldResult<()>;
}
