//! Application layer errors.
//!
//! These errors represent failures in orchestration and infrastructure, not
//! business rules. Business rule violations are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while carrying out a scaffold.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// One step of version-control initialization failed.
    #[error("{step} failed: {reason}")]
    VersionControl { step: String, reason: String },

    /// Shared in-memory state was poisoned.
    #[error("Internal store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::VersionControl { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "Ensure git user.name and user.email are configured".into(),
                "Or pass --no-git and initialize the repository yourself".into(),
            ],
            Self::StoreLockError => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::VersionControl { .. } => ErrorCategory::External,
        }
    }
}
