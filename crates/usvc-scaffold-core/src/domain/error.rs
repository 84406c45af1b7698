// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),

    #[error("Unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("Unsafe destination path '{path}': {reason}")]
    UnsafePath { path: String, reason: String },

    // ========================================================================
    // Rendering Errors
    // ========================================================================
    #[error("Template '{template}' references undefined variable '{variable}'")]
    MissingVariable { template: String, variable: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{name}' must normalize to a valid Python module name"),
                "Start the name with a letter".into(),
                "Letters, digits, spaces, hyphens and underscores are all fine".into(),
                "Examples: my-service, Billing Worker, orders_api".into(),
            ],
            Self::UnknownProvider(_) => vec![
                "Supported providers:".into(),
                "  • claude   - CLAUDE.md and .claude/settings.json".into(),
                "  • copilot  - .github/copilot-instructions.md".into(),
            ],
            Self::UnknownVariant(_) => vec![
                "Supported variants:".into(),
                "  • microservice - directory named after the module name".into(),
                "  • worker       - directory named after the project name".into(),
            ],
            Self::MissingVariable { template, .. } => vec![
                format!("Built-in template '{template}' is inconsistent"),
                "This is a bug, please report it".into(),
            ],
            Self::UnsafePath { .. } => vec![
                "Generated paths must stay inside the project directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnknownProvider(_)
            | Self::UnknownVariant(_) => ErrorCategory::Validation,
            Self::UnsafePath { .. } | Self::MissingVariable { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
