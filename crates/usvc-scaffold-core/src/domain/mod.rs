// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer.
//!
//! Pure logic, no I/O. Filesystem, template storage and version control are
//! reached only through the ports in `crate::application::ports`.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable values**: configs, entries and contexts are never mutated
//!   after construction
pub mod entities;
pub mod error;
pub mod name;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    project_structure::{FileToWrite, ProjectStructure},
    scaffold_config::{DEFAULT_DEPENDENCY_SOURCE, ScaffoldConfig, ScaffoldConfigBuilder},
    template::{Manifest, RenderContext, TemplateEntry, placeholders, vars},
};

pub use error::{DomainError, ErrorCategory};

pub use name::{ModuleName, is_valid_identifier, normalize_name};

pub use value_objects::{Provider, Variant};
