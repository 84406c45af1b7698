pub mod common;
pub mod project_structure;
pub mod scaffold_config;
pub mod template;

pub use crate::domain::DomainError;
pub use project_structure::ProjectStructure;
pub use scaffold_config::ScaffoldConfig;
pub use template::{Manifest, RenderContext, TemplateEntry};
