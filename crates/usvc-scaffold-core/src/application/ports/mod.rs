//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `usvc-scaffold-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateCatalog`: The fixed template set
//!   - `VersionControl`: Repository initialization
//!
//! - **Driving (Input) Ports**: the CLI calls `ScaffoldService` directly

pub mod output;

#[cfg(test)]
pub use output::MockVersionControl;
pub use output::{Filesystem, TemplateCatalog, VersionControl};
