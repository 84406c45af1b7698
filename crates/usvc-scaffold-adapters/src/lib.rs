//! Infrastructure adapters for usvc-scaffold.
//!
//! This crate implements the ports defined in
//! `usvc_scaffold_core::application::ports`. It contains all I/O: the
//! filesystem, the embedded template set and the `git` subprocess.

pub mod catalog;
pub mod filesystem;
pub mod vcs;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use vcs::GitCli;
