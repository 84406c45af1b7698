//! usvc-scaffold core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `create-microservice` scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     usvc-scaffold-cli (CLI binary)      │
//! │       (create-microservice)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateCatalog, VCS)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  usvc-scaffold-adapters (Infrastructure)│
//! │ (LocalFilesystem, BuiltinCatalog, Git)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ModuleName, ScaffoldConfig, Manifest)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use usvc_scaffold_core::prelude::*;
//!
//! // 1. Validate input and resolve the target directory
//! let config = ScaffoldConfig::builder("my-service")
//!     .provider(Provider::Claude)
//!     .build_in(std::env::current_dir()?)?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(catalog, filesystem, git);
//! let report = service.create_project(&config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GitOutcome, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, TemplateCatalog, VersionControl},
    };
    pub use crate::domain::{
        Manifest, ModuleName, ProjectStructure, Provider, RenderContext, ScaffoldConfig,
        TemplateEntry, Variant,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

pub use domain::DEFAULT_DEPENDENCY_SOURCE;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
