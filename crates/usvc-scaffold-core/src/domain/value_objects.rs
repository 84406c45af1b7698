//! Domain value objects: Provider, Variant.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Give it a manifest in the template catalog (providers only)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Provider ─────────────────────────────────────────────────────────────────

/// The AI assistant a generated project ships instructions for.
///
/// Closed set: every provider has exactly one add-on manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Claude,
    Copilot,
}

impl Provider {
    pub const ALL: [Self; 2] = [Self::Claude, Self::Copilot];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Claude => "claude",
            Self::Copilot => "copilot",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "copilot" => Ok(Self::Copilot),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

// ── Variant ──────────────────────────────────────────────────────────────────

/// How the project directory is named.
///
/// `Microservice` uses the normalized module name (`test_service/`),
/// `Worker` keeps the raw project name (`test-service/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Microservice,
    Worker,
}

impl Variant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Microservice => "microservice",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "microservice" | "service" => Ok(Self::Microservice),
            "worker" => Ok(Self::Worker),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}
