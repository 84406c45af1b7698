//! Project name normalization.
//!
//! A user types whatever they like (`"My Cool Service"`, `"billing-api"`);
//! the generated project needs a Python module name. [`normalize_name`] is the
//! total mapping, [`ModuleName::parse`] is the separate validity check.
//!
//! | Input             | Normalized        |
//! |-------------------|-------------------|
//! | `my-service`      | `my_service`      |
//! | `My Cool Service` | `my_cool_service` |
//! | `-my-service-`    | `my_service`      |
//! | `../escape`       | `escape`          |
//! | `...`             | `` (invalid)      |
//! | `123-service`     | `123_service` (invalid) |

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

const SEPARATOR: char = '_';

/// Map arbitrary text to `[a-z0-9_]*`.
///
/// Lower-cases, replaces every maximal run of characters outside `[a-z0-9]`
/// with one `_`, then drops leading and trailing separators. Path separators
/// and dots are outside the set, so the result is always a single path
/// component.
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            out.push(ch);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    out
}

/// `true` if `s` matches `^[a-z_][a-z0-9_]*$`.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == SEPARATOR => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == SEPARATOR)
}

/// A validated Python module name.
///
/// Invariant: matches `^[a-z_][a-z0-9_]*$`. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate an already-normalized identifier.
    pub fn parse(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if s.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name: s,
                reason: "name is empty after normalization".into(),
            });
        }
        if !is_valid_identifier(&s) {
            return Err(DomainError::InvalidProjectName {
                reason: format!("'{s}' is not a valid Python module name"),
                name: s,
            });
        }
        Ok(Self(s))
    }

    /// Normalize a raw project name and validate the result.
    ///
    /// The error carries the *raw* name so the user sees what they typed.
    pub fn from_project_name(raw: &str) -> Result<Self, DomainError> {
        Self::parse(normalize_name(raw)).map_err(|e| match e {
            DomainError::InvalidProjectName { reason, .. } => DomainError::InvalidProjectName {
                name: raw.to_string(),
                reason: format!("cannot be converted to a valid Python module name ({reason})"),
            },
            other => other,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
