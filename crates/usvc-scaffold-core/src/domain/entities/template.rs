//! Template entries, manifests, and the render context.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Manifest (ordered)                                         │
//! │  └── TemplateEntry { id, path, content }                    │
//! │        path:    "src/{{MODULE_NAME}}/main.py"               │
//! │        content: "from {{MODULE_NAME}}.config import ..."    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderContext (Value Object)                               │
//! │  └── Variable substitution: {{PROJECT_NAME}} -> "my-svc"    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Templates are compiled into the binary, so every field is `&'static str`.
//!
//! ## Placeholder grammar
//!
//! A placeholder is `{{` + `[A-Z][A-Z0-9_]*` + `}}`. Anything else containing
//! braces (Python f-strings, JSON objects, `{{` inside a doubled-brace
//! f-string) is copied through untouched. Rendering is strict: a
//! placeholder with no value in the context is an error, never left in the
//! output.

use std::collections::BTreeMap;

use crate::domain::{
    entities::{common::RelativePath, scaffold_config::ScaffoldConfig},
    error::DomainError,
};

/// One file to materialize: static content plus a destination pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Stable identifier, used in error messages and logs.
    pub id: &'static str,
    /// Destination path pattern relative to the project root.
    pub path: &'static str,
    /// File content with `{{VARIABLE}}` placeholders.
    pub content: &'static str,
}

impl TemplateEntry {
    pub const fn new(id: &'static str, path: &'static str, content: &'static str) -> Self {
        Self { id, path, content }
    }
}

/// Ordered sequence of template entries.
///
/// Order is the write order; if two entries render to the same path the
/// later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<TemplateEntry>,
}

impl Manifest {
    pub fn new(entries: impl Into<Vec<TemplateEntry>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unrendered destination patterns, in order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.path).collect()
    }
}

impl From<&[TemplateEntry]> for Manifest {
    fn from(entries: &[TemplateEntry]) -> Self {
        Self::new(entries.to_vec())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a TemplateEntry;
    type IntoIter = std::slice::Iter<'a, TemplateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Variables available to every template.
pub mod vars {
    /// Raw project name, for prose and display.
    pub const PROJECT_NAME: &str = "PROJECT_NAME";
    /// Normalized identifier, for source code and paths.
    pub const MODULE_NAME: &str = "MODULE_NAME";
    /// Where the generated project pulls `usvc-lib` from.
    pub const USVC_LIB_DEPENDENCY: &str = "USVC_LIB_DEPENDENCY";

    pub const ALL: [&str; 3] = [PROJECT_NAME, MODULE_NAME, USVC_LIB_DEPENDENCY];
}

/// Context for template rendering.
///
/// A **Value Object** holding the variable set of one scaffold run.
/// Immutable after creation - `with_variable` returns a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Build the standard variable set from the three inputs.
    pub fn new(
        project_name: impl Into<String>,
        module_name: impl Into<String>,
        dependency_source: impl Into<String>,
    ) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(vars::PROJECT_NAME.to_string(), project_name.into());
        variables.insert(vars::MODULE_NAME.to_string(), module_name.into());
        variables.insert(
            vars::USVC_LIB_DEPENDENCY.to_string(),
            dependency_source.into(),
        );
        Self { variables }
    }

    pub fn from_config(config: &ScaffoldConfig) -> Self {
        Self::new(
            config.project_name(),
            config.module_name().as_str(),
            config.dependency_source(),
        )
    }

    /// An empty context. Only useful in tests of the strict renderer.
    pub fn empty() -> Self {
        Self {
            variables: BTreeMap::new(),
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render `text`, replacing every `{{NAME}}` placeholder.
    ///
    /// `template` only labels the error.
    pub fn render(&self, template: &str, text: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match placeholder_name(after_open) {
                Some(name) => {
                    let value = self.get(name).ok_or_else(|| DomainError::MissingVariable {
                        template: template.to_string(),
                        variable: name.to_string(),
                    })?;
                    out.push_str(value);
                    rest = &after_open[name.len() + 2..];
                }
                None => {
                    // Not a placeholder: emit one brace and rescan, so `{{{X}}`
                    // still finds the placeholder starting at the second brace.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Render an entry's destination path and content.
    pub fn render_entry(&self, entry: &TemplateEntry) -> Result<(RelativePath, String), DomainError> {
        let path = RelativePath::try_new(self.render(entry.id, entry.path)?)?;
        let content = self.render(entry.id, entry.content)?;
        Ok((path, content))
    }
}

/// If `s` starts with `NAME}}`, return `NAME`.
fn placeholder_name(s: &str) -> Option<&str> {
    let end = s.find("}}")?;
    let name = &s[..end];
    let mut chars = name.chars();
    let first = chars.next()?;
    let well_formed = first.is_ascii_uppercase()
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    well_formed.then_some(name)
}

/// Every placeholder name referenced by `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        match placeholder_name(after_open) {
            Some(name) => {
                found.push(name);
                rest = &after_open[name.len() + 2..];
            }
            None => rest = &rest[start + 1..],
        }
    }
    found
}
