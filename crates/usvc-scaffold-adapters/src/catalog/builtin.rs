//! Templates compiled into the binary.
//!
//! Every template body lives under `templates/` at the crate root and is
//! embedded with `include_str!`, so the tool needs no files at runtime.
//! Destination paths may use `{{MODULE_NAME}}`; bodies may use any of the
//! variables in `usvc_scaffold_core::domain::vars`.

use usvc_scaffold_core::{
    application::ports::TemplateCatalog,
    domain::{Manifest, Provider, TemplateEntry},
};

macro_rules! template {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file))
    };
}

const INIT_PY: &str = template!("base/init.py.tmpl");

/// Files every project gets, in write order.
const BASE: &[TemplateEntry] = &[
    TemplateEntry::new(
        "pyproject_toml",
        "pyproject.toml",
        template!("base/pyproject.toml.tmpl"),
    ),
    TemplateEntry::new("readme", "README.md", template!("base/README.md.tmpl")),
    TemplateEntry::new("gitignore", ".gitignore", template!("base/gitignore.tmpl")),
    TemplateEntry::new(
        "env_example",
        ".env.example",
        template!("base/env.example.tmpl"),
    ),
    TemplateEntry::new(
        "main_py",
        "src/{{MODULE_NAME}}/main.py",
        template!("base/main.py.tmpl"),
    ),
    TemplateEntry::new(
        "config_py",
        "src/{{MODULE_NAME}}/config.py",
        template!("base/config.py.tmpl"),
    ),
    TemplateEntry::new("init_py", "src/{{MODULE_NAME}}/__init__.py", INIT_PY),
    TemplateEntry::new(
        "action_handler",
        "src/actions/hello_world/handler.py",
        template!("base/handler.py.tmpl"),
    ),
    TemplateEntry::new(
        "action_schema",
        "src/actions/hello_world/schemas.py",
        template!("base/schemas.py.tmpl"),
    ),
    TemplateEntry::new("init_py", "src/actions/__init__.py", INIT_PY),
    TemplateEntry::new("init_py", "src/actions/hello_world/__init__.py", INIT_PY),
    TemplateEntry::new(
        "service_example",
        "src/services/example_api.py",
        template!("base/example_api.py.tmpl"),
    ),
    TemplateEntry::new("init_py", "src/services/__init__.py", INIT_PY),
    TemplateEntry::new(
        "conftest_py",
        "tests/conftest.py",
        template!("base/conftest.py.tmpl"),
    ),
    TemplateEntry::new(
        "test_example",
        "tests/test_hello_world.py",
        template!("base/test_hello_world.py.tmpl"),
    ),
    TemplateEntry::new("init_py", "tests/__init__.py", INIT_PY),
];

const CLAUDE: &[TemplateEntry] = &[
    TemplateEntry::new("claude_md", "CLAUDE.md", template!("claude/CLAUDE.md.tmpl")),
    TemplateEntry::new(
        "claude_settings",
        ".claude/settings.json",
        template!("claude/settings.json.tmpl"),
    ),
];

const COPILOT: &[TemplateEntry] = &[TemplateEntry::new(
    "copilot_md",
    ".github/copilot-instructions.md",
    template!("copilot/copilot-instructions.md.tmpl"),
)];

/// The fixed usvc-lib template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn base_manifest(&self) -> Manifest {
        Manifest::from(BASE)
    }

    fn provider_manifest(&self, provider: Provider) -> Manifest {
        match provider {
            Provider::Claude => Manifest::from(CLAUDE),
            Provider::Copilot => Manifest::from(COPILOT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base_manifest_order() {
        let paths = BuiltinCatalog::new().base_manifest().paths();
        assert_eq!(paths.first(), Some(&"pyproject.toml"));
        assert_eq!(paths.last(), Some(&"tests/__init__.py"));
        assert_eq!(paths.len(), 16);
    }

    #[test]
    fn destinations_are_unique() {
        let catalog = BuiltinCatalog::new();
        for provider in Provider::ALL {
            let mut seen = HashSet::new();
            let base = catalog.base_manifest();
            let addons = catalog.provider_manifest(provider);
            for entry in base.iter().chain(addons.iter()) {
                assert!(seen.insert(entry.path), "duplicate {}", entry.path);
            }
        }
    }

    #[test]
    fn provider_manifests_are_disjoint() {
        let catalog = BuiltinCatalog::new();
        assert_eq!(
            catalog.provider_manifest(Provider::Claude).paths(),
            vec!["CLAUDE.md", ".claude/settings.json"]
        );
        assert_eq!(
            catalog.provider_manifest(Provider::Copilot).paths(),
            vec![".github/copilot-instructions.md"]
        );
    }

    #[test]
    fn init_files_are_empty() {
        assert!(INIT_PY.is_empty());
    }
}
