use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay below its root.
///
/// Invariant: non-empty, never absolute, only `Normal` components (no `..`,
/// no `.`, no prefix). Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let unsafe_path = |reason: &str| DomainError::UnsafePath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if path.as_os_str().is_empty() {
            return Err(unsafe_path("path is empty"));
        }
        if path.is_absolute() || path.has_root() {
            return Err(unsafe_path("absolute paths are not allowed"));
        }
        if !path.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(unsafe_path("only plain path segments are allowed"));
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_paths() {
        let p = RelativePath::try_new("src/actions/hello_world/handler.py").unwrap();
        assert_eq!(p.to_string(), "src/actions/hello_world/handler.py");
    }

    #[test]
    fn accepts_dotfiles() {
        assert!(RelativePath::try_new(".claude/settings.json").is_ok());
        assert!(RelativePath::try_new(".env.example").is_ok());
    }

    #[test]
    fn rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }

    #[test]
    fn rejects_parent_components() {
        assert!(matches!(
            RelativePath::try_new("src/../../escape"),
            Err(DomainError::UnsafePath { .. })
        ));
        assert!(RelativePath::try_new("./README.md").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(RelativePath::try_new("").is_err());
    }
}
