use std::path::{Path, PathBuf};

use crate::domain::entities::common::RelativePath;

/// Final project structure ready for materialization.
///
/// This is the output of rendering a manifest: a root and an ordered list of
/// files. It contains no business logic, only data. Entries keep manifest
/// order; when two entries share a path the later one wins on disk.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: RelativePath, content: String) {
        self.files.push(FileToWrite { path, content });
    }

    pub fn with_file(mut self, path: RelativePath, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Content that will end up at `path`, honouring last-write-wins.
    pub fn content_of(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .rev()
            .find(|f| f.path.as_path() == path)
            .map(|f| f.content.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}
