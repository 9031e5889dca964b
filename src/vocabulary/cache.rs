//! Flat-text cache for vocabularies, one identifier per line.

use super::VocabularyKind;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding one text file per vocabulary.
///
/// Entries never expire; delete the file (or run `vocab refresh`) to pick up
/// upstream changes.
#[derive(Debug, Clone)]
pub struct VocabularyCache {
    dir: PathBuf,
}

impl VocabularyCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path(&self, kind: VocabularyKind) -> PathBuf {
        self.dir.join(kind.cache_file_name())
    }

    /// Read the cached terms, or `None` if there is no usable artifact.
    #[must_use]
    pub fn read(&self, kind: VocabularyKind) -> Option<Vec<String>> {
        let content = fs::read_to_string(self.path(kind)).ok()?;
        let terms: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if terms.is_empty() { None } else { Some(terms) }
    }

    /// Replace the cached terms for `kind`.
    pub fn write(&self, kind: VocabularyKind, terms: &[String]) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AuditError::io(&self.dir, e))?;

        let path = self.path(kind);
        let mut content = terms.join("\n");
        content.push('\n');
        fs::write(&path, content).map_err(|e| AuditError::io(&path, e))
    }
}
