//! File-backed documents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::tokenizer::tokenize;

/// A document in the corpus, identified by its filesystem path.
///
/// Identity is path equality: two documents with identical text but
/// different paths are distinct. Content is read from disk on demand and
/// never cached here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    /// Creates a document backed by `path`. The file is not touched until
    /// the document is indexed or scored.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument("document path must not be empty"));
        }
        Ok(Self { path })
    }

    /// Full path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name: the final path component.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Reads the document's full text from disk.
    pub fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| Error::DocumentUnreadable {
            path: self.path.clone(),
            source,
        })
    }

    /// Number of tokens in the document, recomputed from the current file
    /// contents.
    pub fn token_count(&self) -> Result<usize> {
        Ok(tokenize(&self.read_text()?).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            Document::new(""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn name_is_the_final_path_component() {
        let doc = Document::new("articles/document1.txt").unwrap();
        assert_eq!(doc.name(), "document1.txt");
    }

    #[test]
    fn missing_file_is_reported_as_unreadable() {
        let doc = Document::new("/no/such/docrank-file.txt").unwrap();
        assert!(matches!(
            doc.read_text(),
            Err(Error::DocumentUnreadable { .. })
        ));
    }

    #[test]
    fn token_count_reflects_current_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counted.txt");
        fs::write(&path, "one two three").unwrap();
        let doc = Document::new(&path).unwrap();
        assert_eq!(doc.token_count().unwrap(), 3);

        fs::write(&path, "one two three four").unwrap();
        assert_eq!(doc.token_count().unwrap(), 4);
    }
}
