// src/filesystem/file.rs
use std::io;
use std::path::{Path, PathBuf};

/// A regular file of a listed folder.
///
/// Only the path is stored; everything else is read from the filesystem on
/// each call, so a file removed after listing surfaces as an I/O error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileEntry { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Text after the last dot of the name, so `.htaccess` yields `htaccess`.
    pub fn extension(&self) -> String {
        self.name()
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_string())
            .unwrap_or_default()
    }

    pub fn size(&self) -> io::Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }

    /// Seconds since the Unix epoch.
    pub fn modified_at(&self) -> io::Result<i64> {
        let modified = std::fs::metadata(&self.path)?.modified()?;
        Ok(chrono::DateTime::<chrono::Utc>::from(modified).timestamp())
    }
}
