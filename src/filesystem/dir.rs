// src/filesystem/dir.rs
use super::{FileEntry, FilterMatcher, SortKey};
use crate::config::ListingConfig;
use crate::error::FilterError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside one folder.
pub struct FolderLister {
    base_path: PathBuf,
    matcher: FilterMatcher,
}

impl FolderLister {
    pub fn new(
        base_path: impl Into<PathBuf>,
        filter: Option<&str>,
        config: &ListingConfig,
    ) -> Result<Self, FilterError> {
        let matcher = FilterMatcher::new(filter, config.filter_regexp)?;
        Ok(Self::with_matcher(base_path, matcher))
    }

    pub fn with_matcher(base_path: impl Into<PathBuf>, matcher: FilterMatcher) -> Self {
        FolderLister { base_path: base_path.into(), matcher }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Matching files ordered per `config`. An unreadable folder lists as empty.
    pub fn files(&self, config: &ListingConfig) -> Vec<FileEntry> {
        let column = config.sort_column;
        let mut keyed: Vec<(SortKey, FileEntry)> = self
            .file_paths()
            .into_iter()
            .map(FileEntry::new)
            .filter_map(|entry| match column.key(&entry) {
                Ok(key) => Some((key, entry)),
                Err(e) => {
                    log::warn!("Skipping {}: {}", entry.path().display(), e);
                    None
                }
            })
            .collect();

        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        // Reversed after sorting, so ties come out in reverse enumeration order too.
        if !config.sort_ascending {
            keyed.reverse();
        }
        keyed.into_iter().map(|(_, entry)| entry).collect()
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let walker = WalkDir::new(&self.base_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Cannot read entry of {}: {}", self.base_path.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if self.matcher.matches(&name) {
                paths.push(entry.into_path());
            }
        }
        paths
    }
}

/// Lists `base_path` with `filter` applied, ordered per `config`.
pub fn list(
    base_path: &Path,
    filter: Option<&str>,
    config: &ListingConfig,
) -> Result<Vec<FileEntry>, FilterError> {
    Ok(FolderLister::new(base_path, filter, config)?.files(config))
}
