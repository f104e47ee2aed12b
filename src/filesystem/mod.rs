// src/filesystem/mod.rs
pub mod dir;
pub mod file;
pub mod filter;

pub use dir::{list, FolderLister};
pub use file::FileEntry;
pub use filter::FilterMatcher;

use crate::config::SortColumn;

/// Raw value a listing is ordered by. All keys of one listing share a variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Text(String),
    Size(u64),
    Time(i64),
}

impl SortColumn {
    pub fn key(&self, entry: &FileEntry) -> std::io::Result<SortKey> {
        match self {
            SortColumn::Name => Ok(SortKey::Text(entry.name())),
            SortColumn::NameInsensitive => Ok(SortKey::Text(entry.name().to_lowercase())),
            SortColumn::Size => entry.size().map(SortKey::Size),
            SortColumn::Date => entry.modified_at().map(SortKey::Time),
        }
    }
}
