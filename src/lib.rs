// src/lib.rs
//! Sortable, filterable HTML tables of a folder's files, for embedding in
//! CMS pages.
//!
//! A [`Controller`] lists one folder per call: the regular files directly
//! inside it are filtered by a glob or delimited regular expression, sorted
//! per [`ListingConfig`], and rendered by [`TableView`]. Each cell carries its
//! raw value so [`view::script::CLIENT_SCRIPT`] can re-sort rows in the
//! browser.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod utils;
pub mod view;

pub use config::{ListingConfig, Localization, Paths, Settings, SortColumn};
pub use error::{Error, FilterError, Result};
pub use filesystem::{list, FileEntry, FilterMatcher, FolderLister};
pub use view::{Controller, Rendering, TableView};
