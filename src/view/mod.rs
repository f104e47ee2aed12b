// src/view/mod.rs
use std::path::{Component, Path, PathBuf};

pub mod icon;
pub mod info;
pub mod script;
pub mod table;

pub use icon::{Icon, IconResolver};
pub use table::TableView;

use crate::config::{with_trailing_slash, Settings};
use crate::error::{Error, Result};
use crate::filesystem::FolderLister;

/// Output of one table render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub table: String,
    /// Script configuration and include, present only for the first table of a page.
    pub scripts: Option<String>,
}

/// Renders folder tables for one page.
///
/// Create one per page render; the client script is emitted with the first
/// table only.
pub struct Controller {
    settings: Settings,
    scripts_emitted: bool,
}

impl Controller {
    pub fn new(settings: Settings) -> Self {
        Controller { settings, scripts_emitted: false }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lists `folder`, relative to the user files root, as a table.
    pub fn render_table(&mut self, folder: &str, filter: Option<&str>) -> Result<Rendering> {
        let base_path = self.folder_path(folder)?;
        let listing = &self.settings.listing;
        let lister = FolderLister::new(&base_path, filter, listing)?;
        let files = lister.files(listing);
        log::debug!("Listing {} files of {}", files.len(), base_path.display());

        let table = TableView::new(&self.settings.paths, &self.settings.text).render(&files);
        let scripts = self.emit_scripts();
        Ok(Rendering { table, scripts })
    }

    pub fn render_info(&self) -> String {
        info::render_info(&self.settings.paths, &self.settings.text)
    }

    fn emit_scripts(&mut self) -> Option<String> {
        if self.scripts_emitted {
            return None;
        }
        self.scripts_emitted = true;
        Some(script::script_block(
            &self.settings.listing,
            &self.settings.paths.script_url(),
        ))
    }

    fn folder_path(&self, folder: &str) -> Result<PathBuf> {
        let relative = Path::new(folder);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(Error::InvalidPath(folder.to_string()));
        }
        let root = with_trailing_slash(&self.settings.paths.userfiles);
        Ok(PathBuf::from(with_trailing_slash(&(root + folder))))
    }
}
