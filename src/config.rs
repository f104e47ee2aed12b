// src/config.rs
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column the server-side listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortColumn {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(
        rename = "name-insensitive",
        alias = "name/i",
        alias = "name-case-insensitive"
    )]
    NameInsensitive,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "date")]
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub sort_column: SortColumn,
    pub sort_ascending: bool,
    /// Interpret filters as delimited regular expressions instead of globs.
    pub filter_regexp: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            sort_column: SortColumn::Name,
            sort_ascending: true,
            filter_regexp: false,
        }
    }
}

impl ListingConfig {
    pub fn case_insensitive(&self) -> bool {
        self.sort_column == SortColumn::NameInsensitive
    }
}

/// User visible strings of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localization {
    pub label_name: String,
    pub label_size: String,
    pub label_modified: String,
    pub label_file: String,
    /// Alt text of extension specific icons; `%s` is replaced by the upper-cased extension.
    pub format_type: String,
    /// chrono strftime format of the modification column.
    pub format_date: String,
    pub alt_icon: String,
}

impl Default for Localization {
    fn default() -> Self {
        Localization {
            label_name: "Name".to_string(),
            label_size: "Size".to_string(),
            label_modified: "Modified".to_string(),
            label_file: "File".to_string(),
            format_type: "%s file".to_string(),
            format_date: "%m/%d/%Y %I:%M %P".to_string(),
            alt_icon: "Folder listing".to_string(),
        }
    }
}

impl Localization {
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.format_date).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!(
                "invalid date format: {}",
                self.format_date
            )));
        }
        Ok(())
    }

    pub fn type_label(&self, extension: &str) -> String {
        self.format_type.replacen("%s", &extension.to_uppercase(), 1)
    }
}

/// Where user files and the widget's own assets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub userfiles: String,
    pub plugin_folder: String,
    pub image_ext: String,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            userfiles: "./userfiles/".to_string(),
            plugin_folder: "./plugins/dirtable/".to_string(),
            image_ext: "png".to_string(),
        }
    }
}

impl Paths {
    pub fn icon_folder(&self) -> String {
        with_trailing_slash(&self.plugin_folder) + "images/"
    }

    pub fn script_url(&self) -> String {
        with_trailing_slash(&self.plugin_folder) + "dirtable.js"
    }

    pub fn plugin_icon(&self) -> String {
        with_trailing_slash(&self.plugin_folder) + "dirtable.png"
    }
}

pub(crate) fn with_trailing_slash(path: &str) -> String {
    if path.is_empty() || path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub listing: ListingConfig,
    pub text: Localization,
    pub paths: Paths,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.text.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
