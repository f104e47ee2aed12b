// src/view/icon.rs
use std::path::Path;

use crate::config::{Localization, Paths};
use crate::utils::formatter::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub src: String,
    pub alt: String,
}

impl Icon {
    pub fn to_html(&self) -> String {
        let alt = escape_html(&self.alt);
        format!(
            r#"<img src="{}" alt="{}" title="{}">"#,
            escape_html(&self.src),
            alt,
            alt
        )
    }
}

/// Picks `file-{ext}.{image_ext}` when it exists, else the generic `file.{image_ext}`.
pub struct IconResolver<'a> {
    folder: String,
    image_ext: &'a str,
    text: &'a Localization,
}

impl<'a> IconResolver<'a> {
    pub fn new(paths: &'a Paths, text: &'a Localization) -> Self {
        IconResolver {
            folder: paths.icon_folder(),
            image_ext: &paths.image_ext,
            text,
        }
    }

    pub fn resolve(&self, extension: &str) -> Icon {
        if !extension.is_empty() {
            let src = format!("{}file-{}.{}", self.folder, extension, self.image_ext);
            if Path::new(&src).is_file() {
                return Icon { src, alt: self.text.type_label(extension) };
            }
            log::debug!("No icon for .{} files, using generic icon", extension);
        }
        Icon {
            src: format!("{}file.{}", self.folder, self.image_ext),
            alt: self.text.label_file.clone(),
        }
    }
}
