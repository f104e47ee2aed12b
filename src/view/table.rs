// src/view/table.rs
use super::icon::IconResolver;
use crate::config::{Localization, Paths};
use crate::filesystem::FileEntry;
use crate::utils::formatter::{escape_html, format_size, format_timestamp};

pub const TABLE_CLASS: &str = "dirtable_table";
/// Attribute holding the raw value the client-side sort compares.
pub const SORT_ATTRIBUTE: &str = "data-dirtable";

struct Row {
    name: String,
    href: String,
    extension: String,
    size: u64,
    modified_at: i64,
}

impl Row {
    fn read(entry: &FileEntry) -> std::io::Result<Self> {
        Ok(Row {
            name: entry.name(),
            href: entry.path().to_string_lossy().to_string(),
            extension: entry.extension(),
            size: entry.size()?,
            modified_at: entry.modified_at()?,
        })
    }
}

/// Renders file entries, in the order given, as a sortable table.
pub struct TableView<'a> {
    text: &'a Localization,
    icons: IconResolver<'a>,
}

impl<'a> TableView<'a> {
    pub fn new(paths: &'a Paths, text: &'a Localization) -> Self {
        TableView { text, icons: IconResolver::new(paths, text) }
    }

    pub fn render(&self, entries: &[FileEntry]) -> String {
        format!(
            r#"<table class="{}">{}{}</table>"#,
            TABLE_CLASS,
            self.render_head(),
            self.render_body(entries)
        )
    }

    fn render_head(&self) -> String {
        format!(
            "<thead><tr><td>{}</td><td>{}</td><td>{}</td></tr></thead>",
            escape_html(&self.text.label_name),
            escape_html(&self.text.label_size),
            escape_html(&self.text.label_modified)
        )
    }

    fn render_body(&self, entries: &[FileEntry]) -> String {
        let mut html = String::from("<tbody>");
        for entry in entries {
            match Row::read(entry) {
                Ok(row) => html.push_str(&self.render_row(&row)),
                Err(e) => log::warn!("Skipping row for {}: {}", entry.path().display(), e),
            }
        }
        html.push_str("</tbody>");
        html
    }

    fn render_row(&self, row: &Row) -> String {
        let name = escape_html(&row.name);
        let modified = format_timestamp(row.modified_at, &self.text.format_date)
            .unwrap_or_else(|e| {
                log::warn!("{}", e);
                row.modified_at.to_string()
            });
        format!(
            concat!(
                "<tr>",
                r#"<td class="dirtable_name" {attr}="{name}">{icon}<a href="{href}" target="_blank">{name}</a></td>"#,
                r#"<td class="dirtable_size" {attr}="{bytes}">{size}</td>"#,
                r#"<td class="dirtable_modified" {attr}="{time}">{modified}</td>"#,
                "</tr>"
            ),
            attr = SORT_ATTRIBUTE,
            name = name,
            icon = self.icons.resolve(&row.extension).to_html(),
            href = escape_html(&row.href),
            bytes = row.size,
            size = format_size(row.size),
            time = row.modified_at,
            modified = escape_html(&modified),
        )
    }
}
