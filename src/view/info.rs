// src/view/info.rs
use crate::config::{Localization, Paths};
use crate::utils::formatter::escape_html;

pub const PLUGIN_NAME: &str = "Dirtable";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
const COPYRIGHT_YEARS: &str = "2026";
const LICENSE_URL: &str = "https://www.gnu.org/licenses/";

const LICENSE: [&str; 3] = [
    "This program is free software: you can redistribute it and/or modify it \
     under the terms of the GNU General Public License as published by the Free \
     Software Foundation, either version 3 of the License, or (at your option) \
     any later version.",
    "This program is distributed in the hope that it will be useful, but WITHOUT \
     ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS \
     FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.",
    "You should have received a copy of the GNU General Public License along with \
     this program. If not, see",
];

/// The plugin information shown in the administration area.
pub fn render_info(paths: &Paths, text: &Localization) -> String {
    format!(
        concat!(
            "<h1>{name}</h1>",
            r#"<img src="{icon}" class="dirtable_icon" alt="{alt}">"#,
            "<p>Version: {version}</p>",
            "{copyright}",
            "{license}"
        ),
        name = PLUGIN_NAME,
        icon = escape_html(&paths.plugin_icon()),
        alt = escape_html(&text.alt_icon),
        version = VERSION,
        copyright = render_copyright(),
        license = render_license(),
    )
}

fn render_copyright() -> String {
    format!(
        "<p>Copyright &copy; {} {}</p>",
        COPYRIGHT_YEARS,
        escape_html(&AUTHORS.replace(':', ", "))
    )
}

fn render_license() -> String {
    let last = LICENSE.len() - 1;
    LICENSE
        .iter()
        .enumerate()
        .map(|(i, paragraph)| {
            let link = if i == last {
                format!(
                    r#" <a href="{url}" target="_blank">{url}</a>."#,
                    url = LICENSE_URL
                )
            } else {
                String::new()
            };
            format!(r#"<p class="dirtable_license">{}{}</p>"#, paragraph, link)
        })
        .collect()
}
