// src/view/script.rs
use serde_json::json;

use crate::config::ListingConfig;
use crate::utils::formatter::escape_html;

/// Client-side sorting, to be served at [`crate::config::Paths::script_url`].
pub const CLIENT_SCRIPT: &str = include_str!("../../assets/dirtable.js");

pub const STYLESHEET: &str = include_str!("../../assets/dirtable.css");

/// Global the client script reads its settings from.
pub const CONFIG_VARIABLE: &str = "DIRTABLE";

/// The configuration block plus the include of the client script.
pub fn script_block(config: &ListingConfig, script_url: &str) -> String {
    let client_config = json!({ "caseInsensitive": config.case_insensitive() });
    format!(
        concat!(
            r#"<script type="text/javascript">/* <![CDATA[ */var {} = {};/* ]]> */</script>"#,
            r#"<script type="text/javascript" src="{}"></script>"#
        ),
        CONFIG_VARIABLE,
        client_config,
        escape_html(script_url)
    )
}
